//! Overhead items and the shop's operating schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often an overhead cost recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Every operating day.
    Daily,
    /// Every week.
    Weekly,
    /// Every two weeks.
    BiWeekly,
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every year.
    Annual,
}

/// A recurring fixed cost such as rent, insurance or a software subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadItem {
    /// Unique identifier for the item.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Amount paid per `frequency` period.
    pub amount: Decimal,
    /// How often `amount` is paid.
    pub frequency: Frequency,
}

/// The shop's operating schedule used to spread overhead over open minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadSettings {
    /// Days open per week (1-7).
    pub operating_days_per_week: Decimal,
    /// Hours open per operating day (1-24).
    pub hours_open_per_day: Decimal,
}

impl Default for OverheadSettings {
    fn default() -> Self {
        Self {
            operating_days_per_week: Decimal::from(7),
            hours_open_per_day: Decimal::from(8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&Frequency::BiWeekly).unwrap(),
            "\"bi-weekly\""
        );
        assert_eq!(
            serde_json::to_string(&Frequency::Annual).unwrap(),
            "\"annual\""
        );

        let frequency: Frequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(frequency, Frequency::Quarterly);
    }

    #[test]
    fn test_unknown_frequency_is_rejected() {
        let result: Result<Frequency, _> = serde_json::from_str("\"fortnightly\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_overhead_item() {
        let json = r#"{ "id": "oh_rent", "name": "Rent", "amount": "3000", "frequency": "monthly" }"#;
        let item: OverheadItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount, Decimal::from(3000));
        assert_eq!(item.frequency, Frequency::Monthly);
    }
}
