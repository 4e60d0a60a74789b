//! Overhead allocation functionality.
//!
//! Recurring overhead costs come in mixed frequencies. This module
//! canonicalizes them into a monthly total, spreads that total over the
//! shop's open minutes, and allocates a per-product slice from the minutes a
//! product takes to prepare.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineSettings;
use crate::models::{Frequency, OverheadItem, OverheadSettings};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// An overhead amount re-expressed over every period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAmounts {
    /// Per operating day.
    pub daily: Decimal,
    /// Per week.
    pub weekly: Decimal,
    /// Per month.
    pub monthly: Decimal,
    /// Per quarter.
    pub quarterly: Decimal,
    /// Per year.
    pub annual: Decimal,
}

/// One overhead item with its derived period amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadItemSummary {
    /// The item id.
    pub id: String,
    /// The item name.
    pub name: String,
    /// The entered amount.
    pub amount: Decimal,
    /// The entered frequency.
    pub frequency: Frequency,
    /// The amount over every period.
    pub periods: PeriodAmounts,
}

/// Everything the overhead screen and the pricing matrix show about overhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadSummary {
    /// Sum of all items canonicalized to a month.
    pub monthly_total: Decimal,
    /// Operating days per month.
    pub days_per_month: Decimal,
    /// Open minutes per month.
    pub minutes_per_month: Decimal,
    /// Overhead cost of one open minute.
    pub cost_per_minute: Decimal,
    /// Items with their period amounts.
    pub items: Vec<OverheadItemSummary>,
}

/// Turns overhead items into a cost per open minute and allocates it to products.
#[derive(Debug, Clone, PartialEq)]
pub struct OverheadAllocator {
    weeks_per_month: Decimal,
    days_per_month: Decimal,
    minutes_per_month: Decimal,
    monthly_total: Decimal,
    default_minutes_per_unit: Option<Decimal>,
}

impl OverheadAllocator {
    /// Builds an allocator for one set of items and an operating schedule.
    ///
    /// Operating days and open hours below 1 are treated as 1.
    pub fn new(
        items: &[OverheadItem],
        settings: &OverheadSettings,
        engine: &EngineSettings,
    ) -> Self {
        let weeks_per_month = engine.weeks_per_month;
        let days_per_month = settings.operating_days_per_week.max(Decimal::ONE) * weeks_per_month;
        let minutes_per_month =
            settings.hours_open_per_day.max(Decimal::ONE) * MINUTES_PER_HOUR * days_per_month;

        let mut allocator = Self {
            weeks_per_month,
            days_per_month,
            minutes_per_month,
            monthly_total: Decimal::ZERO,
            default_minutes_per_unit: engine.default_minutes_per_unit,
        };
        allocator.monthly_total = items
            .iter()
            .map(|item| allocator.monthly_amount(item.amount, item.frequency))
            .sum();
        allocator
    }

    /// Canonicalizes an amount paid at `frequency` into a monthly amount.
    pub fn monthly_amount(&self, amount: Decimal, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::Daily => amount * self.days_per_month,
            Frequency::Weekly => amount * self.weeks_per_month,
            Frequency::BiWeekly => amount * self.weeks_per_month / Decimal::TWO,
            Frequency::Monthly => amount,
            Frequency::Quarterly => amount / Decimal::from(3),
            Frequency::Annual => amount / Decimal::from(12),
        }
    }

    /// Re-derives an amount over every period from its monthly canonical form.
    pub fn period_amounts(&self, amount: Decimal, frequency: Frequency) -> PeriodAmounts {
        let monthly = self.monthly_amount(amount, frequency);
        PeriodAmounts {
            daily: div_or_zero(monthly, self.days_per_month),
            weekly: div_or_zero(monthly, self.weeks_per_month),
            monthly,
            quarterly: monthly * Decimal::from(3),
            annual: monthly * Decimal::from(12),
        }
    }

    /// Sum of all items canonicalized to a month.
    pub fn monthly_total(&self) -> Decimal {
        self.monthly_total
    }

    /// Operating days per month.
    pub fn days_per_month(&self) -> Decimal {
        self.days_per_month
    }

    /// Open minutes per month.
    pub fn minutes_per_month(&self) -> Decimal {
        self.minutes_per_month
    }

    /// Overhead cost of one open minute, or zero when there are no open minutes.
    pub fn cost_per_minute(&self) -> Decimal {
        div_or_zero(self.monthly_total, self.minutes_per_month)
    }

    /// Resolves the minutes one unit takes: the recipe's own value, else the
    /// configured default, else one minute.
    pub fn minutes_per_unit(&self, recipe_minutes: Option<Decimal>) -> Decimal {
        recipe_minutes
            .or(self.default_minutes_per_unit)
            .unwrap_or(Decimal::ONE)
    }

    /// Overhead allocated to one unit taking `minutes_per_unit` minutes.
    pub fn allocate_for_product(&self, minutes_per_unit: Decimal) -> Decimal {
        self.cost_per_minute() * minutes_per_unit
    }

    /// Builds the overhead summary for a list of items.
    pub fn summary(&self, items: &[OverheadItem]) -> OverheadSummary {
        OverheadSummary {
            monthly_total: self.monthly_total,
            days_per_month: self.days_per_month,
            minutes_per_month: self.minutes_per_month,
            cost_per_minute: self.cost_per_minute(),
            items: items
                .iter()
                .map(|item| OverheadItemSummary {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    amount: item.amount,
                    frequency: item.frequency,
                    periods: self.period_amounts(item.amount, item.frequency),
                })
                .collect(),
        }
    }
}

fn div_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}
