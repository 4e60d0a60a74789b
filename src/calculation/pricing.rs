//! Pricing analytics.
//!
//! Profit, margin and margin health for a cost against a sale price, and
//! averages over a set of priced pairs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MarginThresholds;

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Profit of selling at `sale_price` something that costs `cost`.
pub fn profit(cost: Decimal, sale_price: Decimal) -> Decimal {
    sale_price - cost
}

/// Margin as a percentage of the sale price.
///
/// Returns `None` when the sale price is zero or negative. An undefined
/// margin is excluded from aggregates, never counted as zero.
///
/// # Examples
///
/// ```
/// use recipe_cost_engine::calculation::margin;
/// use rust_decimal::Decimal;
///
/// assert_eq!(margin(Decimal::from(3), Decimal::from(4)), Some(Decimal::from(25)));
/// assert_eq!(margin(Decimal::from(3), Decimal::ZERO), None);
/// ```
pub fn margin(cost: Decimal, sale_price: Decimal) -> Option<Decimal> {
    if sale_price <= Decimal::ZERO {
        return None;
    }
    Some(profit(cost, sale_price) / sale_price * HUNDRED)
}

/// Margin health band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginHealth {
    /// Above the healthy threshold.
    Healthy,
    /// Between the watch and healthy thresholds, inclusive.
    Watch,
    /// Below the watch threshold.
    Risk,
}

/// Classifies a margin with the default bands: above 31 is healthy, 25 to 31
/// is watch, below 25 is risk.
pub fn classify_margin(margin: Decimal) -> MarginHealth {
    classify_margin_with(margin, &MarginThresholds::default())
}

/// Classifies a margin with configured bands.
pub fn classify_margin_with(margin: Decimal, thresholds: &MarginThresholds) -> MarginHealth {
    if margin > thresholds.healthy_above {
        MarginHealth::Healthy
    } else if margin >= thresholds.watch_from {
        MarginHealth::Watch
    } else {
        MarginHealth::Risk
    }
}

/// A cost and a sale price to aggregate.
///
/// `cost` is `None` when the cost could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    /// Unit cost, if computed.
    pub cost: Option<Decimal>,
    /// Configured sale price, if any.
    pub sale_price: Option<Decimal>,
}

impl PricePoint {
    /// Returns (cost, sale price) when the point counts towards averages.
    fn priced(&self) -> Option<(Decimal, Decimal)> {
        match (self.cost, self.sale_price) {
            (Some(cost), Some(sale)) if sale > Decimal::ZERO => Some((cost, sale)),
            _ => None,
        }
    }
}

/// Averages over priced pairs.
///
/// Averages are `None` when no pair counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingAverages {
    /// Number of pairs with a computed cost and a positive sale price.
    pub priced_count: usize,
    /// Mean cost.
    pub avg_cost: Option<Decimal>,
    /// Mean sale price.
    pub avg_sale_price: Option<Decimal>,
    /// Mean profit.
    pub avg_profit: Option<Decimal>,
    /// Mean margin percentage.
    pub avg_margin: Option<Decimal>,
}

impl PricingAverages {
    /// Averages `points`, skipping any without a computed cost or a positive
    /// sale price. Skipped points do not count in the denominator.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let mut count = 0usize;
        let mut cost_sum = Decimal::ZERO;
        let mut sale_sum = Decimal::ZERO;
        let mut profit_sum = Decimal::ZERO;
        let mut margin_sum = Decimal::ZERO;

        for (cost, sale) in points.into_iter().filter_map(|point| point.priced()) {
            count += 1;
            cost_sum += cost;
            sale_sum += sale;
            profit_sum += profit(cost, sale);
            margin_sum += margin(cost, sale).unwrap_or_default();
        }

        if count == 0 {
            return Self::default();
        }

        let n = Decimal::from(count);
        Self {
            priced_count: count,
            avg_cost: Some(cost_sum / n),
            avg_sale_price: Some(sale_sum / n),
            avg_profit: Some(profit_sum / n),
            avg_margin: Some(margin_sum / n),
        }
    }
}
