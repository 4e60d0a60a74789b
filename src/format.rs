//! Presentation and export formatting.
//!
//! The engine returns raw decimals. These helpers turn them into display and
//! export strings, and are the only place rounding happens.

use std::io;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::PricingRow;

/// Shown in place of a value that could not be computed.
pub const PLACEHOLDER: &str = "\u{2013}";

/// Rounds to two decimal places, halves away from zero.
pub fn round_2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats with exactly two decimal places.
///
/// ```
/// use recipe_cost_engine::format::fixed_2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed_2(Decimal::new(103125, 6)), "0.10");
/// assert_eq!(fixed_2(Decimal::new(5, 3)), "0.01");
/// ```
pub fn fixed_2(value: Decimal) -> String {
    format!("{:.2}", round_2(value))
}

/// Formats as dollars: `$4.50`, `-$1.25`.
pub fn currency(value: Decimal) -> String {
    let rounded = round_2(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Formats a percentage: `31.50%`.
pub fn percent(value: Decimal) -> String {
    format!("{}%", fixed_2(value))
}

/// Formats an optional amount as currency, or the placeholder.
pub fn currency_or_placeholder(value: Option<Decimal>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), currency)
}

/// Formats an optional margin as a percentage, or the placeholder.
pub fn percent_or_placeholder(value: Option<Decimal>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), percent)
}

/// One exported pricing matrix row, every number as a fixed 2-decimal string.
///
/// Values that could not be computed are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Recipe name.
    pub recipe: String,
    /// Recipe category.
    pub category: String,
    /// Size name.
    pub size: String,
    /// Total cost minus overhead.
    pub ingredient_cost: String,
    /// Overhead allocation.
    pub overhead: String,
    /// Total unit cost.
    pub total_cost: String,
    /// Sale price.
    pub sale_price: String,
    /// Margin percentage.
    pub margin_pct: String,
    /// Profit.
    pub profit: String,
}

impl ExportRecord {
    /// Converts a matrix row.
    pub fn from_row(row: &PricingRow) -> Self {
        let cell = |value: Option<Decimal>| value.map(fixed_2).unwrap_or_default();
        Self {
            recipe: row.recipe_name.clone(),
            category: row.category.clone(),
            size: row.size_name.clone(),
            ingredient_cost: cell(row.ingredient_cost),
            overhead: cell(row.overhead_cost),
            total_cost: cell(row.total_cost),
            sale_price: cell(row.sale_price),
            margin_pct: cell(row.margin),
            profit: cell(row.profit),
        }
    }
}

/// Column names of the export, in [`ExportRecord`] field order.
pub const EXPORT_HEADER: [&str; 9] = [
    "recipe",
    "category",
    "size",
    "ingredient_cost",
    "overhead",
    "total_cost",
    "sale_price",
    "margin_pct",
    "profit",
];

/// Writes matrix rows as CSV. The header line is written even when there are
/// no rows.
pub fn write_csv<'r, W, I>(writer: W, rows: I) -> csv::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'r PricingRow>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(EXPORT_HEADER)?;
    for row in rows {
        csv_writer.serialize(ExportRecord::from_row(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}
