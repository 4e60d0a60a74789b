//! Unit conversion functionality.
//!
//! This module converts a cost expressed per purchase unit into a cost per
//! usage unit using a sparse conversion table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::UnitConversion;
use crate::models::{Ingredient, UnitCost, UnresolvedConversion};

/// Normalizes a unit label for table lookups.
fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Converts purchase-unit costs into usage-unit costs.
///
/// Unit labels are matched case-insensitively after trimming. A missing
/// conversion is reported as [`UnitCost::Unresolved`], never as zero.
#[derive(Debug, Clone, Default)]
pub struct UnitConverter {
    factors: HashMap<(String, String), Decimal>,
}

impl UnitConverter {
    /// Builds a converter from conversion table entries.
    ///
    /// Every entry also registers its inverse (`1 / factor`) unless the
    /// inverse is declared explicitly. Entries with a non-positive factor
    /// are ignored.
    pub fn new(conversions: &[UnitConversion]) -> Self {
        let mut factors = HashMap::new();

        for conversion in conversions.iter().filter(|c| c.factor > Decimal::ZERO) {
            factors.insert(
                (normalize_unit(&conversion.from), normalize_unit(&conversion.to)),
                conversion.factor,
            );
        }

        for conversion in conversions.iter().filter(|c| c.factor > Decimal::ZERO) {
            factors
                .entry((normalize_unit(&conversion.to), normalize_unit(&conversion.from)))
                .or_insert_with(|| Decimal::ONE / conversion.factor);
        }

        Self { factors }
    }

    /// Returns the number of `to` units in one `from` unit, if known.
    pub fn factor(&self, from: &str, to: &str) -> Option<Decimal> {
        self.factors
            .get(&(normalize_unit(from), normalize_unit(to)))
            .copied()
    }

    /// Computes the cost of one usage unit.
    ///
    /// * Empty `usage_unit`, or one equal to `purchase_unit`: `cost / purchase_qty`.
    /// * Known conversion: `cost / (purchase_qty * factor)`.
    /// * Otherwise: [`UnitCost::Unresolved`].
    ///
    /// A non-positive purchase quantity yields a zero cost rather than a
    /// division error.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_cost_engine::calculation::UnitConverter;
    /// use recipe_cost_engine::config::default_conversions;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let converter = UnitConverter::new(&default_conversions());
    /// let cost = converter.cost_per_usage_unit(Decimal::from(10), Decimal::ONE, "lb", "oz");
    /// assert_eq!(cost.value(), Some(Decimal::from_str("0.625").unwrap()));
    /// ```
    pub fn cost_per_usage_unit(
        &self,
        cost: Decimal,
        purchase_qty: Decimal,
        purchase_unit: &str,
        usage_unit: &str,
    ) -> UnitCost {
        let from = normalize_unit(purchase_unit);
        let to = normalize_unit(usage_unit);

        let factor = if to.is_empty() || to == from {
            Decimal::ONE
        } else {
            match self.factors.get(&(from, to)) {
                Some(factor) => *factor,
                None => {
                    tracing::debug!(
                        purchase_unit = purchase_unit,
                        usage_unit = usage_unit,
                        "No unit conversion available"
                    );
                    return UnitCost::Unresolved(UnresolvedConversion {
                        from_unit: purchase_unit.trim().to_string(),
                        to_unit: usage_unit.trim().to_string(),
                    });
                }
            }
        };

        let divisor = purchase_qty * factor;
        if divisor <= Decimal::ZERO {
            return UnitCost::resolved(Decimal::ZERO);
        }

        UnitCost::resolved(cost / divisor)
    }

    /// Computes the cost of one usage unit of an ingredient.
    pub fn ingredient_unit_cost(&self, ingredient: &Ingredient) -> UnitCost {
        self.cost_per_usage_unit(
            ingredient.purchase_cost,
            ingredient.purchase_quantity,
            &ingredient.purchase_unit,
            ingredient.effective_usage_unit(),
        )
    }
}
