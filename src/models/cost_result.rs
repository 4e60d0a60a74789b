//! Cost result models.
//!
//! These types carry raw decimals out of the engine. Nothing here is rounded
//! or formatted; presentation and export layers do that themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit conversion that the conversion table could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedConversion {
    /// The unit the cost is expressed in.
    pub from_unit: String,
    /// The unit the cost was requested in.
    pub to_unit: String,
}

/// The cost of one usage unit of something.
///
/// `Unresolved` is never silently turned into a number. Callers must branch
/// on it and show a placeholder instead of an understated total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnitCost {
    /// Cost per usage unit.
    Resolved {
        /// The cost.
        value: Decimal,
    },
    /// No conversion exists between the purchase and usage units.
    Unresolved(UnresolvedConversion),
}

impl UnitCost {
    /// Wraps a resolved value.
    pub fn resolved(value: Decimal) -> Self {
        Self::Resolved { value }
    }

    /// Returns the resolved value, if any.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Resolved { value } => Some(*value),
            Self::Unresolved(_) => None,
        }
    }

    /// Returns true if the conversion could not be resolved.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved(_))
    }
}

/// Where a cost line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    /// A direct ingredient line of the recipe.
    Ingredient,
    /// A line consuming a batch recipe.
    BatchRecipe,
    /// A component supplied by the attached base template.
    BaseTemplate,
    /// Time-based overhead allocation.
    Overhead,
}

/// One itemised contribution to a size cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    /// Where the cost comes from.
    pub source: CostSource,
    /// Id of the ingredient, batch recipe or recipe (for overhead).
    pub ref_id: String,
    /// Display name, empty when the referenced entity is missing.
    pub name: String,
    /// Quantity consumed (minutes for overhead).
    pub quantity: Decimal,
    /// Unit of `quantity`.
    pub unit: String,
    /// Cost per unit of `quantity`.
    pub unit_cost: Decimal,
    /// `quantity * unit_cost`.
    pub amount: Decimal,
}

/// Aggregated amounts of a size cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTotals {
    /// Sum of direct ingredient lines.
    pub direct_cost: Decimal,
    /// Sum of batch recipe lines.
    pub batch_cost: Decimal,
    /// Sum of base template components.
    pub base_cost: Decimal,
    /// Overhead allocation.
    pub overhead_cost: Decimal,
    /// Total unit cost.
    pub total_cost: Decimal,
}

impl CostTotals {
    /// Everything except overhead: the "ingredient cost" column of the
    /// pricing matrix and export.
    pub fn ingredient_cost(&self) -> Decimal {
        self.total_cost - self.overhead_cost
    }
}

/// A fully resolved size cost with its itemisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The recipe.
    pub recipe_id: String,
    /// The size.
    pub size_id: String,
    /// Itemised contributions in resolution order.
    pub lines: Vec<CostLine>,
    /// Aggregated totals.
    pub totals: CostTotals,
}

/// The first line of a size that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedLine {
    /// The recipe being costed.
    pub recipe_id: String,
    /// The size being costed.
    pub size_id: String,
    /// The ingredient or batch recipe whose cost could not be converted.
    pub ref_id: String,
    /// Its display name.
    pub ref_name: String,
    /// The conversion that failed.
    pub conversion: UnresolvedConversion,
}

/// The unit cost of one (recipe, size) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SizeCost {
    /// The cost was computed.
    Resolved(CostBreakdown),
    /// A unit conversion was missing somewhere in the size.
    Unresolved(UnresolvedLine),
    /// Nothing is attached to this size; distinct from a computed zero.
    NoData,
}

impl SizeCost {
    /// Returns the breakdown if the cost was computed.
    pub fn breakdown(&self) -> Option<&CostBreakdown> {
        match self {
            Self::Resolved(breakdown) => Some(breakdown),
            _ => None,
        }
    }

    /// Returns the total unit cost if the cost was computed.
    pub fn total(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.totals.total_cost)
    }
}

/// The per-yield-unit cost of a batch recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCost {
    /// The batch recipe.
    pub recipe_id: String,
    /// The size used as the batch definition.
    pub batch_size_id: String,
    /// Ingredient cost of one batch.
    pub ingredient_cost: Decimal,
    /// Overhead allocated to one batch.
    pub overhead_cost: Decimal,
    /// Declared yield of one batch.
    pub yield_quantity: Decimal,
    /// Unit of the yield.
    pub yield_unit: Option<String>,
    /// Cost per yield unit, or the conversion that blocked it.
    pub cost_per_yield_unit: UnitCost,
}
