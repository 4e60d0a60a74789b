//! Core data models for the Recipe Cost Engine.
//!
//! Entity types mirror the back-office data supplied by the data-access layer;
//! result types carry the engine's raw decimal outputs.

mod base_template;
mod cost_result;
mod ingredient;
mod overhead;
mod recipe;
mod snapshot;

pub use base_template::{BaseTemplate, BaseTemplateLine, RecipeSizeBase};
pub use cost_result::{
    BatchCost, CostBreakdown, CostLine, CostSource, CostTotals, SizeCost, UnitCost,
    UnresolvedConversion, UnresolvedLine,
};
pub use ingredient::{Ingredient, IngredientType};
pub use overhead::{Frequency, OverheadItem, OverheadSettings};
pub use recipe::{LineRef, Recipe, RecipeSizeLine, Size, SizeKind};
pub use snapshot::{Catalog, CostSnapshot, SizePricing};
