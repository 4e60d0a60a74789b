//! Cost calculation logic for the recipe cost engine.
//!
//! This module contains unit conversion of purchase costs into usage costs,
//! overhead canonicalization and allocation, batch recipe costing, per-size
//! cost resolution, pricing analytics, and the pricing matrix, together with
//! the [`CostEngine`] facade that wires them over one snapshot.

mod batch_recipe;
mod engine;
mod matrix;
mod overhead;
mod pricing;
mod size_cost;
mod unit_conversion;

pub use batch_recipe::BatchRecipeResolver;
pub use engine::CostEngine;
pub use matrix::{PricingMatrix, PricingRow, RecipeSummary, RowStatus};
pub use overhead::{OverheadAllocator, OverheadItemSummary, OverheadSummary, PeriodAmounts};
pub use pricing::{
    MarginHealth, PricePoint, PricingAverages, classify_margin, classify_margin_with, margin,
    profit,
};
pub use size_cost::SizeCostResolver;
pub use unit_conversion::UnitConverter;
