//! Request types for the Recipe Cost Engine API.
//!
//! Every request carries the snapshot it is resolved against; the server
//! keeps no catalog of its own.

use serde::{Deserialize, Serialize};

use crate::models::{CostSnapshot, OverheadItem, OverheadSettings};

/// Request body for the `/cost` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeCostRequest {
    /// The data to resolve against.
    pub snapshot: CostSnapshot,
    /// The recipe to cost.
    pub recipe_id: String,
    /// The size to cost.
    pub size_id: String,
    /// Skip the base template, costing the recipe as a batch does.
    #[serde(default)]
    pub skip_base_template: bool,
}

/// Request body for the `/batch-cost` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCostRequest {
    /// The data to resolve against.
    pub snapshot: CostSnapshot,
    /// The batch recipe to price.
    pub recipe_id: String,
}

/// Request body for the `/overhead` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverheadRequest {
    /// Recurring overhead items.
    pub items: Vec<OverheadItem>,
    /// Operating schedule.
    #[serde(default)]
    pub settings: OverheadSettings,
}

/// Request body for the `/pricing-matrix` and `/pricing-matrix/export`
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingMatrixRequest {
    /// The data to resolve against.
    pub snapshot: CostSnapshot,
}
