//! HTTP API module for the Recipe Cost Engine.
//!
//! This module exposes size costing, batch costing, overhead summaries and
//! the pricing matrix as JSON endpoints. Every request carries its snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCostRequest, OverheadRequest, PricingMatrixRequest, SizeCostRequest};
pub use response::{ApiError, SizeCostResponse};
pub use state::AppState;
