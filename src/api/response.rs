//! Response types for the Recipe Cost Engine API.
//!
//! This module defines the success bodies that wrap engine results and the
//! error response structures of the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::MarginHealth;
use crate::error::EngineError;
use crate::models::SizeCost;

/// Response body for the `/cost` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeCostResponse {
    /// The recipe.
    pub recipe_id: String,
    /// The size.
    pub size_id: String,
    /// Whether the size has anything to cost.
    pub has_costable_content: bool,
    /// The resolved cost.
    pub cost: SizeCost,
    /// Configured sale price.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sale_price: Option<Decimal>,
    /// Sale price minus total cost.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub profit: Option<Decimal>,
    /// Margin percentage.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub margin: Option<Decimal>,
    /// Margin band.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub health: Option<MarginHealth>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::RecipeNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RECIPE_NOT_FOUND",
                    message,
                    format!("The snapshot has no recipe with id '{}'", id),
                ),
            },
            EngineError::SizeNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SIZE_NOT_FOUND",
                    message,
                    format!("The snapshot has no size with id '{}'", id),
                ),
            },
            EngineError::NotABatchRecipe { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NOT_A_BATCH_RECIPE", message),
            },
            EngineError::NoBatchSize { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NO_BATCH_SIZE", message),
            },
        }
    }
}
