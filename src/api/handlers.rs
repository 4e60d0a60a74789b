//! HTTP request handlers for the Recipe Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{CostEngine, OverheadAllocator, classify_margin_with, margin, profit};
use crate::format::write_csv;

use super::request::{BatchCostRequest, OverheadRequest, PricingMatrixRequest, SizeCostRequest};
use super::response::{ApiError, ApiErrorResponse, SizeCostResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cost", post(size_cost_handler))
        .route("/batch-cost", post(batch_cost_handler))
        .route("/overhead", post(overhead_handler))
        .route("/pricing-matrix", post(pricing_matrix_handler))
        .route("/pricing-matrix/export", post(pricing_export_handler))
        .with_state(state)
}

/// Handler for POST /cost.
///
/// Costs one recipe size and prices it against its configured sale price.
async fn size_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<SizeCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing size cost request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let engine = CostEngine::new(&request.snapshot, state.config().config());
    let cost = match engine.size_cost(
        &request.recipe_id,
        &request.size_id,
        request.skip_base_template,
    ) {
        Ok(cost) => cost,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Size cost failed");
            return error_response(err.into());
        }
    };

    let sale_price = engine
        .catalog()
        .sale_price(&request.recipe_id, &request.size_id);
    let priced = cost
        .total()
        .zip(sale_price.filter(|price| *price > Decimal::ZERO));
    let margin_pct = priced.and_then(|(total, price)| margin(total, price));

    let response = SizeCostResponse {
        has_costable_content: engine.has_costable_content(&request.recipe_id, &request.size_id),
        sale_price,
        profit: priced.map(|(total, price)| profit(total, price)),
        margin: margin_pct,
        health: margin_pct.map(|m| classify_margin_with(m, engine.thresholds())),
        recipe_id: request.recipe_id,
        size_id: request.size_id,
        cost,
    };

    info!(
        correlation_id = %correlation_id,
        recipe_id = %response.recipe_id,
        size_id = %response.size_id,
        total_cost = ?response.cost.total(),
        duration_us = start_time.elapsed().as_micros(),
        "Size cost completed successfully"
    );
    json_response(StatusCode::OK, &response)
}

/// Handler for POST /batch-cost.
async fn batch_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch cost request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let engine = CostEngine::new(&request.snapshot, state.config().config());
    match engine.batch_cost(&request.recipe_id) {
        Ok(batch) => {
            info!(
                correlation_id = %correlation_id,
                recipe_id = %batch.recipe_id,
                cost_per_yield_unit = ?batch.cost_per_yield_unit.value(),
                duration_us = start_time.elapsed().as_micros(),
                "Batch cost completed successfully"
            );
            json_response(StatusCode::OK, &batch)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Batch cost failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /overhead.
///
/// Summarizes overhead items without needing a full snapshot.
async fn overhead_handler(
    State(state): State<AppState>,
    payload: Result<Json<OverheadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overhead request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let allocator = OverheadAllocator::new(
        &request.items,
        &request.settings,
        state.config().settings(),
    );
    let summary = allocator.summary(&request.items);

    info!(
        correlation_id = %correlation_id,
        items_count = request.items.len(),
        monthly_total = %summary.monthly_total,
        "Overhead summary completed successfully"
    );
    json_response(StatusCode::OK, &summary)
}

/// Handler for POST /pricing-matrix.
async fn pricing_matrix_handler(
    State(state): State<AppState>,
    payload: Result<Json<PricingMatrixRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pricing matrix request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let matrix = CostEngine::new(&request.snapshot, state.config().config()).pricing_matrix();

    info!(
        correlation_id = %correlation_id,
        rows = matrix.rows.len(),
        priced = matrix.overall.priced_count,
        duration_us = start_time.elapsed().as_micros(),
        "Pricing matrix completed successfully"
    );
    json_response(StatusCode::OK, &matrix)
}

/// Handler for POST /pricing-matrix/export.
///
/// Returns the pricing matrix rows as CSV with fixed 2-decimal numbers.
async fn pricing_export_handler(
    State(state): State<AppState>,
    payload: Result<Json<PricingMatrixRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pricing export request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let matrix = CostEngine::new(&request.snapshot, state.config().config()).pricing_matrix();
    let mut body = Vec::new();
    if let Err(err) = write_csv(&mut body, &matrix.rows) {
        warn!(correlation_id = %correlation_id, error = %err, "Pricing export failed");
        return error_response(ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details("EXPORT_ERROR", "Failed to write CSV", err.to_string()),
        });
    }

    info!(
        correlation_id = %correlation_id,
        rows = matrix.rows.len(),
        "Pricing export completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        body,
    )
        .into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
