//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_threshold, explain_salary};
use crate::config::RateConfiguration;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, CalculationResult, SalaryInput};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the breakdown with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") || body_text.contains("unknown variant")
                    {
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let (input, rates) = match validate_request(&request, state.rates()) {
        Ok(validated) => validated,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation request rejected"
            );
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    let explanation = explain_salary(input, &rates);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        kind = ?input.kind(),
        amount = input.amount(),
        gross = explanation.breakdown.gross,
        net = explanation.breakdown.net,
        custom_rates = request.rates.is_some(),
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let result = CalculationResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input,
        rates,
        breakdown: explanation.breakdown,
        audit_trace: AuditTrace {
            steps: explanation.steps,
            duration_us: duration.as_micros() as u64,
        },
    };

    json_response(StatusCode::OK, result)
}

/// Handler for GET /rates endpoint.
///
/// Returns the server's active rate configuration and its tax threshold.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let rates = *state.rates();
    let response = RatesResponse {
        metadata: state.config().metadata().clone(),
        rates,
        threshold: compute_threshold(&rates),
    };

    json_response(StatusCode::OK, response)
}

fn validate_request(
    request: &CalculationRequest,
    default_rates: &RateConfiguration,
) -> EngineResult<(SalaryInput, RateConfiguration)> {
    let input = request.input()?;
    let rates = request.rates_or(default_rates)?;
    Ok((input, rates))
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}
