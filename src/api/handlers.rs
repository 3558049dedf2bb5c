//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::dates_in_range;
use crate::error::EngineResult;
use crate::ingest::{clipboard_payload, process_pasted_data_with_policy};
use crate::models::{EmployeeData, Holidays, PayrollPeriod};

use super::request::SummaryRequest;
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summaries", post(summaries_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for the POST /summaries endpoint.
///
/// Accepts a payroll period, pasted timecard text, and an optional holiday
/// classification; returns the per-employee entries and summaries.
async fn summaries_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match compute_employees(&state, &request) {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                "Summary computation complete"
            );
            (StatusCode::OK, Json(SummaryResponse { employees })).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, %error, "Summary computation failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Handler for the POST /export endpoint.
///
/// Recomputes summaries from the same request shape and returns the
/// tab-separated clipboard payload as plain text.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match compute_employees(&state, &request) {
        Ok(employees) => {
            let payload = clipboard_payload(&employees);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                payload,
            )
                .into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, %error, "Export computation failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Maps JSON extraction failures to structured API errors.
fn extract_request(
    payload: Result<Json<SummaryRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<SummaryRequest, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::malformed_json("Expected request with Content-Type: application/json")
                }
                other => {
                    warn!(correlation_id = %correlation_id, error = %other, "JSON extraction error");
                    ApiError::malformed_json(other.to_string())
                }
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Expands the period, resolves the holiday snapshot, and runs the ingestor.
fn compute_employees(
    state: &AppState,
    request: &SummaryRequest,
) -> EngineResult<Vec<EmployeeData>> {
    let period = PayrollPeriod::new(request.period.start_date, request.period.end_date)?;
    let dates = dates_in_range(period.start_date, period.end_date);

    // Per-request snapshot: explicit holidays win over the configured
    // calendar, and the core never observes later mutations.
    let holidays: Holidays = match &request.holidays {
        Some(explicit) => explicit.clone().into(),
        None => state.config().holiday_calendar().clone(),
    };

    process_pasted_data_with_policy(
        &dates,
        &request.pasted_text,
        &holidays,
        state.config().sunday_holiday_policy(),
    )
}
