//! HTTP request handlers for the timeclock engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{build_timesheet_report, derive_presence, group_by_employee};
use crate::models::PunchRecord;

use super::request::{PresenceRequest, TimesheetRequest};
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheets", post(timesheets_handler))
        .route("/presence", post(presence_handler))
        .with_state(state)
}

/// Handler for POST /timesheets endpoint.
///
/// Accepts a window-scoped punch list plus period parameters and returns
/// the computed timesheet report.
async fn timesheets_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection, correlation_id),
    };

    let punches: Vec<PunchRecord> = request.punches.into_iter().map(Into::into).collect();
    let period = request.period.into();
    let now = Local::now().naive_local();

    let start_time = Instant::now();
    let report = build_timesheet_report(punches, &period, now, state.settings());
    info!(
        correlation_id = %correlation_id,
        employees = report.totals.total_employees,
        shifts = report.totals.total_shifts,
        period = %report.period.label,
        duration_us = start_time.elapsed().as_micros(),
        "Timesheet report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for POST /presence endpoint.
///
/// Accepts each employee's ordered punches and returns their derived
/// attendance states with a population summary.
async fn presence_handler(
    payload: Result<Json<PresenceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing presence request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection, correlation_id),
    };

    let punches: Vec<PunchRecord> = request.punches.into_iter().map(Into::into).collect();
    let now = request.now.unwrap_or_else(|| Local::now().naive_local());
    let groups = group_by_employee(punches);

    let report = derive_presence(&groups, now);
    info!(
        correlation_id = %correlation_id,
        employees = report.summary.total_employees,
        clocked_in = report.summary.clocked_in,
        "Presence report computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn bad_request(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
