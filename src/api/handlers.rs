//! HTTP request handlers for the engine API.
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
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    apply_action, calculate_compensation, resolve_approver, schedule_by_amount,
    schedule_by_duration, skip_installment,
};
use crate::models::{
    AuditTrace, CompensationResult, Employee, PayAssignment, RequestSubject,
};

use super::request::{
    CompensationRequest, LoanScheduleRequest, LoanSkipRequest, ResolveApproverRequest,
    TransitionRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ApproverResolutionResponse, LoanScheduleResponse,
    TransitionResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compensation/calculate", post(calculate_compensation_handler))
        .route("/workflow/resolve-approver", post(resolve_approver_handler))
        .route("/workflow/transition", post(transition_handler))
        .route("/loans/schedule", post(loan_schedule_handler))
        .route("/loans/skip", post(loan_skip_handler))
        .with_state(state)
}

/// Converts a JSON extractor rejection into a structured API error.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /compensation/calculate.
///
/// Accepts an employee with allowance/deduction assignments and returns
/// the full pay breakdown with its audit trace.
async fn calculate_compensation_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompensationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compensation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let employee: Employee = request.employee.into();
    let allowances: Vec<PayAssignment> = request.allowances.into_iter().map(Into::into).collect();
    let deductions: Vec<PayAssignment> = request.deductions.into_iter().map(Into::into).collect();

    let work_location = employee
        .work_location_id
        .as_deref()
        .and_then(|id| state.config().work_location(id));

    let start_time = Instant::now();
    let outcome = calculate_compensation(&employee, &allowances, &deductions, work_location);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        gross_pay = %outcome.breakdown.gross_pay,
        net_pay = %outcome.breakdown.net_pay,
        warnings = outcome.warnings.len(),
        duration_us = duration.as_micros(),
        "Compensation calculation completed"
    );

    let result = CompensationResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id,
        breakdown: outcome.breakdown,
        lines: outcome.lines,
        audit_trace: AuditTrace {
            steps: outcome.audit_steps,
            warnings: outcome.warnings,
            duration_us: duration.as_micros() as u64,
        },
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /workflow/resolve-approver.
async fn resolve_approver_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveApproverRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let workflow = match state.config().workflow_for(request.request_type) {
        Ok(workflow) => workflow,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                request_type = %request.request_type,
                "Workflow not configured"
            );
            return engine_error_response(err);
        }
    };

    let subject: RequestSubject = request.employee.into();
    match resolve_approver(workflow, request.step, &subject, 1) {
        Ok(resolution) => {
            info!(
                correlation_id = %correlation_id,
                request_type = %request.request_type,
                step = request.step,
                approver_id = %resolution.approver_id,
                "Approver resolved"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApproverResolutionResponse {
                    request_type: request.request_type,
                    step: request.step,
                    approver_id: resolution.approver_id,
                    source: resolution.source,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                request_type = %request.request_type,
                step = request.step,
                error = %err,
                "Approver resolution failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for POST /workflow/transition.
async fn transition_handler(
    State(state): State<AppState>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let workflow = match state.config().workflow_for(request.request_type) {
        Ok(workflow) => workflow,
        Err(err) => return engine_error_response(err),
    };

    match apply_action(workflow, &request.state, request.action) {
        Ok(state) => {
            info!(
                correlation_id = %correlation_id,
                request_type = %request.request_type,
                from = %request.state,
                to = %state,
                "Request transitioned"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(TransitionResponse { state }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                from = %request.state,
                error = %err,
                "Transition rejected"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for POST /loans/schedule.
async fn loan_schedule_handler(
    payload: Result<Json<LoanScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let schedule = match (request.months, request.installment_amount) {
        (Some(_), Some(_)) | (None, None) => {
            return bad_request(ApiError::validation_error(
                "Provide exactly one of 'months' and 'installment_amount'",
            ));
        }
        (Some(months), None) => schedule_by_duration(request.principal, months, request.start_date),
        (None, Some(amount)) => schedule_by_amount(request.principal, amount, request.start_date),
    };

    match schedule {
        Ok(installments) => {
            info!(
                correlation_id = %correlation_id,
                principal = %request.principal,
                count = installments.len(),
                "Loan schedule derived"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(LoanScheduleResponse::from_schedule(installments)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Loan schedule rejected");
            engine_error_response(err)
        }
    }
}

/// Handler for POST /loans/skip.
async fn loan_skip_handler(
    payload: Result<Json<LoanSkipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let mut installments = request.installments;
    match skip_installment(&mut installments, request.sequence) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                sequence = request.sequence,
                count = installments.len(),
                "Installment skipped and rescheduled"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(LoanScheduleResponse::from_schedule(installments)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                sequence = request.sequence,
                error = %err,
                "Skip rejected"
            );
            engine_error_response(err)
        }
    }
}
