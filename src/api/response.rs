//! Response types for the engine API.
//!
//! This module defines the success DTOs, the error response structures,
//! and the mapping from [`EngineError`] to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ResolutionSource;
use crate::error::EngineError;
use crate::models::{LoanInstallment, RequestState, RequestType};

/// Response body for the `/workflow/resolve-approver` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproverResolutionResponse {
    /// The request type the resolution applies to.
    pub request_type: RequestType,
    /// The resolved step.
    pub step: u8,
    /// The resolved approver's user id.
    pub approver_id: String,
    /// How the identity was resolved.
    pub source: ResolutionSource,
}

/// Response body for the `/workflow/transition` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// The state after applying the action.
    pub state: RequestState,
}

/// Response body for the loan scheduling endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScheduleResponse {
    /// The derived or updated schedule.
    pub installments: Vec<LoanInstallment>,
    /// The sum of non-skipped installment amounts.
    pub total_due: Decimal,
}

impl LoanScheduleResponse {
    /// Builds a response from a schedule, totalling the non-skipped
    /// installments.
    pub fn from_schedule(installments: Vec<LoanInstallment>) -> Self {
        let total_due = installments
            .iter()
            .filter(|i| i.status != crate::models::InstallmentStatus::Skipped)
            .map(|i| i.amount)
            .sum();
        Self {
            installments,
            total_due,
        }
    }
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidWorkflow {
                request_type,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid workflow for request type '{}'", request_type),
                    message,
                ),
            },
            EngineError::WorkflowNotFound { request_type } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "WORKFLOW_NOT_FOUND",
                    format!(
                        "No approval workflow configured for request type '{}'",
                        request_type
                    ),
                    "An administrator must configure a workflow for this request type",
                ),
            },
            EngineError::ApproverNotConfigured { step } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "APPROVER_NOT_CONFIGURED",
                    format!("Approval step {} requires a specific user but none is assigned", step),
                    "An administrator must assign a user to this step",
                ),
            },
            EngineError::ApproverNotResolvable { step, reason } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "APPROVER_NOT_RESOLVABLE",
                    format!("No approver could be resolved for step {}", step),
                    reason,
                ),
            },
            EngineError::StepOutOfRange { step, steps } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "STEP_OUT_OF_RANGE",
                    format!("Step {} is out of range", step),
                    format!("The workflow defines {} step(s)", steps),
                ),
            },
            EngineError::InvalidTransition { from, action } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "INVALID_TRANSITION",
                    format!("Cannot {} a request in state '{}'", action, from),
                    "The request is already in a terminal state",
                ),
            },
            EngineError::InvalidLoanTerms { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_LOAN_TERMS", format!("Invalid loan terms: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InstallmentStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_workflow_not_found_maps_to_404() {
        let engine_error = EngineError::WorkflowNotFound {
            request_type: "time_off".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "WORKFLOW_NOT_FOUND");
    }

    #[test]
    fn test_approver_errors_map_to_409() {
        let api_error: ApiErrorResponse = EngineError::ApproverNotConfigured { step: 2 }.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "APPROVER_NOT_CONFIGURED");

        let api_error: ApiErrorResponse = EngineError::ApproverNotResolvable {
            step: 1,
            reason: "no manager".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "APPROVER_NOT_RESOLVABLE");
    }

    #[test]
    fn test_invalid_transition_maps_to_409() {
        let api_error: ApiErrorResponse = EngineError::InvalidTransition {
            from: "approved".to_string(),
            action: "approve".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "INVALID_TRANSITION");
    }

    #[test]
    fn test_invalid_loan_terms_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidLoanTerms {
            message: "principal must be positive".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_LOAN_TERMS");
    }

    #[test]
    fn test_loan_schedule_response_excludes_skipped_from_total() {
        let installments = vec![
            LoanInstallment {
                sequence: 1,
                due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                amount: Decimal::from_str("100").unwrap(),
                status: InstallmentStatus::Skipped,
            },
            LoanInstallment {
                sequence: 2,
                due_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                amount: Decimal::from_str("100").unwrap(),
                status: InstallmentStatus::Pending,
            },
        ];

        let response = LoanScheduleResponse::from_schedule(installments);
        assert_eq!(response.total_due, Decimal::from_str("100").unwrap());
    }
}
