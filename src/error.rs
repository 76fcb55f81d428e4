//! Error types for the Approval Routing and Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during rule evaluation.

use thiserror::Error;

/// The main error type for the engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hrflow_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A workflow definition violated a structural invariant.
    #[error("Invalid workflow for request type '{request_type}': {message}")]
    InvalidWorkflow {
        /// The request type the workflow applies to.
        request_type: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// No workflow is configured for the given request type.
    #[error("No approval workflow configured for request type '{request_type}'")]
    WorkflowNotFound {
        /// The request type with no workflow definition.
        request_type: String,
    },

    /// A specific-user step has no user assigned.
    ///
    /// This is a configuration error that must be surfaced to an
    /// administrator, not silently defaulted.
    #[error("Approval step {step} requires a specific user but none is assigned")]
    ApproverNotConfigured {
        /// The step number with the missing user assignment.
        step: u8,
    },

    /// No approver could be resolved for a step.
    #[error("No approver could be resolved for step {step}: {reason}")]
    ApproverNotResolvable {
        /// The step number that failed to resolve.
        step: u8,
        /// Why resolution failed.
        reason: String,
    },

    /// A step number was requested that the workflow does not define.
    #[error("Step {step} is out of range for a workflow with {steps} step(s)")]
    StepOutOfRange {
        /// The requested step number.
        step: u8,
        /// The number of steps the workflow defines.
        steps: u8,
    },

    /// An approve/reject action was applied to a terminal request state.
    #[error("Cannot {action} a request in state '{from}'")]
    InvalidTransition {
        /// The state the request was in.
        from: String,
        /// The action that was attempted.
        action: String,
    },

    /// Loan schedule parameters were invalid.
    #[error("Invalid loan terms: {message}")]
    InvalidLoanTerms {
        /// A description of what made the terms invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_workflow_displays_type_and_message() {
        let error = EngineError::InvalidWorkflow {
            request_type: "time_off".to_string(),
            message: "step numbers must be contiguous".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid workflow for request type 'time_off': step numbers must be contiguous"
        );
    }

    #[test]
    fn test_workflow_not_found_displays_request_type() {
        let error = EngineError::WorkflowNotFound {
            request_type: "business_trip".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No approval workflow configured for request type 'business_trip'"
        );
    }

    #[test]
    fn test_approver_not_configured_displays_step() {
        let error = EngineError::ApproverNotConfigured { step: 2 };
        assert_eq!(
            error.to_string(),
            "Approval step 2 requires a specific user but none is assigned"
        );
    }

    #[test]
    fn test_approver_not_resolvable_displays_step_and_reason() {
        let error = EngineError::ApproverNotResolvable {
            step: 1,
            reason: "employee has no manager".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No approver could be resolved for step 1: employee has no manager"
        );
    }

    #[test]
    fn test_step_out_of_range_displays_bounds() {
        let error = EngineError::StepOutOfRange { step: 4, steps: 3 };
        assert_eq!(
            error.to_string(),
            "Step 4 is out of range for a workflow with 3 step(s)"
        );
    }

    #[test]
    fn test_invalid_transition_displays_state_and_action() {
        let error = EngineError::InvalidTransition {
            from: "approved".to_string(),
            action: "reject".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot reject a request in state 'approved'");
    }

    #[test]
    fn test_invalid_loan_terms_displays_message() {
        let error = EngineError::InvalidLoanTerms {
            message: "duration must be at least one month".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid loan terms: duration must be at least one month"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_workflow_not_found() -> EngineResult<()> {
            Err(EngineError::WorkflowNotFound {
                request_type: "loan".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_workflow_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
