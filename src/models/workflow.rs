//! Approval workflow models and request lifecycle states.
//!
//! This module defines the workflow configuration records (request types,
//! ordered approval steps, fallback rules) and the per-request state that
//! the transition functions in [`crate::calculation`] operate on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kinds of requests that can be routed through an approval workflow.
///
/// Each request type has at most one workflow definition in a configuration
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Leave / time-off requests.
    TimeOff,
    /// Employee loan requests.
    Loan,
    /// HR letter requests (e.g., salary certificates).
    HrLetter,
    /// Business trip requests.
    BusinessTrip,
}

impl RequestType {
    /// Returns the snake_case name of the request type, matching its wire
    /// representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::TimeOff => "time_off",
            RequestType::Loan => "loan",
            RequestType::HrLetter => "hr_letter",
            RequestType::BusinessTrip => "business_trip",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who approves a given workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproverType {
    /// The request subject's direct manager.
    Manager,
    /// The configured default HR approver.
    Hr,
    /// A specific user named on the step.
    SpecificUser,
}

/// A secondary resolution rule applied when the primary approver type
/// cannot be resolved.
///
/// Only meaningful on `manager` steps: if the employee has no manager, the
/// step routes to HR instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackRule {
    /// Route to the default HR approver.
    Hr,
}

/// One ordered stage of approval routing within a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    /// The 1-indexed step number; must equal the step's position.
    pub step: u8,
    /// Who approves this step.
    pub approver: ApproverType,
    /// The user named on a `specific_user` step. Required iff the approver
    /// type is `specific_user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_user_id: Option<String>,
    /// Optional fallback rule for `manager` steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackRule>,
}

/// The maximum number of steps a workflow may define.
pub const MAX_WORKFLOW_STEPS: usize = 3;

/// An approval workflow definition for one request type.
///
/// # Example
///
/// ```
/// use hrflow_engine::models::{ApprovalStep, ApprovalWorkflow, ApproverType, RequestType};
///
/// let workflow = ApprovalWorkflow {
///     request_type: RequestType::TimeOff,
///     is_active: true,
///     steps: vec![ApprovalStep {
///         step: 1,
///         approver: ApproverType::Manager,
///         specific_user_id: None,
///         fallback: None,
///     }],
///     default_hr_approver_id: None,
/// };
/// assert!(workflow.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalWorkflow {
    /// The request type this workflow routes.
    pub request_type: RequestType,
    /// Inactive workflows bypass approval entirely: requests auto-approve.
    pub is_active: bool,
    /// The ordered approval steps, 1 to 3 of them.
    pub steps: Vec<ApprovalStep>,
    /// Fallback user for HR steps (and manager steps falling back to HR)
    /// when no specific person is otherwise resolvable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hr_approver_id: Option<String>,
}

impl ApprovalWorkflow {
    /// Validates the structural invariants of the workflow definition.
    ///
    /// Checked at the configuration boundary so the evaluators can assume
    /// well-formed input:
    /// - between 1 and 3 steps,
    /// - step numbers contiguous starting at 1,
    /// - every `specific_user` step names a user.
    pub fn validate(&self) -> EngineResult<()> {
        if self.steps.is_empty() || self.steps.len() > MAX_WORKFLOW_STEPS {
            return Err(EngineError::InvalidWorkflow {
                request_type: self.request_type.to_string(),
                message: format!(
                    "expected between 1 and {} steps, found {}",
                    MAX_WORKFLOW_STEPS,
                    self.steps.len()
                ),
            });
        }

        for (position, step) in self.steps.iter().enumerate() {
            let expected = (position + 1) as u8;
            if step.step != expected {
                return Err(EngineError::InvalidWorkflow {
                    request_type: self.request_type.to_string(),
                    message: format!(
                        "step numbers must be contiguous starting at 1; position {} has step {}",
                        expected, step.step
                    ),
                });
            }
            if step.approver == ApproverType::SpecificUser && step.specific_user_id.is_none() {
                return Err(EngineError::InvalidWorkflow {
                    request_type: self.request_type.to_string(),
                    message: format!("step {} names no specific user", step.step),
                });
            }
        }

        Ok(())
    }

    /// Returns the step with the given 1-indexed number, if defined.
    pub fn step(&self, number: u8) -> Option<&ApprovalStep> {
        if number == 0 {
            return None;
        }
        self.steps.get(number as usize - 1)
    }

    /// Returns the number of steps the workflow defines.
    pub fn step_count(&self) -> u8 {
        self.steps.len() as u8
    }
}

/// The lifecycle state of one request instance.
///
/// States progress `pending {step: 1}` through the configured steps to
/// `approved`; `rejected` is reachable from any pending step. Both
/// `approved` and `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestState {
    /// Waiting on the approver of the recorded step.
    Pending {
        /// The 1-indexed step currently awaiting approval.
        step: u8,
    },
    /// Fully approved. Terminal.
    Approved,
    /// Rejected at some step. Terminal.
    Rejected,
}

impl RequestState {
    /// Returns true for terminal states (`approved`, `rejected`), out of
    /// which no transition is defined.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Approved | RequestState::Rejected)
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Pending { step } => write!(f, "pending_step_{}", step),
            RequestState::Approved => f.write_str("approved"),
            RequestState::Rejected => f.write_str("rejected"),
        }
    }
}

/// An action applied to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    /// Advance the request to the next step, or to `approved`.
    Approve,
    /// Reject the request outright.
    Reject,
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalAction::Approve => f.write_str("approve"),
            ApprovalAction::Reject => f.write_str("reject"),
        }
    }
}

/// The subject of a request, reduced to the fields approver resolution
/// needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSubject {
    /// The subject employee's id.
    pub id: String,
    /// The subject employee's manager, if any.
    #[serde(default)]
    pub manager_id: Option<String>,
}

impl From<&crate::models::Employee> for RequestSubject {
    fn from(employee: &crate::models::Employee) -> Self {
        RequestSubject {
            id: employee.id.clone(),
            manager_id: employee.manager_id.clone(),
        }
    }
}
