//! Request approval state machine.
//!
//! One request instance moves through `pending_step_1..=N` to `approved`,
//! or to `rejected` from any pending step. Both terminal states admit no
//! further transitions; attempting one is an `InvalidTransition` error and
//! the caller must not re-submit.

use crate::calculation::approver::is_approval_required;
use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalAction, ApprovalWorkflow, RequestState};

/// Returns the initial state for a new request under the given workflow.
///
/// Requests of an inactive workflow type are approved immediately; active
/// workflows start at step 1.
///
/// # Examples
///
/// ```
/// use hrflow_engine::calculation::initial_state;
/// use hrflow_engine::models::{ApprovalStep, ApprovalWorkflow, ApproverType, RequestState, RequestType};
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
/// assert_eq!(initial_state(&workflow), RequestState::Pending { step: 1 });
/// ```
pub fn initial_state(workflow: &ApprovalWorkflow) -> RequestState {
    if is_approval_required(workflow) {
        RequestState::Pending { step: 1 }
    } else {
        RequestState::Approved
    }
}

/// Advances a pending request by one approval.
///
/// From `pending {n}` the request moves to `pending {n+1}` while further
/// steps remain, otherwise to `approved`. The recorded step number is
/// authoritative: a step at or beyond the configured count (a workflow
/// shortened mid-flight) behaves as the final step and completes the
/// request.
///
/// Approving a terminal request is an `InvalidTransition` error.
pub fn approve(
    workflow: &ApprovalWorkflow,
    state: &RequestState,
) -> EngineResult<RequestState> {
    match state {
        RequestState::Pending { step } => {
            if *step < workflow.step_count() {
                Ok(RequestState::Pending { step: step + 1 })
            } else {
                Ok(RequestState::Approved)
            }
        }
        terminal => Err(EngineError::InvalidTransition {
            from: terminal.to_string(),
            action: ApprovalAction::Approve.to_string(),
        }),
    }
}

/// Rejects a pending request.
///
/// Rejection is terminal from any pending step; no further steps execute.
/// Rejecting a terminal request is an `InvalidTransition` error.
pub fn reject(state: &RequestState) -> EngineResult<RequestState> {
    match state {
        RequestState::Pending { .. } => Ok(RequestState::Rejected),
        terminal => Err(EngineError::InvalidTransition {
            from: terminal.to_string(),
            action: ApprovalAction::Reject.to_string(),
        }),
    }
}

/// Applies an approval action to a request state.
pub fn apply_action(
    workflow: &ApprovalWorkflow,
    state: &RequestState,
    action: ApprovalAction,
) -> EngineResult<RequestState> {
    match action {
        ApprovalAction::Approve => approve(workflow, state),
        ApprovalAction::Reject => reject(state),
    }
}
