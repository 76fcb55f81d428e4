//! Approver resolution for workflow steps.
//!
//! Given a workflow definition, a step number, and the request's subject
//! employee, these functions determine the concrete approver identity for
//! the step, applying the manager-to-HR fallback rule when the primary
//! approver type cannot be resolved.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApprovalWorkflow, ApproverType, AuditStep, FallbackRule, RequestSubject,
};

/// How an approver identity was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The subject's direct manager.
    Manager,
    /// The workflow's default HR approver, from an `hr` step.
    HrDefault,
    /// The user named on a `specific_user` step.
    SpecificUser,
    /// The default HR approver, reached through a manager step's fallback.
    ManagerFallbackHr,
}

impl ResolutionSource {
    fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Manager => "manager",
            ResolutionSource::HrDefault => "hr_default",
            ResolutionSource::SpecificUser => "specific_user",
            ResolutionSource::ManagerFallbackHr => "manager_fallback_hr",
        }
    }
}

/// The result of resolving a step's approver, including the audit step.
#[derive(Debug, Clone)]
pub struct ApproverResolution {
    /// The resolved approver's user id.
    pub approver_id: String,
    /// How the identity was resolved.
    pub source: ResolutionSource,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Returns whether requests of this workflow's type require approval at
/// all.
///
/// Inactive workflows bypass approval: requests auto-approve without
/// entering the step sequence.
///
/// # Examples
///
/// ```
/// use hrflow_engine::calculation::is_approval_required;
/// use hrflow_engine::models::{ApprovalStep, ApprovalWorkflow, ApproverType, RequestType};
///
/// let mut workflow = ApprovalWorkflow {
///     request_type: RequestType::HrLetter,
///     is_active: false,
///     steps: vec![ApprovalStep {
///         step: 1,
///         approver: ApproverType::Hr,
///         specific_user_id: None,
///         fallback: None,
///     }],
///     default_hr_approver_id: None,
/// };
/// assert!(!is_approval_required(&workflow));
///
/// workflow.is_active = true;
/// assert!(is_approval_required(&workflow));
/// ```
pub fn is_approval_required(workflow: &ApprovalWorkflow) -> bool {
    workflow.is_active
}

/// Returns the step after `current`, or `None` when the workflow is
/// complete.
pub fn next_step(workflow: &ApprovalWorkflow, current: u8) -> Option<u8> {
    if current < workflow.step_count() {
        Some(current + 1)
    } else {
        None
    }
}

/// Resolves the concrete approver for a workflow step.
///
/// Resolution rules per approver type:
/// - `specific_user`: the user named on the step. A missing user id is a
///   configuration error (`ApproverNotConfigured`), never defaulted.
/// - `hr`: the workflow's `default_hr_approver_id`; absent means
///   `ApproverNotResolvable` and the caller surfaces it to an HR admin.
/// - `manager`: the subject's manager; when the subject has no manager and
///   the step declares `fallback: hr`, resolution proceeds exactly as the
///   `hr` case. No manager and no fallback is `ApproverNotResolvable`.
///
/// A step number the workflow does not define is `StepOutOfRange`; this
/// happens when a workflow was shortened while requests were mid-flight.
///
/// # Arguments
///
/// * `workflow` - The workflow definition for the request's type
/// * `step_number` - The 1-indexed step recorded on the request
/// * `subject` - The request's subject employee
/// * `audit_step_number` - The step number for audit trail sequencing
pub fn resolve_approver(
    workflow: &ApprovalWorkflow,
    step_number: u8,
    subject: &RequestSubject,
    audit_step_number: u32,
) -> EngineResult<ApproverResolution> {
    let step = workflow
        .step(step_number)
        .ok_or(EngineError::StepOutOfRange {
            step: step_number,
            steps: workflow.step_count(),
        })?;

    let (approver_id, source, reasoning) = match step.approver {
        ApproverType::SpecificUser => {
            let approver_id = step
                .specific_user_id
                .clone()
                .ok_or(EngineError::ApproverNotConfigured { step: step_number })?;
            let reasoning = format!("Step {} names specific user {}", step_number, approver_id);
            (approver_id, ResolutionSource::SpecificUser, reasoning)
        }
        ApproverType::Hr => {
            let approver_id = default_hr_approver(workflow, step_number)?;
            let reasoning = format!(
                "Step {} routes to HR; resolved to default HR approver {}",
                step_number, approver_id
            );
            (approver_id, ResolutionSource::HrDefault, reasoning)
        }
        ApproverType::Manager => match &subject.manager_id {
            Some(manager_id) => {
                let reasoning = format!(
                    "Step {} routes to the manager of {}: {}",
                    step_number, subject.id, manager_id
                );
                (manager_id.clone(), ResolutionSource::Manager, reasoning)
            }
            None => match step.fallback {
                Some(FallbackRule::Hr) => {
                    let approver_id = default_hr_approver(workflow, step_number)?;
                    let reasoning = format!(
                        "{} has no manager; step {} falls back to default HR approver {}",
                        subject.id, step_number, approver_id
                    );
                    (approver_id, ResolutionSource::ManagerFallbackHr, reasoning)
                }
                None => {
                    return Err(EngineError::ApproverNotResolvable {
                        step: step_number,
                        reason: format!(
                            "employee {} has no manager and the step has no fallback",
                            subject.id
                        ),
                    });
                }
            },
        },
    };

    let audit_step = AuditStep {
        step_number: audit_step_number,
        rule_id: "approver_resolution".to_string(),
        rule_name: "Approver Resolution".to_string(),
        input: serde_json::json!({
            "request_type": workflow.request_type.as_str(),
            "step": step_number,
            "approver_type": step.approver,
            "employee_id": subject.id,
            "manager_id": subject.manager_id,
        }),
        output: serde_json::json!({
            "approver_id": approver_id,
            "source": source.as_str(),
        }),
        reasoning,
    };

    Ok(ApproverResolution {
        approver_id,
        source,
        audit_step,
    })
}

fn default_hr_approver(workflow: &ApprovalWorkflow, step_number: u8) -> EngineResult<String> {
    workflow
        .default_hr_approver_id
        .clone()
        .ok_or(EngineError::ApproverNotResolvable {
            step: step_number,
            reason: "no default HR approver is configured".to_string(),
        })
}
