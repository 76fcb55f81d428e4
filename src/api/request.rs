//! Request types for the engine API.
//!
//! This module defines the JSON request structures for all endpoints and
//! their conversions into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AmountType, ApprovalAction, Employee, LoanInstallment, PayAssignment, PayTemplate,
    PercentageBase, RequestState, RequestSubject, RequestType,
};

/// Request body for the `/compensation/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The employee's allowance assignments.
    #[serde(default)]
    pub allowances: Vec<AssignmentRequest>,
    /// The employee's deduction assignments (GOSI excluded).
    #[serde(default)]
    pub deductions: Vec<AssignmentRequest>,
}

fn default_currency() -> String {
    "SAR".to_string()
}

/// Employee information in a compensation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's manager, if any.
    #[serde(default)]
    pub manager_id: Option<String>,
    /// The employee's nationality.
    pub nationality: String,
    /// The monthly base salary.
    pub base_salary: Decimal,
    /// Optional GOSI-registered salary override.
    #[serde(default)]
    pub gosi_registered_salary: Option<Decimal>,
    /// Whether the employee is subject to GOSI.
    #[serde(default)]
    pub is_subject_to_gosi: bool,
    /// The employee's work location.
    #[serde(default)]
    pub work_location_id: Option<String>,
    /// The salary currency.
    #[serde(default = "default_currency")]
    pub salary_currency: String,
}

/// An allowance or deduction assignment in a compensation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Display label for the resulting pay line.
    pub label: String,
    /// Flat override amount recorded on the assignment.
    #[serde(default)]
    pub custom_amount: Option<Decimal>,
    /// The referenced template, if any.
    #[serde(default)]
    pub template: Option<TemplateRequest>,
}

/// A pay template in a compensation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRequest {
    /// Template name.
    pub name: String,
    /// Whether the amount is flat or a percentage.
    pub amount_type: AmountType,
    /// The flat amount or percentage value.
    pub amount: Decimal,
    /// The base a percentage is computed over.
    #[serde(default)]
    pub percentage_of: Option<PercentageBase>,
}

/// Request body for the `/workflow/resolve-approver` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveApproverRequest {
    /// The request type whose workflow applies.
    pub request_type: RequestType,
    /// The 1-indexed step recorded on the request.
    pub step: u8,
    /// The request's subject employee.
    pub employee: SubjectRequest,
}

/// The request subject in an approver resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// The subject employee's id.
    pub id: String,
    /// The subject employee's manager, if any.
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// Request body for the `/workflow/transition` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The request type whose workflow applies.
    pub request_type: RequestType,
    /// The request's current state.
    pub state: RequestState,
    /// The action to apply.
    pub action: ApprovalAction,
}

/// Request body for the `/loans/schedule` endpoint.
///
/// Exactly one of `months` and `installment_amount` must be provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScheduleRequest {
    /// The loan principal.
    pub principal: Decimal,
    /// The disbursal date; installments fall due monthly after it.
    pub start_date: NaiveDate,
    /// Target duration in months.
    #[serde(default)]
    pub months: Option<u32>,
    /// Target per-installment amount.
    #[serde(default)]
    pub installment_amount: Option<Decimal>,
}

/// Request body for the `/loans/skip` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSkipRequest {
    /// The current schedule.
    pub installments: Vec<LoanInstallment>,
    /// The sequence number of the installment to skip.
    pub sequence: u32,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            manager_id: req.manager_id,
            nationality: req.nationality,
            base_salary: req.base_salary,
            gosi_registered_salary: req.gosi_registered_salary,
            is_subject_to_gosi: req.is_subject_to_gosi,
            work_location_id: req.work_location_id,
            salary_currency: req.salary_currency,
        }
    }
}

impl From<AssignmentRequest> for PayAssignment {
    fn from(req: AssignmentRequest) -> Self {
        PayAssignment {
            label: req.label,
            custom_amount: req.custom_amount,
            template: req.template.map(Into::into),
        }
    }
}

impl From<TemplateRequest> for PayTemplate {
    fn from(req: TemplateRequest) -> Self {
        PayTemplate {
            name: req.name,
            amount_type: req.amount_type,
            amount: req.amount,
            percentage_of: req.percentage_of,
        }
    }
}

impl From<SubjectRequest> for RequestSubject {
    fn from(req: SubjectRequest) -> Self {
        RequestSubject {
            id: req.id,
            manager_id: req.manager_id,
        }
    }
}
