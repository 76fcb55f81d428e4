//! Domain models for the Approval Routing and Compensation Engine.
//!
//! This module contains the typed records the evaluators operate on:
//! employees, approval workflows and request states, allowance/deduction
//! assignments, work locations with GOSI rate tables, loan installments,
//! and the calculation result envelope.

mod assignment;
mod compensation_result;
mod employee;
mod loan;
mod work_location;
mod workflow;

pub use assignment::{AmountType, PayAssignment, PayTemplate, PercentageBase};
pub use compensation_result::{
    AuditStep, AuditTrace, AuditWarning, CompensationBreakdown, CompensationResult, LineKind,
    LineSource, PayLineItem,
};
pub use employee::Employee;
pub use loan::{InstallmentStatus, LoanInstallment};
pub use work_location::{GosiNationalityRate, WorkLocation};
pub use workflow::{
    ApprovalAction, ApprovalStep, ApprovalWorkflow, ApproverType, FallbackRule,
    MAX_WORKFLOW_STEPS, RequestState, RequestSubject, RequestType,
};
