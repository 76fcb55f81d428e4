//! Rule evaluation logic for the Approval Routing and Compensation Engine.
//!
//! This module contains all the evaluator functions: approver resolution
//! with fallback rules, the request approval state machine, allowance and
//! deduction line-amount resolution, GOSI contribution computation with
//! nationality-rate lookup, compensation summary assembly, and loan
//! installment scheduling with the skip-and-reschedule policy.

mod approver;
mod compensation;
mod gosi;
mod line_amount;
mod loan_schedule;
mod nationality;
mod transitions;

pub use approver::{ApproverResolution, ResolutionSource, is_approval_required, next_step, resolve_approver};
pub use compensation::{CompensationOutcome, calculate_compensation};
pub use gosi::{GosiComputation, compute_gosi};
pub use line_amount::{LineAmount, resolve_line_amount, total_allowances, total_deductions};
pub use loan_schedule::{schedule_by_amount, schedule_by_duration, skip_installment};
pub use nationality::iso_country_code;
pub use transitions::{apply_action, approve, initial_state, reject};
