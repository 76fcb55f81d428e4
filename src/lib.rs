//! Approval Routing and Compensation Engine
//!
//! This crate provides the rule-evaluation core of an HR/payroll system:
//! routing approval requests (time off, loans, HR letters, business trips)
//! through configured approval steps, computing employee pay breakdowns
//! (allowances, deductions, GOSI contributions), and deriving loan
//! installment schedules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
