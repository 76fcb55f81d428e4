//! Compensation result models.
//!
//! This module contains the [`CompensationResult`] envelope and its
//! associated structures: the pay breakdown, per-assignment line items, and
//! the audit trace recording every rule decision and degraded lookup.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a pay line item adds to or subtracts from gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Adds to gross pay.
    Allowance,
    /// Subtracts from gross pay (GOSI excluded; reported separately).
    Deduction,
}

/// Which amount source a pay line item resolved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSource {
    /// A custom amount recorded directly on the assignment.
    Custom,
    /// A flat template amount.
    Flat,
    /// A percentage-of-base-salary template amount.
    Percentage,
    /// No supported amount source; the line degraded to zero.
    Unresolved,
}

/// A single resolved allowance or deduction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLineItem {
    /// Whether the line adds or subtracts.
    pub kind: LineKind,
    /// Display label carried over from the assignment.
    pub label: String,
    /// The amount source the line resolved through.
    pub source: LineSource,
    /// The resolved amount.
    pub amount: Decimal,
}

/// The aggregated pay breakdown for one employee and period.
///
/// All amounts are in the employee's configured salary currency. Net pay is
/// never floored at zero: a negative value reflects a data or configuration
/// problem upstream and must be surfaced, not clamped.
///
/// # Example
///
/// ```
/// use hrflow_engine::models::CompensationBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = CompensationBreakdown {
///     gross_pay: Decimal::from_str("5300.00").unwrap(),
///     total_allowances: Decimal::from_str("300.00").unwrap(),
///     total_deductions: Decimal::from_str("250.00").unwrap(),
///     gosi_deduction: Decimal::ZERO,
///     employer_gosi_contribution: Decimal::ZERO,
///     net_pay: Decimal::from_str("5050.00").unwrap(),
///     currency: "SAR".to_string(),
/// };
/// assert_eq!(breakdown.net_pay, Decimal::from_str("5050.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// Base salary plus total allowances.
    pub gross_pay: Decimal,
    /// Sum of all resolved allowance lines.
    pub total_allowances: Decimal,
    /// Sum of all resolved deduction lines, GOSI excluded.
    pub total_deductions: Decimal,
    /// The employee-side GOSI contribution.
    pub gosi_deduction: Decimal,
    /// The employer-side GOSI contribution. Informational; not part of net
    /// pay.
    pub employer_gosi_contribution: Decimal,
    /// Gross pay minus deductions minus the GOSI deduction.
    pub net_pay: Decimal,
    /// The currency every amount is expressed in.
    pub currency: String,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings record degraded computations: lookups that failed and resolved
/// to a zero contribution instead of an error, so a compensation summary
/// always renders while the cause stays auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A stable code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency and auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a compensation calculation.
///
/// # Example
///
/// ```
/// use hrflow_engine::models::{AuditTrace, CompensationBreakdown, CompensationResult};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CompensationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     breakdown: CompensationBreakdown {
///         gross_pay: Decimal::ZERO,
///         total_allowances: Decimal::ZERO,
///         total_deductions: Decimal::ZERO,
///         gosi_deduction: Decimal::ZERO,
///         employer_gosi_contribution: Decimal::ZERO,
///         net_pay: Decimal::ZERO,
///         currency: "SAR".to_string(),
///     },
///     lines: vec![],
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// Aggregated totals for the calculation.
    pub breakdown: CompensationBreakdown,
    /// Individual resolved allowance/deduction lines.
    pub lines: Vec<PayLineItem>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
