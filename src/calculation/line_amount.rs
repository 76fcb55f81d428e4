//! Allowance and deduction line-amount resolution.
//!
//! Each assignment resolves to exactly one amount source: a custom amount
//! recorded on the assignment wins over the template whenever it is
//! present, percentage templates are computed over the base salary, and
//! flat templates are taken as-is. Lookups that cannot resolve degrade to
//! a zero amount with an audit warning instead of failing the calculation.

use rust_decimal::Decimal;

use crate::models::{AmountType, AuditWarning, LineSource, PayAssignment, PercentageBase};

/// The result of resolving one assignment's amount.
#[derive(Debug, Clone)]
pub struct LineAmount {
    /// The resolved amount.
    pub amount: Decimal,
    /// The amount source the line resolved through.
    pub source: LineSource,
    /// The warning raised when the line degraded to zero.
    pub warning: Option<AuditWarning>,
}

/// Resolves the amount of a single allowance or deduction assignment.
///
/// Precedence is governed by presence, not value: a `custom_amount` of
/// zero still overrides the template.
///
/// # Examples
///
/// ```
/// use hrflow_engine::calculation::resolve_line_amount;
/// use hrflow_engine::models::{AmountType, PayAssignment, PayTemplate, PercentageBase};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let assignment = PayAssignment {
///     label: "Transport Allowance".to_string(),
///     custom_amount: None,
///     template: Some(PayTemplate {
///         name: "Transport Allowance".to_string(),
///         amount_type: AmountType::Percentage,
///         amount: Decimal::from_str("10").unwrap(),
///         percentage_of: Some(PercentageBase::BaseSalary),
///     }),
/// };
///
/// let line = resolve_line_amount(&assignment, Decimal::from_str("1000").unwrap());
/// assert_eq!(line.amount, Decimal::from_str("100").unwrap());
/// ```
pub fn resolve_line_amount(assignment: &PayAssignment, base_salary: Decimal) -> LineAmount {
    if let Some(custom) = assignment.custom_amount {
        return LineAmount {
            amount: custom,
            source: LineSource::Custom,
            warning: None,
        };
    }

    let Some(template) = &assignment.template else {
        return LineAmount {
            amount: Decimal::ZERO,
            source: LineSource::Unresolved,
            warning: Some(AuditWarning::new(
                "MISSING_TEMPLATE",
                format!(
                    "Assignment '{}' has neither a custom amount nor a template",
                    assignment.label
                ),
                "medium",
            )),
        };
    };

    match template.amount_type {
        AmountType::Flat => LineAmount {
            amount: template.amount,
            source: LineSource::Flat,
            warning: None,
        },
        AmountType::Percentage => match template.percentage_of {
            Some(PercentageBase::BaseSalary) => LineAmount {
                amount: base_salary * template.amount / Decimal::ONE_HUNDRED,
                source: LineSource::Percentage,
                warning: None,
            },
            // Only base_salary is implemented; anything else resolves to
            // zero rather than guessing a base.
            _ => LineAmount {
                amount: Decimal::ZERO,
                source: LineSource::Unresolved,
                warning: Some(AuditWarning::new(
                    "UNSUPPORTED_PERCENTAGE_BASE",
                    format!(
                        "Template '{}' uses a percentage base the engine does not support",
                        template.name
                    ),
                    "medium",
                )),
            },
        },
    }
}

/// Sums the resolved amounts of a set of allowance assignments.
///
/// The sum is order-independent: permuting the assignments never changes
/// the total.
pub fn total_allowances(assignments: &[PayAssignment], base_salary: Decimal) -> Decimal {
    sum_line_amounts(assignments, base_salary)
}

/// Sums the resolved amounts of a set of deduction assignments.
///
/// GOSI is excluded: it is computed separately by
/// [`crate::calculation::compute_gosi`].
pub fn total_deductions(assignments: &[PayAssignment], base_salary: Decimal) -> Decimal {
    sum_line_amounts(assignments, base_salary)
}

fn sum_line_amounts(assignments: &[PayAssignment], base_salary: Decimal) -> Decimal {
    assignments
        .iter()
        .map(|assignment| resolve_line_amount(assignment, base_salary).amount)
        .sum()
}
