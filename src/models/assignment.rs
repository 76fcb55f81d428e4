//! Allowance and deduction assignment models.
//!
//! An assignment ties an employee to a pay line: either a custom flat
//! amount recorded directly on the assignment, or a reference to a shared
//! template that is flat or a percentage of the base salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a template amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountType {
    /// The template amount is a flat sum.
    Flat,
    /// The template amount is a percentage of the base named by
    /// `percentage_of`.
    Percentage,
}

/// The base a percentage template is computed over.
///
/// Only `base_salary` is supported; any other value found in stored data
/// deserializes to [`PercentageBase::Unsupported`] and resolves to a zero
/// amount with an audit warning rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageBase {
    /// Percentage of the employee's base salary.
    BaseSalary,
    /// Any base the engine does not implement.
    Unsupported,
}

impl<'de> Deserialize<'de> for PercentageBase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unknown bases must degrade, not fail the whole record.
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "base_salary" => PercentageBase::BaseSalary,
            _ => PercentageBase::Unsupported,
        })
    }
}

/// A shared allowance/deduction template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTemplate {
    /// Human-readable template name (e.g., "Housing Allowance").
    pub name: String,
    /// Whether `amount` is flat or a percentage.
    pub amount_type: AmountType,
    /// The flat amount, or the percentage value when `amount_type` is
    /// `percentage`.
    pub amount: Decimal,
    /// The base a percentage is computed over. Ignored for flat templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_of: Option<PercentageBase>,
}

/// One allowance or deduction assignment for an employee.
///
/// Exactly one amount source is used per assignment: a present
/// `custom_amount` always wins over the template, even when both are set
/// and even when the custom amount is zero. Presence, not value, governs
/// precedence.
///
/// # Example
///
/// ```
/// use hrflow_engine::models::{AmountType, PayAssignment, PayTemplate, PercentageBase};
/// use rust_decimal::Decimal;
///
/// let assignment = PayAssignment {
///     label: "Transport Allowance".to_string(),
///     custom_amount: None,
///     template: Some(PayTemplate {
///         name: "Transport Allowance".to_string(),
///         amount_type: AmountType::Percentage,
///         amount: Decimal::new(10, 0),
///         percentage_of: Some(PercentageBase::BaseSalary),
///     }),
/// };
/// assert!(assignment.custom_amount.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAssignment {
    /// Display label for the resulting pay line.
    pub label: String,
    /// Flat override amount recorded directly on the assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amount: Option<Decimal>,
    /// The template this assignment references, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PayTemplate>,
}
