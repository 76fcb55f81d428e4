//! Employee model.
//!
//! This module defines the Employee snapshot consumed by the evaluators.
//! The record is owned and persisted elsewhere; the engine only reads it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "SAR".to_string()
}

/// Represents an employee snapshot used for approval routing and pay
/// calculation.
///
/// The `manager_id` field is a weak self-reference: an employee may have no
/// manager, in which case manager approval steps fall back per the workflow
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's manager, if any.
    #[serde(default)]
    pub manager_id: Option<String>,
    /// The employee's nationality, as a country name, demonym, or ISO
    /// 3166-1 alpha-2 code (e.g., "Saudi Arabia", "Indian", "EG").
    pub nationality: String,
    /// The employee's monthly base salary.
    pub base_salary: Decimal,
    /// Optional GOSI-registered salary that overrides `base_salary` as the
    /// contribution base.
    #[serde(default)]
    pub gosi_registered_salary: Option<Decimal>,
    /// Whether the employee is subject to GOSI contributions at all.
    #[serde(default)]
    pub is_subject_to_gosi: bool,
    /// The work location whose GOSI settings apply to this employee.
    #[serde(default)]
    pub work_location_id: Option<String>,
    /// The currency the salary and all derived amounts are expressed in.
    /// Currency conversion is an external collaborator.
    #[serde(default = "default_currency")]
    pub salary_currency: String,
}

impl Employee {
    /// Returns true if the employee has a manager assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrflow_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     manager_id: Some("mgr_001".to_string()),
    ///     nationality: "Saudi Arabia".to_string(),
    ///     base_salary: Decimal::new(500000, 2),
    ///     gosi_registered_salary: None,
    ///     is_subject_to_gosi: true,
    ///     work_location_id: None,
    ///     salary_currency: "SAR".to_string(),
    /// };
    /// assert!(employee.has_manager());
    /// ```
    pub fn has_manager(&self) -> bool {
        self.manager_id.is_some()
    }

    /// Returns the salary base used for GOSI contributions.
    ///
    /// The GOSI-registered salary takes precedence when set; otherwise the
    /// base salary is used.
    pub fn gosi_base(&self) -> Decimal {
        self.gosi_registered_salary.unwrap_or(self.base_salary)
    }
}
