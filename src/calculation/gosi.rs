//! GOSI contribution computation.
//!
//! GOSI (General Organization for Social Insurance) contributions are a
//! statutory payroll deduction whose rates depend on the employee's
//! nationality and the work location's rate table. Every lookup that fails
//! degrades to a zero contribution with an audit warning rather than an
//! error: a compensation summary must always render, even on incomplete
//! configuration.

use rust_decimal::Decimal;

use crate::calculation::nationality::iso_country_code;
use crate::models::{AuditStep, AuditWarning, Employee, WorkLocation};

/// The result of a GOSI computation, including the audit step and any
/// degradation warnings.
#[derive(Debug, Clone)]
pub struct GosiComputation {
    /// The employee-side contribution, deducted from net pay.
    pub employee_contribution: Decimal,
    /// The employer-side contribution. Informational; not deducted.
    pub employer_contribution: Decimal,
    /// The audit step recording this computation.
    pub audit_step: AuditStep,
    /// Warnings for lookups that degraded to zero.
    pub warnings: Vec<AuditWarning>,
}

impl GosiComputation {
    fn zero(reasoning: String, input: serde_json::Value, step_number: u32, warnings: Vec<AuditWarning>) -> Self {
        GosiComputation {
            employee_contribution: Decimal::ZERO,
            employer_contribution: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "gosi_contribution".to_string(),
                rule_name: "GOSI Contribution".to_string(),
                input,
                output: serde_json::json!({
                    "employee_contribution": "0",
                    "employer_contribution": "0",
                }),
                reasoning,
            },
            warnings,
        }
    }
}

/// Computes the GOSI contributions for an employee at a work location.
///
/// The contribution is zero when any of the gates fail:
/// - the employee is not subject to GOSI,
/// - the work location is missing or has GOSI disabled (the location gate
///   wins regardless of the employee flag),
/// - the contribution base (GOSI-registered salary, falling back to base
///   salary) is zero,
/// - the employee's nationality cannot be mapped to an ISO code, or the
///   location has no rate entry for it.
///
/// Rate resolution is backward compatible: the employee rate prefers the
/// `employee_rate` field over the legacy single `percentage` field.
///
/// # Arguments
///
/// * `employee` - The employee to compute contributions for
/// * `work_location` - The employee's work location, when configured
/// * `step_number` - The step number for audit trail sequencing
pub fn compute_gosi(
    employee: &Employee,
    work_location: Option<&WorkLocation>,
    step_number: u32,
) -> GosiComputation {
    let input = serde_json::json!({
        "employee_id": employee.id,
        "nationality": employee.nationality,
        "is_subject_to_gosi": employee.is_subject_to_gosi,
        "work_location_id": employee.work_location_id,
        "gosi_base": employee.gosi_base().normalize().to_string(),
    });

    if !employee.is_subject_to_gosi {
        return GosiComputation::zero(
            format!("{} is not subject to GOSI", employee.id),
            input,
            step_number,
            vec![],
        );
    }

    let Some(location) = work_location else {
        return GosiComputation::zero(
            format!("{} has no resolvable work location", employee.id),
            input,
            step_number,
            vec![AuditWarning::new(
                "WORK_LOCATION_MISSING",
                format!(
                    "Employee {} is subject to GOSI but no work location was found",
                    employee.id
                ),
                "medium",
            )],
        );
    };

    if !location.gosi_enabled {
        return GosiComputation::zero(
            format!("GOSI is disabled at work location {}", location.id),
            input,
            step_number,
            vec![],
        );
    }

    let base = employee.gosi_base();
    if base.is_zero() {
        return GosiComputation::zero(
            format!("{} has no GOSI contribution base", employee.id),
            input,
            step_number,
            vec![AuditWarning::new(
                "GOSI_BASE_MISSING",
                format!("Employee {} has a zero GOSI contribution base", employee.id),
                "medium",
            )],
        );
    }

    let Some(iso_code) = iso_country_code(&employee.nationality) else {
        return GosiComputation::zero(
            format!(
                "Nationality '{}' could not be mapped to an ISO code",
                employee.nationality
            ),
            input,
            step_number,
            vec![AuditWarning::new(
                "NATIONALITY_UNMAPPED",
                format!(
                    "Nationality '{}' of employee {} has no ISO code mapping",
                    employee.nationality, employee.id
                ),
                "medium",
            )],
        );
    };

    let Some(rate) = location.rate_for(iso_code) else {
        return GosiComputation::zero(
            format!(
                "Work location {} has no GOSI rate for nationality {}",
                location.id, iso_code
            ),
            input,
            step_number,
            vec![AuditWarning::new(
                "GOSI_RATE_MISSING",
                format!(
                    "Work location {} has no GOSI rate entry for {}",
                    location.id, iso_code
                ),
                "medium",
            )],
        );
    };

    let employee_rate = rate.resolved_employee_rate();
    let employer_rate = rate.resolved_employer_rate();
    let employee_contribution = base * employee_rate / Decimal::ONE_HUNDRED;
    let employer_contribution = base * employer_rate / Decimal::ONE_HUNDRED;

    GosiComputation {
        employee_contribution,
        employer_contribution,
        audit_step: AuditStep {
            step_number,
            rule_id: "gosi_contribution".to_string(),
            rule_name: "GOSI Contribution".to_string(),
            input,
            output: serde_json::json!({
                "iso_code": iso_code,
                "employee_rate": employee_rate.normalize().to_string(),
                "employer_rate": employer_rate.normalize().to_string(),
                "employee_contribution": employee_contribution.normalize().to_string(),
                "employer_contribution": employer_contribution.normalize().to_string(),
            }),
            reasoning: format!(
                "{} x {}% = {} employee, {} x {}% = {} employer",
                base.normalize(),
                employee_rate.normalize(),
                employee_contribution.normalize(),
                base.normalize(),
                employer_rate.normalize(),
                employer_contribution.normalize()
            ),
        },
        warnings: vec![],
    }
}
