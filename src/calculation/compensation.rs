//! Compensation summary assembly.
//!
//! Combines line-amount resolution and GOSI computation into the full pay
//! breakdown for one employee: gross pay, totals, contributions, and net
//! pay, together with the audit steps and warnings accumulated along the
//! way.

use rust_decimal::Decimal;

use crate::calculation::gosi::compute_gosi;
use crate::calculation::line_amount::resolve_line_amount;
use crate::models::{
    AuditStep, AuditWarning, CompensationBreakdown, Employee, LineKind, PayAssignment,
    PayLineItem, WorkLocation,
};

/// The outcome of a compensation calculation, before being wrapped in the
/// result envelope by the caller.
#[derive(Debug, Clone)]
pub struct CompensationOutcome {
    /// The aggregated pay breakdown.
    pub breakdown: CompensationBreakdown,
    /// The individual resolved allowance/deduction lines.
    pub lines: Vec<PayLineItem>,
    /// Audit steps in application order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings from degraded lookups.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the full pay breakdown for one employee.
///
/// Deterministic over its inputs and free of side effects:
/// `gross_pay = base_salary + total_allowances` and
/// `net_pay = gross_pay - total_deductions - gosi_deduction`. Net pay is
/// never floored at zero; a negative result is surfaced with a
/// `NEGATIVE_NET_PAY` warning because it reflects a data or configuration
/// problem upstream.
pub fn calculate_compensation(
    employee: &Employee,
    allowances: &[PayAssignment],
    deductions: &[PayAssignment],
    work_location: Option<&WorkLocation>,
) -> CompensationOutcome {
    let mut lines = Vec::with_capacity(allowances.len() + deductions.len());
    let mut warnings = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let base_salary = employee.base_salary;

    let total_allowances = resolve_lines(
        allowances,
        LineKind::Allowance,
        base_salary,
        &mut lines,
        &mut warnings,
    );
    audit_steps.push(totals_audit_step(
        step_number,
        "allowance_total",
        "Allowance Total",
        allowances.len(),
        base_salary,
        total_allowances,
    ));
    step_number += 1;

    let total_deductions = resolve_lines(
        deductions,
        LineKind::Deduction,
        base_salary,
        &mut lines,
        &mut warnings,
    );
    audit_steps.push(totals_audit_step(
        step_number,
        "deduction_total",
        "Deduction Total",
        deductions.len(),
        base_salary,
        total_deductions,
    ));
    step_number += 1;

    let gosi = compute_gosi(employee, work_location, step_number);
    audit_steps.push(gosi.audit_step.clone());
    warnings.extend(gosi.warnings.clone());
    step_number += 1;

    let gross_pay = base_salary + total_allowances;
    let net_pay = gross_pay - total_deductions - gosi.employee_contribution;

    if net_pay < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            "NEGATIVE_NET_PAY",
            format!(
                "Net pay for employee {} is negative ({})",
                employee.id,
                net_pay.normalize()
            ),
            "high",
        ));
    }

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
            "gosi_deduction": gosi.employee_contribution.normalize().to_string(),
        }),
        output: serde_json::json!({
            "net_pay": net_pay.normalize().to_string(),
        }),
        reasoning: format!(
            "{} - {} - {} = {}",
            gross_pay.normalize(),
            total_deductions.normalize(),
            gosi.employee_contribution.normalize(),
            net_pay.normalize()
        ),
    });

    CompensationOutcome {
        breakdown: CompensationBreakdown {
            gross_pay,
            total_allowances,
            total_deductions,
            gosi_deduction: gosi.employee_contribution,
            employer_gosi_contribution: gosi.employer_contribution,
            net_pay,
            currency: employee.salary_currency.clone(),
        },
        lines,
        audit_steps,
        warnings,
    }
}

fn resolve_lines(
    assignments: &[PayAssignment],
    kind: LineKind,
    base_salary: Decimal,
    lines: &mut Vec<PayLineItem>,
    warnings: &mut Vec<AuditWarning>,
) -> Decimal {
    let mut total = Decimal::ZERO;
    for assignment in assignments {
        let resolved = resolve_line_amount(assignment, base_salary);
        total += resolved.amount;
        if let Some(warning) = resolved.warning {
            warnings.push(warning);
        }
        lines.push(PayLineItem {
            kind,
            label: assignment.label.clone(),
            source: resolved.source,
            amount: resolved.amount,
        });
    }
    total
}

fn totals_audit_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    line_count: usize,
    base_salary: Decimal,
    total: Decimal,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "line_count": line_count,
            "base_salary": base_salary.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
        }),
        reasoning: format!("{} line(s) summed to {}", line_count, total.normalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountType, GosiNationalityRate, PayTemplate, PercentageBase};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(base: &str) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            manager_id: None,
            nationality: "Saudi Arabia".to_string(),
            base_salary: dec(base),
            gosi_registered_salary: None,
            is_subject_to_gosi: true,
            work_location_id: Some("riyadh_hq".to_string()),
            salary_currency: "SAR".to_string(),
        }
    }

    fn flat(label: &str, amount: &str) -> PayAssignment {
        PayAssignment {
            label: label.to_string(),
            custom_amount: None,
            template: Some(PayTemplate {
                name: label.to_string(),
                amount_type: AmountType::Flat,
                amount: dec(amount),
                percentage_of: None,
            }),
        }
    }

    fn percentage(label: &str, percent: &str) -> PayAssignment {
        PayAssignment {
            label: label.to_string(),
            custom_amount: None,
            template: Some(PayTemplate {
                name: label.to_string(),
                amount_type: AmountType::Percentage,
                amount: dec(percent),
                percentage_of: Some(PercentageBase::BaseSalary),
            }),
        }
    }

    fn gosi_disabled_location() -> WorkLocation {
        WorkLocation {
            id: "dubai_branch".to_string(),
            name: "Dubai Branch".to_string(),
            gosi_enabled: false,
            gosi_nationality_rates: HashMap::new(),
        }
    }

    fn gosi_enabled_location() -> WorkLocation {
        let mut rates = HashMap::new();
        rates.insert(
            "SA".to_string(),
            GosiNationalityRate {
                employee_rate: Some(dec("9.75")),
                employer_rate: Some(dec("11.75")),
                percentage: None,
            },
        );
        WorkLocation {
            id: "riyadh_hq".to_string(),
            name: "Riyadh Headquarters".to_string(),
            gosi_enabled: true,
            gosi_nationality_rates: rates,
        }
    }

    /// CP-001: the reference scenario - base 5000, flat 300, 5% deduction, GOSI off
    #[test]
    fn test_reference_scenario() {
        let outcome = calculate_compensation(
            &employee("5000"),
            &[flat("Transport Allowance", "300")],
            &[percentage("Pension Top-up", "5")],
            Some(&gosi_disabled_location()),
        );

        assert_eq!(outcome.breakdown.gross_pay, dec("5300"));
        assert_eq!(outcome.breakdown.total_allowances, dec("300"));
        assert_eq!(outcome.breakdown.total_deductions, dec("250"));
        assert_eq!(outcome.breakdown.gosi_deduction, dec("0"));
        assert_eq!(outcome.breakdown.net_pay, dec("5050"));
        assert_eq!(outcome.breakdown.currency, "SAR");
        assert!(outcome.warnings.is_empty());
    }

    /// CP-002: GOSI deduction flows into net pay
    #[test]
    fn test_gosi_flows_into_net_pay() {
        let outcome = calculate_compensation(
            &employee("5000"),
            &[],
            &[],
            Some(&gosi_enabled_location()),
        );

        assert_eq!(outcome.breakdown.gross_pay, dec("5000"));
        assert_eq!(outcome.breakdown.gosi_deduction, dec("487.50"));
        assert_eq!(outcome.breakdown.employer_gosi_contribution, dec("587.50"));
        assert_eq!(outcome.breakdown.net_pay, dec("4512.50"));
    }

    /// CP-003: negative net pay is surfaced, not clamped
    #[test]
    fn test_negative_net_pay_is_surfaced() {
        let outcome = calculate_compensation(
            &employee("1000"),
            &[],
            &[flat("Oversized Deduction", "1500")],
            Some(&gosi_disabled_location()),
        );

        assert_eq!(outcome.breakdown.net_pay, dec("-500"));
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.code == "NEGATIVE_NET_PAY"));
    }

    /// CP-004: line items carry kind, source, and label
    #[test]
    fn test_line_items_describe_resolution() {
        let mut custom = flat("Housing Allowance", "1000");
        custom.custom_amount = Some(dec("1250"));

        let outcome = calculate_compensation(
            &employee("5000"),
            &[custom, percentage("Transport Allowance", "10")],
            &[flat("Parking", "150")],
            Some(&gosi_disabled_location()),
        );

        assert_eq!(outcome.lines.len(), 3);
        assert_eq!(outcome.lines[0].kind, LineKind::Allowance);
        assert_eq!(outcome.lines[0].source, crate::models::LineSource::Custom);
        assert_eq!(outcome.lines[0].amount, dec("1250"));
        assert_eq!(outcome.lines[1].source, crate::models::LineSource::Percentage);
        assert_eq!(outcome.lines[1].amount, dec("500"));
        assert_eq!(outcome.lines[2].kind, LineKind::Deduction);
        assert_eq!(outcome.lines[2].label, "Parking");
    }

    /// CP-005: degraded line warnings propagate to the outcome
    #[test]
    fn test_degraded_line_warnings_propagate() {
        let unsupported = PayAssignment {
            label: "Odd Allowance".to_string(),
            custom_amount: None,
            template: Some(PayTemplate {
                name: "Odd Allowance".to_string(),
                amount_type: AmountType::Percentage,
                amount: dec("5"),
                percentage_of: Some(PercentageBase::Unsupported),
            }),
        };

        let outcome = calculate_compensation(
            &employee("5000"),
            &[unsupported],
            &[],
            Some(&gosi_disabled_location()),
        );

        assert_eq!(outcome.breakdown.total_allowances, dec("0"));
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.code == "UNSUPPORTED_PERCENTAGE_BASE"));
    }

    /// CP-006: audit steps cover totals, GOSI, and net pay in order
    #[test]
    fn test_audit_steps_are_sequenced() {
        let outcome = calculate_compensation(
            &employee("5000"),
            &[flat("Transport Allowance", "300")],
            &[],
            Some(&gosi_enabled_location()),
        );

        let rule_ids: Vec<&str> = outcome
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["allowance_total", "deduction_total", "gosi_contribution", "net_pay"]
        );
        let step_numbers: Vec<u32> = outcome.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4]);
    }

    /// CP-007: no work location degrades GOSI but still renders a summary
    #[test]
    fn test_missing_location_still_renders() {
        let outcome = calculate_compensation(&employee("5000"), &[], &[], None);

        assert_eq!(outcome.breakdown.gosi_deduction, dec("0"));
        assert_eq!(outcome.breakdown.net_pay, dec("5000"));
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.code == "WORK_LOCATION_MISSING"));
    }
}
