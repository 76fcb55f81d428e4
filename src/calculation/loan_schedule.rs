//! Loan installment scheduling.
//!
//! Schedules are derived from the principal and either a duration in
//! months or a target per-installment amount. Amounts are rounded to the
//! currency's minor unit (2 decimal places, half-even); the final
//! installment absorbs the rounding remainder so the schedule always sums
//! to the principal exactly. Skipping an installment marks it `skipped`
//! and appends a replacement of the same amount after the schedule's last
//! due date; the total owed never changes.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{InstallmentStatus, LoanInstallment};

/// Decimal places installment amounts are rounded to.
const MINOR_UNIT_DP: u32 = 2;

/// Derives a schedule from the principal and a duration in months.
///
/// The per-installment amount is `principal / months` rounded half-even to
/// two decimal places; the final installment absorbs the remainder.
/// Installments fall due monthly starting one month after `start_date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hrflow_engine::calculation::schedule_by_duration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let schedule = schedule_by_duration(Decimal::from_str("1200").unwrap(), 12, start).unwrap();
///
/// assert_eq!(schedule.len(), 12);
/// let total: Decimal = schedule.iter().map(|i| i.amount).sum();
/// assert_eq!(total, Decimal::from_str("1200").unwrap());
/// ```
pub fn schedule_by_duration(
    principal: Decimal,
    months: u32,
    start_date: NaiveDate,
) -> EngineResult<Vec<LoanInstallment>> {
    if principal <= Decimal::ZERO {
        return Err(EngineError::InvalidLoanTerms {
            message: "principal must be positive".to_string(),
        });
    }
    if months == 0 {
        return Err(EngineError::InvalidLoanTerms {
            message: "duration must be at least one month".to_string(),
        });
    }

    let per_installment = (principal / Decimal::from(months)).round_dp(MINOR_UNIT_DP);
    build_schedule(principal, per_installment, months, start_date)
}

/// Derives a schedule from the principal and a target installment amount.
///
/// The installment count is `ceil(principal / amount)`; the final
/// installment is `principal - amount * (count - 1)` so the schedule sums
/// to the principal exactly. An amount at or above the principal yields a
/// single installment of the full principal.
pub fn schedule_by_amount(
    principal: Decimal,
    installment_amount: Decimal,
    start_date: NaiveDate,
) -> EngineResult<Vec<LoanInstallment>> {
    if principal <= Decimal::ZERO {
        return Err(EngineError::InvalidLoanTerms {
            message: "principal must be positive".to_string(),
        });
    }
    if installment_amount <= Decimal::ZERO {
        return Err(EngineError::InvalidLoanTerms {
            message: "installment amount must be positive".to_string(),
        });
    }

    let count = (principal / installment_amount)
        .ceil()
        .to_u32()
        .ok_or(EngineError::InvalidLoanTerms {
            message: "installment count overflows".to_string(),
        })?;

    build_schedule(principal, installment_amount, count, start_date)
}

fn build_schedule(
    principal: Decimal,
    per_installment: Decimal,
    count: u32,
    start_date: NaiveDate,
) -> EngineResult<Vec<LoanInstallment>> {
    let mut schedule = Vec::with_capacity(count as usize);

    for sequence in 1..=count {
        let amount = if sequence == count {
            // The last installment absorbs the rounding remainder.
            principal - per_installment * Decimal::from(count - 1)
        } else {
            per_installment
        };

        let due_date = start_date
            .checked_add_months(Months::new(sequence))
            .ok_or(EngineError::InvalidLoanTerms {
                message: "due date out of range".to_string(),
            })?;

        schedule.push(LoanInstallment {
            sequence,
            due_date,
            amount,
            status: InstallmentStatus::Pending,
        });
    }

    Ok(schedule)
}

/// Skips a pending installment, appending its replacement at the end of
/// the schedule.
///
/// The skipped installment keeps its amount for reconciliation but no
/// longer counts toward the amount due; the replacement carries the same
/// amount and falls due one month after the schedule's last due date.
/// Skipping a `paid` or already `skipped` installment is an
/// `InvalidTransition` error; an unknown sequence is `InvalidLoanTerms`.
pub fn skip_installment(
    schedule: &mut Vec<LoanInstallment>,
    sequence: u32,
) -> EngineResult<()> {
    let last_due_date = schedule
        .iter()
        .map(|installment| installment.due_date)
        .max()
        .ok_or(EngineError::InvalidLoanTerms {
            message: "schedule has no installments".to_string(),
        })?;
    let next_sequence = schedule
        .iter()
        .map(|installment| installment.sequence)
        .max()
        .unwrap_or(0)
        + 1;

    let target = schedule
        .iter_mut()
        .find(|installment| installment.sequence == sequence)
        .ok_or(EngineError::InvalidLoanTerms {
            message: format!("no installment with sequence {}", sequence),
        })?;

    match target.status {
        InstallmentStatus::Pending => {}
        InstallmentStatus::Paid => {
            return Err(EngineError::InvalidTransition {
                from: "paid".to_string(),
                action: "skip".to_string(),
            });
        }
        InstallmentStatus::Skipped => {
            return Err(EngineError::InvalidTransition {
                from: "skipped".to_string(),
                action: "skip".to_string(),
            });
        }
    }

    target.status = InstallmentStatus::Skipped;
    let amount = target.amount;

    let due_date =
        last_due_date
            .checked_add_months(Months::new(1))
            .ok_or(EngineError::InvalidLoanTerms {
                message: "due date out of range".to_string(),
            })?;

    schedule.push(LoanInstallment {
        sequence: next_sequence,
        due_date,
        amount,
        status: InstallmentStatus::Pending,
    });

    Ok(())
}
