//! Loan installment models.
//!
//! Installments are created at loan disbursal from the principal and either
//! a duration in months or a target per-installment amount. Skipping an
//! installment marks it `skipped` and appends a replacement at the end of
//! the schedule; `paid` is terminal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The lifecycle status of a single installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    /// Not yet settled; eligible for payroll inclusion or skipping.
    Pending,
    /// Settled through a payroll run. Terminal.
    Paid,
    /// Skipped and replaced by an installment at the end of the schedule.
    /// Terminal.
    Skipped,
}

/// One installment of a loan repayment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInstallment {
    /// 1-indexed position in the schedule, in creation order.
    pub sequence: u32,
    /// The date the installment falls due.
    pub due_date: NaiveDate,
    /// The installment amount.
    pub amount: Decimal,
    /// Current lifecycle status.
    pub status: InstallmentStatus,
}

impl LoanInstallment {
    /// Returns true while the installment can still be paid or skipped.
    pub fn is_pending(&self) -> bool {
        self.status == InstallmentStatus::Pending
    }
}
