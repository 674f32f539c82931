use crate::entity::{DueDate, Fine};
use crate::KernelError;
use error_stack::Report;
use time::{Date, Duration};
use vodca::{AsRefln, Fromln, References};

pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;
pub const DEFAULT_FINE_PER_DAY_CENTS: u64 = 50;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct LoanPeriod(u32);

impl LoanPeriod {
    pub fn new(days: impl Into<u32>) -> Self {
        Self(days.into())
    }
}

impl Default for LoanPeriod {
    fn default() -> Self {
        Self::new(DEFAULT_LOAN_PERIOD_DAYS)
    }
}

/// Cents charged per full day past the due date.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct FineRate(u64);

impl FineRate {
    pub fn new(cents: impl Into<u64>) -> Self {
        Self(cents.into())
    }
}

impl Default for FineRate {
    fn default() -> Self {
        Self::new(DEFAULT_FINE_PER_DAY_CENTS)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct LoanPolicy {
    loan_period: LoanPeriod,
    fine_rate: FineRate,
}

impl LoanPolicy {
    pub fn new(loan_period: LoanPeriod, fine_rate: FineRate) -> Self {
        Self {
            loan_period,
            fine_rate,
        }
    }

    pub fn due_date(&self, today: Date) -> error_stack::Result<DueDate, KernelError> {
        let days = Duration::days(i64::from(self.loan_period.0));
        today.checked_add(days).map(DueDate::new).ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("due date out of range. checked out: {today}"))
        })
    }

    /// Fine accrued by `today`. Only whole calendar days strictly after the due date count.
    pub fn fine(&self, due: &DueDate, today: Date) -> Fine {
        let due: &Date = due.as_ref();
        let overdue = (today - *due).whole_days();
        if overdue <= 0 {
            return Fine::default();
        }
        Fine::new(self.fine_rate.0.saturating_mul(overdue.unsigned_abs()))
    }
}
