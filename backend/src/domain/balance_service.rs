//! Balance projection for the expense tracker.
//!
//! Answers "how much of my allowance since I started tracking is left?".
//! The allowance accrues daily from the earliest expense on record up to
//! `today`, regardless of gaps in between, and everything spent so far is
//! subtracted from it:
//!
//! ```text
//! projected_balance = daily_allowance × days_since_earliest − total_expenses
//! ```
//!
//! When every expense is dated today no allowance has accrued yet, so the
//! projected balance is simply the negated total.
//!
//! Stored amounts are not bounded, so the sums saturate at the `Decimal`
//! limits rather than panicking.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{BalanceMetrics, Expense};
use tracing::{debug, warn};

/// Service responsible for running totals and balance projection
#[derive(Debug, Clone, Default)]
pub struct BalanceService;

impl BalanceService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the metrics snapshot for an expense set
    pub fn project(&self, expenses: &[Expense], daily_allowance: Decimal, today: NaiveDate) -> BalanceMetrics {
        let days_since_earliest = self.days_since_earliest(expenses, today);
        let total_expenses = self.total_expenses(expenses);
        let accrued = daily_allowance
            .checked_mul(Decimal::from(days_since_earliest))
            .unwrap_or_else(|| {
                warn!("Accrued allowance overflowed after {} days, saturating", days_since_earliest);
                daily_allowance.saturating_mul(Decimal::from(days_since_earliest))
            });
        let projected_balance = accrued.checked_sub(total_expenses).unwrap_or_else(|| {
            warn!("Projected balance overflowed, saturating");
            accrued.saturating_sub(total_expenses)
        });

        debug!(
            "Projected balance {} = {} × {} days − {}",
            projected_balance, daily_allowance, days_since_earliest, total_expenses
        );

        BalanceMetrics {
            days_since_earliest,
            total_expenses,
            projected_balance,
        }
    }

    /// Whole days from the earliest expense to `today`.
    ///
    /// Zero for an empty set. An earliest expense dated after `today` would
    /// give a negative count; it is clamped to zero.
    pub fn days_since_earliest(&self, expenses: &[Expense], today: NaiveDate) -> u32 {
        let Some(earliest) = expenses.iter().map(|e| e.occurred_on).min() else {
            return 0;
        };

        let days = today.signed_duration_since(earliest).num_days();
        if days < 0 {
            warn!(
                "Earliest expense on {} is after {}, treating elapsed days as 0",
                earliest, today
            );
            return 0;
        }
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Sum of all amounts, without currency conversion
    pub fn total_expenses(&self, expenses: &[Expense]) -> Decimal {
        expenses.iter().fold(Decimal::ZERO, |total, expense| {
            total.checked_add(expense.amount).unwrap_or_else(|| {
                warn!("Expense total overflowed at {}, saturating", expense.id);
                total.saturating_add(expense.amount)
            })
        })
    }
}
