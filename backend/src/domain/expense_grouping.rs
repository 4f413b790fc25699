//! Expense grouping logic for the expense list.
//!
//! Files every expense under exactly one date-relative bucket (Today,
//! Yesterday, This Week, This Month, Last Month, Older) and orders the
//! result for display. Classification is relative to an explicit `today`
//! so callers and tests control the clock.
//!
//! ## Classification
//!
//! Rules are checked in bucket order and the first match wins, so a record
//! from today is never also counted as "This Week". "Last Month" is the
//! calendar month before `today`'s month, not a 30-day window.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{Expense, ExpenseBucket, ExpenseGroup};
use tracing::debug;

/// First day of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

/// Groups expenses into date-relative list sections
#[derive(Debug, Clone, Default)]
pub struct ExpenseGroupingService {
    week_start: WeekStart,
}

impl ExpenseGroupingService {
    /// Create a grouping service with weeks starting on Monday
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week_start(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    /// Partition `expenses` into non-empty buckets in display order.
    ///
    /// Each bucket lists its expenses newest first; records sharing a date
    /// keep their input order.
    pub fn group_by_recency(&self, today: NaiveDate, expenses: &[Expense]) -> Vec<ExpenseGroup> {
        let mut sections: Vec<Vec<Expense>> = vec![Vec::new(); ExpenseBucket::ALL.len()];

        for expense in expenses {
            let bucket = self.classify(today, expense.occurred_on);
            sections[bucket_index(bucket)].push(expense.clone());
        }

        let groups: Vec<ExpenseGroup> = ExpenseBucket::ALL
            .iter()
            .zip(sections)
            .filter(|(_, section)| !section.is_empty())
            .map(|(bucket, mut section)| {
                section.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
                ExpenseGroup {
                    bucket: *bucket,
                    expenses: section,
                }
            })
            .collect();

        debug!(
            "Grouped {} expenses into {} buckets relative to {}",
            expenses.len(),
            groups.len(),
            today
        );
        groups
    }

    /// Decide which bucket a single date falls into
    pub fn classify(&self, today: NaiveDate, occurred_on: NaiveDate) -> ExpenseBucket {
        if occurred_on == today {
            ExpenseBucket::Today
        } else if Some(occurred_on) == today.pred_opt() {
            ExpenseBucket::Yesterday
        } else if self.start_of_week(occurred_on) == self.start_of_week(today) {
            ExpenseBucket::ThisWeek
        } else if (occurred_on.year(), occurred_on.month()) == (today.year(), today.month()) {
            ExpenseBucket::ThisMonth
        } else if (occurred_on.year(), occurred_on.month()) == previous_month(today.year(), today.month()) {
            ExpenseBucket::LastMonth
        } else {
            ExpenseBucket::Older
        }
    }

    /// First day of the week containing `date`
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let offset = match self.week_start {
            WeekStart::Monday => date.weekday().num_days_from_monday(),
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        };
        date - Duration::days(i64::from(offset))
    }
}

fn bucket_index(bucket: ExpenseBucket) -> usize {
    match bucket {
        ExpenseBucket::Today => 0,
        ExpenseBucket::Yesterday => 1,
        ExpenseBucket::ThisWeek => 2,
        ExpenseBucket::ThisMonth => 3,
        ExpenseBucket::LastMonth => 4,
        ExpenseBucket::Older => 5,
    }
}

/// The (year, month) before the given one
fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::Money;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(name: &str, occurred_on: NaiveDate) -> Expense {
        Expense::new(name, occurred_on, Money::new(dec!(1)), occurred_on)
    }

    fn buckets(groups: &[ExpenseGroup]) -> Vec<ExpenseBucket> {
        groups.iter().map(|g| g.bucket).collect()
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let service = ExpenseGroupingService::new();
        assert!(service.group_by_recency(date(2025, 6, 18), &[]).is_empty());
    }

    #[test]
    fn test_classify_each_bucket() {
        // Wednesday 18 June 2025
        let today = date(2025, 6, 18);
        let service = ExpenseGroupingService::new();

        assert_eq!(service.classify(today, date(2025, 6, 18)), ExpenseBucket::Today);
        assert_eq!(service.classify(today, date(2025, 6, 17)), ExpenseBucket::Yesterday);
        assert_eq!(service.classify(today, date(2025, 6, 16)), ExpenseBucket::ThisWeek);
        assert_eq!(service.classify(today, date(2025, 6, 15)), ExpenseBucket::ThisMonth);
        assert_eq!(service.classify(today, date(2025, 6, 1)), ExpenseBucket::ThisMonth);
        assert_eq!(service.classify(today, date(2025, 5, 31)), ExpenseBucket::LastMonth);
        assert_eq!(service.classify(today, date(2025, 5, 1)), ExpenseBucket::LastMonth);
        assert_eq!(service.classify(today, date(2025, 4, 30)), ExpenseBucket::Older);
        assert_eq!(service.classify(today, date(2024, 6, 18)), ExpenseBucket::Older);
    }

    #[test]
    fn test_yesterday_takes_precedence_over_this_week() {
        // Tuesday: yesterday is Monday of the same week
        let today = date(2025, 6, 17);
        let service = ExpenseGroupingService::new();
        assert_eq!(service.classify(today, date(2025, 6, 16)), ExpenseBucket::Yesterday);
    }

    #[test]
    fn test_yesterday_across_month_boundary() {
        let service = ExpenseGroupingService::new();
        assert_eq!(service.classify(date(2025, 3, 1), date(2025, 2, 28)), ExpenseBucket::Yesterday);
        assert_eq!(service.classify(date(2025, 1, 1), date(2024, 12, 31)), ExpenseBucket::Yesterday);
    }

    #[test]
    fn test_this_week_spans_month_boundary() {
        // Thursday 3 July 2025; Monday of that week is 30 June
        let today = date(2025, 7, 3);
        let service = ExpenseGroupingService::new();
        assert_eq!(service.classify(today, date(2025, 6, 30)), ExpenseBucket::ThisWeek);
        assert_eq!(service.classify(today, date(2025, 6, 29)), ExpenseBucket::LastMonth);
    }

    #[test]
    fn test_this_week_spans_year_boundary() {
        // Friday 2 January 2026; week started Monday 29 December 2025
        let today = date(2026, 1, 2);
        let service = ExpenseGroupingService::new();
        assert_eq!(service.classify(today, date(2025, 12, 29)), ExpenseBucket::ThisWeek);
        assert_eq!(service.classify(today, date(2025, 12, 28)), ExpenseBucket::LastMonth);
        assert_eq!(service.classify(today, date(2025, 11, 30)), ExpenseBucket::Older);
    }

    #[test]
    fn test_last_month_uses_calendar_months() {
        let service = ExpenseGroupingService::new();
        // 31 March: the whole of February is last month, even 29+ days back
        let today = date(2025, 3, 31);
        assert_eq!(service.classify(today, date(2025, 2, 1)), ExpenseBucket::LastMonth);
        assert_eq!(service.classify(today, date(2025, 1, 31)), ExpenseBucket::Older);

        // January rolls back to December of the previous year
        let today = date(2025, 1, 20);
        assert_eq!(service.classify(today, date(2024, 12, 5)), ExpenseBucket::LastMonth);
        assert_eq!(service.classify(today, date(2025, 12, 5)), ExpenseBucket::Older);
    }

    #[test]
    fn test_sunday_week_start() {
        // Sunday 15 June 2025
        let today = date(2025, 6, 15);
        let monday_weeks = ExpenseGroupingService::new();
        let sunday_weeks = ExpenseGroupingService::with_week_start(WeekStart::Sunday);

        assert_eq!(monday_weeks.classify(today, date(2025, 6, 10)), ExpenseBucket::ThisWeek);
        assert_eq!(sunday_weeks.classify(today, date(2025, 6, 10)), ExpenseBucket::ThisMonth);
        assert_eq!(sunday_weeks.start_of_week(date(2025, 6, 18)), date(2025, 6, 15));
        assert_eq!(monday_weeks.start_of_week(date(2025, 6, 15)), date(2025, 6, 9));
    }

    #[test]
    fn test_future_dates_are_classified_normally() {
        // Wednesday; Friday of the same week is in the future
        let today = date(2025, 6, 18);
        let service = ExpenseGroupingService::new();
        assert_eq!(service.classify(today, date(2025, 6, 20)), ExpenseBucket::ThisWeek);
        assert_eq!(service.classify(today, date(2025, 6, 28)), ExpenseBucket::ThisMonth);
        assert_eq!(service.classify(today, date(2025, 8, 1)), ExpenseBucket::Older);
    }

    #[test]
    fn test_groups_are_sparse_and_ordered() {
        let today = date(2025, 6, 18);
        let service = ExpenseGroupingService::new();
        let expenses = vec![
            expense("old", date(2024, 1, 1)),
            expense("today", today),
            expense("last month", date(2025, 5, 10)),
        ];

        let groups = service.group_by_recency(today, &expenses);
        assert_eq!(
            buckets(&groups),
            vec![ExpenseBucket::Today, ExpenseBucket::LastMonth, ExpenseBucket::Older]
        );
    }

    #[test]
    fn test_within_bucket_newest_first_and_stable() {
        let today = date(2025, 6, 18);
        let service = ExpenseGroupingService::new();
        let first_on_2nd = expense("first", date(2025, 6, 2));
        let second_on_2nd = expense("second", date(2025, 6, 2));
        let expenses = vec![
            expense("a", date(2025, 6, 1)),
            first_on_2nd.clone(),
            expense("b", date(2025, 6, 10)),
            second_on_2nd.clone(),
        ];

        let groups = service.group_by_recency(today, &expenses);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].bucket, ExpenseBucket::ThisMonth);

        let names: Vec<&str> = groups[0].expenses.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "first", "second", "a"]);
    }

    #[test]
    fn test_every_expense_lands_in_exactly_one_bucket() {
        let today = date(2025, 6, 18);
        let service = ExpenseGroupingService::new();
        let start = date(2025, 1, 1);
        let expenses: Vec<Expense> = (0..240)
            .map(|offset| expense(&format!("e{offset}"), start + Duration::days(offset)))
            .collect();

        let groups = service.group_by_recency(today, &expenses);

        let total: usize = groups.iter().map(|g| g.expenses.len()).sum();
        assert_eq!(total, expenses.len());

        let seen: HashSet<_> = groups.iter().flat_map(|g| g.expenses.iter().map(|e| e.id)).collect();
        assert_eq!(seen.len(), expenses.len());

        let order = buckets(&groups);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(order.len(), ExpenseBucket::ALL.len());

        for group in &groups {
            assert!(!group.expenses.is_empty());
            assert!(group
                .expenses
                .windows(2)
                .all(|pair| pair[0].occurred_on >= pair[1].occurred_on));
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let today = date(2025, 6, 18);
        let service = ExpenseGroupingService::new();
        let expenses = vec![
            expense("x", date(2025, 6, 18)),
            expense("y", date(2025, 6, 17)),
            expense("z", date(2025, 3, 2)),
        ];
        assert_eq!(
            service.group_by_recency(today, &expenses),
            service.group_by_recency(today, &expenses)
        );
    }
}
