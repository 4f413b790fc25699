//! Spend-over-time series for charting.
//!
//! The chart plots what was spent on each date against a goal line. This
//! module only produces the ordered points; headroom against a goal is
//! derived per point by [`ChartPoint::headroom`] when the chart needs it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{currency_symbol, ChartPoint, Expense, SpendingSeries};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ChartSeriesService;

impl ChartSeriesService {
    pub fn new() -> Self {
        Self
    }

    /// One point per expense, oldest first.
    ///
    /// Same-day expenses stay as separate points in their input order; use
    /// [`ChartSeriesService::daily_totals`] first to collapse them.
    pub fn build_series(&self, expenses: &[Expense], currency_code: &str) -> SpendingSeries {
        let mut points: Vec<ChartPoint> = expenses
            .iter()
            .map(|expense| ChartPoint {
                date: expense.occurred_on,
                amount_spent: expense.amount,
                currency_code: currency_code.to_string(),
            })
            .collect();
        points.sort_by_key(|point| point.date);

        debug!("Built chart series with {} points in {}", points.len(), currency_code);

        SpendingSeries {
            currency_code: currency_code.to_string(),
            currency_symbol: currency_symbol(currency_code).to_string(),
            points,
        }
    }

    /// Sum amounts per distinct date, oldest first
    pub fn daily_totals(&self, expenses: &[Expense]) -> Vec<(NaiveDate, Decimal)> {
        let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for expense in expenses {
            let total = totals.entry(expense.occurred_on).or_insert(Decimal::ZERO);
            *total = total.saturating_add(expense.amount);
        }
        totals.into_iter().collect()
    }

    /// Like [`ChartSeriesService::build_series`] but with one point per date
    pub fn build_daily_series(&self, expenses: &[Expense], currency_code: &str) -> SpendingSeries {
        let points = self
            .daily_totals(expenses)
            .into_iter()
            .map(|(date, amount_spent)| ChartPoint {
                date,
                amount_spent,
                currency_code: currency_code.to_string(),
            })
            .collect();

        SpendingSeries {
            currency_code: currency_code.to_string(),
            currency_symbol: currency_symbol(currency_code).to_string(),
            points,
        }
    }
}
