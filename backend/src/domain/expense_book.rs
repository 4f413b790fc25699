//! In-memory owner of the expense list.
//!
//! The book holds the one mutable copy of the user's expenses and the
//! active spending target. Every add, edit or delete goes through it, and
//! callers ask for a fresh [`ExpenseOverview`] afterwards; nothing is cached
//! or updated incrementally.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{Expense, ExpenseId, ExpenseOverview, SpendingTarget, DEFAULT_CURRENCY_CODE};
use tracing::info;

use crate::domain::commands::expenses::{CreateExpenseCommand, DeleteExpensesResult, UpdateExpenseCommand};
use crate::domain::models::{validate_amount, validate_name, ExpenseValidationError};
use crate::domain::{BalanceService, ChartSeriesService, ExpenseGroupingService};

#[derive(Debug, thiserror::Error)]
pub enum ExpenseBookError {
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),
    #[error("Expense {0} not found")]
    ExpenseNotFound(ExpenseId),
}

#[derive(Debug, Clone)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
    target: Option<SpendingTarget>,
    default_currency_code: String,
    grouping_service: ExpenseGroupingService,
    balance_service: BalanceService,
    chart_service: ChartSeriesService,
}

impl Default for ExpenseBook {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_CODE, ExpenseGroupingService::new())
    }
}

impl ExpenseBook {
    pub fn new(default_currency_code: impl Into<String>, grouping_service: ExpenseGroupingService) -> Self {
        Self {
            expenses: Vec::new(),
            target: None,
            default_currency_code: default_currency_code.into(),
            grouping_service,
            balance_service: BalanceService::new(),
            chart_service: ChartSeriesService::new(),
        }
    }

    /// Start from a previously stored snapshot
    pub fn with_snapshot(mut self, expenses: Vec<Expense>, target: Option<SpendingTarget>) -> Self {
        self.expenses = expenses;
        self.target = target;
        self
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn target(&self) -> Option<&SpendingTarget> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: Option<SpendingTarget>) {
        match &target {
            Some(t) => info!("Spending target set to {} {} {}", t.amount(), t.currency_code(), t.period()),
            None => info!("Spending target cleared"),
        }
        self.target = target;
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Validate and append a new expense
    pub fn add(&mut self, command: CreateExpenseCommand) -> Result<Expense, ExpenseBookError> {
        let name = validate_name(&command.name)?;
        let amount = validate_amount(command.amount)?;
        let currency_code = command
            .currency_code
            .unwrap_or_else(|| self.default_currency_code.clone());

        let expense = Expense::new(
            name,
            command.occurred_on,
            shared::Money::with_currency(amount, currency_code),
            command.logged_on,
        );

        info!("Added expense {} '{}' on {}", expense.id, expense.name, expense.occurred_on);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Edit an expense in place, keeping its identity
    pub fn update(&mut self, command: UpdateExpenseCommand) -> Result<Expense, ExpenseBookError> {
        let name = command.name.as_deref().map(validate_name).transpose()?;
        let amount = command.amount.map(validate_amount).transpose()?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == command.id)
            .ok_or(ExpenseBookError::ExpenseNotFound(command.id))?;

        if let Some(name) = name {
            expense.name = name;
        }
        if let Some(occurred_on) = command.occurred_on {
            expense.occurred_on = occurred_on;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }

        info!("Updated expense {}", expense.id);
        Ok(expense.clone())
    }

    /// Remove every listed expense that exists; report the ids that did not
    pub fn delete(&mut self, ids: &[ExpenseId]) -> DeleteExpensesResult {
        let (deleted, kept): (Vec<Expense>, Vec<Expense>) =
            std::mem::take(&mut self.expenses).into_iter().partition(|e| ids.contains(&e.id));
        self.expenses = kept;

        let not_found_ids: Vec<ExpenseId> = ids
            .iter()
            .filter(|id| !deleted.iter().any(|e| e.id == **id))
            .copied()
            .collect();

        info!("Deleted {} expenses, {} not found", deleted.len(), not_found_ids.len());
        DeleteExpensesResult { deleted, not_found_ids }
    }

    /// Daily allowance of the active target, zero when none is set
    pub fn daily_allowance(&self) -> Decimal {
        self.target
            .as_ref()
            .map(SpendingTarget::daily_allowance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Currency the overview is reported in: the target's, else the default
    pub fn reporting_currency(&self) -> &str {
        self.target
            .as_ref()
            .map(SpendingTarget::currency_code)
            .unwrap_or(self.default_currency_code.as_str())
    }

    /// Recompute every engine output for the current snapshot
    pub fn overview(&self, today: NaiveDate) -> ExpenseOverview {
        let daily_allowance = self.daily_allowance();
        ExpenseOverview {
            today,
            daily_allowance,
            metrics: self.balance_service.project(&self.expenses, daily_allowance, today),
            groups: self.grouping_service.group_by_recency(today, &self.expenses),
            series: self.chart_service.build_series(&self.expenses, self.reporting_currency()),
        }
    }
}
