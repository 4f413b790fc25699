//! Expense list formatting.
//!
//! Turns raw expenses into display strings for a list or table and parses
//! amount text typed into an entry form. The engines themselves only ever
//! deal in raw decimals and currency codes.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{currency_symbol, Expense, FormattedExpense, Money};
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct ExpenseTableService;

impl ExpenseTableService {
    pub fn new() -> Self {
        Self
    }

    pub fn format_expenses(&self, expenses: &[Expense]) -> Vec<FormattedExpense> {
        expenses.iter().map(|e| self.format_expense(e)).collect()
    }

    pub fn format_expense(&self, expense: &Expense) -> FormattedExpense {
        FormattedExpense {
            id: expense.id,
            name: expense.name.clone(),
            formatted_date: self.format_date(expense.occurred_on),
            formatted_amount: self.format_money(&expense.money()),
            raw_amount: expense.amount,
        }
    }

    /// "June 13, 2025"
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

    /// Symbol plus two decimal places, e.g. "£12.34" or "-$3.00"
    pub fn format_money(&self, money: &Money) -> String {
        let symbol = currency_symbol(&money.currency_code);
        let rounded = money
            .amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if money.amount < Decimal::ZERO && !rounded.is_zero() { "-" } else { "" };
        format!("{}{}{:.2}", sign, symbol, rounded)
    }

    /// Parse amount text from an entry form, ignoring symbols, commas and spaces
    pub fn parse_amount_input(&self, amount_input: &str) -> Result<Decimal> {
        let cleaned: String = amount_input
            .trim()
            .chars()
            .filter(|c| !matches!(c, '£' | '$' | ',' | ' '))
            .collect();

        if cleaned.is_empty() {
            return Err(anyhow!("Amount cannot be empty"));
        }

        Decimal::from_str(&cleaned).map_err(|e| anyhow!("Invalid amount '{}': {}", amount_input.trim(), e))
    }
}
