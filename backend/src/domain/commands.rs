//! Command and result types for changing the expense list.
//!
//! Front ends build these from their own form state and hand them to
//! [`ExpenseBook`](super::ExpenseBook); they never touch the list directly.

pub mod expenses {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use shared::{Expense, ExpenseId};

    /// Input for logging a new expense.
    #[derive(Debug, Clone)]
    pub struct CreateExpenseCommand {
        pub name: String,
        pub occurred_on: NaiveDate,
        pub amount: Decimal,
        /// Falls back to the book's default currency when absent.
        pub currency_code: Option<String>,
        pub logged_on: NaiveDate,
    }

    /// Edit of an existing expense. `None` leaves a field unchanged.
    #[derive(Debug, Clone)]
    pub struct UpdateExpenseCommand {
        pub id: ExpenseId,
        pub name: Option<String>,
        pub occurred_on: Option<NaiveDate>,
        pub amount: Option<Decimal>,
    }

    /// Result of deleting expenses.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DeleteExpensesResult {
        pub deleted: Vec<Expense>,
        pub not_found_ids: Vec<ExpenseId>,
    }

    impl DeleteExpensesResult {
        pub fn deleted_count(&self) -> usize {
            self.deleted.len()
        }
    }
}
