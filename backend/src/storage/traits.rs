//! # Storage Traits
//!
//! Abstractions over where expense snapshots and spending targets live, so
//! front ends can swap the file-backed store for something else.

use anyhow::Result;
use shared::{Expense, SpendingTarget};

/// Whole-snapshot access to the expense list
pub trait ExpenseStorage: Send + Sync {
    /// Load every stored expense. An absent store is an empty list.
    fn load_expenses(&self) -> Result<Vec<Expense>>;

    /// Replace the stored list with `expenses`
    fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
}

/// Access to the single active spending target
pub trait TargetStorage: Send + Sync {
    fn load_target(&self) -> Result<Option<SpendingTarget>>;

    fn save_target(&self, target: &SpendingTarget) -> Result<()>;

    /// Remove the stored target. Returns false when there was none.
    fn clear_target(&self) -> Result<bool>;
}
