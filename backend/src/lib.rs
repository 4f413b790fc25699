//! # Expense Tracker Backend
//!
//! Non-UI logic for the expense tracker:
//! - **domain**: the accounting engines and the in-memory expense book
//! - **storage**: file-backed expense and spending target snapshots
//! - **config**: YAML settings
//!
//! ## Architecture
//!
//! ```text
//! Front end (CLI, desktop, ...)
//!     ↓
//! Backend (load snapshot, apply commands, save)
//!     ↓
//! Domain (ExpenseBook → grouping / balance / chart engines)
//! ```
//!
//! Storage sits beside the domain rather than under it: the book is filled
//! from a snapshot and written back by the caller.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use chrono::NaiveDate;
use shared::ExpenseOverview;
use std::path::Path;
use tracing::info;

use crate::config::ExpenseTrackerConfig;
use crate::domain::ExpenseBook;
use crate::storage::{CsvConnection, ExpenseRepository, ExpenseStorage, TargetRepository, TargetStorage};

/// An expense book bound to the data directory it was loaded from
pub struct Backend {
    pub book: ExpenseBook,
    expense_repository: ExpenseRepository,
    target_repository: TargetRepository,
}

impl Backend {
    /// Load the snapshot stored in `data_directory`
    pub fn open(config: &ExpenseTrackerConfig, data_directory: &Path) -> Result<Self> {
        info!("Opening expense data in {}", data_directory.display());
        let connection = CsvConnection::new(data_directory)?;
        let expense_repository = ExpenseRepository::new(connection.clone());
        let target_repository = TargetRepository::new(connection);

        let expenses = expense_repository.load_expenses()?;
        let target = target_repository.load_target()?;
        let book = config.expense_book().with_snapshot(expenses, target);

        Ok(Self {
            book,
            expense_repository,
            target_repository,
        })
    }

    pub fn overview(&self, today: NaiveDate) -> ExpenseOverview {
        self.book.overview(today)
    }

    /// Write the book's current target and expenses back to disk.
    ///
    /// Each file is replaced atomically, but the pair is not. The target goes
    /// first; if it fails the expense file is left untouched.
    pub fn save(&self) -> Result<()> {
        match self.book.target() {
            Some(target) => self.target_repository.save_target(target)?,
            None => {
                self.target_repository.clear_target()?;
            }
        }
        self.expense_repository.save_expenses(self.book.expenses())?;
        Ok(())
    }
}
