//! # CSV Storage Module
//!
//! Plain-file storage for the expense tracker, rooted at one data
//! directory:
//!
//! ```text
//! data/
//! ├── expenses.csv            ← ExpenseRepository
//! └── spending_target.yaml    ← TargetRepository
//! ```
//!
//! ## File Format
//!
//! ```csv
//! id,name,occurred_on,amount,currency_code,logged_on
//! 5f0c6a1e-8d0b-4c53-9a55-0b7f1d0a8e21,Groceries,2025-06-14,23.40,GBP,2025-06-14
//! ```
//!
//! Writes go to a temp file first and are renamed into place.

pub mod connection;
pub mod expense_repository;
pub mod target_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
pub use target_repository::TargetRepository;
