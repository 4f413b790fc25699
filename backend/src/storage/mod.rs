//! # Storage Module
//!
//! File-backed snapshot storage that feeds the domain layer. The domain
//! never calls into here; the binary (or any other front end) loads a
//! snapshot, hands it to an [`ExpenseBook`](crate::domain::ExpenseBook) and
//! writes it back after changes.

pub mod csv;
pub mod traits;

pub use self::csv::{CsvConnection, ExpenseRepository, TargetRepository};
pub use traits::*;
