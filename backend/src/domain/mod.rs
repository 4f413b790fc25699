//! # Domain Module
//!
//! Business logic for the expense tracker. Nothing in here touches the
//! filesystem or reads the clock; `today` and every expense snapshot are
//! passed in by the caller.
//!
//! ## Module Organization
//!
//! - **expense_grouping**: date-relative list sections (Today, Yesterday, ...)
//! - **balance_service**: running total and projected remaining balance
//! - **chart_series**: spend-over-time points for the goal chart
//! - **expense_table**: display strings and amount parsing for list views
//! - **expense_book**: the mutable expense list and full overview
//! - **commands**: inputs and results for changing the list
//! - **models**: validation rules for expense input
//!
//! The three engines (grouping, balance, chart) are independent of each
//! other and keep no state between calls.

pub mod balance_service;
pub mod chart_series;
pub mod commands;
pub mod expense_book;
pub mod expense_grouping;
pub mod expense_table;
pub mod models;

pub use balance_service::*;
pub use chart_series::*;
pub use expense_book::*;
pub use expense_grouping::*;
pub use expense_table::*;
