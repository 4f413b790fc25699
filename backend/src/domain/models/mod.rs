//! Domain models and the validation rules attached to them.

pub mod expense;

pub use expense::*;
