//! Calculation logic for the Expense Engine.
//!
//! This module contains the pure functions the ledger is built on: balance
//! aggregation, settlement resolution, expense validation, split building,
//! the summary view, and display currency conversion. None of them hold
//! state; they are called again whenever the people or expenses change.

mod aggregate;
mod currency;
mod settlement;
mod splits;
mod summary;
mod tolerance;
mod validation;

pub use aggregate::aggregate;
pub use currency::convert_amount;
pub use settlement::resolve;
pub use splits::{custom_splits, equal_splits};
pub use summary::summarize;
pub use tolerance::{CENT, TOLERANCE, approx_eq, is_settled, round_to_cents};
pub use validation::validate_expense;
