//! Core data models for the Expense Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod exchange_rates;
mod expense;
mod person;
mod settlement;
mod summary;

pub use exchange_rates::{DEFAULT_BASE_CURRENCY, ExchangeRates};
pub use expense::{Category, Expense, ExpenseId, SplitType, Splits};
pub use person::{Person, PersonId, PersonWithTotals};
pub use settlement::Settlement;
pub use summary::{BalanceStatus, LedgerSummary, PersonBalance};
