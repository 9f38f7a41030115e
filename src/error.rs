//! Error types for the Expense Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`ValidationError`] covers user input rejected by the expense form checks
//! and is meant to be shown to the user verbatim; [`EngineError`] covers
//! everything else the crate can fail on.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculation::round_to_cents;

/// A reason an expense submitted from a form was rejected.
///
/// The `Display` output is the user-facing message.
///
/// # Example
///
/// ```
/// use expense_engine::error::ValidationError;
/// use rust_decimal::Decimal;
///
/// let error = ValidationError::SplitMismatch {
///     split_total: Decimal::new(9, 0),
///     amount: Decimal::new(10, 0),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Split amounts (9.00) must equal the total amount (10.00)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The description was empty or whitespace only.
    #[error("Description is required")]
    EmptyDescription,

    /// The amount was zero or negative.
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    /// No payer was chosen.
    #[error("Please select who paid")]
    NoPayerSelected,

    /// The split shares do not add up to the expense amount.
    #[error(
        "Split amounts ({:.2}) must equal the total amount ({:.2})",
        cents(.split_total),
        cents(.amount)
    )]
    SplitMismatch {
        /// The sum of all split shares.
        split_total: Decimal,
        /// The expense amount.
        amount: Decimal,
    },
}

/// Rounds half away from zero before formatting, as `{:.2}` alone truncates.
fn cents(value: &Decimal) -> Decimal {
    round_to_cents(*value)
}

/// The main error type for the Expense Engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An expense failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A person could not be created from the given input.
    #[error("Invalid person: {message}")]
    InvalidPerson {
        /// A description of what made the input invalid.
        message: String,
    },

    /// No person with the given id exists in the ledger.
    #[error("Person not found: {id}")]
    PersonNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No expense with the given id exists in the ledger.
    #[error("Expense not found: {id}")]
    ExpenseNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A currency has no exchange rate in the rate table.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The currency code.
        code: String,
    },

    /// An exchange rate was zero or negative.
    #[error("Invalid exchange rate for '{code}': {rate}")]
    InvalidRate {
        /// The currency code.
        code: String,
        /// The offending rate.
        rate: Decimal,
    },

    /// No exchange rate table was effective on the given date.
    #[error("No exchange rates effective on {date}")]
    RatesNotFound {
        /// The date the rates were requested for.
        date: NaiveDate,
    },

    /// A ledger snapshot could not be read or written.
    #[error("Ledger snapshot error: {message}")]
    Snapshot {
        /// A description of the serialization error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
