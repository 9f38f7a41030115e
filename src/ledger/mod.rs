//! Caller-owned ledger state for the Expense Engine.
//!
//! This module provides the [`Ledger`] that holds a group's people and
//! expenses, and the [`NewExpense`] input type an expense form submits.

mod request;
mod state;

pub use request::NewExpense;
pub use state::Ledger;
