//! Shared expense balance and settlement engine.
//!
//! This crate tracks who paid for what within a small group, works out each
//! person's totals, and recommends the fewest transfers that settle every
//! balance.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
