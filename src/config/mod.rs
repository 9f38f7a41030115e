//! Configuration loading for the Expense Engine.
//!
//! This module loads ledger settings and dated exchange-rate tables from a
//! directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use expense_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded ledger: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LedgerConfig, LedgerSettings, RateTable};
