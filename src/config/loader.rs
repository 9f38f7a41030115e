//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ExchangeRates;

use super::types::{LedgerConfig, LedgerSettings, RateTable};

/// Loads and provides access to ledger configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── ledger.yaml          # Name, default and base currency
/// └── rates/
///     └── 2025-01-01.yaml  # Exchange rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use expense_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Display currency: {}", loader.settings().default_currency);
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let rates = loader.rates_for(date)?;
/// println!("EUR per USD: {}", rates.rate("EUR")?);
/// # Ok::<(), expense_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LedgerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `ledger.yaml` is missing, any file contains
    /// invalid YAML, or the `rates` directory is missing or has no tables.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<LedgerSettings>(&path.join("ledger.yaml"))?;
        let rate_tables = Self::load_rate_tables(&path.join("rates"))?;

        debug!(
            path = %path.display(),
            rate_tables = rate_tables.len(),
            "Loaded ledger configuration"
        );

        Ok(Self {
            config: LedgerConfig::new(settings, rate_tables),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate tables from the rates directory.
    fn load_rate_tables(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tables.push(Self::load_yaml::<RateTable>(&path)?);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying ledger configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the ledger settings.
    pub fn settings(&self) -> &LedgerSettings {
        self.config.settings()
    }

    /// Gets the exchange rates effective on a given date.
    ///
    /// Returns `RatesNotFound` if no rate table starts on or before `date`.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<ExchangeRates> {
        self.config
            .exchange_rates_on(date)
            .ok_or(EngineError::RatesNotFound { date })
    }

    /// Gets the most recent exchange rates.
    pub fn latest_rates(&self) -> ExchangeRates {
        // `load` rejects directories without rate tables.
        self.config.latest_exchange_rates().unwrap_or_default()
    }
}
