//! Configuration types for the expense ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{DEFAULT_BASE_CURRENCY, ExchangeRates};

/// General ledger settings from `ledger.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    /// A label for the group sharing expenses.
    pub name: String,
    /// The currency amounts are displayed in by default.
    pub default_currency: String,
    /// The currency exchange rates are quoted against.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_base_currency() -> String {
    DEFAULT_BASE_CURRENCY.to_string()
}

/// Exchange rates effective from a given date, from `rates/<date>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// Map of currency code to units per one unit of the base currency.
    pub rates: HashMap<String, Decimal>,
}

/// The complete ledger configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Ledger settings.
    settings: LedgerSettings,
    /// Rate tables by effective date (sorted oldest first).
    rate_tables: Vec<RateTable>,
}

impl LedgerConfig {
    /// Creates a new LedgerConfig from its component parts.
    pub fn new(settings: LedgerSettings, rate_tables: Vec<RateTable>) -> Self {
        let mut sorted = rate_tables;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            settings,
            rate_tables: sorted,
        }
    }

    /// Returns the ledger settings.
    pub fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    /// Returns all rate tables, oldest first.
    pub fn rate_tables(&self) -> &[RateTable] {
        &self.rate_tables
    }

    /// Builds the exchange rates effective on `date`.
    ///
    /// Returns `None` if every table starts after `date`.
    pub fn exchange_rates_on(&self, date: NaiveDate) -> Option<ExchangeRates> {
        self.rate_tables
            .iter()
            .rfind(|table| table.effective_date <= date)
            .map(|table| self.to_exchange_rates(table))
    }

    /// Builds the exchange rates from the most recent table.
    pub fn latest_exchange_rates(&self) -> Option<ExchangeRates> {
        self.rate_tables
            .last()
            .map(|table| self.to_exchange_rates(table))
    }

    fn to_exchange_rates(&self, table: &RateTable) -> ExchangeRates {
        ExchangeRates::new(self.settings.base_currency.clone(), table.rates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(date: (i32, u32, u32), eur: i64) -> RateTable {
        RateTable {
            effective_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            rates: HashMap::from([("EUR".to_string(), Decimal::new(eur, 2))]),
        }
    }

    fn settings() -> LedgerSettings {
        LedgerSettings {
            name: "Trip".to_string(),
            default_currency: "USD".to_string(),
            base_currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_tables_sorted_oldest_first() {
        let config = LedgerConfig::new(settings(), vec![table((2025, 7, 1), 90), table((2025, 1, 1), 92)]);
        assert_eq!(
            config.rate_tables()[0].effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_exchange_rates_on_picks_latest_effective() {
        let config = LedgerConfig::new(settings(), vec![table((2025, 1, 1), 92), table((2025, 7, 1), 90)]);

        let march = config
            .exchange_rates_on(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .unwrap();
        assert_eq!(march.rates["EUR"], Decimal::new(92, 2));

        let july = config
            .exchange_rates_on(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            .unwrap();
        assert_eq!(july.rates["EUR"], Decimal::new(90, 2));
        assert_eq!(july.base, "USD");
    }

    #[test]
    fn test_exchange_rates_before_first_table() {
        let config = LedgerConfig::new(settings(), vec![table((2025, 1, 1), 92)]);
        assert!(config
            .exchange_rates_on(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .is_none());
    }

    #[test]
    fn test_base_currency_defaults_to_usd() {
        let settings: LedgerSettings =
            serde_yaml::from_str("name: Flat\ndefault_currency: EUR\n").unwrap();
        assert_eq!(settings.base_currency, "USD");
    }
}
