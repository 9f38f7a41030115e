//! Exchange rate table used for display conversion.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The currency the rate tables are quoted against when none is configured.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Exchange rates quoted against a base currency.
///
/// A rate of `0.92` for `EUR` with base `USD` means one US dollar buys
/// 0.92 euros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// The currency every rate is relative to.
    pub base: String,
    /// Map of currency code to units per one unit of `base`.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_CURRENCY.to_string(),
            rates: HashMap::new(),
        }
    }
}

impl ExchangeRates {
    /// Creates a rate table for the given base currency.
    pub fn new(base: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }

    /// Returns the rate for a currency code.
    ///
    /// The base currency always has rate 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_engine::models::ExchangeRates;
    /// use rust_decimal::Decimal;
    /// use std::collections::HashMap;
    ///
    /// let rates = ExchangeRates::new(
    ///     "USD",
    ///     HashMap::from([("EUR".to_string(), Decimal::new(92, 2))]),
    /// );
    /// assert_eq!(rates.rate("USD").unwrap(), Decimal::ONE);
    /// assert_eq!(rates.rate("EUR").unwrap(), Decimal::new(92, 2));
    /// assert!(rates.rate("JPY").is_err());
    /// ```
    pub fn rate(&self, code: &str) -> EngineResult<Decimal> {
        if code == self.base {
            return Ok(Decimal::ONE);
        }

        let rate = self
            .rates
            .get(code)
            .copied()
            .ok_or_else(|| EngineError::UnknownCurrency {
                code: code.to_string(),
            })?;

        if rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                code: code.to_string(),
                rate,
            });
        }

        Ok(rate)
    }

    /// Returns true if the table can convert to and from `code`.
    pub fn supports(&self, code: &str) -> bool {
        self.rate(code).is_ok()
    }
}
