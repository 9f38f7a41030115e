//! Display currency conversion.
//!
//! Conversion only affects how amounts are shown. Balances and settlements
//! are always computed in the ledger's own currency.

use rust_decimal::Decimal;

use super::tolerance::round_to_cents;
use crate::error::EngineResult;
use crate::models::ExchangeRates;

/// Converts an amount from one currency to another for display.
///
/// The amount is first converted to the table's base currency and then to
/// the target currency, and the result is rounded to cents. Converting to
/// the same currency returns the amount unchanged.
///
/// # Errors
///
/// Returns `UnknownCurrency` if either code has no rate, or `InvalidRate` if
/// a rate is zero or negative.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::convert_amount;
/// use expense_engine::models::ExchangeRates;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let rates = ExchangeRates::new(
///     "USD",
///     HashMap::from([("EUR".to_string(), Decimal::new(5, 1))]),
/// );
/// let euros = convert_amount(Decimal::new(10, 0), "USD", "EUR", &rates)?;
/// assert_eq!(euros, Decimal::new(5, 0));
/// # Ok::<(), expense_engine::error::EngineError>(())
/// ```
pub fn convert_amount(
    amount: Decimal,
    from: &str,
    to: &str,
    rates: &ExchangeRates,
) -> EngineResult<Decimal> {
    if from == to {
        return Ok(amount);
    }

    let in_base = amount / rates.rate(from)?;
    let converted = in_base * rates.rate(to)?;

    Ok(round_to_cents(converted))
}
