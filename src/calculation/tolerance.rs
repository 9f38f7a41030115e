//! Shared rounding and tolerance policy.
//!
//! Every comparison against "close enough to zero" in the engine goes
//! through this module so aggregation, settlement, validation and the
//! summary view agree on the same threshold.

use rust_decimal::{Decimal, RoundingStrategy};

/// Amounts whose magnitude is at or below this value are treated as zero.
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// The smallest currency unit used when distributing amounts.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Returns true if the amount is within [`TOLERANCE`] of zero.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::is_settled;
/// use rust_decimal::Decimal;
///
/// assert!(is_settled(Decimal::new(1, 2)));
/// assert!(is_settled(Decimal::new(-5, 3)));
/// assert!(!is_settled(Decimal::new(2, 2)));
/// ```
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= TOLERANCE
}

/// Returns true if two amounts differ by no more than [`TOLERANCE`].
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    is_settled(a - b)
}

/// Rounds an amount to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_cents(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// assert_eq!(round_to_cents(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tolerance_is_one_cent() {
        assert_eq!(TOLERANCE, dec("0.01"));
        assert_eq!(CENT, dec("0.01"));
    }

    #[test]
    fn test_is_settled_boundaries() {
        assert!(is_settled(Decimal::ZERO));
        assert!(is_settled(dec("0.01")));
        assert!(is_settled(dec("-0.01")));
        assert!(!is_settled(dec("0.0101")));
        assert!(!is_settled(dec("-0.0101")));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(dec("10.00"), dec("9.99")));
        assert!(!approx_eq(dec("10.00"), dec("9.98")));
    }

    #[test]
    fn test_round_to_cents_midpoint() {
        assert_eq!(round_to_cents(dec("0.005")), dec("0.01"));
        assert_eq!(round_to_cents(dec("33.3333")), dec("33.33"));
        assert_eq!(round_to_cents(dec("2.675")), dec("2.68"));
    }
}
