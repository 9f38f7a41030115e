//! Expense input validation.
//!
//! Checks the fields of an expense form before the expense is recorded.

use rust_decimal::Decimal;

use super::tolerance::approx_eq;
use crate::error::ValidationError;
use crate::models::{Person, PersonId, Splits};

/// Validates expense form data.
///
/// Checks run in order and the first failure is returned:
/// 1. the description must not be blank
/// 2. the amount must be greater than zero
/// 3. a payer must be selected
/// 4. the split shares must add up to the amount, within one cent
///
/// Split keys are not checked against `people`; the form only offers the
/// current people as choices.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::validate_expense;
/// use expense_engine::error::ValidationError;
/// use expense_engine::models::{Person, PersonId, Splits};
/// use rust_decimal::Decimal;
///
/// let people = vec![Person::with_id("a", "Alice")];
/// let payer = PersonId::from("a");
/// let mut splits = Splits::new();
/// splits.insert(payer.clone(), Decimal::new(10, 0));
///
/// assert_eq!(
///     validate_expense("", Decimal::new(10, 0), Some(&payer), &splits, &people),
///     Err(ValidationError::EmptyDescription)
/// );
/// assert!(validate_expense("Lunch", Decimal::new(10, 0), Some(&payer), &splits, &people).is_ok());
/// ```
pub fn validate_expense(
    description: &str,
    amount: Decimal,
    paid_by: Option<&PersonId>,
    splits: &Splits,
    _people: &[Person],
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }

    if paid_by.is_none_or(PersonId::is_blank) {
        return Err(ValidationError::NoPayerSelected);
    }

    let split_total: Decimal = splits.values().copied().sum();
    if !approx_eq(split_total, amount) {
        return Err(ValidationError::SplitMismatch {
            split_total,
            amount,
        });
    }

    Ok(())
}
