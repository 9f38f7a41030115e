//! Split builders.
//!
//! Produce the share map for an expense from the participants and either
//! an equal division or hand-entered amounts.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::tolerance::{CENT, round_to_cents};
use crate::models::{PersonId, Splits};

/// Divides `amount` equally among `participants`.
///
/// Each share is rounded to cents and the leftover cents are handed out one
/// at a time in participant order, so the shares always add up to `amount`
/// for amounts given in whole cents. Duplicate participants are counted
/// once. No participants gives an empty map.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::equal_splits;
/// use expense_engine::models::PersonId;
/// use rust_decimal::Decimal;
///
/// let ids = vec![PersonId::from("a"), PersonId::from("b"), PersonId::from("c")];
/// let splits = equal_splits(Decimal::new(100, 0), &ids);
///
/// assert_eq!(splits[&ids[0]], Decimal::new(3334, 2));
/// assert_eq!(splits[&ids[1]], Decimal::new(3333, 2));
/// assert_eq!(splits[&ids[2]], Decimal::new(3333, 2));
/// ```
pub fn equal_splits(amount: Decimal, participants: &[PersonId]) -> Splits {
    let mut seen = HashSet::with_capacity(participants.len());
    let unique: Vec<&PersonId> = participants
        .iter()
        .filter(|id| seen.insert(*id))
        .collect();

    let mut splits = Splits::new();
    if unique.is_empty() {
        return splits;
    }

    let count = Decimal::from(unique.len());
    let share = round_to_cents(amount / count);
    let mut leftover = amount - share * count;
    let step = if leftover.is_sign_negative() { -CENT } else { CENT };

    for id in unique {
        let mut portion = share;
        if leftover.abs() >= CENT {
            portion += step;
            leftover -= step;
        }
        splits.insert(id.clone(), portion);
    }

    splits
}

/// Builds a custom split from hand-entered amounts.
///
/// Every participant gets an entry; participants with nothing entered owe
/// zero. Entries for people who are not participants are dropped.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::custom_splits;
/// use expense_engine::models::{PersonId, Splits};
/// use rust_decimal::Decimal;
///
/// let ids = vec![PersonId::from("a"), PersonId::from("b")];
/// let mut entered = Splits::new();
/// entered.insert(PersonId::from("a"), Decimal::new(25, 0));
///
/// let splits = custom_splits(&ids, &entered);
/// assert_eq!(splits[&ids[0]], Decimal::new(25, 0));
/// assert_eq!(splits[&ids[1]], Decimal::ZERO);
/// ```
pub fn custom_splits(participants: &[PersonId], entered: &Splits) -> Splits {
    participants
        .iter()
        .map(|id| {
            let share = entered.get(id).copied().unwrap_or(Decimal::ZERO);
            (id.clone(), share)
        })
        .collect()
}
