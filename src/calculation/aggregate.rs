//! Balance aggregation.
//!
//! Reduces a list of people and a list of expenses into per-person totals
//! of what each person paid and what each person owes.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Expense, Person, PersonId, PersonWithTotals};

/// Computes `total_paid` and `total_owes` for every person.
///
/// Each expense adds its amount to the payer's `total_paid`, and each split
/// share to that participant's `total_owes`. The output keeps the order of
/// `people` and the inputs are never modified.
///
/// References to ids that are not in `people` contribute nothing. Removing
/// a person is expected to remove the expenses that mention them before the
/// next call, so such references only show up when the caller's lists are
/// out of sync.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::aggregate;
/// use expense_engine::models::{Category, Expense, ExpenseId, Person, PersonId, SplitType, Splits};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let people = vec![Person::with_id("a", "Alice"), Person::with_id("b", "Bob")];
/// let mut splits = Splits::new();
/// splits.insert(PersonId::from("a"), Decimal::new(50, 0));
/// splits.insert(PersonId::from("b"), Decimal::new(50, 0));
/// let expense = Expense {
///     id: ExpenseId::from("e1"),
///     description: "Dinner".to_string(),
///     amount: Decimal::new(100, 0),
///     paid_by: PersonId::from("a"),
///     split_type: SplitType::Equal,
///     splits,
///     category: Category::FoodAndDining,
///     created_at: Utc::now(),
/// };
///
/// let totals = aggregate(&people, &[expense]);
/// assert_eq!(totals[0].total_paid, Decimal::new(100, 0));
/// assert_eq!(totals[0].total_owes, Decimal::new(50, 0));
/// assert_eq!(totals[1].total_owes, Decimal::new(50, 0));
/// ```
pub fn aggregate(people: &[Person], expenses: &[Expense]) -> Vec<PersonWithTotals> {
    let mut totals: Vec<PersonWithTotals> = people.iter().map(PersonWithTotals::zeroed).collect();

    // First occurrence wins if the caller passes duplicate ids.
    let mut index: HashMap<&PersonId, usize> = HashMap::with_capacity(people.len());
    for (position, person) in people.iter().enumerate() {
        index.entry(&person.id).or_insert(position);
    }

    for expense in expenses {
        match index.get(&expense.paid_by) {
            Some(&position) => totals[position].total_paid += expense.amount,
            None => debug!(
                expense_id = %expense.id,
                payer_id = %expense.paid_by,
                "Skipping payment from unknown person"
            ),
        }

        for (person_id, share) in &expense.splits {
            match index.get(person_id) {
                Some(&position) => totals[position].total_owes += *share,
                None => debug!(
                    expense_id = %expense.id,
                    person_id = %person_id,
                    "Skipping split share for unknown person"
                ),
            }
        }
    }

    totals
}
