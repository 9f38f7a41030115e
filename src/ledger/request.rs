//! Input types for ledger changes.
//!
//! A [`NewExpense`] is what an expense form submits: everything except the
//! id and timestamp, which the ledger assigns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{custom_splits, equal_splits};
use crate::models::{Category, PersonId, SplitType, Splits};

/// An expense as submitted, before it is validated and recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    /// What the money was spent on.
    pub description: String,
    /// Total amount paid.
    pub amount: Decimal,
    /// The person who paid, if one was selected.
    #[serde(default)]
    pub paid_by: Option<PersonId>,
    /// How the amount was divided.
    #[serde(default)]
    pub split_type: SplitType,
    /// Each participant's owed share.
    pub splits: Splits,
    /// Spending category.
    #[serde(default)]
    pub category: Category,
}

impl NewExpense {
    /// Creates an expense split equally among `participants`.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_engine::ledger::NewExpense;
    /// use expense_engine::models::{Category, PersonId, SplitType};
    /// use rust_decimal::Decimal;
    ///
    /// let people = vec![PersonId::from("a"), PersonId::from("b")];
    /// let expense = NewExpense::equal(
    ///     "Groceries",
    ///     Decimal::new(30, 0),
    ///     PersonId::from("a"),
    ///     &people,
    ///     Category::FoodAndDining,
    /// );
    /// assert_eq!(expense.split_type, SplitType::Equal);
    /// assert_eq!(expense.splits[&people[1]], Decimal::new(15, 0));
    /// ```
    pub fn equal(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: PersonId,
        participants: &[PersonId],
        category: Category,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by: Some(paid_by),
            split_type: SplitType::Equal,
            splits: equal_splits(amount, participants),
            category,
        }
    }

    /// Creates an expense with hand-entered shares for `participants`.
    ///
    /// Participants without an entry owe nothing.
    pub fn custom(
        description: impl Into<String>,
        amount: Decimal,
        paid_by: PersonId,
        participants: &[PersonId],
        entered: &Splits,
        category: Category,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by: Some(paid_by),
            split_type: SplitType::Custom,
            splits: custom_splits(participants, entered),
            category,
        }
    }
}
