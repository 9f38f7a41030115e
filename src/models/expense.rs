//! Expense model and related types.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PersonId;

/// Mapping from person id to that person's owed share of an expense.
pub type Splits = BTreeMap<PersonId, Decimal>;

/// Unique identifier for an expense.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generates a fresh, collision-resistant id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an expense's amount was divided among participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Everyone pays the same share.
    #[default]
    Equal,
    /// Shares were entered by hand.
    Custom,
}

/// Spending category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Restaurants, groceries, takeaway.
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    /// Fuel, tickets, taxis.
    #[serde(rename = "Transportation")]
    Transportation,
    /// General purchases.
    #[serde(rename = "Shopping")]
    Shopping,
    /// Events and leisure.
    #[serde(rename = "Entertainment")]
    Entertainment,
    /// Rent, power, internet.
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    /// Accommodation and trips.
    #[serde(rename = "Travel")]
    Travel,
    /// Medical and pharmacy.
    #[serde(rename = "Healthcare")]
    Healthcare,
    /// Anything else.
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Travel,
        Category::Healthcare,
        Category::Other,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Travel => "Travel",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a shared expense paid by one person and split among several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// Total amount paid. Always positive for validated expenses.
    pub amount: Decimal,
    /// The person who paid.
    pub paid_by: PersonId,
    /// How the amount was divided.
    pub split_type: SplitType,
    /// Each participant's owed share.
    pub splits: Splits,
    /// Spending category.
    #[serde(default)]
    pub category: Category,
    /// When the expense was recorded.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Returns the sum of all split shares.
    pub fn split_total(&self) -> Decimal {
        self.splits.values().copied().sum()
    }

    /// Returns true if the person paid for or shares in this expense.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_engine::models::{Category, Expense, ExpenseId, PersonId, SplitType, Splits};
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let mut splits = Splits::new();
    /// splits.insert(PersonId::from("b"), Decimal::new(10, 0));
    ///
    /// let expense = Expense {
    ///     id: ExpenseId::from("e1"),
    ///     description: "Taxi".to_string(),
    ///     amount: Decimal::new(10, 0),
    ///     paid_by: PersonId::from("a"),
    ///     split_type: SplitType::Custom,
    ///     splits,
    ///     category: Category::Transportation,
    ///     created_at: Utc::now(),
    /// };
    /// assert!(expense.involves(&PersonId::from("a")));
    /// assert!(expense.involves(&PersonId::from("b")));
    /// assert!(!expense.involves(&PersonId::from("c")));
    /// ```
    pub fn involves(&self, person: &PersonId) -> bool {
        &self.paid_by == person || self.splits.contains_key(person)
    }
}
