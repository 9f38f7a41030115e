//! Person model and derived totals.
//!
//! A [`Person`] only carries durable identity. [`PersonWithTotals`] is the
//! transient view produced by the balance aggregator.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a person in a ledger.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Generates a fresh, collision-resistant id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a person sharing expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: PersonId,
    /// Display name.
    pub name: String,
}

impl Person {
    /// Creates a person with a freshly generated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_engine::models::Person;
    ///
    /// let alice = Person::new("Alice");
    /// let bob = Person::new("Bob");
    /// assert_ne!(alice.id, bob.id);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PersonId::generate(),
            name: name.into(),
        }
    }

    /// Creates a person with an explicit id.
    pub fn with_id(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A person annotated with how much they paid and how much they owe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonWithTotals {
    /// The person's id.
    pub id: PersonId,
    /// The person's display name.
    pub name: String,
    /// Sum of the amounts of all expenses this person paid.
    pub total_paid: Decimal,
    /// Sum of this person's split shares across all expenses.
    pub total_owes: Decimal,
}

impl PersonWithTotals {
    /// Creates a view with zero totals for the given person.
    pub fn zeroed(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            total_paid: Decimal::ZERO,
            total_owes: Decimal::ZERO,
        }
    }

    /// Returns `total_paid - total_owes`.
    ///
    /// Positive means the person is owed money, negative means they owe.
    ///
    /// # Examples
    ///
    /// ```
    /// use expense_engine::models::{Person, PersonWithTotals};
    /// use rust_decimal::Decimal;
    ///
    /// let mut totals = PersonWithTotals::zeroed(&Person::with_id("a", "Alice"));
    /// totals.total_paid = Decimal::new(100, 0);
    /// totals.total_owes = Decimal::new(50, 0);
    /// assert_eq!(totals.balance(), Decimal::new(50, 0));
    /// ```
    pub fn balance(&self) -> Decimal {
        self.total_paid - self.total_owes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: std::collections::HashSet<PersonId> =
            (0..1000).map(|_| PersonId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_blank_id() {
        assert!(PersonId::from("").is_blank());
        assert!(PersonId::from("  ").is_blank());
        assert!(!PersonId::from("p1").is_blank());
    }

    #[test]
    fn test_person_id_serializes_as_plain_string() {
        let person = Person::with_id("p1", "Alice");
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, r#"{"id":"p1","name":"Alice"}"#);
    }

    #[test]
    fn test_zeroed_totals() {
        let totals = PersonWithTotals::zeroed(&Person::with_id("p1", "Alice"));
        assert_eq!(totals.total_paid, Decimal::ZERO);
        assert_eq!(totals.total_owes, Decimal::ZERO);
        assert_eq!(totals.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_balance_for_debtor() {
        let mut totals = PersonWithTotals::zeroed(&Person::with_id("p1", "Bob"));
        totals.total_owes = Decimal::new(3000, 2);
        assert_eq!(totals.balance(), Decimal::new(-30, 0));
    }
}
