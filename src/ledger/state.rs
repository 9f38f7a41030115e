//! Ledger state.
//!
//! The [`Ledger`] holds the canonical people and expense lists for one
//! group. It is a plain value owned by the caller; every derived view is
//! recomputed from the lists by the functions in [`crate::calculation`].

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::{aggregate, convert_amount, resolve, summarize, validate_expense};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult, ValidationError};
use crate::models::{
    DEFAULT_BASE_CURRENCY, ExchangeRates, Expense, ExpenseId, LedgerSummary, Person, PersonId,
    PersonWithTotals, Settlement,
};

use super::request::NewExpense;

/// People and expenses for one group, plus display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    people: Vec<Person>,
    expenses: Vec<Expense>,
    currency: String,
    #[serde(default)]
    exchange_rates: ExchangeRates,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            expenses: Vec::new(),
            currency: DEFAULT_BASE_CURRENCY.to_string(),
            exchange_rates: ExchangeRates::default(),
        }
    }
}

impl Ledger {
    /// Creates an empty ledger displaying amounts in US dollars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger using the configured display currency and
    /// the most recent exchange rates.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self {
            currency: config.settings().default_currency.clone(),
            exchange_rates: config.latest_rates(),
            ..Self::default()
        }
    }

    /// Returns the people in the order they were added.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the expenses in the order they were added.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Returns the display currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the exchange rates used for display conversion.
    pub fn exchange_rates(&self) -> &ExchangeRates {
        &self.exchange_rates
    }

    /// Looks up a person by id.
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Adds a person and returns their new id.
    ///
    /// The name is trimmed; a blank name is rejected.
    pub fn add_person(&mut self, name: &str) -> EngineResult<PersonId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidPerson {
                message: "name is required".to_string(),
            });
        }

        let person = Person::new(name);
        let id = person.id.clone();
        info!(person_id = %id, name = %name, "Person added");
        self.people.push(person);
        Ok(id)
    }

    /// Removes a person together with every expense they paid for or share in.
    pub fn remove_person(&mut self, id: &PersonId) -> EngineResult<Person> {
        let position = self
            .people
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| EngineError::PersonNotFound { id: id.to_string() })?;

        let person = self.people.remove(position);
        let before = self.expenses.len();
        self.expenses.retain(|expense| !expense.involves(id));

        info!(
            person_id = %id,
            expenses_removed = before - self.expenses.len(),
            "Person removed"
        );
        Ok(person)
    }

    /// Validates and records an expense, returning its new id.
    ///
    /// Besides the form checks, the payer and every split participant must
    /// be people in this ledger.
    pub fn add_expense(&mut self, new_expense: NewExpense) -> EngineResult<ExpenseId> {
        if let Err(err) = validate_expense(
            &new_expense.description,
            new_expense.amount,
            new_expense.paid_by.as_ref(),
            &new_expense.splits,
            &self.people,
        ) {
            warn!(error = %err, "Expense rejected");
            return Err(err.into());
        }

        let Some(paid_by) = new_expense.paid_by else {
            return Err(ValidationError::NoPayerSelected.into());
        };

        for id in std::iter::once(&paid_by).chain(new_expense.splits.keys()) {
            if self.person(id).is_none() {
                warn!(person_id = %id, "Expense references unknown person");
                return Err(EngineError::PersonNotFound { id: id.to_string() });
            }
        }

        let expense = Expense {
            id: ExpenseId::generate(),
            description: new_expense.description.trim().to_string(),
            amount: new_expense.amount,
            paid_by,
            split_type: new_expense.split_type,
            splits: new_expense.splits,
            category: new_expense.category,
            created_at: Utc::now(),
        };
        let id = expense.id.clone();

        info!(
            expense_id = %id,
            amount = %expense.amount,
            payer_id = %expense.paid_by,
            participants = expense.splits.len(),
            "Expense added"
        );
        self.expenses.push(expense);
        Ok(id)
    }

    /// Removes an expense.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> EngineResult<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| EngineError::ExpenseNotFound { id: id.to_string() })?;

        info!(expense_id = %id, "Expense removed");
        Ok(self.expenses.remove(position))
    }

    /// Sets the display currency.
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
        info!(currency = %self.currency, "Display currency changed");
    }

    /// Replaces the exchange rates used for display conversion.
    pub fn set_exchange_rates(&mut self, rates: ExchangeRates) {
        info!(base = %rates.base, currencies = rates.rates.len(), "Exchange rates updated");
        self.exchange_rates = rates;
    }

    /// Clears all people and expenses and restores the default currency.
    ///
    /// The result equals [`Ledger::default`]: a ledger built with
    /// [`Ledger::from_config`] goes back to US dollars and an empty rate
    /// table. Call `from_config` again to start over with the configured
    /// settings.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("Ledger reset");
    }

    /// Returns every person with their paid and owed totals.
    pub fn person_totals(&self) -> Vec<PersonWithTotals> {
        aggregate(&self.people, &self.expenses)
    }

    /// Returns the transfers that settle every balance.
    pub fn settlements(&self) -> Vec<Settlement> {
        resolve(&self.person_totals())
    }

    /// Returns the group overview.
    pub fn summary(&self) -> LedgerSummary {
        summarize(&self.person_totals(), &self.expenses)
    }

    /// Converts an amount from `from` into the display currency.
    pub fn to_display_currency(&self, amount: Decimal, from: &str) -> EngineResult<Decimal> {
        convert_amount(amount, from, &self.currency, &self.exchange_rates)
    }

    /// Serializes the ledger to JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|e| EngineError::Snapshot {
            message: e.to_string(),
        })
    }

    /// Restores a ledger from JSON produced by [`Ledger::to_json`].
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Snapshot {
            message: e.to_string(),
        })
    }
}
