//! Summary view models.
//!
//! These types back the "who gets back / who owes" overview of a ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PersonId, Settlement};

/// Where a person stands once all expenses are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Paid more than their share.
    GetsBack,
    /// Paid less than their share.
    Owes,
    /// Within tolerance of even.
    Settled,
}

/// One person's line in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBalance {
    /// The person's id.
    pub id: PersonId,
    /// The person's display name.
    pub name: String,
    /// Signed balance (`total_paid - total_owes`).
    pub balance: Decimal,
    /// Whether the person gets money back, owes, or is even.
    pub status: BalanceStatus,
    /// Absolute balance rounded to cents, zero when settled.
    pub display_amount: Decimal,
}

/// Overview of a ledger: group totals, per-person balances and settlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// Number of people in the group.
    pub people_count: usize,
    /// Number of recorded expenses.
    pub expense_count: usize,
    /// Per-person balances in input order.
    pub balances: Vec<PersonBalance>,
    /// Transfers that settle every balance.
    pub settlements: Vec<Settlement>,
}

impl LedgerSummary {
    /// Returns true if nobody owes anybody.
    pub fn is_all_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}
