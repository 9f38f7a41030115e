//! Ledger summary.

use rust_decimal::Decimal;

use super::settlement::resolve;
use super::tolerance::{TOLERANCE, round_to_cents};
use crate::models::{BalanceStatus, Expense, LedgerSummary, PersonBalance, PersonWithTotals};

/// Builds the overview shown after every change to the ledger.
///
/// `people` should come from [`aggregate`](super::aggregate) over the same
/// `expenses`.
pub fn summarize(people: &[PersonWithTotals], expenses: &[Expense]) -> LedgerSummary {
    let balances = people
        .iter()
        .map(|person| {
            let balance = person.balance();
            let status = if balance > TOLERANCE {
                BalanceStatus::GetsBack
            } else if balance < -TOLERANCE {
                BalanceStatus::Owes
            } else {
                BalanceStatus::Settled
            };
            let display_amount = match status {
                BalanceStatus::Settled => Decimal::ZERO,
                _ => round_to_cents(balance.abs()),
            };

            PersonBalance {
                id: person.id.clone(),
                name: person.name.clone(),
                balance,
                status,
                display_amount,
            }
        })
        .collect();

    LedgerSummary {
        total_expenses: expenses.iter().map(|e| e.amount).sum(),
        people_count: people.len(),
        expense_count: expenses.len(),
        balances,
        settlements: resolve(people),
    }
}
