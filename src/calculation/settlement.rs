//! Settlement resolution.
//!
//! Turns per-person totals into a short list of transfers that brings every
//! balance back to zero.

use rust_decimal::Decimal;
use tracing::debug;

use super::tolerance::{TOLERANCE, round_to_cents};
use crate::models::{PersonWithTotals, Settlement};

/// A creditor or debtor with the magnitude still to be settled.
struct OpenBalance<'a> {
    person: &'a PersonWithTotals,
    remaining: Decimal,
}

/// Produces the transfers that settle all balances.
///
/// People whose balance is within one cent of zero are left out. The rest
/// are split into creditors and debtors, each sorted largest first, and
/// matched greedily: the largest debtor pays the largest creditor as much
/// as either side allows, and whichever side is exhausted moves on.
///
/// Every step fully settles at least one party, so `n` people with nonzero
/// balances need at most `n - 1` transfers. Amounts are rounded to cents.
/// Among equal balances the input order is kept, but callers should not
/// rely on which of several equal parties is paired with whom.
///
/// # Examples
///
/// ```
/// use expense_engine::calculation::resolve;
/// use expense_engine::models::{Person, PersonWithTotals};
/// use rust_decimal::Decimal;
///
/// let mut alice = PersonWithTotals::zeroed(&Person::with_id("a", "Alice"));
/// alice.total_paid = Decimal::new(100, 0);
/// alice.total_owes = Decimal::new(50, 0);
/// let mut bob = PersonWithTotals::zeroed(&Person::with_id("b", "Bob"));
/// bob.total_owes = Decimal::new(50, 0);
///
/// let settlements = resolve(&[alice, bob]);
/// assert_eq!(settlements.len(), 1);
/// assert_eq!(settlements[0].from, "Bob");
/// assert_eq!(settlements[0].to, "Alice");
/// assert_eq!(settlements[0].amount, Decimal::new(50, 0));
/// ```
pub fn resolve(people: &[PersonWithTotals]) -> Vec<Settlement> {
    let mut creditors: Vec<OpenBalance<'_>> = Vec::new();
    let mut debtors: Vec<OpenBalance<'_>> = Vec::new();

    for person in people {
        let balance = person.balance();
        if balance > TOLERANCE {
            creditors.push(OpenBalance {
                person,
                remaining: balance,
            });
        } else if balance < -TOLERANCE {
            debtors.push(OpenBalance {
                person,
                remaining: -balance,
            });
        }
    }

    // Stable sorts, so equal balances keep their input order.
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut settlements = Vec::with_capacity(creditors.len().max(debtors.len()));
    let mut creditor_index = 0;
    let mut debtor_index = 0;

    while creditor_index < creditors.len() && debtor_index < debtors.len() {
        let creditor = &mut creditors[creditor_index];
        let debtor = &mut debtors[debtor_index];

        let amount = creditor.remaining.min(debtor.remaining);

        if amount > TOLERANCE {
            settlements.push(Settlement {
                from: debtor.person.name.clone(),
                to: creditor.person.name.clone(),
                amount: round_to_cents(amount),
                from_id: debtor.person.id.clone(),
                to_id: creditor.person.id.clone(),
            });
        }

        creditor.remaining -= amount;
        debtor.remaining -= amount;

        if creditor.remaining < TOLERANCE {
            creditor_index += 1;
        }
        if debtor.remaining < TOLERANCE {
            debtor_index += 1;
        }
    }

    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        settlements = settlements.len(),
        "Resolved settlements"
    );

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, PersonId};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn with_totals(id: &str, paid: &str, owes: &str) -> PersonWithTotals {
        PersonWithTotals {
            id: PersonId::from(id),
            name: id.to_uppercase(),
            total_paid: dec(paid),
            total_owes: dec(owes),
        }
    }

    /// Net effect of the settlements on each person: incoming minus outgoing.
    fn net_flows(settlements: &[Settlement]) -> HashMap<PersonId, Decimal> {
        let mut flows = HashMap::new();
        for s in settlements {
            *flows.entry(s.to_id.clone()).or_insert(Decimal::ZERO) -= s.amount;
            *flows.entry(s.from_id.clone()).or_insert(Decimal::ZERO) += s.amount;
        }
        flows
    }

    #[test]
    fn test_two_people_one_transfer() {
        let settlements = resolve(&[with_totals("a", "100", "50"), with_totals("b", "0", "50")]);

        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].from, "B");
        assert_eq!(settlements[0].to, "A");
        assert_eq!(settlements[0].amount, dec("50"));
    }

    #[test]
    fn test_three_way_equal_split() {
        let settlements = resolve(&[
            with_totals("a", "90", "30"),
            with_totals("b", "0", "30"),
            with_totals("c", "0", "30"),
        ]);

        assert_eq!(settlements.len(), 2);
        assert!(settlements.iter().all(|s| s.to == "A"));
        assert!(settlements.iter().all(|s| s.amount == dec("30")));
        let mut payers: Vec<&str> = settlements.iter().map(|s| s.from.as_str()).collect();
        payers.sort();
        assert_eq!(payers, vec!["B", "C"]);
    }

    #[test]
    fn test_all_within_tolerance_yields_nothing() {
        let settlements = resolve(&[
            with_totals("a", "10.005", "10"),
            with_totals("b", "10", "10.01"),
            with_totals("c", "5", "5"),
        ]);
        assert!(settlements.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn test_largest_debtor_pays_largest_creditor_first() {
        let settlements = resolve(&[
            with_totals("a", "70", "0"),
            with_totals("b", "30", "0"),
            with_totals("c", "0", "60"),
            with_totals("d", "0", "40"),
        ]);

        assert_eq!(settlements[0].from, "C");
        assert_eq!(settlements[0].to, "A");
        assert_eq!(settlements[0].amount, dec("60"));
        assert_eq!(settlements.len(), 3);
    }

    #[test]
    fn test_amounts_are_rounded_to_cents() {
        let settlements = resolve(&[
            with_totals("a", "100", "33.333333"),
            with_totals("b", "0", "33.333333"),
            with_totals("c", "0", "33.333334"),
        ]);

        assert_eq!(settlements.len(), 2);
        for s in &settlements {
            assert_eq!(s.amount.scale(), 2);
            assert_eq!(s.amount, dec("33.33"));
        }
    }

    #[test]
    fn test_settlements_discharge_balances() {
        let people = vec![
            with_totals("a", "120", "45.50"),
            with_totals("b", "15", "45.50"),
            with_totals("c", "0", "45.50"),
            with_totals("d", "92.50", "45.50"),
            with_totals("e", "0", "45.50"),
        ];
        let settlements = resolve(&people);
        let flows = net_flows(&settlements);

        for person in &people {
            let flow = flows.get(&person.id).copied().unwrap_or(Decimal::ZERO);
            assert!(
                (person.balance() + flow).abs() <= TOLERANCE,
                "{} left with {}",
                person.name,
                person.balance() + flow
            );
        }
        assert!(settlements.len() <= people.len() - 1);
        assert!(settlements.iter().all(|s| s.amount > Decimal::ZERO));
    }

    #[test]
    fn test_one_cent_steps_are_skipped() {
        let people = [
            with_totals("c1", "1.01", "0"),
            with_totals("c2", "0.45", "0"),
            with_totals("c3", "0.05", "0"),
            with_totals("d1", "0", "1.00"),
            with_totals("d2", "0", "0.47"),
            with_totals("d3", "0", "0.04"),
        ];
        let settlements = resolve(&people);

        let pairs: Vec<(&str, &str, Decimal)> = settlements
            .iter()
            .map(|s| (s.from_id.as_str(), s.to_id.as_str(), s.amount))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("d1", "c1", dec("1.00")),
                ("d2", "c2", dec("0.45")),
                ("d3", "c3", dec("0.04")),
            ]
        );

        // d2 sits on both sides of a skipped one-cent step.
        let flows = net_flows(&settlements);
        let left = |id: &str| {
            let person = people.iter().find(|p| p.id.as_str() == id).unwrap();
            person.balance() + flows.get(&person.id).copied().unwrap_or_default()
        };
        assert_eq!(left("d2"), dec("-0.02"));
        assert_eq!(left("c1"), dec("0.01"));
        assert_eq!(left("c3"), dec("0.01"));
    }

    #[test]
    fn test_settled_people_never_appear() {
        let settlements = resolve(&[
            with_totals("a", "50", "0"),
            with_totals("b", "20", "20"),
            with_totals("c", "0", "50"),
        ]);

        assert_eq!(settlements.len(), 1);
        assert!(settlements.iter().all(|s| s.from != "B" && s.to != "B"));
    }

    #[test]
    fn test_input_is_not_modified() {
        let people = vec![with_totals("a", "100", "50"), with_totals("b", "0", "50")];
        let before = people.clone();
        let _ = resolve(&people);
        assert_eq!(people, before);
    }

    #[test]
    fn test_equal_balances_still_fully_settle() {
        let people = vec![
            with_totals("a", "40", "0"),
            with_totals("b", "40", "0"),
            with_totals("c", "0", "40"),
            with_totals("d", "0", "40"),
        ];
        let settlements = resolve(&people);
        let flows = net_flows(&settlements);

        assert_eq!(settlements.len(), 2);
        for person in &people {
            assert!((person.balance() + flows[&person.id]).abs() <= TOLERANCE);
        }
    }

    #[test]
    fn test_settlements_use_display_names_and_ids() {
        let mut creditor = PersonWithTotals::zeroed(&Person::with_id("p1", "Sam"));
        creditor.total_paid = dec("10");
        let mut debtor = PersonWithTotals::zeroed(&Person::with_id("p2", "Sam"));
        debtor.total_owes = dec("10");
        let people = vec![creditor, debtor];

        let settlements = resolve(&people);
        assert_eq!(settlements[0].from_id, PersonId::from("p2"));
        assert_eq!(settlements[0].to_id, PersonId::from("p1"));
        assert_eq!(settlements[0].from, "Sam");
    }
}
