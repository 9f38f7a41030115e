//! Settlement output record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PersonId;

/// A recommended transfer from a debtor to a creditor.
///
/// Settlements are never stored; they are recomputed from the current
/// balances every time they are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Display name of the person paying.
    pub from: String,
    /// Display name of the person receiving.
    pub to: String,
    /// Amount to transfer, positive and rounded to cents.
    pub amount: Decimal,
    /// Id of the person paying.
    pub from_id: PersonId,
    /// Id of the person receiving.
    pub to_id: PersonId,
}
