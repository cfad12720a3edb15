//! Transaction-related types for the Cash Flow Minimizer
//!
//! This module defines the raw debts collected from the user, the payload of a
//! single ledger cell, and the named transfer instructions handed to the
//! presentation layer.

use serde::Serialize;
use std::fmt;

/// Position of a bank inside a [`BankDirectory`](super::BankDirectory)
///
/// Indices are assigned in input order and stay stable for a whole run.
pub type BankIndex = usize;

/// Monetary amount in whole currency units
///
/// Signed so that net balances (negative = debtor) share the same type as
/// the amounts they are computed from.
pub type Amount = i64;

/// A single debt as entered by the user
///
/// Names are resolved against the bank directory when the debt matrix is
/// built. Unknown names cause the transaction to be dropped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    /// Name of the bank that owes money
    pub debtor: String,

    /// Name of the bank that is owed money
    pub creditor: String,

    /// Amount owed (must be strictly positive)
    pub amount: Amount,
}

impl RawTransaction {
    /// Create a new raw transaction
    pub fn new(debtor: impl Into<String>, creditor: impl Into<String>, amount: Amount) -> Self {
        RawTransaction {
            debtor: debtor.into(),
            creditor: creditor.into(),
            amount,
        }
    }
}

/// Payload of one populated ledger cell
///
/// The ledger is indexed by (debtor, creditor), so the parties are implied
/// by the cell position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Amount paid, always strictly positive
    pub amount: Amount,

    /// Payment mode supported by both parties
    pub mode: String,
}

/// A finalized transfer instruction with resolved bank names
///
/// This is what the presentation layer consumes: one entry per populated
/// ledger cell, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferEntry {
    /// Paying bank
    pub debtor: String,

    /// Receiving bank
    pub creditor: String,

    /// Amount paid
    pub amount: Amount,

    /// Payment mode used for the transfer
    pub mode: String,
}

impl fmt::Display for TransferEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {} via {}",
            self.debtor, self.creditor, self.amount, self.mode
        )
    }
}
