//! Bank-related types for the Cash Flow Minimizer
//!
//! This module defines the participating [`Bank`] and the validated
//! [`BankDirectory`] that assigns each bank a stable index.

use super::error::SettlementError;
use super::transaction::BankIndex;
use std::collections::{BTreeSet, HashMap};

/// A participant in the settlement
///
/// Banks are immutable identity records. Their net balances live in a
/// separate working array owned by the settlement engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    /// Unique bank name
    pub name: String,

    /// Payment modes this bank can send or receive through
    ///
    /// Kept ordered so that the first shared mode between two banks is
    /// always the lexicographically smallest one.
    pub modes: BTreeSet<String>,
}

impl Bank {
    /// Create a new bank
    ///
    /// Mode identifiers are trimmed; empty identifiers are ignored.
    ///
    /// # Arguments
    ///
    /// * `name` - The bank name
    /// * `modes` - Payment modes supported by the bank
    pub fn new<I, S>(name: impl Into<String>, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Bank {
            name: name.into(),
            modes: modes
                .into_iter()
                .map(|mode| mode.as_ref().trim().to_string())
                .filter(|mode| !mode.is_empty())
                .collect(),
        }
    }

    /// Whether this bank supports the given payment mode
    pub fn supports(&self, mode: &str) -> bool {
        self.modes.contains(mode)
    }

    /// The lexicographically smallest payment mode shared with `other`
    ///
    /// Returns `None` when the two banks have no mode in common.
    pub fn first_common_mode<'a>(&'a self, other: &Bank) -> Option<&'a str> {
        self.modes
            .iter()
            .find(|mode| other.modes.contains(*mode))
            .map(String::as_str)
    }
}

/// Validated, indexed list of banks
///
/// Guarantees at least one bank, unique names and a non-empty mode set for
/// every bank. Indices follow input order.
#[derive(Debug, Clone)]
pub struct BankDirectory {
    banks: Vec<Bank>,
    index: HashMap<String, BankIndex>,
}

impl BankDirectory {
    /// Validate banks and build the name index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `banks` is empty
    /// - two banks share a name
    /// - a bank has no payment modes
    pub fn new(banks: Vec<Bank>) -> Result<Self, SettlementError> {
        if banks.is_empty() {
            return Err(SettlementError::NoParties);
        }

        let mut index = HashMap::with_capacity(banks.len());
        for (i, bank) in banks.iter().enumerate() {
            if bank.modes.is_empty() {
                return Err(SettlementError::no_payment_modes(&bank.name));
            }
            if index.insert(bank.name.clone(), i).is_some() {
                return Err(SettlementError::duplicate_party(&bank.name));
            }
        }

        Ok(BankDirectory { banks, index })
    }

    /// Look up the index of a bank by exact name
    pub fn index_of(&self, name: &str) -> Option<BankIndex> {
        self.index.get(name).copied()
    }

    /// Get a bank by index
    pub fn get(&self, index: BankIndex) -> Option<&Bank> {
        self.banks.get(index)
    }

    /// Number of banks
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Always false for a validated directory; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// All banks in index order
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }
}
