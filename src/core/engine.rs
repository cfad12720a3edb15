//! Settlement engine
//!
//! This module provides the `SettlementEngine`, which reduces a set of net
//! balances to a small number of transfers using a greedy matching:
//!
//! 1. Pick the debtor with the most negative balance (lowest index on ties).
//! 2. Among creditors sharing at least one payment mode with that debtor,
//!    pick the one with the largest balance (lowest index on ties).
//! 3. Transfer `min(|debtor balance|, creditor balance)` using the
//!    lexicographically smallest shared mode.
//! 4. Repeat until every balance is zero.
//!
//! Each step drives at least one balance to exactly zero, so a successful
//! run performs at most N−1 steps. If a debtor has no compatible creditor the
//! whole run fails and every transfer computed so far is discarded.

use crate::core::ledger::TransferLedger;
use crate::types::{Amount, Bank, BankIndex, SettlementError, Transfer};
use tracing::{debug, info, warn};

/// Greedy settlement of net balances
///
/// An engine owns its working balances and ledger for exactly one run:
/// [`SettlementEngine::settle`] consumes it, so no caller can observe a
/// partially filled ledger.
#[derive(Debug)]
pub struct SettlementEngine<'a> {
    banks: &'a [Bank],
    balances: Vec<Amount>,
    ledger: TransferLedger,
}

impl<'a> SettlementEngine<'a> {
    /// Create an engine for one settlement run
    ///
    /// # Arguments
    ///
    /// * `banks` - Banks in index order, providing names and payment modes
    /// * `balances` - Net balance per bank; must sum to zero
    ///
    /// # Panics
    ///
    /// Panics if `banks` and `balances` differ in length.
    pub fn new(banks: &'a [Bank], balances: Vec<Amount>) -> Self {
        assert_eq!(
            banks.len(),
            balances.len(),
            "one balance is required per bank"
        );
        debug_assert_eq!(
            balances.iter().map(|&b| i128::from(b)).sum::<i128>(),
            0,
            "net balances must sum to zero"
        );

        SettlementEngine {
            banks,
            ledger: TransferLedger::new(banks.len()),
            balances,
        }
    }

    /// Run the settlement to completion
    ///
    /// # Returns
    ///
    /// * `Ok(TransferLedger)` - every balance reached zero
    /// * `Err(SettlementError::IncompatiblePaymentModes)` - a debtor shares no
    ///   payment mode with any remaining creditor; no ledger is produced
    pub fn settle(mut self) -> Result<TransferLedger, SettlementError> {
        let total = self.balances.len();

        while self.settled_count() < total {
            let Some(debtor) = self.select_debtor() else {
                break;
            };

            let Some((creditor, mode)) = self.select_creditor(debtor) else {
                let name = &self.banks[debtor].name;
                warn!(
                    debtor = %name,
                    balance = self.balances[debtor],
                    discarded = self.ledger.len(),
                    "settlement aborted: no compatible creditor"
                );
                return Err(SettlementError::incompatible_payment_modes(name));
            };

            let amount = self.balances[debtor]
                .saturating_neg()
                .min(self.balances[creditor]);

            debug!(
                debtor = %self.banks[debtor].name,
                creditor = %self.banks[creditor].name,
                amount,
                mode,
                "recording transfer"
            );

            self.ledger.record(
                debtor,
                creditor,
                Transfer {
                    amount,
                    mode: mode.to_string(),
                },
            );
            self.balances[debtor] += amount;
            self.balances[creditor] -= amount;
        }

        info!(transfers = self.ledger.len(), "settlement complete");
        Ok(self.ledger)
    }

    /// Number of banks whose working balance is zero
    fn settled_count(&self) -> usize {
        self.balances.iter().filter(|&&b| b == 0).count()
    }

    /// The bank with the most negative balance, lowest index on ties
    fn select_debtor(&self) -> Option<BankIndex> {
        let mut selected: Option<BankIndex> = None;
        for (i, &balance) in self.balances.iter().enumerate() {
            if balance < 0 && selected.map_or(true, |s| balance < self.balances[s]) {
                selected = Some(i);
            }
        }
        selected
    }

    /// The compatible creditor with the largest balance, and the mode to use
    ///
    /// Candidates must have a positive balance, differ from the debtor and
    /// share at least one payment mode with it. Ties keep the lowest index.
    fn select_creditor(&self, debtor: BankIndex) -> Option<(BankIndex, &'a str)> {
        let banks = self.banks;
        let debtor_bank = &banks[debtor];
        let mut selected: Option<(BankIndex, &'a str)> = None;

        for (i, &balance) in self.balances.iter().enumerate() {
            if i == debtor || balance <= 0 {
                continue;
            }
            if selected.is_some_and(|(s, _)| balance <= self.balances[s]) {
                continue;
            }
            if let Some(mode) = banks[i].first_common_mode(debtor_bank) {
                selected = Some((i, mode));
            }
        }
        selected
    }
}

/// Settle `balances` among `banks` in a single call
///
/// Convenience wrapper around [`SettlementEngine`].
pub fn settle(banks: &[Bank], balances: Vec<Amount>) -> Result<TransferLedger, SettlementError> {
    SettlementEngine::new(banks, balances).settle()
}
