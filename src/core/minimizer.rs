//! Cash flow minimization pipeline
//!
//! `CashFlowMinimizer` ties the core together for one set of banks:
//! raw transactions → [`DebtMatrix`] → net balances → [`SettlementEngine`]
//! → [`TransferLedger`].

use crate::core::balance::net_balances;
use crate::core::debt_matrix::{DebtMatrix, DroppedTransaction};
use crate::core::engine::SettlementEngine;
use crate::core::ledger::TransferLedger;
use crate::types::{Amount, Bank, BankDirectory, RawTransaction, SettlementError, TransferEntry};
use tracing::info;

/// Result of a successful settlement run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Net balance of each bank before settlement, in bank index order
    pub balances: Vec<Amount>,

    /// The populated transfer grid
    pub ledger: TransferLedger,

    /// Named transfer instructions, row-major
    pub entries: Vec<TransferEntry>,

    /// Transactions dropped because they named an unknown bank
    pub dropped: Vec<DroppedTransaction>,
}

/// Non-error outcomes of a minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// Debts were settled; the ledger may be empty if everything netted out
    Settled(Settlement),

    /// No transactions were supplied, so there was nothing to settle
    NoTransactions,
}

/// Minimizes the number of transfers needed to settle debts among banks
#[derive(Debug, Clone)]
pub struct CashFlowMinimizer {
    directory: BankDirectory,
}

impl CashFlowMinimizer {
    /// Create a minimizer for a validated set of banks
    ///
    /// # Errors
    ///
    /// Returns an error if the banks are empty, contain a duplicate name, or
    /// a bank without payment modes.
    pub fn new(banks: Vec<Bank>) -> Result<Self, SettlementError> {
        Ok(CashFlowMinimizer {
            directory: BankDirectory::new(banks)?,
        })
    }

    /// The banks participating in this minimizer
    pub fn directory(&self) -> &BankDirectory {
        &self.directory
    }

    /// Settle `transactions` with as few transfers as the greedy policy finds
    ///
    /// # Returns
    ///
    /// * `Ok(SettlementOutcome::NoTransactions)` - `transactions` is empty
    /// * `Ok(SettlementOutcome::Settled(_))` - every balance was settled
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a transaction amount is not positive or amounts overflow
    /// - some debtor shares no payment mode with any remaining creditor
    ///   (`IncompatiblePaymentModes`); no partial ledger is returned
    pub fn minimize(
        &self,
        transactions: &[RawTransaction],
    ) -> Result<SettlementOutcome, SettlementError> {
        if transactions.is_empty() {
            info!("no transactions to settle");
            return Ok(SettlementOutcome::NoTransactions);
        }

        let matrix = DebtMatrix::from_transactions(&self.directory, transactions)?;
        let balances = net_balances(&matrix);

        let ledger = SettlementEngine::new(self.directory.banks(), balances.clone()).settle()?;
        let entries = ledger.entries(&self.directory);

        info!(
            banks = self.directory.len(),
            transactions = transactions.len(),
            dropped = matrix.dropped().len(),
            transfers = entries.len(),
            "cash flow minimized"
        );

        Ok(SettlementOutcome::Settled(Settlement {
            balances,
            ledger,
            entries,
            dropped: matrix.dropped().to_vec(),
        }))
    }
}
