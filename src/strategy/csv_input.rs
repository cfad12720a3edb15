//! CSV file input strategy
//!
//! Reads banks and transactions from two CSV files. See
//! [`csv_format`](crate::io::csv_format) for the column layout.

use crate::io::csv_reader::{read_banks, read_transactions};
use crate::strategy::{InputStrategy, SettlementInput};
use crate::types::SettlementError;
use std::path::PathBuf;
use tracing::info;

/// Collects settlement input from a bank file and a transaction file
#[derive(Debug, Clone)]
pub struct CsvInputStrategy {
    banks_path: PathBuf,
    transactions_path: PathBuf,
}

impl CsvInputStrategy {
    /// Create a strategy reading the given files
    pub fn new(banks_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        CsvInputStrategy {
            banks_path: banks_path.into(),
            transactions_path: transactions_path.into(),
        }
    }
}

impl InputStrategy for CsvInputStrategy {
    /// Read the bank file, then the transaction file
    ///
    /// # Errors
    ///
    /// Returns the first file or row error encountered.
    fn collect(&mut self) -> Result<SettlementInput, SettlementError> {
        let banks = read_banks(&self.banks_path)?;
        let transactions = read_transactions(&self.transactions_path)?;

        info!(
            banks = banks.len(),
            transactions = transactions.len(),
            "loaded settlement input from CSV"
        );

        Ok(SettlementInput {
            banks,
            transactions,
        })
    }
}
