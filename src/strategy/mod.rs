//! Input strategy module
//!
//! This module defines the Strategy pattern for collecting banks and
//! transactions, and the pipeline that runs a collected input through the
//! minimizer and the report writer. Collection sources (CSV files, an
//! interactive prompt) are selected at runtime.

use crate::cli::InputSource;
use crate::core::{CashFlowMinimizer, SettlementOutcome};
use crate::io::{write_outcome, ReportConfig};
use crate::types::{Bank, RawTransaction, SettlementError};
use std::io::{self, Write};

pub mod csv_input;
pub mod prompt_input;

pub use csv_input::CsvInputStrategy;
pub use prompt_input::PromptInputStrategy;

/// Everything needed for one settlement run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementInput {
    /// Banks in input order
    pub banks: Vec<Bank>,

    /// Raw debts in input order
    pub transactions: Vec<RawTransaction>,
}

/// Collection strategy for settlement input
///
/// Implementations read banks and transactions from some source. Any
/// malformed value fails the whole collection.
pub trait InputStrategy {
    /// Collect banks and transactions
    fn collect(&mut self) -> Result<SettlementInput, SettlementError>;
}

/// Create an input strategy for the given source
///
/// The interactive strategy reads from stdin and writes prompts to stdout.
pub fn create_strategy(source: InputSource) -> Box<dyn InputStrategy> {
    match source {
        InputSource::Csv {
            banks,
            transactions,
        } => Box::new(CsvInputStrategy::new(banks, transactions)),
        InputSource::Interactive => Box::new(PromptInputStrategy::new(
            io::stdin().lock(),
            io::stdout(),
        )),
    }
}

/// Collect input, settle it and write the report
///
/// # Arguments
///
/// * `strategy` - Source of banks and transactions
/// * `config` - Report format settings
/// * `output` - Writer receiving the report
///
/// # Returns
///
/// The outcome that was reported. On error nothing is written to `output`.
///
/// # Errors
///
/// Returns an error if collection fails, the banks are invalid, settlement
/// fails (including `IncompatiblePaymentModes`), or the report cannot be
/// written.
pub fn run(
    strategy: &mut dyn InputStrategy,
    config: &ReportConfig,
    output: &mut dyn Write,
) -> Result<SettlementOutcome, SettlementError> {
    let input = strategy.collect()?;
    let minimizer = CashFlowMinimizer::new(input.banks)?;
    let outcome = minimizer.minimize(&input.transactions)?;

    write_outcome(&outcome, config, output)?;

    Ok(outcome)
}
