//! Rendering of settlement outcomes
//!
//! Turns a [`SettlementOutcome`] into human-readable text or CSV.

use crate::core::SettlementOutcome;
use crate::io::csv_format::write_ledger_csv;
use crate::types::{SettlementError, TransferEntry};
use clap::ValueEnum;
use std::io::Write;

/// Available output formats
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One sentence per transfer
    Text,
    /// `debtor,creditor,amount,mode` rows
    Csv,
}

/// Presentation settings for a settlement report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Text or CSV output
    pub format: OutputFormat,

    /// Currency label used in the text report
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            format: OutputFormat::Text,
            currency: "Rs".to_string(),
        }
    }
}

/// Write a settlement outcome to `output`
///
/// In text mode a missing transaction list prints a short notice; in CSV
/// mode it prints only the header so the output stays machine-readable.
pub fn write_outcome(
    outcome: &SettlementOutcome,
    config: &ReportConfig,
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    match (outcome, &config.format) {
        (SettlementOutcome::NoTransactions, OutputFormat::Text) => {
            writeln!(output, "No transactions made.")?;
        }
        (SettlementOutcome::NoTransactions, OutputFormat::Csv) => {
            write_ledger_csv(&[], output)?;
        }
        (SettlementOutcome::Settled(settlement), OutputFormat::Text) => {
            write_ledger_text(&settlement.entries, &config.currency, output)?;
        }
        (SettlementOutcome::Settled(settlement), OutputFormat::Csv) => {
            write_ledger_csv(&settlement.entries, output)?;
        }
    }
    Ok(())
}

/// Write transfer instructions as sentences
pub fn write_ledger_text(
    entries: &[TransferEntry],
    currency: &str,
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    writeln!(
        output,
        "The transactions for minimizing cash flow are as follows:"
    )?;
    if entries.is_empty() {
        writeln!(output, "No transfers are required.")?;
    }
    for entry in entries {
        writeln!(
            output,
            "{} pays {} {} to {} via {}.",
            entry.debtor, currency, entry.amount, entry.creditor, entry.mode
        )?;
    }
    output.flush()?;
    Ok(())
}
