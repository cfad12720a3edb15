//! CSV format handling for bank lists, transactions and ledger output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization
//! - Conversion from CSV records to domain types
//! - Ledger output serialization
//!
//! All functions are pure (no file access) for easy testing.
//!
//! # Formats
//!
//! ```text
//! banks.csv                 transactions.csv         ledger output
//! name,modes                debtor,creditor,amount   debtor,creditor,amount,mode
//! HDFC,upi;neft             HDFC,SBI,500             HDFC,SBI,500,neft
//! ```

use crate::types::{Amount, Bank, RawTransaction, SettlementError, TransferEntry};
use serde::Deserialize;
use std::io::Write;

/// Separator between payment modes in the `modes` column
pub const MODE_SEPARATOR: char = ';';

/// Column names of the ledger output, matching [`TransferEntry`]'s fields
pub const LEDGER_HEADER: [&str; 4] = ["debtor", "creditor", "amount", "mode"];

/// CSV record structure for a bank row
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BankRecord {
    pub name: String,
    pub modes: String,
}

/// CSV record structure for a transaction row
///
/// The amount is kept as a string so that malformed values can be reported
/// with the offending text and line number.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionCsvRecord {
    pub debtor: String,
    pub creditor: String,
    pub amount: String,
}

/// Convert a BankRecord to a Bank
///
/// Splits the `modes` column on [`MODE_SEPARATOR`], trimming each item and
/// ignoring empty ones. Validation of the resulting bank (non-empty modes,
/// unique name) happens in [`BankDirectory`](crate::types::BankDirectory).
pub fn convert_bank_record(record: BankRecord) -> Bank {
    Bank::new(record.name.trim(), record.modes.split(MODE_SEPARATOR))
}

/// Convert a TransactionCsvRecord to a RawTransaction
///
/// # Arguments
///
/// * `record` - The deserialized CSV record
/// * `line` - Line number of the record, used in error messages
///
/// # Returns
///
/// * `Ok(RawTransaction)` - Successfully converted record
/// * `Err(SettlementError::InvalidNumber)` - The amount is not an integer
pub fn convert_transaction_record(
    record: TransactionCsvRecord,
    line: Option<u64>,
) -> Result<RawTransaction, SettlementError> {
    let amount_str = record.amount.trim();
    let amount: Amount = amount_str
        .parse()
        .map_err(|_| SettlementError::invalid_number(amount_str, line))?;

    Ok(RawTransaction::new(
        record.debtor.trim(),
        record.creditor.trim(),
        amount,
    ))
}

/// Write transfer instructions in CSV format
///
/// Writes entries with columns: debtor, creditor, amount, mode, in the order
/// given (the ledger already yields row-major order). The header is written
/// explicitly so that an empty ledger still produces it.
///
/// # Arguments
///
/// * `entries` - Transfer instructions to write
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_ledger_csv(
    entries: &[TransferEntry],
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(LEDGER_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    Ok(())
}
