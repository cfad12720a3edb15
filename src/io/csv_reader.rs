//! CSV readers for bank lists and transactions
//!
//! Provides streaming iterators over bank and transaction records. Format
//! concerns are delegated to the csv_format module.
//!
//! ```no_run
//! use cash_flow_minimizer::io::csv_reader::TransactionReader;
//! use std::path::Path;
//!
//! let reader = TransactionReader::open(Path::new("transactions.csv")).unwrap();
//! let transactions: Result<Vec<_>, _> = reader.collect();
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Record errors are yielded as `Err` items carrying the line number;
//!   callers collecting into `Result<Vec<_>, _>` stop at the first one

use crate::io::csv_format::{
    convert_bank_record, convert_transaction_record, BankRecord, TransactionCsvRecord,
};
use crate::types::{Bank, RawTransaction, SettlementError};
use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

fn open_file(path: &Path) -> Result<File, SettlementError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SettlementError::file_not_found(&path.display().to_string()),
        _ => SettlementError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .buffer_capacity(8 * 1024)
        .from_reader(input)
}

/// Streaming reader over `name,modes` rows
pub struct BankReader<R: Read> {
    records: DeserializeRecordsIntoIter<R, BankRecord>,
}

impl BankReader<File> {
    /// Open a bank list CSV file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `IoError` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, SettlementError> {
        Ok(Self::from_reader(open_file(path)?))
    }
}

impl<R: Read> BankReader<R> {
    /// Read bank rows from any reader
    pub fn from_reader(input: R) -> Self {
        BankReader {
            records: csv_reader(input).into_deserialize(),
        }
    }
}

impl<R: Read> Iterator for BankReader<R> {
    type Item = Result<Bank, SettlementError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(convert_bank_record)
                .map_err(SettlementError::from),
        )
    }
}

/// Streaming reader over `debtor,creditor,amount` rows
pub struct TransactionReader<R: Read> {
    records: DeserializeRecordsIntoIter<R, TransactionCsvRecord>,
    /// Line of the last record read; the header is line 1
    line_num: u64,
}

impl TransactionReader<File> {
    /// Open a transaction CSV file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `IoError` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, SettlementError> {
        Ok(Self::from_reader(open_file(path)?))
    }
}

impl<R: Read> TransactionReader<R> {
    /// Read transaction rows from any reader
    pub fn from_reader(input: R) -> Self {
        TransactionReader {
            records: csv_reader(input).into_deserialize(),
            line_num: 1,
        }
    }
}

impl<R: Read> Iterator for TransactionReader<R> {
    type Item = Result<RawTransaction, SettlementError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.line_num += 1;
        Some(match record {
            Ok(record) => convert_transaction_record(record, Some(self.line_num)),
            Err(e) => Err(e.into()),
        })
    }
}

/// Read every bank from a CSV file, stopping at the first bad row
pub fn read_banks(path: &Path) -> Result<Vec<Bank>, SettlementError> {
    BankReader::open(path)?.collect()
}

/// Read every transaction from a CSV file, stopping at the first bad row
pub fn read_transactions(path: &Path) -> Result<Vec<RawTransaction>, SettlementError> {
    TransactionReader::open(path)?.collect()
}
