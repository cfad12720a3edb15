//! Error types for the Cash Flow Minimizer
//!
//! This module defines all error types that can occur while collecting input
//! and settling debts. Errors are designed to be descriptive and user-friendly
//! for CLI output.
//!
//! # Error Categories
//!
//! - **Invalid input**: missing or duplicate banks, malformed numbers, bad rows
//! - **Unknown party references**: recovered locally by dropping the debt
//! - **Incompatible payment modes**: fatal to a settlement run, never to the process
//! - **I/O errors**: file not found, permission denied, etc.
//!
//! "No transactions" is deliberately absent: it is a normal outcome, modelled
//! by [`SettlementOutcome::NoTransactions`](crate::core::SettlementOutcome).

use crate::types::Amount;
use thiserror::Error;

/// Broad classification of a [`SettlementError`]
///
/// Callers use this to decide how to react (exit code, retry, report) without
/// matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input cannot be settled as given; fix the input and retry
    InvalidInput,
    /// A transaction referenced a bank that does not exist
    UnknownPartyReference,
    /// Some debtor shares no payment mode with any remaining creditor
    IncompatiblePaymentModes,
    /// Reading input or writing output failed
    Io,
}

/// Main error type for the cash flow minimizer
///
/// Each variant includes relevant context to help diagnose the issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A CSV row or prompt token could not be parsed
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The bank list is empty
    #[error("At least one bank is required")]
    NoParties,

    /// Two banks share the same name
    #[error("Duplicate bank name '{name}'")]
    DuplicateParty {
        /// The repeated name
        name: String,
    },

    /// A bank declares no payment modes
    #[error("Bank '{name}' must support at least one payment mode")]
    NoPaymentModes {
        /// Name of the bank
        name: String,
    },

    /// A count or amount token is not a valid integer
    #[error("Invalid number '{value}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidNumber {
        /// The offending token
        value: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// A transaction amount is zero or negative
    #[error("Amount for {debtor} -> {creditor} must be positive, got {amount}")]
    NonPositiveAmount {
        /// Debtor name
        debtor: String,
        /// Creditor name
        creditor: String,
        /// The rejected amount
        amount: Amount,
    },

    /// Accumulated debts exceed the representable range
    #[error("Arithmetic overflow while recording {debtor} -> {creditor}")]
    ArithmeticOverflow {
        /// Debtor name
        debtor: String,
        /// Creditor name
        creditor: String,
    },

    /// Interactive input ended before all requested values were read
    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEndOfInput {
        /// What was being read
        expected: String,
    },

    /// A transaction references a bank that is not in the directory
    ///
    /// This is a recoverable error - the transaction is dropped and the
    /// remaining transactions are still settled.
    #[error("Unknown bank '{name}'")]
    UnknownParty {
        /// The unresolved name
        name: String,
    },

    /// No creditor shares a payment mode with the selected debtor
    ///
    /// This is fatal to the settlement run: every transfer computed so far is
    /// discarded and no ledger is produced.
    #[error("No compatible payment modes exist between {debtor} and any creditor bank")]
    IncompatiblePaymentModes {
        /// Name of the unmatched debtor
        debtor: String,
    },
}

impl From<std::io::Error> for SettlementError {
    fn from(error: std::io::Error) -> Self {
        SettlementError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SettlementError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettlementError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl SettlementError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SettlementError::FileNotFound { .. } | SettlementError::IoError { .. } => ErrorKind::Io,
            SettlementError::UnknownParty { .. } => ErrorKind::UnknownPartyReference,
            SettlementError::IncompatiblePaymentModes { .. } => {
                ErrorKind::IncompatiblePaymentModes
            }
            SettlementError::ParseError { .. }
            | SettlementError::NoParties
            | SettlementError::DuplicateParty { .. }
            | SettlementError::NoPaymentModes { .. }
            | SettlementError::InvalidNumber { .. }
            | SettlementError::NonPositiveAmount { .. }
            | SettlementError::ArithmeticOverflow { .. }
            | SettlementError::UnexpectedEndOfInput { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SettlementError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a DuplicateParty error
    pub fn duplicate_party(name: &str) -> Self {
        SettlementError::DuplicateParty {
            name: name.to_string(),
        }
    }

    /// Create a NoPaymentModes error
    pub fn no_payment_modes(name: &str) -> Self {
        SettlementError::NoPaymentModes {
            name: name.to_string(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(value: &str, line: Option<u64>) -> Self {
        SettlementError::InvalidNumber {
            value: value.to_string(),
            line,
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(debtor: &str, creditor: &str, amount: Amount) -> Self {
        SettlementError::NonPositiveAmount {
            debtor: debtor.to_string(),
            creditor: creditor.to_string(),
            amount,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(debtor: &str, creditor: &str) -> Self {
        SettlementError::ArithmeticOverflow {
            debtor: debtor.to_string(),
            creditor: creditor.to_string(),
        }
    }

    /// Create an UnexpectedEndOfInput error
    pub fn unexpected_end_of_input(expected: &str) -> Self {
        SettlementError::UnexpectedEndOfInput {
            expected: expected.to_string(),
        }
    }

    /// Create an UnknownParty error
    pub fn unknown_party(name: &str) -> Self {
        SettlementError::UnknownParty {
            name: name.to_string(),
        }
    }

    /// Create an IncompatiblePaymentModes error
    pub fn incompatible_payment_modes(debtor: &str) -> Self {
        SettlementError::IncompatiblePaymentModes {
            debtor: debtor.to_string(),
        }
    }
}
