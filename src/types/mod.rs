//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `bank`: Participating banks and the validated bank directory
//! - `transaction`: Raw debts, ledger cells and transfer instructions
//! - `error`: Error types for the settlement pipeline

pub mod bank;
pub mod error;
pub mod transaction;

pub use bank::{Bank, BankDirectory};
pub use error::{ErrorKind, SettlementError};
pub use transaction::{Amount, BankIndex, RawTransaction, Transfer, TransferEntry};
