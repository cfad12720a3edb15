//! Cash Flow Minimizer Library
//! # Overview
//!
//! This library settles pairwise debts among banks with as few transfers as a
//! greedy matching can find, where every transfer must use a payment mode
//! supported by both the payer and the payee.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Bank, RawTransaction, errors, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Settlement logic:
//!   - [`core::debt_matrix`] - Pairwise debts accumulated from raw transactions
//!   - [`core::balance`] - Net balance per bank
//!   - [`core::engine`] - Greedy, payment-mode aware settlement
//!   - [`core::ledger`] - Resulting transfer instructions
//!   - [`core::minimizer`] - Orchestration of a complete run
//! - [`io`] - CSV and interactive input, text and CSV reports
//! - [`strategy`] - Pluggable input collection and the end-to-end pipeline
//!
//! # Settlement Outcomes
//!
//! - **Settled**: every balance reached zero; the ledger lists the transfers
//! - **No transactions**: nothing to settle
//! - **Incompatible payment modes**: some debtor shares no mode with any
//!   remaining creditor; the run is void and no transfers are reported
//!
//! # Example
//!
//! ```
//! use cash_flow_minimizer::{Bank, CashFlowMinimizer, RawTransaction, SettlementOutcome};
//!
//! let minimizer = CashFlowMinimizer::new(vec![
//!     Bank::new("A", ["cash"]),
//!     Bank::new("B", ["cash"]),
//!     Bank::new("C", ["cash"]),
//! ])
//! .unwrap();
//!
//! let outcome = minimizer
//!     .minimize(&[
//!         RawTransaction::new("A", "B", 100),
//!         RawTransaction::new("B", "C", 100),
//!     ])
//!     .unwrap();
//!
//! let SettlementOutcome::Settled(settlement) = outcome else {
//!     panic!("expected a settlement");
//! };
//! assert_eq!(settlement.entries.len(), 1);
//! assert_eq!(settlement.entries[0].to_string(), "A -> C: 100 via cash");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{
    net_balances, settle, CashFlowMinimizer, DebtMatrix, DroppedTransaction, Settlement,
    SettlementEngine, SettlementOutcome, TransferLedger,
};
pub use io::{write_outcome, ReportConfig};
pub use types::{
    Amount, Bank, BankDirectory, BankIndex, ErrorKind, RawTransaction, SettlementError, Transfer,
    TransferEntry,
};
