//! Core settlement logic module
//!
//! This module contains the settlement components:
//! - `debt_matrix` - Accumulation of raw transactions into pairwise debts
//! - `balance` - Net balance computation
//! - `engine` - Greedy, payment-mode aware settlement
//! - `ledger` - The resulting grid of transfer instructions
//! - `minimizer` - Orchestration of a complete settlement run

pub mod balance;
pub mod debt_matrix;
pub mod engine;
pub mod ledger;
pub mod minimizer;

pub use balance::net_balances;
pub use debt_matrix::{DebtMatrix, DroppedTransaction};
pub use engine::{settle, SettlementEngine};
pub use ledger::TransferLedger;
pub use minimizer::{CashFlowMinimizer, Settlement, SettlementOutcome};
