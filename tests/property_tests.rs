//! Property-based tests for settlement invariants
//!
//! These tests verify properties that must hold for every bank list and
//! transaction list, not just hand-picked scenarios.

use cash_flow_minimizer::types::{Amount, Bank, BankDirectory, RawTransaction, SettlementError};
use cash_flow_minimizer::{net_balances, settle, DebtMatrix};
use proptest::prelude::*;

const MODES: [&str; 3] = ["card", "cash", "upi"];

fn bank_name(index: usize) -> String {
    format!("Bank{}", index)
}

/// Banks with a non-empty random subset of the known modes
fn banks_strategy(max_banks: usize) -> impl Strategy<Value = Vec<Bank>> {
    prop::collection::vec(prop::sample::subsequence(MODES.to_vec(), 1..=MODES.len()), 1..=max_banks)
        .prop_map(|mode_sets| {
            mode_sets
                .into_iter()
                .enumerate()
                .map(|(i, modes)| Bank::new(bank_name(i), modes))
                .collect()
        })
}

/// Banks plus transactions that only name those banks
fn scenario_strategy() -> impl Strategy<Value = (Vec<Bank>, Vec<RawTransaction>)> {
    banks_strategy(8).prop_flat_map(|banks| {
        let n = banks.len();
        let transactions = prop::collection::vec((0..n, 0..n, 1i64..10_000), 0..40).prop_map(
            |rows| {
                rows.into_iter()
                    .map(|(d, c, amount)| RawTransaction::new(bank_name(d), bank_name(c), amount))
                    .collect::<Vec<_>>()
            },
        );
        (Just(banks), transactions)
    })
}

fn balances_for(banks: &[Bank], transactions: &[RawTransaction]) -> Vec<Amount> {
    let directory = BankDirectory::new(banks.to_vec()).expect("generated banks are valid");
    let matrix = DebtMatrix::from_transactions(&directory, transactions)
        .expect("generated transactions are valid");
    net_balances(&matrix)
}

// ============================================================================
// Balance Invariants
// ============================================================================

proptest! {
    /// Property: net balances always sum to zero
    #[test]
    fn balances_are_conserved((banks, transactions) in scenario_strategy()) {
        let balances = balances_for(&banks, &transactions);

        prop_assert_eq!(balances.len(), banks.len());
        prop_assert_eq!(balances.iter().sum::<Amount>(), 0);
    }

    /// Property: a bank owing itself changes no balance
    #[test]
    fn self_debts_are_neutral(
        (banks, transactions) in scenario_strategy(),
        pick in any::<prop::sample::Index>(),
        amount in 1i64..1_000_000,
    ) {
        let name = bank_name(pick.index(banks.len()));
        let mut with_self_debt = transactions.clone();
        with_self_debt.push(RawTransaction::new(name.clone(), name, amount));

        prop_assert_eq!(
            balances_for(&banks, &with_self_debt),
            balances_for(&banks, &transactions)
        );
    }

    /// Property: transaction order does not affect balances
    #[test]
    fn balances_ignore_order((banks, transactions) in scenario_strategy()) {
        let mut reversed = transactions.clone();
        reversed.reverse();

        prop_assert_eq!(
            balances_for(&banks, &reversed),
            balances_for(&banks, &transactions)
        );
    }

    /// Property: replaying a ledger's transfers reproduces the same balances
    #[test]
    fn ledger_replay_is_idempotent((banks, transactions) in scenario_strategy()) {
        let balances = balances_for(&banks, &transactions);

        if let Ok(ledger) = settle(&banks, balances.clone()) {
            let replayed: Vec<RawTransaction> = ledger
                .iter()
                .map(|(d, c, t)| RawTransaction::new(bank_name(d), bank_name(c), t.amount))
                .collect();
            prop_assert_eq!(balances_for(&banks, &replayed), balances);
        }
    }
}

// ============================================================================
// Settlement Invariants
// ============================================================================

proptest! {
    /// Property: a successful settlement zeroes every balance with valid transfers
    #[test]
    fn settlement_is_correct((banks, transactions) in scenario_strategy()) {
        let balances = balances_for(&banks, &transactions);

        if let Ok(ledger) = settle(&banks, balances.clone()) {
            prop_assert_eq!(ledger.net_effect(), balances.clone());

            let nonzero = balances.iter().filter(|&&b| b != 0).count();
            prop_assert!(ledger.len() <= nonzero.saturating_sub(1));

            for (d, c, transfer) in ledger.iter() {
                prop_assert_ne!(d, c);
                prop_assert!(transfer.amount > 0);
                prop_assert!(banks[d].supports(&transfer.mode));
                prop_assert!(banks[c].supports(&transfer.mode));
            }
        }
    }

    /// Property: banks sharing a mode always settle, using that mode
    #[test]
    fn shared_mode_always_settles(
        size in 1usize..8,
        rows in prop::collection::vec((0usize..8, 0usize..8, 1i64..10_000), 0..40),
    ) {
        let banks: Vec<Bank> = (0..size).map(|i| Bank::new(bank_name(i), ["cash"])).collect();
        let transactions: Vec<RawTransaction> = rows
            .into_iter()
            .map(|(d, c, amount)| RawTransaction::new(bank_name(d % size), bank_name(c % size), amount))
            .collect();

        let balances = balances_for(&banks, &transactions);
        let ledger = settle(&banks, balances.clone()).unwrap();

        prop_assert_eq!(ledger.net_effect(), balances);
        prop_assert!(ledger.iter().all(|(_, _, t)| t.mode == "cash"));
    }

    /// Property: a failed settlement names a debtor and nothing else
    #[test]
    fn failure_is_all_or_nothing((banks, transactions) in scenario_strategy()) {
        let balances = balances_for(&banks, &transactions);

        if let Err(err) = settle(&banks, balances.clone()) {
            match err {
                SettlementError::IncompatiblePaymentModes { debtor } => {
                    let index = banks
                        .iter()
                        .position(|b| b.name == debtor)
                        .expect("debtor is a known bank");
                    prop_assert!(balances[index] < 0);
                }
                other => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
