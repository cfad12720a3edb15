//! Pairwise debt matrix
//!
//! The `DebtMatrix` accumulates raw transactions into an N×N grid of amounts
//! owed, `owed[debtor][creditor]`. Repeated debts between the same ordered
//! pair are summed. Transactions naming an unknown bank are dropped and kept
//! aside as [`DroppedTransaction`]s. A bank owing itself nets to zero, so
//! self-debts are accepted but never stored.
//!
//! Accumulation uses checked arithmetic on a running grand total, so any row
//! or column sum derived from the matrix is guaranteed to fit in [`Amount`].

use crate::types::{Amount, BankDirectory, BankIndex, RawTransaction, SettlementError};
use tracing::warn;

/// A transaction left out of the matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedTransaction {
    /// The transaction as supplied
    pub transaction: RawTransaction,

    /// Why it was dropped (currently always `UnknownParty`)
    pub reason: SettlementError,
}

/// N×N grid of non-negative amounts owed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtMatrix {
    /// Row-major storage: `owed[debtor * size + creditor]`
    owed: Vec<Amount>,
    size: usize,
    /// Sum of every cell, kept to bound all derived sums
    total: Amount,
    /// Transactions dropped for referencing unknown banks, in input order
    dropped: Vec<DroppedTransaction>,
}

impl DebtMatrix {
    /// Create an empty matrix for `size` banks
    pub fn new(size: usize) -> Self {
        DebtMatrix {
            owed: vec![0; size * size],
            size,
            total: 0,
            dropped: Vec::new(),
        }
    }

    /// Build a matrix from raw transactions
    ///
    /// Each transaction is validated, resolved against the directory and
    /// accumulated into its (debtor, creditor) cell. Transactions with an
    /// unknown debtor or creditor are logged and dropped; they are
    /// available through [`DebtMatrix::dropped`].
    ///
    /// # Arguments
    ///
    /// * `directory` - Validated banks used to resolve names
    /// * `transactions` - Raw debts in input order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an amount is zero or negative
    /// - accumulated amounts overflow
    pub fn from_transactions(
        directory: &BankDirectory,
        transactions: &[RawTransaction],
    ) -> Result<Self, SettlementError> {
        let mut matrix = DebtMatrix::new(directory.len());

        for tx in transactions {
            if tx.amount <= 0 {
                return Err(SettlementError::non_positive_amount(
                    &tx.debtor,
                    &tx.creditor,
                    tx.amount,
                ));
            }

            let (debtor, creditor) = match (
                directory.index_of(&tx.debtor),
                directory.index_of(&tx.creditor),
            ) {
                (Some(debtor), Some(creditor)) => (debtor, creditor),
                (debtor, _) => {
                    let unknown = if debtor.is_none() {
                        &tx.debtor
                    } else {
                        &tx.creditor
                    };
                    let reason = SettlementError::unknown_party(unknown);
                    warn!(
                        debtor = %tx.debtor,
                        creditor = %tx.creditor,
                        amount = tx.amount,
                        "dropping transaction: {}",
                        reason
                    );
                    matrix.dropped.push(DroppedTransaction {
                        transaction: tx.clone(),
                        reason,
                    });
                    continue;
                }
            };

            matrix
                .checked_record(debtor, creditor, tx.amount)
                .ok_or_else(|| SettlementError::arithmetic_overflow(&tx.debtor, &tx.creditor))?;
        }

        Ok(matrix)
    }

    /// Add `amount` to the (debtor, creditor) cell
    ///
    /// Returns `None`, leaving the matrix untouched, if the amount is
    /// negative or the grand total would overflow. A self-debt
    /// (`debtor == creditor`) is accepted and discarded: it cannot change any
    /// balance, so it neither fills the diagonal nor counts towards the total.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn checked_record(
        &mut self,
        debtor: BankIndex,
        creditor: BankIndex,
        amount: Amount,
    ) -> Option<()> {
        assert!(
            debtor < self.size && creditor < self.size,
            "bank index out of range"
        );
        if amount < 0 {
            return None;
        }
        if debtor == creditor {
            return Some(());
        }

        let total = self.total.checked_add(amount)?;
        // Each cell is bounded by the total, so this cannot overflow.
        self.owed[debtor * self.size + creditor] += amount;
        self.total = total;
        Some(())
    }

    /// Amount `debtor` owes `creditor`
    pub fn owed(&self, debtor: BankIndex, creditor: BankIndex) -> Amount {
        self.owed[debtor * self.size + creditor]
    }

    /// Number of banks (rows and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of all amounts owed
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Transactions dropped for naming unknown banks, in input order
    pub fn dropped(&self) -> &[DroppedTransaction] {
        &self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bank;
    use rstest::{fixture, rstest};

    #[fixture]
    fn directory() -> BankDirectory {
        BankDirectory::new(vec![
            Bank::new("A", ["cash"]),
            Bank::new("B", ["cash"]),
            Bank::new("C", ["cash"]),
        ])
        .unwrap()
    }

    #[rstest]
    fn test_duplicate_pairs_accumulate(directory: BankDirectory) {
        let txs = vec![
            RawTransaction::new("A", "B", 40),
            RawTransaction::new("A", "B", 60),
            RawTransaction::new("B", "C", 10),
        ];

        let matrix = DebtMatrix::from_transactions(&directory, &txs).unwrap();

        assert_eq!(matrix.owed(0, 1), 100);
        assert_eq!(matrix.owed(1, 2), 10);
        assert_eq!(matrix.owed(1, 0), 0);
        assert_eq!(matrix.total(), 110);
        assert!(matrix.dropped().is_empty());
    }

    #[rstest]
    #[case::unknown_debtor("Z", "B", "Z")]
    #[case::unknown_creditor("A", "Z", "Z")]
    #[case::both_unknown("Y", "Z", "Y")]
    #[case::wrong_case("a", "B", "a")]
    fn test_unknown_names_are_dropped(
        directory: BankDirectory,
        #[case] debtor: &str,
        #[case] creditor: &str,
        #[case] unknown: &str,
    ) {
        let txs = vec![
            RawTransaction::new(debtor, creditor, 10),
            RawTransaction::new("A", "C", 5),
        ];

        let matrix = DebtMatrix::from_transactions(&directory, &txs).unwrap();

        assert_eq!(
            matrix.dropped(),
            &[DroppedTransaction {
                transaction: RawTransaction::new(debtor, creditor, 10),
                reason: SettlementError::unknown_party(unknown),
            }]
        );
        assert_eq!(matrix.total(), 5);
        assert_eq!(matrix.owed(0, 2), 5);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-10)]
    fn test_non_positive_amount_is_rejected(directory: BankDirectory, #[case] amount: Amount) {
        let txs = vec![RawTransaction::new("A", "B", amount)];

        let err = DebtMatrix::from_transactions(&directory, &txs).unwrap_err();

        assert_eq!(err, SettlementError::non_positive_amount("A", "B", amount));
    }

    #[rstest]
    fn test_overflow_is_rejected(directory: BankDirectory) {
        let txs = vec![
            RawTransaction::new("A", "B", Amount::MAX),
            RawTransaction::new("C", "B", 1),
        ];

        let err = DebtMatrix::from_transactions(&directory, &txs).unwrap_err();

        assert_eq!(err, SettlementError::arithmetic_overflow("C", "B"));
    }

    #[rstest]
    fn test_self_debt_is_not_stored(directory: BankDirectory) {
        let txs = vec![RawTransaction::new("B", "B", 25)];

        let matrix = DebtMatrix::from_transactions(&directory, &txs).unwrap();

        assert_eq!(matrix.owed(1, 1), 0);
        assert_eq!(matrix.total(), 0);
        assert!(matrix.dropped().is_empty());
    }

    #[rstest]
    fn test_large_self_debt_does_not_overflow(directory: BankDirectory) {
        let txs = vec![
            RawTransaction::new("A", "A", Amount::MAX),
            RawTransaction::new("A", "B", 10),
            RawTransaction::new("C", "C", Amount::MAX),
        ];

        let matrix = DebtMatrix::from_transactions(&directory, &txs).unwrap();

        assert_eq!(matrix.owed(0, 1), 10);
        assert_eq!(matrix.total(), 10);
    }

    #[test]
    fn test_checked_record_rejects_negative_amount() {
        let mut matrix = DebtMatrix::new(2);
        assert_eq!(matrix.checked_record(0, 1, -1), None);
        assert_eq!(matrix.total(), 0);
    }
}
