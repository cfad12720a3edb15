//! Net balance computation
//!
//! Turns a [`DebtMatrix`] into one signed net balance per bank:
//! `balance[i] = sum_j owed[j][i] - sum_j owed[i][j]`.
//! Positive means net creditor, negative net debtor, zero settled.

use crate::core::debt_matrix::DebtMatrix;
use crate::types::Amount;

/// Compute the net balance of every bank
///
/// Pure and total: the matrix bounds its grand total to [`Amount::MAX`], so
/// no row or column sum can overflow. A bank's debt to itself appears in both
/// its incoming and outgoing sums and cancels out.
///
/// The returned vector is a fresh, independently owned copy; mutating it
/// never affects the matrix or any bank record.
pub fn net_balances(matrix: &DebtMatrix) -> Vec<Amount> {
    let n = matrix.size();
    (0..n)
        .map(|i| {
            let incoming: Amount = (0..n).map(|j| matrix.owed(j, i)).sum();
            let outgoing: Amount = (0..n).map(|j| matrix.owed(i, j)).sum();
            incoming - outgoing
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix_from(size: usize, debts: &[(usize, usize, Amount)]) -> DebtMatrix {
        let mut matrix = DebtMatrix::new(size);
        for &(debtor, creditor, amount) in debts {
            matrix.checked_record(debtor, creditor, amount).unwrap();
        }
        matrix
    }

    #[rstest]
    #[case::simple_match(2, &[(0, 1, 100)], vec![-100, 100])]
    #[case::chain(3, &[(0, 1, 100), (1, 2, 100)], vec![-100, 0, 100])]
    #[case::cycle(3, &[(0, 1, 10), (1, 2, 10), (2, 0, 10)], vec![0, 0, 0])]
    #[case::netted_pair(2, &[(0, 1, 70), (1, 0, 30)], vec![-40, 40])]
    #[case::self_loop(2, &[(0, 0, 500), (0, 1, 5)], vec![-5, 5])]
    #[case::empty(3, &[], vec![0, 0, 0])]
    fn test_net_balances(
        #[case] size: usize,
        #[case] debts: &[(usize, usize, Amount)],
        #[case] expected: Vec<Amount>,
    ) {
        let balances = net_balances(&matrix_from(size, debts));
        assert_eq!(balances, expected);
        assert_eq!(balances.iter().sum::<Amount>(), 0);
    }

    #[test]
    fn test_net_balances_is_idempotent() {
        let matrix = matrix_from(3, &[(0, 1, 7), (2, 1, 3), (1, 0, 2)]);
        assert_eq!(net_balances(&matrix), net_balances(&matrix));
    }

    #[test]
    fn test_net_balances_at_total_limit() {
        let matrix = matrix_from(2, &[(0, 1, Amount::MAX)]);
        assert_eq!(net_balances(&matrix), vec![-Amount::MAX, Amount::MAX]);
    }
}
