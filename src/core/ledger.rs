//! Transfer ledger
//!
//! The `TransferLedger` is an N×N grid of optional [`Transfer`] cells filled
//! in by the settlement engine. Each populated cell is one real-world transfer
//! instruction from the row bank to the column bank.

use crate::types::{Amount, BankDirectory, BankIndex, Transfer, TransferEntry};

/// N×N grid of transfer instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLedger {
    /// Row-major storage: `cells[debtor * size + creditor]`
    cells: Vec<Option<Transfer>>,
    size: usize,
    populated: usize,
}

impl TransferLedger {
    /// Create a ledger for `size` banks with every cell set to "no transfer"
    pub fn new(size: usize) -> Self {
        TransferLedger {
            cells: vec![None; size * size],
            size,
            populated: 0,
        }
    }

    /// Record a transfer from `debtor` to `creditor`
    ///
    /// The settlement engine never revisits an ordered pair: one of the two
    /// parties is zeroed by every transfer and zeroed parties are never
    /// selected again.
    pub(crate) fn record(&mut self, debtor: BankIndex, creditor: BankIndex, transfer: Transfer) {
        debug_assert!(transfer.amount > 0, "transfers must be strictly positive");
        debug_assert_ne!(debtor, creditor, "a bank cannot pay itself");

        let cell = &mut self.cells[debtor * self.size + creditor];
        debug_assert!(cell.is_none(), "ledger cell written twice");
        if cell.replace(transfer).is_none() {
            self.populated += 1;
        }
    }

    /// The transfer from `debtor` to `creditor`, if any
    pub fn get(&self, debtor: BankIndex, creditor: BankIndex) -> Option<&Transfer> {
        self.cells
            .get(debtor * self.size + creditor)
            .and_then(Option::as_ref)
    }

    /// Number of banks (rows and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of transfer instructions
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Whether no transfer is needed
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Iterate populated cells in row-major (debtor, then creditor) order
    pub fn iter(&self) -> impl Iterator<Item = (BankIndex, BankIndex, &Transfer)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|transfer| (i / self.size, i % self.size, transfer))
        })
    }

    /// Resolve every transfer into a named [`TransferEntry`], row-major
    ///
    /// # Panics
    ///
    /// Panics if `directory` has fewer banks than the ledger.
    pub fn entries(&self, directory: &BankDirectory) -> Vec<TransferEntry> {
        let banks = directory.banks();
        self.iter()
            .map(|(debtor, creditor, transfer)| TransferEntry {
                debtor: banks[debtor].name.clone(),
                creditor: banks[creditor].name.clone(),
                amount: transfer.amount,
                mode: transfer.mode.clone(),
            })
            .collect()
    }

    /// Net effect of the ledger on each bank: received minus paid
    ///
    /// For a successful settlement this reproduces the net balances the
    /// engine started from.
    pub fn net_effect(&self) -> Vec<Amount> {
        let mut effect = vec![0; self.size];
        for (debtor, creditor, transfer) in self.iter() {
            effect[debtor] -= transfer.amount;
            effect[creditor] += transfer.amount;
        }
        effect
    }
}
