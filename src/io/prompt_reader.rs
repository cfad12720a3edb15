//! Interactive prompt reader
//!
//! Collects banks and transactions from whitespace-separated tokens, printing
//! a prompt before each group of values. Tokens may be spread across lines in
//! any way, so the same reader accepts both typed input and piped files:
//!
//! ```text
//! 3                 <- number of banks
//! A 2 cash upi      <- name, number of modes, modes
//! B 1 cash
//! C 1 upi
//! 2                 <- number of transactions
//! A B 100           <- debtor, creditor, amount
//! B C 40
//! ```

use crate::types::{Amount, Bank, RawTransaction, SettlementError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Token-based reader over an interactive session
///
/// Prompts go to `prompts`; values are read from `input`.
pub struct PromptReader<R, W> {
    input: R,
    prompts: W,
    pending: VecDeque<String>,
    line_num: u64,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    /// Create a reader over `input`, writing prompts to `prompts`
    pub fn new(input: R, prompts: W) -> Self {
        PromptReader {
            input,
            prompts,
            pending: VecDeque::new(),
            line_num: 0,
        }
    }

    /// Prompt for and read the list of banks
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the bank count is not a positive integer
    /// - a mode count is not a non-negative integer
    /// - input ends early
    pub fn read_banks(&mut self) -> Result<Vec<Bank>, SettlementError> {
        self.prompt("Enter the number of banks participating in the transactions: ")?;
        let count: i64 = self.next_number("number of banks")?;
        if count <= 0 {
            return Err(SettlementError::NoParties);
        }

        self.prompt("Enter bank details (name, number of payment modes, and modes):\n")?;
        let mut banks = Vec::new();
        for i in 1..=count {
            self.prompt(&format!("Bank {} details: ", i))?;
            let name = self.next_token("bank name")?;
            let mode_count: usize = self.next_number("number of payment modes")?;
            let modes = (0..mode_count)
                .map(|_| self.next_token("payment mode"))
                .collect::<Result<Vec<_>, _>>()?;
            banks.push(Bank::new(name, modes));
        }

        Ok(banks)
    }

    /// Prompt for and read the list of transactions
    ///
    /// A count of zero returns an empty list without reading further.
    ///
    /// # Errors
    ///
    /// Returns an error if a count or amount is malformed or input ends early.
    pub fn read_transactions(&mut self) -> Result<Vec<RawTransaction>, SettlementError> {
        self.prompt("Enter the number of transactions: ")?;
        let count: usize = self.next_number("number of transactions")?;
        if count == 0 {
            return Ok(Vec::new());
        }

        self.prompt("Enter transaction details (debtor, creditor, amount):\n")?;
        let mut transactions = Vec::new();
        for _ in 0..count {
            let debtor = self.next_token("debtor")?;
            let creditor = self.next_token("creditor")?;
            let amount: Amount = self.next_number("amount")?;
            transactions.push(RawTransaction::new(debtor, creditor, amount));
        }

        Ok(transactions)
    }

    fn prompt(&mut self, text: &str) -> Result<(), SettlementError> {
        self.prompts.write_all(text.as_bytes())?;
        self.prompts.flush()?;
        Ok(())
    }

    fn next_token(&mut self, expected: &str) -> Result<String, SettlementError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SettlementError::unexpected_end_of_input(expected));
            }
            self.line_num += 1;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_number<T: FromStr>(&mut self, expected: &str) -> Result<T, SettlementError> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| SettlementError::invalid_number(&token, Some(self.line_num)))
    }
}
