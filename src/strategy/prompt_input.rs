//! Interactive input strategy
//!
//! Prompts for banks and transactions in the order a user would type them.

use crate::io::prompt_reader::PromptReader;
use crate::strategy::{InputStrategy, SettlementInput};
use crate::types::SettlementError;
use std::io::{BufRead, Write};

/// Collects settlement input through a [`PromptReader`]
pub struct PromptInputStrategy<R, W> {
    reader: PromptReader<R, W>,
}

impl<R: BufRead, W: Write> PromptInputStrategy<R, W> {
    /// Create a strategy reading from `input` and prompting on `prompts`
    pub fn new(input: R, prompts: W) -> Self {
        PromptInputStrategy {
            reader: PromptReader::new(input, prompts),
        }
    }
}

impl<R: BufRead, W: Write> InputStrategy for PromptInputStrategy<R, W> {
    fn collect(&mut self) -> Result<SettlementInput, SettlementError> {
        let banks = self.reader.read_banks()?;
        let transactions = self.reader.read_transactions()?;

        Ok(SettlementInput {
            banks,
            transactions,
        })
    }
}
