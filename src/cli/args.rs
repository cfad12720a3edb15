use crate::io::{OutputFormat, ReportConfig};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Settle debts between banks with as few transfers as possible
#[derive(Parser, Debug)]
#[command(name = "cash-flow-minimizer")]
#[command(
    about = "Settle debts between banks with as few transfers as possible, using payment modes both sides support",
    long_about = None
)]
pub struct CliArgs {
    /// CSV file with bank names and payment modes
    #[arg(
        long = "banks",
        value_name = "FILE",
        required_unless_present = "interactive",
        help = "CSV file with columns name,modes (modes separated by ';')"
    )]
    pub banks: Option<PathBuf>,

    /// CSV file with the debts to settle
    #[arg(
        long = "transactions",
        value_name = "FILE",
        required_unless_present = "interactive",
        help = "CSV file with columns debtor,creditor,amount"
    )]
    pub transactions: Option<PathBuf>,

    /// Read banks and transactions from interactive prompts
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["banks", "transactions"],
        help = "Read banks and transactions from stdin prompts instead of files"
    )]
    pub interactive: bool,

    /// Output format for the transfer list
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for sentences or 'csv' for machine-readable rows"
    )]
    pub format: OutputFormat,

    /// Currency label used in the text report
    #[arg(long = "currency", value_name = "LABEL", default_value = "Rs")]
    pub currency: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where banks and transactions are collected from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Two CSV files
    Csv {
        banks: PathBuf,
        transactions: PathBuf,
    },
    /// Prompts on stdin/stdout
    Interactive,
}

impl CliArgs {
    /// Build the report configuration from presentation flags
    pub fn to_report_config(&self) -> ReportConfig {
        ReportConfig {
            format: self.format.clone(),
            currency: self.currency.clone(),
        }
    }

    /// Resolve the input source
    ///
    /// clap guarantees both file paths are present unless `--interactive` is
    /// set; a missing path would surface later as a file-not-found error.
    pub fn input_source(&self) -> InputSource {
        if self.interactive {
            InputSource::Interactive
        } else {
            InputSource::Csv {
                banks: self.banks.clone().unwrap_or_default(),
                transactions: self.transactions.clone().unwrap_or_default(),
            }
        }
    }
}
