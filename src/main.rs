//! Cash Flow Minimizer CLI
//!
//! Command-line interface for settling debts between banks.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --banks banks.csv --transactions transactions.csv
//! cargo run -- --banks banks.csv --transactions transactions.csv --format csv > transfers.csv
//! cargo run -- --interactive
//! RUST_LOG=debug cargo run -- -i
//! ```
//!
//! The report goes to stdout; diagnostics and errors go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success, including "no transactions"
//! - 1: Error (invalid input, file not found, file not readable, etc.)
//! - 2: No compatible payment modes for some debtor; no transfers reported

use cash_flow_minimizer::types::ErrorKind;
use cash_flow_minimizer::{cli, logging, strategy};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(args.verbose);

    let config = args.to_report_config();
    let mut input = strategy::create_strategy(args.input_source());

    let mut output = std::io::stdout();
    if let Err(e) = strategy::run(input.as_mut(), &config, &mut output) {
        match e.kind() {
            ErrorKind::IncompatiblePaymentModes => {
                eprintln!("{}.", e);
                process::exit(2);
            }
            _ => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
