// CLI module
// Command-line interface and argument parsing

mod args;

pub use crate::io::OutputFormat;
pub use args::{CliArgs, InputSource};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// --help), clap displays an error message or help text and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
