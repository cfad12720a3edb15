//! I/O module
//!
//! Handles input collection and output rendering.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, ledger serialization)
//! - `csv_reader` - Streaming readers for bank and transaction CSV files
//! - `prompt_reader` - Interactive token reader for stdin sessions
//! - `report` - Text and CSV rendering of settlement outcomes

pub mod csv_format;
pub mod csv_reader;
pub mod prompt_reader;
pub mod report;

pub use report::{write_outcome, OutputFormat, ReportConfig};
