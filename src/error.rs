//! Error types for the bill splitter.
//!
//! The ledger itself never fails; these cover reading entry files and
//! writing exports.

use thiserror::Error;

/// Result type alias for bill splitter operations
pub type Result<T> = std::result::Result<T, BillError>;

/// Errors that can occur while loading entries or exporting a summary.
#[derive(Error, Debug)]
pub enum BillError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet encoding error
    #[error("Spreadsheet encoding error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Summary grid exceeds what a worksheet can address
    #[error("Summary grid of {rows} rows by {cols} columns does not fit in a worksheet")]
    GridTooLarge { rows: usize, cols: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: bill-splitter <entries.csv> [output-dir]")]
    MissingArgument,
}
