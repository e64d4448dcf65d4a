//! # Bill Splitter
//!
//! An in-memory ledger for splitting a shared bill. Participants and items
//! are added freely, each participant's contribution to each item is
//! recorded, and per-item, per-person and grand totals are derived on demand.
//! The summary can be exported as an `.xlsx` workbook.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 4 decimal places via `rust_decimal`
//! - **Lenient input**: Unparsable amounts become zero, never errors
//! - **Strict invariants**: Grand total by item equals grand total by person
//! - **Deterministic output**: Rows and columns follow insertion order
//!
//! ## Example
//!
//! ```
//! use bill_splitter::{build_summary_grid, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_participant("Alice");
//! ledger.add_item("Pizza");
//! ledger.set_contribution("Pizza", "Alice", "12.50");
//!
//! assert_eq!(ledger.totals().grand_total().to_string(), "12.5");
//! assert_eq!(build_summary_grid(&ledger).height(), 3);
//! ```

pub mod amount;
pub mod entry;
pub mod error;
pub mod export;
pub mod grid;
pub mod ledger;
pub mod session;
pub mod totals;

pub use amount::{Amount, ParseAmountError};
pub use entry::{Entry, EntryRecord};
pub use error::{BillError, Result};
pub use export::{
    export_summary, ExportOptions, SpreadsheetEncoder, XlsxEncoder, EXPORT_FILE_NAME, SHEET_NAME,
};
pub use grid::{build_summary_grid, Cell, SummaryGrid, UNSET_PLACEHOLDER};
pub use ledger::Ledger;
pub use session::Session;
pub use totals::Totals;
