//! Spreadsheet export of the summary grid.
//!
//! Encoding is behind [`SpreadsheetEncoder`] so the grid layout does not
//! depend on a particular file format. [`XlsxEncoder`] is the default.

use crate::error::{BillError, Result};
use crate::grid::{Cell, SummaryGrid};
use crate::ledger::Ledger;
use log::info;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

/// Sheet name used for exports.
pub const SHEET_NAME: &str = "Bill Summary";

/// File name used for exports.
pub const EXPORT_FILE_NAME: &str = "BillSummary.xlsx";

const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;

/// Turns a rectangular grid into spreadsheet file bytes.
pub trait SpreadsheetEncoder {
    fn encode(&self, grid: &SummaryGrid, sheet_name: &str) -> Result<Vec<u8>>;
}

/// Encodes grids as a single-sheet `.xlsx` workbook.
///
/// Text cells become strings, amounts become numbers. The header row is bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxEncoder;

impl SpreadsheetEncoder for XlsxEncoder {
    fn encode(&self, grid: &SummaryGrid, sheet_name: &str) -> Result<Vec<u8>> {
        if grid.height() > MAX_ROWS || grid.width() > MAX_COLS {
            return Err(BillError::GridTooLarge {
                rows: grid.height(),
                cols: grid.width(),
            });
        }

        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet_name)?;

            for (row_idx, row) in grid.rows().iter().enumerate() {
                // Bounds checked above
                let r = row_idx as RowNum;
                for (col_idx, cell) in row.iter().enumerate() {
                    let c = col_idx as ColNum;
                    match cell {
                        Cell::Text(text) if row_idx == 0 => {
                            worksheet.write_string_with_format(r, c, text.as_str(), &bold)?;
                        }
                        Cell::Text(text) => {
                            worksheet.write_string(r, c, text.as_str())?;
                        }
                        Cell::Number(amount) => match amount.to_f64() {
                            Some(n) => {
                                worksheet.write_number(r, c, n)?;
                            }
                            None => {
                                worksheet.write_string(r, c, amount.to_string().as_str())?;
                            }
                        },
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

/// Naming for exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub sheet_name: String,
    pub file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            sheet_name: SHEET_NAME.to_string(),
            file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Encodes the ledger summary and writes it into `dir`.
///
/// Returns the path of the written file. Encoder and I/O failures are
/// returned as-is.
pub fn export_summary(
    ledger: &Ledger,
    encoder: &dyn SpreadsheetEncoder,
    options: &ExportOptions,
    dir: &Path,
) -> Result<PathBuf> {
    let grid = SummaryGrid::build(ledger);
    let bytes = encoder.encode(&grid, &options.sheet_name)?;

    let path = dir.join(&options.file_name);
    fs::write(&path, &bytes)?;

    info!(
        "Exported {} item rows ({} bytes) to {}",
        grid.item_rows().len(),
        bytes.len(),
        path.display()
    );
    Ok(path)
}
