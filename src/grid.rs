//! Summary grid: the ledger and its totals as a rectangular table.
//!
//! Layout:
//!
//! ```text
//! Item        | <participant>...      | Total
//! <item>      | <amount or —>...      | <item total>
//! Grand Total | <person total>...     | <grand total>
//! ```
//!
//! Only a contribution that was never set shows `—`; one set to zero shows
//! `0` in the grid and in exports alike.

use crate::amount::Amount;
use crate::error::Result;
use crate::ledger::Ledger;
use std::fmt;
use std::io::Write;

/// Shown in place of a contribution that was never set.
pub const UNSET_PLACEHOLDER: &str = "—";

/// Header of the first column.
pub const ITEM_HEADER: &str = "Item";

/// Header of the last column.
pub const TOTAL_HEADER: &str = "Total";

/// Label of the final row.
pub const GRAND_TOTAL_LABEL: &str = "Grand Total";

/// A single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(Amount),
}

impl Cell {
    fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    /// Returns the amount if this is a numeric cell.
    pub fn as_amount(&self) -> Option<Amount> {
        match self {
            Cell::Number(amount) => Some(*amount),
            Cell::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(amount) => write!(f, "{}", amount),
        }
    }
}

impl From<Amount> for Cell {
    fn from(amount: Amount) -> Self {
        Cell::Number(amount)
    }
}

/// Header row, one row per item, then the grand total row.
///
/// Every row has `participants + 2` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryGrid {
    rows: Vec<Vec<Cell>>,
}

impl SummaryGrid {
    /// Snapshots `ledger` into a grid.
    pub fn build(ledger: &Ledger) -> Self {
        let totals = ledger.totals();
        let people = ledger.participants();
        let mut rows = Vec::with_capacity(ledger.items().len() + 2);

        let mut header = Vec::with_capacity(people.len() + 2);
        header.push(Cell::text(ITEM_HEADER));
        header.extend(people.iter().map(|p| Cell::text(p)));
        header.push(Cell::text(TOTAL_HEADER));
        rows.push(header);

        for item in ledger.items() {
            let mut row = Vec::with_capacity(people.len() + 2);
            row.push(Cell::text(item));
            row.extend(people.iter().map(|person| {
                ledger
                    .contribution(item, person)
                    .map_or_else(|| Cell::text(UNSET_PLACEHOLDER), Cell::Number)
            }));
            row.push(totals.item_total(item).into());
            rows.push(row);
        }

        let mut footer = Vec::with_capacity(people.len() + 2);
        footer.push(Cell::text(GRAND_TOTAL_LABEL));
        footer.extend(
            totals
                .person_totals()
                .into_iter()
                .map(|(_, total)| Cell::Number(total)),
        );
        footer.push(totals.grand_total().into());
        rows.push(footer);

        SummaryGrid { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn header(&self) -> &[Cell] {
        &self.rows[0]
    }

    /// Rows between the header and the grand total row.
    pub fn item_rows(&self) -> &[Vec<Cell>] {
        &self.rows[1..self.rows.len() - 1]
    }

    /// The grand total row.
    pub fn footer(&self) -> &[Cell] {
        &self.rows[self.rows.len() - 1]
    }

    /// Number of rows, header and footer included.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header().len()
    }

    /// Writes the grid as CSV, one record per row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for row in &self.rows {
            csv_writer.write_record(row.iter().map(Cell::to_string))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Builds the summary grid for the current ledger state.
pub fn build_summary_grid(ledger: &Ledger) -> SummaryGrid {
    SummaryGrid::build(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn num(s: &str) -> Cell {
        Cell::Number(Amount::from_str(s).unwrap())
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_empty_ledger_has_header_and_footer_only() {
        let grid = build_summary_grid(&Ledger::new());

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.header(), [text("Item"), text("Total")]);
        assert!(grid.item_rows().is_empty());
        assert_eq!(grid.footer(), [text("Grand Total"), num("0")]);
    }

    #[test]
    fn test_dinner_grid() {
        let mut ledger = Ledger::new();
        ledger.add_participant("Alice");
        ledger.add_participant("Bob");
        ledger.add_item("Pizza");
        ledger.add_item("Soda");
        ledger.set_contribution("Pizza", "Alice", "10");
        ledger.set_contribution("Pizza", "Bob", "5");
        ledger.set_contribution("Soda", "Alice", "2");

        let grid = build_summary_grid(&ledger);

        assert_eq!(
            grid.header(),
            [text("Item"), text("Alice"), text("Bob"), text("Total")]
        );
        assert_eq!(
            grid.item_rows()[0],
            [text("Pizza"), num("10"), num("5"), num("15")]
        );
        assert_eq!(
            grid.item_rows()[1],
            [text("Soda"), num("2"), text("—"), num("2")]
        );
        assert_eq!(
            grid.footer(),
            [text("Grand Total"), num("12"), num("5"), num("17")]
        );
        assert!(grid.rows().iter().all(|row| row.len() == grid.width()));
    }

    #[test]
    fn test_explicit_zero_is_not_placeholder() {
        let mut ledger = Ledger::new();
        ledger.add_participant("Alice");
        ledger.add_item("Tip");
        ledger.set_contribution("Tip", "Alice", "nope");

        let grid = build_summary_grid(&ledger);
        assert_eq!(grid.item_rows()[0][1], num("0"));
    }

    #[test]
    fn test_maximum_contributions_build_grid() {
        let mut ledger = Ledger::new();
        ledger.add_participant("Alice");
        ledger.add_participant("Bob");
        ledger.add_item("Yacht");
        ledger.set_contribution("Yacht", "Alice", "1000000000000000");
        ledger.set_contribution("Yacht", "Bob", "1000000000000000");

        let grid = build_summary_grid(&ledger);
        assert_eq!(
            grid.footer(),
            [
                text("Grand Total"),
                num("1000000000000000"),
                num("1000000000000000"),
                num("2000000000000000"),
            ]
        );
    }

    #[test]
    fn test_write_csv() {
        let mut ledger = Ledger::new();
        ledger.add_participant("Alice");
        ledger.add_participant("Bob");
        ledger.add_item("Pizza");
        ledger.set_contribution("Pizza", "Alice", "10.50");

        let mut output = Vec::new();
        build_summary_grid(&ledger).write_csv(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(
            lines,
            [
                "Item,Alice,Bob,Total",
                "Pizza,10.5,—,10.5",
                "Grand Total,10.5,0,10.5",
            ]
        );
    }
}
