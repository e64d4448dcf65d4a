//! Replays entry records into a ledger.
//!
//! Rows are applied in file order, one at a time. Bad rows are logged and
//! skipped; only I/O failures stop processing.

use crate::entry::{Entry, EntryRecord};
use crate::error::Result;
use crate::ledger::Ledger;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::Read;

/// A bill splitting session fed from CSV entries.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
}

impl Session {
    /// Creates a session with an empty ledger.
    pub fn new() -> Self {
        Session::default()
    }

    /// Applies entries from a CSV reader in streaming fashion.
    ///
    /// Rows that fail to deserialize or parse are logged at warn level and
    /// skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<EntryRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(entry) => self.apply(entry, row_num),
                    None => warn!("Row {}: Failed to parse entry record", row_num),
                },
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Applies a single parsed entry.
    pub fn apply(&mut self, entry: Entry, row: usize) {
        match entry {
            Entry::Participant(name) => {
                if !self.ledger.add_participant(&name) {
                    debug!("Row {}: Participant {} already present", row, name);
                }
            }
            Entry::Item(name) => {
                if !self.ledger.add_item(&name) {
                    debug!("Row {}: Item {} already present", row, name);
                }
            }
            Entry::Contribution {
                item,
                participant,
                raw_amount,
            } => {
                if self
                    .ledger
                    .set_contribution(&item, &participant, &raw_amount)
                    .is_none()
                {
                    debug!("Row {}: Contribution dropped", row);
                }
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }
}
