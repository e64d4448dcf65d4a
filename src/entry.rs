//! Entry records: ledger actions as read from CSV.
//!
//! Each row is one action a user would take, so a whole session can be
//! replayed from a file:
//!
//! ```text
//! type,item,person,amount
//! person,,Alice,
//! item,Pizza,,
//! contribution,Pizza,Alice,10
//! ```

use serde::Deserialize;

/// Raw entry record as read from CSV.
///
/// All columns other than `type` are optional; which ones are required
/// depends on the entry type.
#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    /// Entry type: person, item, contribution
    #[serde(rename = "type")]
    pub kind: String,

    /// Item name (item and contribution entries)
    pub item: Option<String>,

    /// Participant name (person and contribution entries)
    pub person: Option<String>,

    /// Raw amount (contribution entries); parsed leniently by the ledger
    pub amount: Option<String>,
}

impl EntryRecord {
    /// Parses the raw CSV record into a typed entry.
    ///
    /// Returns `None` for unknown types or when a required name is missing.
    /// A missing amount is not an error; it is coerced like any other
    /// unparsable amount.
    pub fn parse(&self) -> Option<Entry> {
        let kind = self.kind.trim().to_lowercase();

        match kind.as_str() {
            "person" => Some(Entry::Participant(required(&self.person)?)),
            "item" => Some(Entry::Item(required(&self.item)?)),
            "contribution" => Some(Entry::Contribution {
                item: required(&self.item)?,
                participant: required(&self.person)?,
                raw_amount: self
                    .amount
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            }),
            _ => None,
        }
    }
}

fn required(field: &Option<String>) -> Option<String> {
    let trimmed = field.as_deref()?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// A parsed ledger action ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Add a participant.
    Participant(String),

    /// Add an item.
    Item(String),

    /// Set what a participant paid toward an item.
    Contribution {
        item: String,
        participant: String,
        raw_amount: String,
    },
}
