//! The session ledger: participants, items and who paid what.
//!
//! Names are kept in insertion order for display. Contributions are sparse;
//! a missing entry reads as "unset" and sums as zero.

use crate::amount::Amount;
use crate::totals::Totals;
use log::{debug, warn};
use std::collections::HashMap;

/// In-memory record of one bill splitting session.
///
/// # Invariants
///
/// - `participants` and `items` contain no duplicates and no empty names
/// - Every stored contribution references a known item and participant
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Participant names in first-insertion order.
    participants: Vec<String>,

    /// Item names in first-insertion order.
    items: Vec<String>,

    /// Contributions keyed by item, then participant.
    contributions: HashMap<String, HashMap<String, Amount>>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Adds a participant.
    ///
    /// Returns `false` without changing anything if `name` is empty or
    /// already present.
    pub fn add_participant(&mut self, name: &str) -> bool {
        if name.is_empty() || self.has_participant(name) {
            debug!("Ignoring participant {:?}: empty or duplicate", name);
            return false;
        }

        self.participants.push(name.to_string());
        true
    }

    /// Adds an item. Same contract as [`Ledger::add_participant`].
    pub fn add_item(&mut self, name: &str) -> bool {
        if name.is_empty() || self.has_item(name) {
            debug!("Ignoring item {:?}: empty or duplicate", name);
            return false;
        }

        self.items.push(name.to_string());
        true
    }

    /// Records what `participant` paid toward `item`.
    ///
    /// `raw_amount` is parsed leniently: anything that is not a non-negative
    /// decimal is stored as zero. An existing contribution for the same pair
    /// is overwritten, not accumulated.
    ///
    /// Returns the stored amount, or `None` if the item or participant has
    /// not been added; such contributions are dropped.
    pub fn set_contribution(
        &mut self,
        item: &str,
        participant: &str,
        raw_amount: &str,
    ) -> Option<Amount> {
        if !self.has_item(item) || !self.has_participant(participant) {
            warn!(
                "Ignoring contribution of {:?} by {:?} to {:?}: unknown item or participant",
                raw_amount, participant, item
            );
            return None;
        }

        let amount = Amount::parse_lenient(raw_amount);
        self.contributions
            .entry(item.to_string())
            .or_default()
            .insert(participant.to_string(), amount);

        debug!("Set contribution of {} by {} to {}", amount, participant, item);
        Some(amount)
    }

    /// Returns the contribution for a pair, or `None` if it was never set.
    pub fn contribution(&self, item: &str, participant: &str) -> Option<Amount> {
        self.contributions
            .get(item)
            .and_then(|by_person| by_person.get(participant))
            .copied()
    }

    /// Participant names in insertion order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Item names in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    /// Number of (item, participant) pairs with a recorded contribution.
    pub fn contribution_count(&self) -> usize {
        self.contributions.values().map(HashMap::len).sum()
    }

    /// Returns a totals view over the current state.
    pub fn totals(&self) -> Totals<'_> {
        Totals::new(self)
    }
}
