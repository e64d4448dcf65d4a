//! Derived sums over a ledger.
//!
//! Nothing is cached; every call walks the current ledger state. Absent
//! contributions count as zero.

use crate::amount::Amount;
use crate::ledger::Ledger;

/// Read-only totals view borrowed from a [`Ledger`].
#[derive(Debug, Clone, Copy)]
pub struct Totals<'a> {
    ledger: &'a Ledger,
}

impl<'a> Totals<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Totals { ledger }
    }

    /// Sum of every participant's contribution to `item`.
    pub fn item_total(&self, item: &str) -> Amount {
        self.ledger
            .participants()
            .iter()
            .filter_map(|person| self.ledger.contribution(item, person))
            .sum()
    }

    /// Sum of `participant`'s contributions across every item.
    pub fn person_total(&self, participant: &str) -> Amount {
        self.ledger
            .items()
            .iter()
            .filter_map(|item| self.ledger.contribution(item, participant))
            .sum()
    }

    /// Sum of all item totals.
    pub fn grand_total(&self) -> Amount {
        self.ledger
            .items()
            .iter()
            .map(|item| self.item_total(item))
            .sum()
    }

    /// Sum of all person totals.
    ///
    /// Always equal to [`Totals::grand_total`]; fixed-point addition makes the
    /// summation order irrelevant.
    pub fn grand_total_by_person(&self) -> Amount {
        self.ledger
            .participants()
            .iter()
            .map(|person| self.person_total(person))
            .sum()
    }

    /// Per-participant totals in participant order.
    pub fn person_totals(&self) -> Vec<(&'a str, Amount)> {
        self.ledger
            .participants()
            .iter()
            .map(|person| (person.as_str(), self.person_total(person)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinner() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_participant("Alice");
        ledger.add_participant("Bob");
        ledger.add_item("Pizza");
        ledger.add_item("Soda");
        ledger.set_contribution("Pizza", "Alice", "10");
        ledger.set_contribution("Pizza", "Bob", "5");
        ledger.set_contribution("Soda", "Alice", "2");
        ledger
    }

    #[test]
    fn test_empty_ledger_totals_are_zero() {
        let ledger = Ledger::new();
        let totals = ledger.totals();
        assert!(totals.grand_total().is_zero());
        assert!(totals.grand_total_by_person().is_zero());
        assert!(totals.item_total("Pizza").is_zero());
        assert!(totals.person_totals().is_empty());
    }

    #[test]
    fn test_dinner_totals() {
        let ledger = dinner();
        let totals = ledger.totals();

        assert_eq!(totals.item_total("Pizza").to_string(), "15");
        assert_eq!(totals.item_total("Soda").to_string(), "2");
        assert_eq!(totals.person_total("Alice").to_string(), "12");
        assert_eq!(totals.person_total("Bob").to_string(), "5");
        assert_eq!(totals.grand_total().to_string(), "17");
        assert_eq!(totals.grand_total(), totals.grand_total_by_person());
    }

    #[test]
    fn test_overwrite_does_not_accumulate() {
        let mut ledger = dinner();
        ledger.set_contribution("Pizza", "Alice", "1");

        let totals = ledger.totals();
        assert_eq!(totals.item_total("Pizza").to_string(), "6");
        assert_eq!(totals.grand_total().to_string(), "8");
    }

    #[test]
    fn test_maximum_contributions_do_not_overflow() {
        let mut ledger = Ledger::new();
        for person in ["Alice", "Bob", "Carol"] {
            ledger.add_participant(person);
        }
        ledger.add_item("Yacht");
        ledger.add_item("Marina");
        for item in ["Yacht", "Marina"] {
            for person in ["Alice", "Bob", "Carol"] {
                ledger.set_contribution(item, person, "1000000000000000");
            }
        }
        ledger.set_contribution("Marina", "Carol", "79228162514264337593543950335");

        let totals = ledger.totals();
        assert_eq!(totals.item_total("Yacht").to_string(), "3000000000000000");
        assert_eq!(totals.grand_total().to_string(), "5000000000000000");
        assert_eq!(totals.grand_total(), totals.grand_total_by_person());
        assert!(ledger.contribution("Marina", "Carol").unwrap().is_zero());
    }

    #[test]
    fn test_unknown_names_total_zero() {
        let ledger = dinner();
        let totals = ledger.totals();
        assert!(totals.item_total("Cake").is_zero());
        assert!(totals.person_total("Carol").is_zero());
    }

    #[test]
    fn test_person_totals_follow_insertion_order() {
        let ledger = dinner();
        let names: Vec<_> = ledger
            .totals()
            .person_totals()
            .into_iter()
            .map(|(name, total)| format!("{}={}", name, total))
            .collect();
        assert_eq!(names, ["Alice=12", "Bob=5"]);
    }
}
