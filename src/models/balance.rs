//! Per-participant balance ledger
//!
//! A balance maps every roster participant to the amount they owe for a given
//! scope (a trip, a week or the whole carpool). The key set is fixed at
//! construction and never changes; addition is the only way two balances
//! combine.

use std::fmt;

use crate::error::{CarpoolError, CarpoolResult};

use super::amount::{Amount, CENT};
use super::roster::Roster;

/// Amount owed by each participant, in roster order
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    entries: Vec<(String, Amount)>,
}

impl Balance {
    /// Every roster participant owes nothing
    pub fn zero(roster: &Roster) -> Self {
        Self::from_fn(roster, |_| Amount::zero())
    }

    /// Build a balance by computing each participant's amount
    pub fn from_fn<F>(roster: &Roster, mut amount_for: F) -> Self
    where
        F: FnMut(&str) -> Amount,
    {
        let entries = roster
            .names()
            .iter()
            .map(|name| (name.clone(), amount_for(name)))
            .collect();
        Self { entries }
    }

    /// Element-wise sum of two balances over the same roster
    pub fn add(&self, other: &Balance) -> CarpoolResult<Balance> {
        if !self.same_participants(other) {
            return Err(CarpoolError::RosterMismatch);
        }

        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|((name, a), (_, b))| (name.clone(), *a + *b))
            .collect();
        Ok(Self { entries })
    }

    /// Amount owed by `name`
    pub fn get(&self, name: &str) -> CarpoolResult<Amount> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, amount)| *amount)
            .ok_or_else(|| CarpoolError::UnknownParticipant(name.to_string()))
    }

    /// Overwrite the amount owed by `name`
    pub fn set(&mut self, name: &str, value: Amount) -> CarpoolResult<()> {
        if !value.is_valid_share() {
            return Err(CarpoolError::Validation(format!(
                "Invalid amount {} for {}",
                value.value(),
                name
            )));
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| CarpoolError::UnknownParticipant(name.to_string()))?;
        entry.1 = value;
        Ok(())
    }

    /// Participants and amounts in roster order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all participants
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|(_, amount)| amount.is_zero())
    }

    /// Equal participants, and every amount within a cent
    pub fn approx_eq(&self, other: &Balance) -> bool {
        self.same_participants(other)
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((_, a), (_, b))| a.approx_eq(*b, CENT))
    }

    fn same_participants(&self, other: &Balance) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((a, _), (b, _))| a == b)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, amount) in &self.entries {
            writeln!(f, "{}: {}", name, amount)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["A", "B", "C"]).unwrap()
    }

    fn balance(values: [f64; 3]) -> Balance {
        let roster = roster();
        let mut balance = Balance::zero(&roster);
        for (name, value) in roster.names().iter().zip(values) {
            balance.set(name, Amount::new(value)).unwrap();
        }
        balance
    }

    #[test]
    fn test_zero_has_every_participant() {
        let zero = Balance::zero(&roster());
        assert_eq!(zero.len(), 3);
        assert!(zero.is_all_zero());
        assert_eq!(zero.participants().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_is_element_wise() {
        let a = balance([1.0, 2.5, 0.0]);
        let b = balance([0.5, 0.25, 3.0]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get("A").unwrap(), Amount::new(1.5));
        assert_eq!(sum.get("B").unwrap(), Amount::new(2.75));
        assert_eq!(sum.get("C").unwrap(), Amount::new(3.0));
    }

    #[test]
    fn test_add_is_commutative_and_associative() {
        let a = balance([1.25, 0.0, 4.0]);
        let b = balance([2.0, 3.5, 0.0]);
        let c = balance([0.75, 1.0, 6.25]);

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn test_add_rejects_different_rosters() {
        let a = Balance::zero(&roster());
        let b = Balance::zero(&Roster::new(["A", "B"]).unwrap());
        assert!(matches!(a.add(&b), Err(CarpoolError::RosterMismatch)));

        let c = Balance::zero(&Roster::new(["A", "B", "D"]).unwrap());
        assert!(matches!(a.add(&c), Err(CarpoolError::RosterMismatch)));
    }

    #[test]
    fn test_get_set_unknown_participant() {
        let mut b = Balance::zero(&roster());
        assert!(matches!(b.get("Z"), Err(CarpoolError::UnknownParticipant(_))));
        assert!(matches!(
            b.set("Z", Amount::new(1.0)),
            Err(CarpoolError::UnknownParticipant(_))
        ));
    }

    #[test]
    fn test_set_rejects_negative() {
        let mut b = Balance::zero(&roster());
        assert!(b.set("A", Amount::new(-1.0)).is_err());
        assert!(b.get("A").unwrap().is_zero());
    }

    #[test]
    fn test_total_and_display() {
        let b = balance([1.0, 12.5, 0.0]);
        assert_eq!(b.total(), Amount::new(13.5));
        assert_eq!(b.to_string(), "A: 1.00\nB: 12.50\nC: 0.00\n");
    }

    #[test]
    fn test_approx_eq_tolerates_rounding() {
        let exact = balance([10.0 / 3.0, 0.0, 0.0]);
        let rounded = balance([3.33, 0.0, 0.0]);
        assert!(exact.approx_eq(&rounded));
        assert!(!exact.approx_eq(&balance([3.4, 0.0, 0.0])));
    }
}
