//! Roster of carpool participants
//!
//! The roster is the fixed, ordered set of names every balance is keyed by.
//! It also owns the free-text name resolution used when riders are typed in
//! or pulled from a preset.

use crate::error::{CarpoolError, CarpoolResult};

/// Ordered, unique participant names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster, rejecting blank or duplicate (case-insensitive) names
    pub fn new<I, S>(names: I) -> CarpoolResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated: Vec<String> = Vec::new();

        for name in names {
            let name: String = name.into();
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CarpoolError::Validation(
                    "Participant name cannot be empty".into(),
                ));
            }
            if validated.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
                return Err(CarpoolError::Validation(format!(
                    "Duplicate participant name: {}",
                    name
                )));
            }
            validated.push(name);
        }

        if validated.is_empty() {
            return Err(CarpoolError::Validation(
                "The roster needs at least one participant".into(),
            ));
        }

        Ok(Self { names: validated })
    }

    /// Names in roster order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact membership check
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Resolve free text to a roster entry
    ///
    /// An exact (case-insensitive) match wins. Otherwise the input must be a
    /// case-insensitive substring of exactly one name.
    pub fn resolve(&self, input: &str) -> CarpoolResult<&str> {
        let needle = input.trim();
        if needle.is_empty() {
            return Err(CarpoolError::UnknownParticipant(input.to_string()));
        }

        if let Some(exact) = self.names.iter().find(|n| n.eq_ignore_ascii_case(needle)) {
            return Ok(exact.as_str());
        }

        let needle_upper = needle.to_uppercase();
        let candidates: Vec<&String> = self
            .names
            .iter()
            .filter(|n| n.to_uppercase().contains(&needle_upper))
            .collect();

        match candidates.as_slice() {
            [] => Err(CarpoolError::UnknownParticipant(needle.to_string())),
            [single] => Ok(single.as_str()),
            _ => Err(CarpoolError::AmbiguousParticipant {
                input: needle.to_string(),
                candidates: candidates.into_iter().cloned().collect(),
            }),
        }
    }
}
