use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, Result};
use crate::models::{Candidate, Unit};

/// Immutable candidate attributes plus per-unit eligibility rosters.
///
/// The registry is the single owner of candidate data; queues and the pick
/// log carry ids only and resolve them here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRegistry {
    candidates: HashMap<String, Candidate>,
    rosters: HashMap<Unit, HashSet<String>>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: Candidate) {
        self.candidates.insert(candidate.id.clone(), candidate);
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.get(id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Replace a unit's eligibility roster. Every id must be registered.
    pub fn set_roster(&mut self, unit: Unit, ids: Vec<String>) -> Result<()> {
        let mut roster = HashSet::with_capacity(ids.len());
        for id in ids {
            if !self.candidates.contains_key(&id) {
                return Err(DraftError::UnknownCandidate {
                    id,
                    context: format!("roster of unit {unit}"),
                });
            }
            roster.insert(id);
        }
        self.rosters.insert(unit, roster);
        Ok(())
    }

    pub fn roster(&self, unit: Unit) -> Option<&HashSet<String>> {
        self.rosters.get(&unit)
    }

    /// Whether `unit` may claim the candidate with this id.
    pub fn is_eligible(&self, unit: Unit, id: &str) -> bool {
        self.rosters.get(&unit).is_some_and(|roster| roster.contains(id))
    }
}
