use serde::{Deserialize, Serialize};

/// Minimal medical profile for combat assignments.
///
/// Everything equal or above this value is considered combat-fit.
pub const COMBAT_MEDICAL_THRESHOLD: u8 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A draft candidate with the attributes known at setup time.
///
/// Candidates are immutable once loaded; everything downstream (queues,
/// pick log) refers to them by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub medical_profile: u8,
    pub psych_score: u32,
    /// Candidates flagged for restricted handling can only be picked
    /// inside a fixed turn window (see `RestrictedWindowPolicy`).
    pub restricted_handling: bool,
}

impl Candidate {
    /// Combat eligibility is a pure function of gender and medical profile:
    /// female candidates are not assigned combat roles, and the medical
    /// profile must meet the combat threshold.
    pub fn is_combat_eligible(&self) -> bool {
        self.gender != Gender::Female && self.medical_profile >= COMBAT_MEDICAL_THRESHOLD
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(gender: Gender, medical_profile: u8) -> Candidate {
        Candidate {
            id: "100001".to_string(),
            first_name: "Avi".to_string(),
            last_name: "Cohen".to_string(),
            gender,
            medical_profile,
            psych_score: 56,
            restricted_handling: false,
        }
    }

    #[test]
    fn combat_requires_threshold_profile() {
        assert!(candidate(Gender::Male, 72).is_combat_eligible());
        assert!(candidate(Gender::Male, 97).is_combat_eligible());
        assert!(!candidate(Gender::Male, 71).is_combat_eligible());
    }

    #[test]
    fn combat_excludes_female_candidates() {
        assert!(!candidate(Gender::Female, 97).is_combat_eligible());
    }
}
