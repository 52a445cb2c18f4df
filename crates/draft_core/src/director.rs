use std::collections::VecDeque;

use crate::models::{Candidate, Track, Unit};

/// The operator's answer to a suggested internal pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Commit the suggestion as-is.
    Accept,
    /// Commit a different candidate, attributed to the given track.
    Override { candidate_id: String, track: Track },
}

/// The human (or scripted) collaborator driving the draft.
///
/// Both calls block until an answer is available. Answers are validated by
/// the state machine against the eligibility rosters; invalid answers cause
/// the same call to be repeated, so implementations must be able to answer
/// more than once per turn.
pub trait DraftDirector {
    /// The candidate claimed by a rival unit at its turn.
    fn request_unit_pick(&mut self, unit: Unit) -> String;

    /// Confirm or override the resolver's suggestion for an own-unit turn.
    fn confirm_or_override(&mut self, suggestion: &Candidate, track: Track) -> Decision;
}

/// Replays pre-recorded answers; used by tests and by the CLI's replay mode
/// to re-run a draft without an operator.
#[derive(Debug, Default)]
pub struct ScriptedDirector {
    unit_picks: VecDeque<String>,
    decisions: VecDeque<Decision>,
}

impl ScriptedDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_unit_pick(&mut self, id: impl Into<String>) -> &mut Self {
        self.unit_picks.push_back(id.into());
        self
    }

    pub fn push_decision(&mut self, decision: Decision) -> &mut Self {
        self.decisions.push_back(decision);
        self
    }
}

impl DraftDirector for ScriptedDirector {
    fn request_unit_pick(&mut self, unit: Unit) -> String {
        self.unit_picks
            .pop_front()
            .unwrap_or_else(|| panic!("script has no pick left for unit {unit}"))
    }

    fn confirm_or_override(&mut self, _suggestion: &Candidate, _track: Track) -> Decision {
        // An exhausted script accepts everything, which keeps happy-path
        // scripts short.
        self.decisions.pop_front().unwrap_or(Decision::Accept)
    }
}
