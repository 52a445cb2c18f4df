use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::deadline::{DeadlineSimulator, PickPolicy, RestrictedWindowPolicy};
use crate::director::{Decision, DraftDirector};
use crate::error::{DraftError, Result};
use crate::models::{PickRecord, Track, Unit};
use crate::queue::TrackQueue;
use crate::registry::CandidateRegistry;
use crate::resolver::{resolve_slot, Resolution};

/// Absolute turn index after which restricted-handling candidates can no
/// longer be picked. Overridable through `DraftConfig`.
pub const DEFAULT_RESTRICTED_CUTOFF: usize = 100;

/// Process-wide knobs of a draft run, passed explicitly so the core stays
/// testable in isolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DraftConfig {
    pub own_unit: Unit,
    pub restricted_cutoff: usize,
}

impl DraftConfig {
    pub fn new(own_unit: Unit) -> Self {
        Self { own_unit, restricted_cutoff: DEFAULT_RESTRICTED_CUTOFF }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftPhase {
    Setup,
    Active,
    Terminated,
}

/// What a single `advance_one_turn` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Committed(PickRecord),
    Terminated,
}

/// The draft state machine.
///
/// Holds the shared turn pointer, the turn orders and the pick log, and
/// drives the resolver at every own-unit turn. All collaborator input comes
/// through the injected [`DraftDirector`].
pub struct Draft {
    config: DraftConfig,
    registry: CandidateRegistry,
    queues: HashMap<Track, TrackQueue>,
    turn_order: Vec<Unit>,
    internal_order: Vec<Track>,
    remaining_internal: Vec<Track>,
    pick_log: Vec<PickRecord>,
    phase: DraftPhase,
    current_turn: usize,
    internal_picks: usize,
    policy: Box<dyn PickPolicy>,
}

impl Draft {
    pub fn new(
        config: DraftConfig,
        registry: CandidateRegistry,
        queues: HashMap<Track, TrackQueue>,
        turn_order: Vec<Unit>,
        internal_order: Vec<Track>,
    ) -> Self {
        let remaining_internal = internal_order.clone();
        let policy = Box::new(RestrictedWindowPolicy { cutoff: config.restricted_cutoff });
        Self {
            config,
            registry,
            queues,
            turn_order,
            internal_order,
            remaining_internal,
            pick_log: Vec::new(),
            phase: DraftPhase::Setup,
            current_turn: 0,
            internal_picks: 0,
            policy,
        }
    }

    /// Swap in a different feasibility policy before starting.
    pub fn with_policy(mut self, policy: Box<dyn PickPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the static inputs and move `Setup -> Active`.
    pub fn start(&mut self) -> Result<()> {
        self.validate()?;
        self.phase = DraftPhase::Active;
        info!(
            turns = self.turn_order.len(),
            internal_turns = self.internal_order.len(),
            candidates = self.registry.len(),
            "draft activated"
        );
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for unit in Unit::all() {
            if self.registry.roster(*unit).map_or(true, |roster| roster.is_empty()) {
                return Err(DraftError::EmptyRoster { unit: *unit });
            }
        }
        for track in Track::real_tracks() {
            if self.queues.get(track).map_or(true, TrackQueue::is_empty) {
                return Err(DraftError::EmptyPriorityList { track: *track });
            }
        }
        if self.turn_order.is_empty() {
            return Err(DraftError::EmptyTurnOrder);
        }
        if self.internal_order.is_empty() {
            return Err(DraftError::EmptyInternalOrder);
        }
        if self.remaining_internal != self.internal_order {
            return Err(DraftError::InternalOrderMismatch);
        }
        Ok(())
    }

    /// Process exactly one turn of the draft.
    pub fn advance_one_turn(&mut self, director: &mut dyn DraftDirector) -> Result<TurnOutcome> {
        if self.phase != DraftPhase::Active {
            return Err(DraftError::NotActive);
        }

        let unit = self.turn_order[self.current_turn];
        info!(turn = self.current_turn + 1, %unit, "processing turn");

        if unit != self.config.own_unit {
            // A rival's turn: take their claim, re-requesting until the id
            // is on their roster.
            let candidate_id = loop {
                let id = director.request_unit_pick(unit);
                if self.registry.is_eligible(unit, &id) {
                    break id;
                }
                warn!(%unit, %id, "claimed candidate not on unit roster, re-requesting");
            };
            let record = self.commit(candidate_id, unit, Track::External);
            return Ok(TurnOutcome::Committed(record));
        }

        // Our turn: resolve which track's suggestion must be acted on.
        info!(internal_pick = self.internal_picks + 1, "internal pick");
        let simulator = DeadlineSimulator::new(
            &self.turn_order,
            &self.registry,
            self.config.own_unit,
            self.policy.as_ref(),
        );
        let resolution = resolve_slot(
            &mut self.remaining_internal,
            &mut self.queues,
            &simulator,
            &self.registry,
            self.current_turn,
        );

        let (suggestion_id, suggested_track) = match resolution {
            Resolution::RoundOver => {
                info!("internal round over, terminating draft");
                self.phase = DraftPhase::Terminated;
                return Ok(TurnOutcome::Terminated);
            }
            Resolution::Commit { candidate_id, track } => (candidate_id, track),
        };

        let suggestion = self
            .registry
            .get(&suggestion_id)
            .ok_or_else(|| DraftError::UnknownCandidate {
                id: suggestion_id.clone(),
                context: format!("priority list of track {suggested_track}"),
            })?
            .clone();

        // Present the suggestion; overrides are validated against our
        // roster and the tracks still owed a pick before anything commits.
        let (candidate_id, track) = loop {
            match director.confirm_or_override(&suggestion, suggested_track) {
                Decision::Accept => break (suggestion.id.clone(), suggested_track),
                Decision::Override { candidate_id, track } => {
                    if !self.registry.is_eligible(self.config.own_unit, &candidate_id) {
                        warn!(id = %candidate_id, "override not on own roster, re-requesting");
                        continue;
                    }
                    if !self.remaining_internal.contains(&track) {
                        warn!(%track, "override track not owed a pick, re-requesting");
                        continue;
                    }
                    break (candidate_id, track);
                }
            }
        };

        let record = self.commit(candidate_id, self.config.own_unit, track);
        Ok(TurnOutcome::Committed(record))
    }

    /// Run turns until the draft terminates. Starts the draft first if it
    /// is still in setup.
    pub fn run(&mut self, director: &mut dyn DraftDirector) -> Result<()> {
        if self.phase == DraftPhase::Setup {
            self.start()?;
        }
        while self.is_active() {
            self.advance_one_turn(director)?;
        }
        Ok(())
    }

    fn commit(&mut self, candidate_id: String, unit: Unit, track: Track) -> PickRecord {
        let record = PickRecord { candidate_id, unit, track, turn: self.current_turn };
        info!(
            id = %record.candidate_id,
            %unit,
            %track,
            turn = record.turn + 1,
            "pick committed"
        );
        self.pick_log.push(record.clone());

        // A claimed candidate disappears from every priority list; the
        // removal also resets the peek cursors for the next resolution.
        for queue in self.queues.values_mut() {
            queue.remove_candidate(&record.candidate_id);
        }

        if unit == self.config.own_unit {
            if let Some(pos) = self.remaining_internal.iter().position(|t| *t == track) {
                self.remaining_internal.remove(pos);
            }
            self.internal_picks += 1;
        }

        self.current_turn += 1;
        if self.current_turn >= self.turn_order.len() {
            info!("turn order exhausted, terminating draft");
            self.phase = DraftPhase::Terminated;
        } else if self.remaining_internal.is_empty() {
            info!("internal turn order exhausted, terminating draft");
            self.phase = DraftPhase::Terminated;
        }
        record
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == DraftPhase::Active
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn registry(&self) -> &CandidateRegistry {
        &self.registry
    }

    /// Zero-based pointer to the next turn to be processed.
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    pub fn internal_pick_count(&self) -> usize {
        self.internal_picks
    }

    pub fn remaining_internal(&self) -> &[Track] {
        &self.remaining_internal
    }

    pub fn turn_order(&self) -> &[Unit] {
        &self.turn_order
    }

    pub fn pick_log(&self) -> &[PickRecord] {
        &self.pick_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::director::ScriptedDirector;
    use crate::models::{Candidate, Gender};

    const OWN: Unit = Unit::Airborne;
    const RIVAL: Unit = Unit::Armor;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            first_name: "Tal".to_string(),
            last_name: "Peled".to_string(),
            gender: Gender::Male,
            medical_profile: 77,
            psych_score: 54,
            restricted_handling: false,
        }
    }

    /// Draft over candidates "1".."8": Apollo [1,2], Citadel [3,4],
    /// Summit [5,6], Horizon [7,8]; every unit's roster holds all of them
    /// except where a test narrows it.
    fn build_draft(
        turn_order: Vec<Unit>,
        internal_order: Vec<Track>,
        rival_roster: &[&str],
    ) -> Draft {
        let ids: Vec<String> = (1..=8).map(|n| n.to_string()).collect();
        let mut registry = CandidateRegistry::new();
        for id in &ids {
            registry.insert(candidate(id));
        }
        for unit in Unit::all() {
            if *unit == RIVAL {
                registry
                    .set_roster(*unit, rival_roster.iter().map(|id| id.to_string()).collect())
                    .unwrap();
            } else {
                registry.set_roster(*unit, ids.clone()).unwrap();
            }
        }
        let mut queues = HashMap::new();
        for (track, pair) in Track::real_tracks().iter().zip([["1", "2"], ["3", "4"], ["5", "6"], ["7", "8"]]) {
            queues.insert(
                *track,
                TrackQueue::new(*track, pair.iter().map(|id| id.to_string()).collect()),
            );
        }
        Draft::new(DraftConfig::new(OWN), registry, queues, turn_order, internal_order)
    }

    #[test]
    fn validation_rejects_empty_rosters() {
        let mut draft = build_draft(vec![OWN], vec![Track::Apollo], &[]);
        assert!(matches!(draft.start(), Err(DraftError::EmptyRoster { unit: RIVAL })));
    }

    #[test]
    fn validation_rejects_empty_turn_order() {
        let mut draft = build_draft(vec![], vec![Track::Apollo], &["1"]);
        assert!(matches!(draft.start(), Err(DraftError::EmptyTurnOrder)));
    }

    #[test]
    fn rival_turn_revalidates_until_roster_pick() {
        let mut draft = build_draft(vec![RIVAL, OWN], vec![Track::Apollo], &["3"]);
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        director.push_unit_pick("1"); // not on the rival roster
        director.push_unit_pick("3");
        let outcome = draft.advance_one_turn(&mut director).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Committed(PickRecord {
                candidate_id: "3".to_string(),
                unit: RIVAL,
                track: Track::External,
                turn: 0,
            })
        );
    }

    #[test]
    fn rival_pick_purges_every_priority_list() {
        let mut draft = build_draft(vec![RIVAL, OWN], vec![Track::Citadel], &["3"]);
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        director.push_unit_pick("3");
        draft.advance_one_turn(&mut director).unwrap();
        // "3" led Citadel's list; the own turn must now suggest "4".
        let outcome = draft.advance_one_turn(&mut director).unwrap();
        match outcome {
            TurnOutcome::Committed(record) => {
                assert_eq!(record.candidate_id, "4");
                assert_eq!(record.track, Track::Citadel);
                assert_eq!(record.unit, OWN);
            }
            other => panic!("expected a commit, got {other:?}"),
        }
    }

    #[test]
    fn own_turn_commits_the_sole_urgent_suggestion() {
        // The rival can claim "1" at turn 1, so Apollo's suggestion cannot
        // wait even though Citadel is also owed a pick.
        let mut draft = build_draft(
            vec![OWN, RIVAL, OWN],
            vec![Track::Citadel, Track::Apollo],
            &["1"],
        );
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        let outcome = draft.advance_one_turn(&mut director).unwrap();
        match outcome {
            TurnOutcome::Committed(record) => {
                assert_eq!(record.candidate_id, "1");
                assert_eq!(record.track, Track::Apollo);
            }
            other => panic!("expected a commit, got {other:?}"),
        }
        assert_eq!(draft.remaining_internal(), [Track::Citadel]);
        assert_eq!(draft.internal_pick_count(), 1);
    }

    #[test]
    fn override_is_validated_then_committed() {
        let mut draft = build_draft(vec![OWN], vec![Track::Apollo, Track::Summit], &["1"]);
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        // First override names a track not owed a pick, second one sticks.
        director.push_decision(Decision::Override {
            candidate_id: "5".to_string(),
            track: Track::Horizon,
        });
        director.push_decision(Decision::Override {
            candidate_id: "5".to_string(),
            track: Track::Summit,
        });
        let outcome = draft.advance_one_turn(&mut director).unwrap();
        match outcome {
            TurnOutcome::Committed(record) => {
                assert_eq!(record.candidate_id, "5");
                assert_eq!(record.track, Track::Summit);
            }
            other => panic!("expected a commit, got {other:?}"),
        }
        assert_eq!(draft.remaining_internal(), [Track::Apollo]);
    }

    #[test]
    fn log_length_tracks_the_turn_pointer() {
        let mut draft = build_draft(
            vec![RIVAL, OWN, RIVAL, OWN],
            vec![Track::Apollo, Track::Citadel],
            &["5", "6"],
        );
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        director.push_unit_pick("5");
        director.push_unit_pick("6");
        while draft.is_active() {
            assert_eq!(draft.pick_log().len(), draft.current_turn());
            let before = draft.current_turn();
            draft.advance_one_turn(&mut director).unwrap();
            assert!(draft.current_turn() >= before);
        }
        assert_eq!(draft.pick_log().len(), draft.current_turn());
    }

    #[test]
    fn no_candidate_is_picked_twice() {
        let mut draft = build_draft(
            vec![RIVAL, OWN, RIVAL, OWN],
            vec![Track::Apollo, Track::Citadel],
            &["1", "3", "5"],
        );
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        // The rival takes the head of Apollo's list first; our turn then
        // claims contested "3" before the rival's second turn can.
        director.push_unit_pick("1");
        director.push_unit_pick("5");
        draft.run(&mut director).unwrap();
        let mut seen = std::collections::HashSet::new();
        for record in draft.pick_log() {
            assert!(seen.insert(record.candidate_id.clone()), "duplicate pick");
        }
    }

    #[test]
    fn turn_order_exhaustion_terminates_cleanly() {
        let mut draft = build_draft(vec![RIVAL], vec![Track::Apollo], &["1"]);
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        director.push_unit_pick("1");
        draft.advance_one_turn(&mut director).unwrap();
        assert_eq!(draft.phase(), DraftPhase::Terminated);
        assert!(matches!(
            draft.advance_one_turn(&mut director),
            Err(DraftError::NotActive)
        ));
    }

    #[test]
    fn internal_order_exhaustion_terminates_before_later_turns() {
        let mut draft = build_draft(vec![OWN, RIVAL], vec![Track::Apollo], &["5"]);
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        draft.advance_one_turn(&mut director).unwrap();
        // The single internal pick is done; the rival turn never runs.
        assert_eq!(draft.phase(), DraftPhase::Terminated);
        assert_eq!(draft.pick_log().len(), 1);
    }

    #[test]
    fn empty_queues_end_the_draft_via_round_over() {
        let mut draft = build_draft(
            vec![RIVAL, RIVAL, RIVAL, RIVAL, RIVAL, RIVAL, RIVAL, RIVAL, OWN],
            vec![Track::Apollo],
            &["1", "2", "3", "4", "5", "6", "7", "8"],
        );
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        for id in ["1", "2", "3", "4", "5", "6", "7", "8"] {
            director.push_unit_pick(id);
        }
        draft.run(&mut director).unwrap();
        // Apollo had nothing left at our turn, so the round signalled over.
        assert_eq!(draft.phase(), DraftPhase::Terminated);
        assert_eq!(draft.pick_log().len(), 8);
        assert_eq!(draft.internal_pick_count(), 0);
    }

    #[test]
    fn counters_never_decrease() {
        let mut draft = build_draft(
            vec![OWN, RIVAL, OWN, RIVAL],
            vec![Track::Apollo, Track::Citadel],
            &["5", "6"],
        );
        draft.start().unwrap();
        let mut director = ScriptedDirector::new();
        director.push_unit_pick("5");
        director.push_unit_pick("6");
        let (mut last_turn, mut last_internal) = (0, 0);
        while draft.is_active() {
            draft.advance_one_turn(&mut director).unwrap();
            assert!(draft.current_turn() >= last_turn);
            assert!(draft.internal_pick_count() >= last_internal);
            last_turn = draft.current_turn();
            last_internal = draft.internal_pick_count();
        }
    }
}
