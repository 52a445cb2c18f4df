use tracing::trace;

use crate::models::{Candidate, Unit};
use crate::registry::CandidateRegistry;

/// Policy seam for "may the own unit pick this candidate at this turn?".
///
/// The simulator consults it for every hypothetical own-unit turn, so a
/// policy must be a pure function of the candidate and the absolute turn
/// index.
pub trait PickPolicy {
    fn can_be_picked_at(&self, candidate: &Candidate, absolute_turn: usize) -> bool;
}

/// Production policy: restricted-handling candidates can only be picked up
/// to a fixed absolute turn index; everyone else is always pickable.
#[derive(Debug, Clone, Copy)]
pub struct RestrictedWindowPolicy {
    pub cutoff: usize,
}

impl PickPolicy for RestrictedWindowPolicy {
    fn can_be_picked_at(&self, candidate: &Candidate, absolute_turn: usize) -> bool {
        !(candidate.restricted_handling && absolute_turn > self.cutoff)
    }
}

/// Read-only walk over the shared turn order that answers: how many further
/// own-unit turns can this candidate wait before somebody else may take
/// them, or policy rules them out?
pub struct DeadlineSimulator<'a> {
    turn_order: &'a [Unit],
    registry: &'a CandidateRegistry,
    own_unit: Unit,
    policy: &'a dyn PickPolicy,
}

impl<'a> DeadlineSimulator<'a> {
    pub fn new(
        turn_order: &'a [Unit],
        registry: &'a CandidateRegistry,
        own_unit: Unit,
        policy: &'a dyn PickPolicy,
    ) -> Self {
        Self { turn_order, registry, own_unit, policy }
    }

    /// Latest own-unit-relative turn at which `candidate` is still
    /// claimable, counting from `start_turn`.
    ///
    /// `None` means the candidate cannot be claimed even at the current
    /// turn. `Some(k)` means the pick can be deferred for up to `k` further
    /// own-unit turns.
    pub fn latest_feasible_offset(
        &self,
        candidate: &Candidate,
        start_turn: usize,
    ) -> Option<usize> {
        let mut own_relative_count = 0;
        let mut best_offset = None;

        for (turn, unit) in self.turn_order.iter().enumerate().skip(start_turn) {
            if *unit != self.own_unit {
                // A rival is on the clock at this turn. If they are allowed
                // to claim the candidate, nothing beyond the already
                // recorded offset is guaranteed.
                if self.registry.is_eligible(*unit, &candidate.id) {
                    trace!(
                        id = %candidate.id,
                        rival = %unit,
                        turn,
                        "candidate reachable by rival, walk stopped"
                    );
                    return best_offset;
                }
                continue;
            }

            // Our hypothetical turn: record it as safe if policy allows the
            // pick here, then assume we pick someone else and keep walking.
            if !self.policy.can_be_picked_at(candidate, turn) {
                trace!(id = %candidate.id, turn, "policy infeasible, walk stopped");
                return best_offset;
            }
            best_offset = Some(own_relative_count);
            own_relative_count += 1;
        }

        best_offset
    }
}
