use std::collections::HashMap;

use tracing::debug;

use crate::deadline::DeadlineSimulator;
use crate::models::Track;
use crate::queue::TrackQueue;
use crate::registry::CandidateRegistry;

/// Outcome of one slot resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// This candidate must be committed at the current turn.
    Commit { candidate_id: String, track: Track },
    /// No track has any claimable candidate left; the internal round is
    /// over and the draft ends.
    RoundOver,
}

/// Decide which track's suggestion to act on at an own-unit turn.
///
/// Scans the remaining internal turn order front to back, computing a
/// deadline offset for each track's current suggestion and reserving future
/// slots first-fit-decreasing: a suggestion landing on an occupied slot is
/// pushed to a more urgent one, never bumping an existing reservation. The
/// first suggestion that lands on offset 0 is committed on the spot.
///
/// When the scan runs past the last track without an offset-0 hit, a pick
/// is still owed at this turn, so the most urgent reservation (smallest
/// offset) is committed. `RoundOver` is returned only when nothing could be
/// reserved at all. The reservation table lives for one call only.
///
/// Side effects: exhausted tracks are removed from `remaining`, and the
/// consulted queues' peek cursors advance (they reset on the next commit).
pub fn resolve_slot(
    remaining: &mut Vec<Track>,
    queues: &mut HashMap<Track, TrackQueue>,
    simulator: &DeadlineSimulator<'_>,
    registry: &CandidateRegistry,
    current_turn: usize,
) -> Resolution {
    let mut reservations: HashMap<usize, (String, Track)> = HashMap::new();
    let mut track_cursor = 0;

    loop {
        if track_cursor >= remaining.len() {
            return commit_most_urgent(reservations, current_turn);
        }

        // Pull the next suggestion for the track at this position, dropping
        // exhausted tracks in place. After a removal the position holds the
        // following track, so the same slot is retried.
        let track = remaining[track_cursor];
        let suggestion = match queues.get_mut(&track).and_then(TrackQueue::peek_next) {
            Some(id) => id,
            None => {
                debug!(%track, "track exhausted, dropping from internal order");
                remaining.remove(track_cursor);
                if remaining.len() <= track_cursor {
                    return commit_most_urgent(reservations, current_turn);
                }
                continue;
            }
        };

        let Some(candidate) = registry.get(&suggestion) else {
            // Priority lists are validated against the registry at setup,
            // so this entry can only be stale; skip to the next suggestion
            // of the same track.
            continue;
        };

        let Some(mut offset) = simulator.latest_feasible_offset(candidate, current_turn) else {
            // Unclaimable by policy right now. It stays queued (the cursor
            // moved past it, the list is untouched) and the same track is
            // asked for its next suggestion.
            debug!(id = %suggestion, %track, "suggestion unclaimable by policy, skipped");
            continue;
        };

        while offset > 0 && reservations.contains_key(&offset) {
            offset -= 1;
        }

        if offset == 0 {
            debug!(id = %suggestion, %track, "suggestion contested, committing now");
            return Resolution::Commit { candidate_id: suggestion, track };
        }

        debug!(id = %suggestion, %track, offset, "suggestion deferred");
        reservations.insert(offset, (suggestion, track));
        track_cursor += 1;
    }
}

/// Fallback when no suggestion demanded the current turn outright: the
/// reservation closest to its deadline is committed, keeping the turn
/// productive. With no reservations the round is genuinely over.
fn commit_most_urgent(
    reservations: HashMap<usize, (String, Track)>,
    current_turn: usize,
) -> Resolution {
    match reservations.into_iter().min_by_key(|(offset, _)| *offset) {
        Some((offset, (candidate_id, track))) => {
            debug!(id = %candidate_id, %track, offset, "committing most urgent reservation");
            Resolution::Commit { candidate_id, track }
        }
        None => {
            debug!(current_turn, "no claimable suggestion in any track");
            Resolution::RoundOver
        }
    }
}
