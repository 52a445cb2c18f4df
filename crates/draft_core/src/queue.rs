use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Track;

/// A track's priority-ranked candidate list with a peek cursor.
///
/// `peek_next` walks the list without removing anything, so one resolution
/// pass can consider a track's second and third choices after skipping the
/// first. The cursor resets to the front whenever a candidate is removed,
/// which happens exactly once per committed turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackQueue {
    track: Track,
    order: Vec<String>,
    cursor: usize,
}

impl TrackQueue {
    pub fn new(track: Track, order: Vec<String>) -> Self {
        Self { track, order, cursor: 0 }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Next suggestion at the cursor, advancing the cursor past it.
    /// Returns `None` once the cursor has walked off the end.
    pub fn peek_next(&mut self) -> Option<String> {
        let suggestion = self.order.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(suggestion)
    }

    /// Remove a candidate anywhere in the remaining sequence.
    ///
    /// Idempotent: absent ids are a no-op. The candidate may sit below the
    /// current front when a rival unit claims them, so the whole sequence is
    /// searched. Always resets the cursor to the front.
    pub fn remove_candidate(&mut self, id: &str) {
        let before = self.order.len();
        self.order.retain(|queued| queued != id);
        if self.order.len() != before {
            debug!(track = %self.track, id, "candidate removed from priority list");
        }
        self.cursor = 0;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Candidates still in the list, regardless of cursor position.
    pub fn remaining(&self) -> &[String] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
