use serde::{Deserialize, Serialize};

use super::{Track, Unit};

/// One committed draft pick. Records are append-only and ordered by turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    pub candidate_id: String,
    pub unit: Unit,
    /// `Track::External` for picks made by rival units.
    pub track: Track,
    /// Zero-based overall turn number.
    pub turn: usize,
}
