//! JSON export of draft results.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::draft::{Draft, DraftPhase};
use crate::error::Result;
use crate::models::PickRecord;

/// Snapshot of a draft's results, serializable at any point of the run.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSummary {
    pub phase: DraftPhase,
    pub total_turns: usize,
    pub turns_processed: usize,
    pub internal_picks: usize,
    /// Committed picks per unit name, sorted for stable output.
    pub picks_by_unit: BTreeMap<String, usize>,
    pub picks: Vec<PickRecord>,
}

/// Build a result snapshot from the current draft state.
pub fn summarize(draft: &Draft) -> DraftSummary {
    let mut picks_by_unit: BTreeMap<String, usize> = BTreeMap::new();
    for record in draft.pick_log() {
        *picks_by_unit.entry(record.unit.to_string()).or_insert(0) += 1;
    }
    DraftSummary {
        phase: draft.phase(),
        total_turns: draft.turn_order().len(),
        turns_processed: draft.current_turn(),
        internal_picks: draft.internal_pick_count(),
        picks_by_unit,
        picks: draft.pick_log().to_vec(),
    }
}

pub fn to_json(draft: &Draft) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summarize(draft))?)
}

pub fn write_json(draft: &Draft, path: &Path) -> Result<()> {
    fs::write(path, to_json(draft)?)?;
    info!(path = %path.display(), "draft summary written");
    Ok(())
}
