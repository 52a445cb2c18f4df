//! Setup-time input loading.
//!
//! Two file shapes feed a draft: a candidates CSV with one row per
//! candidate, and plain token files with one name or id per line (blank
//! lines ignored) for rosters, priority lists and the two turn orders.
//! Roster and priority files live in per-unit / per-track directories and
//! are named `<unit>.txt` / `<track>.txt`.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::draft::{Draft, DraftConfig};
use crate::error::{DraftError, Result};
use crate::models::{Candidate, Gender, Track, Unit};
use crate::queue::TrackQueue;
use crate::registry::CandidateRegistry;

/// Paths to all static inputs of a draft.
#[derive(Debug, Clone)]
pub struct DraftPaths {
    /// Candidates CSV with headers:
    /// `id,first_name,last_name,gender,medical_profile,psych_score,restricted_handling`.
    pub candidates: PathBuf,
    /// Directory of `<unit>.txt` eligibility rosters, one id per line.
    pub roster_dir: PathBuf,
    /// Directory of `<track>.txt` priority lists, highest priority first.
    pub priority_dir: PathBuf,
    /// Overall turn order, one unit name per line.
    pub turn_order: PathBuf,
    /// Internal turn order, one track name per line.
    pub internal_order: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    id: String,
    first_name: String,
    last_name: String,
    gender: Gender,
    medical_profile: u8,
    psych_score: u32,
    restricted_handling: bool,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Candidate {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            gender: row.gender,
            medical_profile: row.medical_profile,
            psych_score: row.psych_score,
            restricted_handling: row.restricted_handling,
        }
    }
}

/// Load the candidates CSV.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut candidates = Vec::new();
    for (index, row) in reader.deserialize::<CandidateRow>().enumerate() {
        let row = row.map_err(|err| DraftError::InvalidRecord {
            // Header occupies line 1.
            line: index + 2,
            reason: err.to_string(),
        })?;
        candidates.push(Candidate::from(row));
    }
    info!(count = candidates.len(), path = %path.display(), "candidates loaded");
    Ok(candidates)
}

/// Load a newline-delimited token file, skipping blank lines.
pub fn load_tokens(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load the overall turn order, parsing each token into a unit.
pub fn load_turn_order(path: &Path) -> Result<Vec<Unit>> {
    load_tokens(path)?.iter().map(|token| token.parse()).collect()
}

/// Load the internal turn order, parsing each token into a track.
pub fn load_internal_order(path: &Path) -> Result<Vec<Track>> {
    load_tokens(path)?.iter().map(|token| token.parse()).collect()
}

/// Assemble a full draft from the input files. The returned draft is still
/// in setup; call [`Draft::start`] to validate and activate it.
pub fn load_draft(paths: &DraftPaths, config: DraftConfig) -> Result<Draft> {
    let mut registry = CandidateRegistry::new();
    for candidate in load_candidates(&paths.candidates)? {
        registry.insert(candidate);
    }

    for unit in Unit::all() {
        let path = paths.roster_dir.join(format!("{unit}.txt"));
        let ids = load_tokens(&path)?;
        info!(%unit, count = ids.len(), "roster loaded");
        registry.set_roster(*unit, ids)?;
    }

    let mut queues = HashMap::new();
    let mut listed: HashSet<String> = HashSet::new();
    for track in Track::real_tracks() {
        let path = paths.priority_dir.join(format!("{track}.txt"));
        let ids = load_tokens(&path)?;
        for id in &ids {
            if registry.get(id).is_none() {
                return Err(DraftError::UnknownCandidate {
                    id: id.clone(),
                    context: format!("priority list of track {track}"),
                });
            }
            // A candidate may sit in at most one track's list.
            if !listed.insert(id.clone()) {
                return Err(DraftError::DuplicatePriority { id: id.clone() });
            }
        }
        info!(%track, count = ids.len(), "priority list loaded");
        queues.insert(*track, TrackQueue::new(*track, ids));
    }

    let turn_order = load_turn_order(&paths.turn_order)?;
    let internal_order = load_internal_order(&paths.internal_order)?;

    Ok(Draft::new(config, registry, queues, turn_order, internal_order))
}
