use thiserror::Error;

use crate::models::{Track, Unit};

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown unit name: {0}")]
    UnknownUnit(String),

    #[error("unknown track name: {0}")]
    UnknownTrack(String),

    #[error("unknown candidate id {id} referenced by {context}")]
    UnknownCandidate { id: String, context: String },

    #[error("candidate {id} appears in more than one track priority list")]
    DuplicatePriority { id: String },

    #[error("invalid candidate record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("no eligibility roster found for unit {unit}")]
    EmptyRoster { unit: Unit },

    #[error("no priority list found for track {track}")]
    EmptyPriorityList { track: Track },

    #[error("turn order is empty")]
    EmptyTurnOrder,

    #[error("internal turn order is empty")]
    EmptyInternalOrder,

    #[error("remaining internal picks do not match the internal turn order")]
    InternalOrderMismatch,

    #[error("draft is not active")]
    NotActive,
}

pub type Result<T> = std::result::Result<T, DraftError>;
