//! # draft_core - Deterministic Draft Allocation Engine
//!
//! Simulates a multi-party, round-based personnel draft: a fixed turn order
//! is shared among competing units, and the own unit splits its turns
//! across internal allocation tracks, each holding a pre-ranked candidate
//! priority list.
//!
//! The core question at every own-unit turn is which track's top candidate
//! must be claimed *now* and which can safely wait. [`deadline`] answers it
//! for a single candidate by walking the shared turn order; [`resolver`]
//! arbitrates between tracks with a greedy reservation scheme over the
//! computed deadlines; [`draft`] is the state machine that drives both and
//! applies the outcome.
//!
//! All operator interaction goes through the [`director::DraftDirector`]
//! trait, so the scheduling logic runs deterministically under test.

pub mod deadline;
pub mod director;
pub mod draft;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod queue;
pub mod registry;
pub mod resolver;

pub use deadline::{DeadlineSimulator, PickPolicy, RestrictedWindowPolicy};
pub use director::{Decision, DraftDirector, ScriptedDirector};
pub use draft::{Draft, DraftConfig, DraftPhase, TurnOutcome, DEFAULT_RESTRICTED_CUTOFF};
pub use error::{DraftError, Result};
pub use export::{summarize, to_json, write_json, DraftSummary};
pub use loader::{load_draft, DraftPaths};
pub use models::{Candidate, Gender, PickRecord, Track, Unit, COMBAT_MEDICAL_THRESHOLD};
pub use queue::TrackQueue;
pub use registry::CandidateRegistry;
pub use resolver::{resolve_slot, Resolution};
