pub mod candidate;
pub mod pick;
pub mod track;
pub mod unit;

pub use candidate::{Candidate, Gender, COMBAT_MEDICAL_THRESHOLD};
pub use pick::PickRecord;
pub use track::Track;
pub use unit::Unit;
