use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// The competing parties in the draft.
///
/// The set is closed: turn orders and rosters parse into this enum, and
/// everything downstream matches on it exhaustively. Which unit is "ours"
/// is a `DraftConfig` parameter, not a property of the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Airborne,
    Armor,
    Artillery,
    Signal,
    Logistics,
    Naval,
}

impl Unit {
    /// All units in declaration order.
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Airborne,
            Unit::Armor,
            Unit::Artillery,
            Unit::Signal,
            Unit::Logistics,
            Unit::Naval,
        ]
    }

    /// Lowercase name, matching the input-file spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Airborne => "airborne",
            Unit::Armor => "armor",
            Unit::Artillery => "artillery",
            Unit::Signal => "signal",
            Unit::Logistics => "logistics",
            Unit::Naval => "naval",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::all()
            .iter()
            .copied()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| DraftError::UnknownUnit(s.to_string()))
    }
}
