use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Internal allocation tracks of the own unit.
///
/// `External` is a sentinel for picks made outside any track (every pick by
/// a rival unit is logged against it); it never carries a priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Apollo,
    Citadel,
    Summit,
    Horizon,
    External,
}

impl Track {
    /// The tracks that hold a priority list, in declaration order.
    pub fn real_tracks() -> &'static [Track] {
        &[Track::Apollo, Track::Citadel, Track::Summit, Track::Horizon]
    }

    /// Lowercase name, matching the input-file spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Track::Apollo => "apollo",
            Track::Citadel => "citadel",
            Track::Summit => "summit",
            Track::Horizon => "horizon",
            Track::External => "external",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Track {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apollo" => Ok(Track::Apollo),
            "citadel" => Ok(Track::Citadel),
            "summit" => Ok(Track::Summit),
            "horizon" => Ok(Track::Horizon),
            "external" => Ok(Track::External),
            other => Err(DraftError::UnknownTrack(other.to_string())),
        }
    }
}
