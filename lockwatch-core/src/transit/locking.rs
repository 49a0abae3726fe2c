//! Finished transit records

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::sighting::{Mmsi, Sighting};

/// Direction of travel through the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    West,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// A completed passage through all zones of the lock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locking {
    pub mmsi: Mmsi,
    /// Arrival in the first zone visited
    pub from: Sighting,
    /// Arrival in the last zone visited
    pub to: Sighting,
    pub direction: Direction,
    /// Zone ids in the order they were visited
    pub zones: Vec<String>,
}

impl Locking {
    /// Time from arrival in the first zone to arrival in the last
    pub fn duration(&self) -> Duration {
        self.to.when - self.from.when
    }
}
