//! Zone Occupancy
//!
//! Tracks which vessels are currently inside a zone and decides when a
//! sighting constitutes an entry, a continued presence or an exit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::zone::Zone;
use crate::sighting::{Mmsi, Sighting};

/// Zone transition caused by a sighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneActivity {
    /// Vessel was not known to be inside and now is
    Entered,
    /// Vessel is still inside
    Within,
    /// Vessel was inside and has left
    Exited,
}

impl std::fmt::Display for ZoneActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneActivity::Entered => write!(f, "entered"),
            ZoneActivity::Within => write!(f, "within"),
            ZoneActivity::Exited => write!(f, "exited"),
        }
    }
}

/// Occupancy of a single vessel inside a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyEntry {
    /// Sightings observed while inside
    pub count: u32,
    /// Earliest known moment of continuous presence
    pub first_seen: DateTime<Utc>,
}

/// Occupancy tracking for one zone
#[derive(Debug, Clone)]
pub struct ZoneOccupancy {
    zone: Zone,
    vessels: HashMap<Mmsi, OccupancyEntry>,
}

impl ZoneOccupancy {
    pub fn new(zone: Zone) -> Self {
        ZoneOccupancy {
            zone,
            vessels: HashMap::new(),
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Process a sighting against this zone
    ///
    /// An exit is only honored for a sighting at or after the recorded entry
    /// time, so late-arriving reports cannot evict a vessel that is inside.
    /// Returns the resulting transition, if any.
    pub fn add_sighting(&mut self, sighting: &Sighting) -> Option<ZoneActivity> {
        let inside = self.zone.contains(sighting);

        match (inside, self.vessels.get_mut(&sighting.mmsi)) {
            (true, None) => {
                self.vessels.insert(
                    sighting.mmsi,
                    OccupancyEntry {
                        count: 1,
                        first_seen: sighting.when,
                    },
                );
                Some(ZoneActivity::Entered)
            }
            (true, Some(entry)) => {
                entry.count += 1;
                if sighting.when < entry.first_seen {
                    // Earlier than previously known, refines the entry time only
                    entry.first_seen = sighting.when;
                    None
                } else {
                    Some(ZoneActivity::Within)
                }
            }
            (false, Some(entry)) => {
                if sighting.when < entry.first_seen {
                    None
                } else {
                    self.vessels.remove(&sighting.mmsi);
                    Some(ZoneActivity::Exited)
                }
            }
            (false, None) => None,
        }
    }

    /// Check if a vessel is currently considered inside
    pub fn contains_vessel(&self, mmsi: Mmsi) -> bool {
        self.vessels.contains_key(&mmsi)
    }

    /// Get the occupancy entry for a vessel
    pub fn entry(&self, mmsi: Mmsi) -> Option<&OccupancyEntry> {
        self.vessels.get(&mmsi)
    }

    /// Vessels currently inside, in ascending MMSI order
    pub fn vessels_within(&self) -> Vec<Mmsi> {
        let mut vessels: Vec<Mmsi> = self.vessels.keys().copied().collect();
        vessels.sort_unstable();
        vessels
    }
}

/// Zone occupancy snapshot for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStatus {
    /// Zone identifier
    pub zone_id: String,
    /// Vessels currently inside
    pub vessels: Vec<Mmsi>,
}

impl ZoneOccupancy {
    /// Get zone status for reporting
    pub fn status(&self) -> ZoneStatus {
        ZoneStatus {
            zone_id: self.zone.id().to_string(),
            vessels: self.vessels_within(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sighting::Position;

    const INSIDE: Position = Position { lat: 0.5, lon: 0.5 };
    const OUTSIDE: Position = Position { lat: 2.0, lon: 2.0 };

    fn occupancy() -> ZoneOccupancy {
        let zone = Zone::polygon(
            "square",
            vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 1.0),
                Position::new(1.0, 1.0),
                Position::new(1.0, 0.0),
            ],
        )
        .unwrap();
        ZoneOccupancy::new(zone)
    }

    fn at(mmsi: Mmsi, secs: i64, position: Position) -> Sighting {
        Sighting::new(
            mmsi,
            DateTime::from_timestamp(secs, 0).unwrap(),
            position,
        )
    }

    #[test]
    fn test_enter_then_within() {
        let mut occ = occupancy();

        assert_eq!(occ.add_sighting(&at(1, 0, INSIDE)), Some(ZoneActivity::Entered));
        for t in 1..5 {
            assert_eq!(occ.add_sighting(&at(1, t, INSIDE)), Some(ZoneActivity::Within));
        }

        let entry = occ.entry(1).unwrap();
        assert_eq!(entry.count, 5);
        assert_eq!(entry.first_seen, DateTime::from_timestamp(0, 0).unwrap());
    }

    #[test]
    fn test_exit() {
        let mut occ = occupancy();

        occ.add_sighting(&at(1, 10, INSIDE));
        assert_eq!(occ.add_sighting(&at(1, 20, OUTSIDE)), Some(ZoneActivity::Exited));
        assert!(!occ.contains_vessel(1));
        assert!(occ.vessels_within().is_empty());
    }

    #[test]
    fn test_exit_at_entry_time() {
        let mut occ = occupancy();

        occ.add_sighting(&at(1, 10, INSIDE));
        assert_eq!(occ.add_sighting(&at(1, 10, OUTSIDE)), Some(ZoneActivity::Exited));
    }

    #[test]
    fn test_stale_outside_sighting_ignored() {
        let mut occ = occupancy();

        occ.add_sighting(&at(1, 10, INSIDE));
        assert_eq!(occ.add_sighting(&at(1, 5, OUTSIDE)), None);

        let entry = occ.entry(1).unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.first_seen, DateTime::from_timestamp(10, 0).unwrap());
    }

    #[test]
    fn test_earlier_inside_sighting_moves_entry_back() {
        let mut occ = occupancy();

        occ.add_sighting(&at(1, 10, INSIDE));
        assert_eq!(occ.add_sighting(&at(1, 4, INSIDE)), None);

        let entry = occ.entry(1).unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.first_seen, DateTime::from_timestamp(4, 0).unwrap());

        // An outside report between the two is now stale as well
        assert_eq!(occ.add_sighting(&at(1, 3, OUTSIDE)), None);
        assert_eq!(occ.add_sighting(&at(1, 6, OUTSIDE)), Some(ZoneActivity::Exited));
    }

    #[test]
    fn test_duplicate_sighting() {
        let mut occ = occupancy();
        let s = at(1, 10, INSIDE);

        assert_eq!(occ.add_sighting(&s), Some(ZoneActivity::Entered));
        assert_eq!(occ.add_sighting(&s), Some(ZoneActivity::Within));
        assert_eq!(occ.add_sighting(&s), Some(ZoneActivity::Within));
        assert_eq!(occ.entry(1).unwrap().count, 3);
    }

    #[test]
    fn test_irrelevant_sighting() {
        let mut occ = occupancy();

        assert_eq!(occ.add_sighting(&at(1, 10, OUTSIDE)), None);
        assert!(occ.vessels_within().is_empty());
    }

    #[test]
    fn test_vessels_are_independent() {
        let mut occ = occupancy();

        occ.add_sighting(&at(7, 10, INSIDE));
        occ.add_sighting(&at(3, 11, INSIDE));
        assert_eq!(occ.vessels_within(), vec![3, 7]);

        assert_eq!(occ.add_sighting(&at(7, 12, OUTSIDE)), Some(ZoneActivity::Exited));
        assert_eq!(occ.status().vessels, vec![3]);
        assert_eq!(occ.status().zone_id, "square");
    }
}
