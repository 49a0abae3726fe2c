//! A single tracking episode of one vessel

use chrono::{DateTime, Utc};
use geo::HaversineDistance;
use serde::{Deserialize, Serialize};

use crate::sighting::{Mmsi, Sighting};

/// Time-ordered sightings of a vessel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    mmsi: Mmsi,
    sightings: Vec<Sighting>,
    active: bool,
}

impl Track {
    pub(crate) fn new(mmsi: Mmsi) -> Self {
        Track {
            mmsi,
            sightings: Vec::new(),
            active: true,
        }
    }

    pub fn mmsi(&self) -> Mmsi {
        self.mmsi
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn end(&mut self) {
        self.active = false;
    }

    /// Insert a sighting in timestamp order
    ///
    /// Goes after any sightings with the same timestamp.
    pub(crate) fn add_sighting(&mut self, sighting: Sighting) {
        let idx = self
            .sightings
            .partition_point(|s| s.when <= sighting.when);
        self.sightings.insert(idx, sighting);
    }

    /// Sightings, oldest first
    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    pub fn first(&self) -> Option<&Sighting> {
        self.sightings.first()
    }

    pub fn last(&self) -> Option<&Sighting> {
        self.sightings.last()
    }

    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }

    /// Time between first and last sighting
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.first()?.when, self.last()?.when))
    }

    /// Average speed over ground between first and last sighting, in km/h
    pub fn average_speed_kmh(&self) -> f64 {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return 0.0;
        };
        let hours = (last.when - first.when).num_milliseconds() as f64 / 3_600_000.0;
        if hours <= 0.0 {
            return 0.0;
        }
        let meters = first
            .position
            .to_point()
            .haversine_distance(&last.position.to_point());
        meters / 1000.0 / hours
    }
}
