//! AIS sightings and vessel metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maritime Mobile Service Identity
pub type Mmsi = u32;

/// Geographic position in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Position { lat, lon }
    }

    /// Check that both components are finite and in range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    pub(crate) fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// A single timestamped vessel position report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub mmsi: Mmsi,
    pub when: DateTime<Utc>,
    pub position: Position,
}

impl Sighting {
    pub fn new(mmsi: Mmsi, when: DateTime<Utc>, position: Position) -> Self {
        Sighting {
            mmsi,
            when,
            position,
        }
    }
}

/// A sighting as delivered by a source, optionally carrying the vessel name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AisRecord {
    pub sighting: Sighting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AisRecord {
    pub fn new(sighting: Sighting, name: Option<String>) -> Self {
        AisRecord { sighting, name }
    }
}

impl From<Sighting> for AisRecord {
    fn from(sighting: Sighting) -> Self {
        AisRecord {
            sighting,
            name: None,
        }
    }
}

/// Descriptive data for a vessel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselInfo {
    pub mmsi: Mmsi,
    pub name: String,
}
