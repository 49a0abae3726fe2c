//! Lock configuration
//!
//! A lock is a set of zones plus the id of the zone on its east side, which
//! fixes the direction of a transit.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;
use crate::sighting::Position;
use crate::zones::{Zone, ZoneShape};

/// Zone definition as stored in a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    pub id: String,
    pub shape: ZoneShape,
}

/// Zones of a lock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockConfig {
    /// Display name
    pub name: String,
    /// Id of the zone on the east side of the lock
    pub east_side: String,
    pub zones: Vec<ZoneConfig>,
}

impl LockConfig {
    /// The Hiram M. Chittenden (Ballard) Locks, Seattle
    pub fn ballard_locks() -> Self {
        LockConfig {
            name: "Ballard Locks".to_string(),
            east_side: "ballardlocks-eastside".to_string(),
            zones: vec![
                ZoneConfig {
                    id: "ballardlocks-westside".to_string(),
                    shape: ZoneShape::Polygon {
                        vertices: vec![
                            Position::new(47.666568170625105, -122.39871948689762),
                            Position::new(47.66893078039655, -122.40395515877366),
                            Position::new(47.66645979148097, -122.40669101184335),
                            Position::new(47.66507974383789, -122.3992881153018),
                        ],
                    },
                },
                ZoneConfig {
                    id: "ballardlocks-eastside".to_string(),
                    shape: ZoneShape::Polygon {
                        vertices: vec![
                            Position::new(47.66571558181046, -122.39486783467007),
                            Position::new(47.66460344039013, -122.3964117550044),
                            Position::new(47.663332277477885, -122.38836829119701),
                            Position::new(47.66487133266595, -122.38786403592535),
                        ],
                    },
                },
            ],
        }
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LockConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check zone count, id uniqueness, the east side and every shape
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_zones().map(|_| ())
    }

    /// Build the zones, validating the configuration
    pub fn build_zones(&self) -> Result<Vec<Zone>, ConfigError> {
        if self.zones.len() < 2 {
            return Err(ConfigError::TooFewZones(self.zones.len()));
        }

        let mut seen = HashSet::new();
        for zone in &self.zones {
            if !seen.insert(zone.id.as_str()) {
                return Err(ConfigError::DuplicateZone(zone.id.clone()));
            }
        }
        if !seen.contains(self.east_side.as_str()) {
            return Err(ConfigError::UnknownEastSide(self.east_side.clone()));
        }

        self.zones
            .iter()
            .map(|z| Zone::new(z.id.clone(), z.shape.clone()))
            .collect()
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self::ballard_locks()
    }
}
