//! Zone Geometry
//!
//! Defines zone shapes and the containment test used by occupancy tracking.

use geo::{Contains, HaversineDistance, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sighting::{Position, Sighting};

/// Zone shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ZoneShape {
    /// Closed polygon; the ring is closed implicitly
    #[serde(rename_all = "camelCase")]
    Polygon {
        /// Vertices in order (at least 3)
        vertices: Vec<Position>,
    },
    /// Circle around a center point
    #[serde(rename_all = "camelCase")]
    Circle {
        /// Center of the circle
        center: Position,
        /// Radius in meters (great-circle distance)
        radius_meters: f64,
    },
}

/// Shape converted into geometry ready for containment tests
#[derive(Debug, Clone)]
enum Region {
    Polygon(Polygon<f64>),
    Circle { center: Point<f64>, radius_meters: f64 },
}

impl Region {
    fn contains(&self, position: Position) -> bool {
        let point = position.to_point();
        match self {
            Region::Polygon(polygon) => polygon.contains(&point),
            Region::Circle {
                center,
                radius_meters,
            } => point.haversine_distance(center) <= *radius_meters,
        }
    }
}

/// A named geofenced region
#[derive(Debug, Clone)]
pub struct Zone {
    id: String,
    region: Region,
}

impl Zone {
    /// Create a zone, validating the shape
    pub fn new(id: impl Into<String>, shape: ZoneShape) -> Result<Self, ConfigError> {
        let id = id.into();
        let region = match &shape {
            ZoneShape::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(ConfigError::DegeneratePolygon {
                        id,
                        count: vertices.len(),
                    });
                }
                if let Some(bad) = vertices.iter().find(|v| !v.is_valid()) {
                    return Err(ConfigError::InvalidCoordinate {
                        id,
                        lat: bad.lat,
                        lon: bad.lon,
                    });
                }
                let ring: LineString<f64> =
                    vertices.iter().map(|v| (v.lon, v.lat)).collect::<Vec<_>>().into();
                Region::Polygon(Polygon::new(ring, vec![]))
            }
            ZoneShape::Circle {
                center,
                radius_meters,
            } => {
                if !center.is_valid() {
                    return Err(ConfigError::InvalidCoordinate {
                        id,
                        lat: center.lat,
                        lon: center.lon,
                    });
                }
                if !radius_meters.is_finite() || *radius_meters <= 0.0 {
                    return Err(ConfigError::InvalidRadius {
                        id,
                        radius: *radius_meters,
                    });
                }
                Region::Circle {
                    center: center.to_point(),
                    radius_meters: *radius_meters,
                }
            }
        };

        Ok(Zone { id, region })
    }

    /// Create a polygon zone
    pub fn polygon(id: impl Into<String>, vertices: Vec<Position>) -> Result<Self, ConfigError> {
        Self::new(id, ZoneShape::Polygon { vertices })
    }

    /// Create a circular zone
    pub fn circle(
        id: impl Into<String>,
        center: Position,
        radius_meters: f64,
    ) -> Result<Self, ConfigError> {
        Self::new(
            id,
            ZoneShape::Circle {
                center,
                radius_meters,
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check if a position lies inside this zone
    pub fn location_in_zone(&self, position: Position) -> bool {
        self.region.contains(position)
    }

    /// Check if a sighting was made inside this zone
    pub fn contains(&self, sighting: &Sighting) -> bool {
        self.location_in_zone(sighting.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Position> {
        vec![
            Position::new(0.0, 0.0),
            Position::new(0.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_polygon_zone_contains() {
        let zone = Zone::polygon("square", square()).unwrap();

        assert!(zone.location_in_zone(Position::new(0.5, 0.5)));
        assert!(zone.location_in_zone(Position::new(0.1, 0.9)));

        assert!(!zone.location_in_zone(Position::new(1.5, 0.5)));
        assert!(!zone.location_in_zone(Position::new(0.5, -0.1)));
    }

    #[test]
    fn test_polygon_zone_concave() {
        // L-shape, the notch at the top right is outside
        let zone = Zone::polygon(
            "ell",
            vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 2.0),
                Position::new(1.0, 2.0),
                Position::new(1.0, 1.0),
                Position::new(2.0, 1.0),
                Position::new(2.0, 0.0),
            ],
        )
        .unwrap();

        assert!(zone.location_in_zone(Position::new(1.5, 0.5)));
        assert!(zone.location_in_zone(Position::new(0.5, 1.5)));
        assert!(!zone.location_in_zone(Position::new(1.5, 1.5)));
    }

    #[test]
    fn test_circle_zone_contains() {
        let center = Position::new(47.665, -122.397);
        let zone = Zone::circle("circle", center, 100.0).unwrap();

        assert!(zone.location_in_zone(center));
        // ~55m north
        assert!(zone.location_in_zone(Position::new(47.6655, -122.397)));
        // ~222m north
        assert!(!zone.location_in_zone(Position::new(47.667, -122.397)));
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let err = Zone::polygon(
            "line",
            vec![Position::new(0.0, 0.0), Position::new(1.0, 1.0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DegeneratePolygon {
                id: "line".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn test_invalid_circle_rejected() {
        let center = Position::new(10.0, 10.0);
        assert!(matches!(
            Zone::circle("c", center, 0.0),
            Err(ConfigError::InvalidRadius { .. })
        ));
        assert!(matches!(
            Zone::circle("c", center, f64::NAN),
            Err(ConfigError::InvalidRadius { .. })
        ));
        assert!(matches!(
            Zone::circle("c", Position::new(95.0, 0.0), 10.0),
            Err(ConfigError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_shape_json() {
        let json = r#"{"type":"circle","center":{"lat":1.0,"lon":2.0},"radiusMeters":50.0}"#;
        let shape: ZoneShape = serde_json::from_str(json).unwrap();
        assert_eq!(
            shape,
            ZoneShape::Circle {
                center: Position::new(1.0, 2.0),
                radius_meters: 50.0
            }
        );

        let json = r#"{"type":"polygon","vertices":[{"lat":0,"lon":0},{"lat":0,"lon":1},{"lat":1,"lon":1}]}"#;
        let shape: ZoneShape = serde_json::from_str(json).unwrap();
        assert!(matches!(shape, ZoneShape::Polygon { ref vertices } if vertices.len() == 3));
    }
}
