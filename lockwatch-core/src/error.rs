//! Error types for sighting sources, lock configuration and the watcher

use thiserror::Error;

use crate::sighting::Mmsi;

/// Errors reported by a sighting source.
///
/// Both variants terminate the stream; the caller decides what to do next.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The underlying reader failed
    #[error("Read failed: {0}")]
    Io(String),

    /// A record could not be parsed
    #[error("Malformed record on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e.to_string())
    }
}

/// Errors in a lock configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A lock needs at least two zones to define a passage
    #[error("At least two zones are required, got {0}")]
    TooFewZones(usize),

    /// Two zones share an identifier
    #[error("Duplicate zone id: {0}")]
    DuplicateZone(String),

    /// The east side refers to a zone that is not configured
    #[error("East side zone '{0}' is not one of the configured zones")]
    UnknownEastSide(String),

    /// Polygon with too few vertices to enclose an area
    #[error("Zone '{id}': polygon needs at least 3 vertices, got {count}")]
    DegeneratePolygon { id: String, count: usize },

    /// Circle radius is zero, negative or not a number
    #[error("Zone '{id}': invalid radius {radius}")]
    InvalidRadius { id: String, radius: f64 },

    /// Latitude or longitude is out of range or not a number
    #[error("Zone '{id}': invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { id: String, lat: f64, lon: f64 },

    /// Configuration text could not be deserialized
    #[error("Invalid configuration: {0}")]
    DeserializationFailed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::DeserializationFailed(e.to_string())
    }
}

/// Fatal errors raised while correlating zone events.
///
/// These indicate a broken precondition in the pipeline and abort the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatchError {
    /// A vessel left a zone but has no track to evaluate
    #[error("Vessel {mmsi} exited zone '{zone}' without an active track")]
    MissingActiveTrack { mmsi: Mmsi, zone: String },
}
