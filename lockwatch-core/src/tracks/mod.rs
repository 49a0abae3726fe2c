//! Vessel Tracks
//!
//! This module stores the sightings of vessels while they are being
//! tracked through a lock, one track per tracking episode.
//!
//! # Features
//!
//! - Any number of tracks per vessel, at most one of them active
//! - Sightings kept in timestamp order regardless of arrival order
//! - Vessel name lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use lockwatch_core::tracks::TrackRegistry;
//!
//! let mut registry = TrackRegistry::new();
//!
//! if !registry.is_tracking(sighting.mmsi) {
//!     registry.start_tracking(sighting.mmsi);
//! }
//! registry.add_sighting(&sighting);
//!
//! let track = registry.active_track(sighting.mmsi);
//! ```

mod registry;
mod track;

pub use registry::*;
pub use track::*;
