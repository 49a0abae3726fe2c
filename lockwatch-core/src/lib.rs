//! # Lockwatch Core
//!
//! Platform-independent detection of vessel transits through a navigation
//! lock, driven by a time-ordered stream of AIS position reports.
//!
//! This crate contains the pure detection logic with **zero I/O dependencies**.
//! Records reach it through the [`SightingSource`] trait, so the same pipeline
//! runs over a CSV file, a live feed adapter or a test fixture.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐   ┌───────────────────────────────────────────────┐
//! │ SightingSource │──▶│ Watcher                                       │
//! └────────────────┘   │  ├── zones/    ZoneOccupancy per zone ──┐      │
//!                      │  │             (Entered/Within/Exited)  │      │
//!                      │  ├── transit/  TransitCorrelator ◀──────┘      │
//!                      │  │             start/stop tracks, Locking      │
//!                      │  └── tracks/   TrackRegistry (one active       │
//!                      │                track per vessel)               │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! ## Key Modules
//!
//! - [`zones`] - Zone geometry and per-zone occupancy state machine
//! - [`tracks`] - Per-vessel track lifecycle and vessel names
//! - [`transit`] - Correlation of zone events into lock transits
//! - [`watcher`] - The dispatcher tying everything together
//! - [`source`] - Pull-based record source abstraction
//! - [`config`] - Lock configuration (zones and east side)
//!
//! ## Example
//!
//! ```rust
//! use chrono::DateTime;
//! use lockwatch_core::{AisRecord, LockConfig, MemorySource, Position, Sighting, StopReason, Watcher};
//!
//! let mut watcher = Watcher::new(&LockConfig::ballard_locks()).unwrap();
//!
//! let at = |secs, lat, lon| -> AisRecord {
//!     Sighting::new(366_000_001, DateTime::from_timestamp(secs, 0).unwrap(), Position::new(lat, lon)).into()
//! };
//! let mut source = MemorySource::new(vec![
//!     at(0, 47.6646, -122.3919),    // east side
//!     at(600, 47.6660, -122.3975),  // in the chamber
//!     at(1200, 47.6667, -122.4022), // west side
//!     at(1500, 47.6700, -122.4200), // gone
//! ]);
//!
//! assert_eq!(watcher.run(&mut source), Ok(StopReason::EndOfStream));
//! assert_eq!(watcher.lockings().len(), 1);
//! assert_eq!(watcher.lockings()[0].direction.to_string(), "west");
//! ```

pub mod config;
pub mod error;
pub mod sighting;
pub mod source;
pub mod tracks;
pub mod transit;
pub mod watcher;
pub mod zones;

// Re-export commonly used types
pub use config::{LockConfig, ZoneConfig};
pub use error::{ConfigError, SourceError, WatchError};
pub use sighting::{AisRecord, Mmsi, Position, Sighting, VesselInfo};
pub use source::{MemorySource, SightingSource};
pub use tracks::{Track, TrackRegistry};
pub use transit::{Direction, Locking, TransitCorrelator};
pub use watcher::{StopReason, TransitListener, Watcher, ZoneListener};
pub use zones::{OccupancyEntry, Zone, ZoneActivity, ZoneOccupancy, ZoneShape, ZoneStatus};
