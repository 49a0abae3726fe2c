//! Geofenced Zones
//!
//! This module provides the zones that make up a lock and the per-zone
//! occupancy tracking that turns a stream of sightings into zone events.
//!
//! # Features
//!
//! - Polygon and circle zones (WGS84 coordinates)
//! - Per-vessel occupancy with an earliest known entry time
//! - Out-of-order tolerant enter/exit detection
//!
//! # Example
//!
//! ```rust,ignore
//! use lockwatch_core::zones::{Zone, ZoneOccupancy, ZoneActivity};
//!
//! let zone = Zone::circle("lock-chamber", Position::new(47.665, -122.397), 80.0)?;
//! let mut occupancy = ZoneOccupancy::new(zone);
//!
//! match occupancy.add_sighting(&sighting) {
//!     Some(ZoneActivity::Entered) => println!("{} entered", sighting.mmsi),
//!     Some(ZoneActivity::Exited) => println!("{} left", sighting.mmsi),
//!     _ => {}
//! }
//! ```

mod occupancy;
mod zone;

pub use occupancy::*;
pub use zone::*;
