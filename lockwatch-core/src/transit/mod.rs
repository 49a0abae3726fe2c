//! Lock Transit Detection
//!
//! This module correlates the zone events of all zones of a lock into
//! finished transit ("locking") records.
//!
//! A vessel is tracked from the moment it enters any zone. Each time it
//! leaves a zone, its track is checked against every zone; once the track
//! has visited all of them, tracking stops and a [`Locking`] is recorded.
//!
//! # Example
//!
//! ```rust,ignore
//! use lockwatch_core::transit::TransitCorrelator;
//!
//! let mut correlator = TransitCorrelator::new("ballardlocks-eastside");
//!
//! if let Some(locking) = correlator.handle(&sighting, zone, activity, &mut tracker, &zones)? {
//!     println!("{} went {} in {} minutes", locking.mmsi, locking.direction,
//!         locking.duration().num_minutes());
//! }
//! ```

mod correlator;
mod locking;

pub use correlator::*;
pub use locking::*;
