//! Transit Correlator
//!
//! Turns zone events into track lifecycle changes and finished lockings.

use super::locking::{Direction, Locking};
use crate::error::WatchError;
use crate::sighting::Sighting;
use crate::tracks::{Track, TrackRegistry};
use crate::zones::{Zone, ZoneActivity};

/// Zones visited by a track, in the order of their first sighting
///
/// A sighting inside several overlapping zones visits them in the order given.
pub fn visited_zones<'a>(track: &Track, zones: &[&'a Zone]) -> Vec<&'a Zone> {
    let mut visited: Vec<&Zone> = Vec::with_capacity(zones.len());
    for sighting in track.sightings() {
        for &zone in zones {
            if zone.contains(sighting) && !visited.iter().any(|v| v.id() == zone.id()) {
                visited.push(zone);
            }
        }
        if visited.len() == zones.len() {
            break;
        }
    }
    visited
}

/// Correlates zone events of one lock into lockings
#[derive(Debug)]
pub struct TransitCorrelator {
    /// Zone on the east side of the lock; entering through it means going west
    east_side: String,
    /// Finished transits, in order of completion
    lockings: Vec<Locking>,
}

impl TransitCorrelator {
    pub fn new(east_side: impl Into<String>) -> Self {
        TransitCorrelator {
            east_side: east_side.into(),
            lockings: Vec::new(),
        }
    }

    /// React to a zone event for a vessel
    ///
    /// `zones` must list every zone of the lock.
    ///
    /// # Returns
    ///
    /// The locking, if this event completed a transit
    ///
    /// # Errors
    ///
    /// [`WatchError::MissingActiveTrack`] if a vessel exits a zone without
    /// being tracked.
    pub fn handle(
        &mut self,
        sighting: &Sighting,
        zone: &Zone,
        activity: ZoneActivity,
        tracker: &mut TrackRegistry,
        zones: &[&Zone],
    ) -> Result<Option<Locking>, WatchError> {
        let mmsi = sighting.mmsi;
        match activity {
            ZoneActivity::Entered => {
                log::debug!("{} {}: entered {}", sighting.when, mmsi, zone.id());
                if !tracker.is_tracking(mmsi) {
                    tracker.start_tracking(mmsi);
                }
                Ok(None)
            }
            ZoneActivity::Within => {
                log::trace!("{} {}: within {}", sighting.when, mmsi, zone.id());
                Ok(None)
            }
            ZoneActivity::Exited => {
                log::debug!("{} {}: exited {}", sighting.when, mmsi, zone.id());
                let track =
                    tracker
                        .active_track(mmsi)
                        .ok_or_else(|| WatchError::MissingActiveTrack {
                            mmsi,
                            zone: zone.id().to_string(),
                        })?;

                let visited = visited_zones(track, zones);
                if visited.len() != zones.len() {
                    return Ok(None);
                }

                let locking = self.build_locking(track, &visited);
                tracker.stop_tracking(mmsi);

                let Some(locking) = locking else {
                    return Ok(None);
                };
                log::info!(
                    "{}: transit {} from {} to {} ({} minutes)",
                    mmsi,
                    locking.direction,
                    locking.from.when,
                    locking.to.when,
                    locking.duration().num_minutes()
                );
                self.lockings.push(locking.clone());
                Ok(Some(locking))
            }
        }
    }

    /// Build the locking record for a completed track
    fn build_locking(&self, track: &Track, visited: &[&Zone]) -> Option<Locking> {
        let first_sighting = *track.first()?;
        let first_zone = *visited.first()?;
        let last_zone = *visited.last()?;

        let arrival = |zone: &Zone| {
            track
                .sightings()
                .iter()
                .find(|s| zone.contains(s))
                .copied()
                .unwrap_or(first_sighting)
        };

        let direction = if first_zone.id() == self.east_side {
            Direction::West
        } else {
            Direction::East
        };

        Some(Locking {
            mmsi: track.mmsi(),
            from: arrival(first_zone),
            to: arrival(last_zone),
            direction,
            zones: visited.iter().map(|z| z.id().to_string()).collect(),
        })
    }

    /// Finished transits, in order of completion
    pub fn lockings(&self) -> &[Locking] {
        &self.lockings
    }
}
