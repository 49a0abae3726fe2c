//! Watcher
//!
//! Pulls sightings from a source and feeds them through the zones, the
//! transit correlator and the track registry, one sighting at a time.
//!
//! For every sighting, all zones are updated first (in configuration order),
//! each zone event is handed to the listeners and the correlator as it
//! happens, and only then is the sighting appended to the vessel's active
//! track. A vessel that just entered a zone therefore gets the entering
//! sighting as the first point of its new track.

use crate::config::LockConfig;
use crate::error::{ConfigError, SourceError, WatchError};
use crate::sighting::{AisRecord, Mmsi, Sighting, VesselInfo};
use crate::source::SightingSource;
use crate::tracks::{Track, TrackRegistry};
use crate::transit::{Locking, TransitCorrelator};
use crate::zones::{Zone, ZoneActivity, ZoneOccupancy, ZoneStatus};

/// Callback for zone transitions
pub type ZoneListener = Box<dyn FnMut(&Sighting, &Zone, ZoneActivity)>;

/// Callback for finished transits
pub type TransitListener = Box<dyn FnMut(&Locking)>;

/// Why [`Watcher::run`] stopped pulling sightings
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// The source has no more records
    EndOfStream,
    /// The source failed to deliver a record
    SourceFailed(SourceError),
}

/// Transit detection pipeline for one lock
pub struct Watcher {
    name: String,
    zones: Vec<ZoneOccupancy>,
    tracker: TrackRegistry,
    correlator: TransitCorrelator,
    zone_listeners: Vec<ZoneListener>,
    transit_listeners: Vec<TransitListener>,
    sightings_processed: u64,
}

impl Watcher {
    /// Create a watcher for a lock
    pub fn new(config: &LockConfig) -> Result<Self, ConfigError> {
        let zones = config
            .build_zones()?
            .into_iter()
            .map(ZoneOccupancy::new)
            .collect();

        Ok(Watcher {
            name: config.name.clone(),
            zones,
            tracker: TrackRegistry::new(),
            correlator: TransitCorrelator::new(config.east_side.clone()),
            zone_listeners: Vec::new(),
            transit_listeners: Vec::new(),
            sightings_processed: 0,
        })
    }

    /// Register a callback invoked for every zone transition
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Sighting, &Zone, ZoneActivity) + 'static,
    {
        self.zone_listeners.push(Box::new(listener));
    }

    /// Register a callback invoked when a transit is finalized
    pub fn on_transit<F>(&mut self, listener: F)
    where
        F: FnMut(&Locking) + 'static,
    {
        self.transit_listeners.push(Box::new(listener));
    }

    /// Process a single record end to end
    ///
    /// # Returns
    ///
    /// Transits finalized by this record
    pub fn process(&mut self, record: &AisRecord) -> Result<Vec<Locking>, WatchError> {
        let sighting = &record.sighting;
        self.sightings_processed += 1;

        if let Some(name) = &record.name {
            if self.tracker.set_vessel_info(sighting.mmsi, name) {
                log::debug!("{}: vessel name {}", sighting.mmsi, name.trim());
            }
        }

        let mut finished = Vec::new();
        for idx in 0..self.zones.len() {
            let Some(activity) = self.zones[idx].add_sighting(sighting) else {
                continue;
            };
            let zone = self.zones[idx].zone();

            for listener in &mut self.zone_listeners {
                listener(sighting, zone, activity);
            }

            let all_zones: Vec<&Zone> = self.zones.iter().map(ZoneOccupancy::zone).collect();
            if let Some(locking) =
                self.correlator
                    .handle(sighting, zone, activity, &mut self.tracker, &all_zones)?
            {
                for listener in &mut self.transit_listeners {
                    listener(&locking);
                }
                finished.push(locking);
            }
        }

        self.tracker.add_sighting(sighting);
        Ok(finished)
    }

    /// Pull and process records until the source ends or fails
    pub fn run<S: SightingSource>(&mut self, source: &mut S) -> Result<StopReason, WatchError> {
        self.run_with_progress(source, 0, |_| {})
    }

    /// Like [`Self::run`], calling `progress` after every `every` sightings
    ///
    /// An `every` of 0 disables the callback.
    pub fn run_with_progress<S, F>(
        &mut self,
        source: &mut S,
        every: u64,
        mut progress: F,
    ) -> Result<StopReason, WatchError>
    where
        S: SightingSource,
        F: FnMut(&Watcher),
    {
        log::info!("{}: watching {} zones", self.name, self.zones.len());
        loop {
            match source.next_record() {
                Ok(Some(record)) => {
                    self.process(&record)?;
                    if every > 0 && self.sightings_processed % every == 0 {
                        progress(self);
                    }
                }
                Ok(None) => {
                    log::info!(
                        "End of stream after {} sightings, {} transits, {} vessels tracked",
                        self.sightings_processed,
                        self.lockings().len(),
                        self.tracker.vessel_count()
                    );
                    return Ok(StopReason::EndOfStream);
                }
                Err(e) => {
                    log::warn!(
                        "Source failed after {} sightings: {}",
                        self.sightings_processed,
                        e
                    );
                    return Ok(StopReason::SourceFailed(e));
                }
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zones in configuration order
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().map(ZoneOccupancy::zone)
    }

    /// Get the occupancy of a zone by id
    pub fn zone(&self, id: &str) -> Option<&ZoneOccupancy> {
        self.zones.iter().find(|z| z.zone().id() == id)
    }

    /// Vessels currently inside a zone, empty for an unknown id
    pub fn vessels_within(&self, id: &str) -> Vec<Mmsi> {
        self.zone(id)
            .map(ZoneOccupancy::vessels_within)
            .unwrap_or_default()
    }

    /// Vessels currently inside each zone
    pub fn zone_status(&self) -> Vec<ZoneStatus> {
        self.zones.iter().map(ZoneOccupancy::status).collect()
    }

    pub fn tracker(&self) -> &TrackRegistry {
        &self.tracker
    }

    pub fn active_track(&self, mmsi: Mmsi) -> Option<&Track> {
        self.tracker.active_track(mmsi)
    }

    pub fn vessel_info(&self, mmsi: Mmsi) -> Option<&VesselInfo> {
        self.tracker.vessel_info(mmsi)
    }

    /// Finished transits, in order of completion
    pub fn lockings(&self) -> &[Locking] {
        self.correlator.lockings()
    }

    pub fn sightings_processed(&self) -> u64 {
        self.sightings_processed
    }
}

impl std::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watcher")
            .field("name", &self.name)
            .field("zones", &self.zones.len())
            .field("lockings", &self.lockings().len())
            .field("sightings_processed", &self.sightings_processed)
            .finish()
    }
}
