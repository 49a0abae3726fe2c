//! Track Registry
//!
//! Owns all tracks of all vessels and the vessel name table.

use std::collections::HashMap;

use super::track::Track;
use crate::sighting::{Mmsi, Sighting, VesselInfo};

/// Tracks and metadata for every vessel seen
#[derive(Debug, Default)]
pub struct TrackRegistry {
    /// All tracks per vessel, oldest first; only the last one can be active
    tracks: HashMap<Mmsi, Vec<Track>>,
    /// Vessel names
    vessels: HashMap<Mmsi, VesselInfo>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new track for a vessel
    ///
    /// # Panics
    ///
    /// If the vessel already has an active track. Check [`Self::is_tracking`] first.
    pub fn start_tracking(&mut self, mmsi: Mmsi) {
        assert!(
            !self.is_tracking(mmsi),
            "vessel {} already has an active track",
            mmsi
        );
        let tracks = self.tracks.entry(mmsi).or_default();
        tracks.push(Track::new(mmsi));
        log::debug!("{}: tracking started (track #{})", mmsi, tracks.len());
    }

    /// End the active track of a vessel, if any
    pub fn stop_tracking(&mut self, mmsi: Mmsi) {
        if let Some(track) = self.active_track_mut(mmsi) {
            track.end();
            log::debug!("{}: tracking stopped after {} sightings", mmsi, track.len());
        }
    }

    pub fn is_tracking(&self, mmsi: Mmsi) -> bool {
        self.active_track(mmsi).is_some()
    }

    /// Add a sighting to the active track of its vessel
    ///
    /// Returns false (and does nothing) if the vessel is not being tracked.
    pub fn add_sighting(&mut self, sighting: &Sighting) -> bool {
        match self.active_track_mut(sighting.mmsi) {
            Some(track) => {
                track.add_sighting(*sighting);
                true
            }
            None => false,
        }
    }

    /// Get the active track of a vessel
    pub fn active_track(&self, mmsi: Mmsi) -> Option<&Track> {
        self.tracks
            .get(&mmsi)
            .and_then(|tracks| tracks.last())
            .filter(|track| track.is_active())
    }

    fn active_track_mut(&mut self, mmsi: Mmsi) -> Option<&mut Track> {
        self.tracks
            .get_mut(&mmsi)
            .and_then(|tracks| tracks.last_mut())
            .filter(|track| track.is_active())
    }

    /// Get all tracks of a vessel, oldest first
    pub fn all_tracks(&self, mmsi: Mmsi) -> &[Track] {
        self.tracks.get(&mmsi).map(Vec::as_slice).unwrap_or_default()
    }

    /// Get all vessels with an active track, in ascending MMSI order
    pub fn tracked_vessels(&self) -> Vec<Mmsi> {
        let mut vessels: Vec<Mmsi> = self
            .tracks
            .iter()
            .filter(|(_, tracks)| tracks.last().is_some_and(Track::is_active))
            .map(|(mmsi, _)| *mmsi)
            .collect();
        vessels.sort_unstable();
        vessels
    }

    /// Record the name of a vessel
    ///
    /// The first non-empty name wins; later names are ignored.
    /// Returns true if the name was stored.
    pub fn set_vessel_info(&mut self, mmsi: Mmsi, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.vessels.contains_key(&mmsi) {
            return false;
        }
        self.vessels.insert(
            mmsi,
            VesselInfo {
                mmsi,
                name: name.to_string(),
            },
        );
        true
    }

    /// Look up vessel metadata
    pub fn vessel_info(&self, mmsi: Mmsi) -> Option<&VesselInfo> {
        self.vessels.get(&mmsi)
    }

    /// Get number of vessels with any track
    pub fn vessel_count(&self) -> usize {
        self.tracks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sighting::Position;
    use chrono::DateTime;

    fn at(mmsi: Mmsi, secs: i64) -> Sighting {
        Sighting::new(
            mmsi,
            DateTime::from_timestamp(secs, 0).unwrap(),
            Position::new(47.66, -122.39),
        )
    }

    #[test]
    fn test_start_stop() {
        let mut registry = TrackRegistry::new();

        assert!(!registry.is_tracking(1));
        registry.start_tracking(1);
        assert!(registry.is_tracking(1));
        assert_eq!(registry.tracked_vessels(), vec![1]);

        registry.stop_tracking(1);
        assert!(!registry.is_tracking(1));
        assert!(registry.active_track(1).is_none());
        assert!(registry.tracked_vessels().is_empty());

        // Stopping again is a no-op
        registry.stop_tracking(1);
        registry.stop_tracking(2);
    }

    #[test]
    #[should_panic(expected = "already has an active track")]
    fn test_double_start_panics() {
        let mut registry = TrackRegistry::new();
        registry.start_tracking(1);
        registry.start_tracking(1);
    }

    #[test]
    fn test_add_sighting_untracked_is_noop() {
        let mut registry = TrackRegistry::new();

        assert!(!registry.add_sighting(&at(1, 0)));
        assert!(registry.all_tracks(1).is_empty());
        assert_eq!(registry.vessel_count(), 0);
    }

    #[test]
    fn test_add_sighting_keeps_order() {
        let mut registry = TrackRegistry::new();
        registry.start_tracking(1);

        assert!(registry.add_sighting(&at(1, 20)));
        assert!(registry.add_sighting(&at(1, 30)));
        assert!(registry.add_sighting(&at(1, 10)));

        let track = registry.active_track(1).unwrap();
        assert_eq!(track.len(), 3);
        assert_eq!(track.first().unwrap().when.timestamp(), 10);
        assert_eq!(track.last().unwrap().when.timestamp(), 30);
    }

    #[test]
    fn test_multiple_episodes() {
        let mut registry = TrackRegistry::new();

        registry.start_tracking(1);
        registry.add_sighting(&at(1, 0));
        registry.stop_tracking(1);

        // Ended tracks are frozen
        assert!(!registry.add_sighting(&at(1, 5)));

        registry.start_tracking(1);
        registry.add_sighting(&at(1, 10));
        registry.add_sighting(&at(1, 11));

        let tracks = registry.all_tracks(1);
        assert_eq!(tracks.len(), 2);
        assert!(!tracks[0].is_active());
        assert_eq!(tracks[0].len(), 1);
        assert!(tracks[1].is_active());
        assert_eq!(tracks[1].len(), 2);
    }

    #[test]
    fn test_vessels_are_independent() {
        let mut registry = TrackRegistry::new();

        registry.start_tracking(1);
        registry.start_tracking(2);
        registry.add_sighting(&at(2, 0));

        assert!(registry.active_track(1).unwrap().is_empty());
        assert_eq!(registry.active_track(2).unwrap().len(), 1);
    }

    #[test]
    fn test_vessel_info_first_name_wins() {
        let mut registry = TrackRegistry::new();

        assert!(registry.vessel_info(1).is_none());
        assert!(!registry.set_vessel_info(1, "  "));
        assert!(registry.vessel_info(1).is_none());

        assert!(registry.set_vessel_info(1, "ISLAND QUEEN"));
        assert!(!registry.set_vessel_info(1, "OTHER NAME"));
        assert_eq!(registry.vessel_info(1).unwrap().name, "ISLAND QUEEN");
        assert_eq!(registry.vessel_info(1).unwrap().mmsi, 1);
    }
}
