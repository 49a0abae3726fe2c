//! Sighting source abstraction.
//!
//! The watcher pulls records one at a time through [`SightingSource`], so the
//! same pipeline runs over a CSV file, a replayed capture or a test fixture.
//!
//! # Design
//!
//! The trait is **pull-based** and blocking: the only place the pipeline waits
//! is inside [`SightingSource::next_record`]. End of stream and failure are
//! reported separately so the caller can tell them apart.

use std::collections::VecDeque;

use crate::error::SourceError;
use crate::sighting::AisRecord;

/// A stream of AIS records
pub trait SightingSource {
    /// Get the next record
    ///
    /// Returns `Ok(None)` at end of stream. An error also ends the stream.
    fn next_record(&mut self) -> Result<Option<AisRecord>, SourceError>;
}

impl<S: SightingSource + ?Sized> SightingSource for &mut S {
    fn next_record(&mut self) -> Result<Option<AisRecord>, SourceError> {
        (**self).next_record()
    }
}

impl<S: SightingSource + ?Sized> SightingSource for Box<S> {
    fn next_record(&mut self) -> Result<Option<AisRecord>, SourceError> {
        (**self).next_record()
    }
}

/// Replays records held in memory, optionally ending with an error
#[derive(Debug, Default)]
pub struct MemorySource {
    records: VecDeque<AisRecord>,
    error: Option<SourceError>,
}

impl MemorySource {
    pub fn new(records: impl IntoIterator<Item = AisRecord>) -> Self {
        MemorySource {
            records: records.into_iter().collect(),
            error: None,
        }
    }

    /// Fail with `error` once all records have been delivered
    pub fn with_error(mut self, error: SourceError) -> Self {
        self.error = Some(error);
        self
    }

    /// Records not yet delivered
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl SightingSource for MemorySource {
    fn next_record(&mut self) -> Result<Option<AisRecord>, SourceError> {
        if let Some(record) = self.records.pop_front() {
            return Ok(Some(record));
        }
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sighting::{Position, Sighting};
    use chrono::DateTime;

    fn record(mmsi: u32) -> AisRecord {
        Sighting::new(
            mmsi,
            DateTime::from_timestamp(0, 0).unwrap(),
            Position::new(0.0, 0.0),
        )
        .into()
    }

    #[test]
    fn test_memory_source_end_of_stream() {
        let mut source = MemorySource::new(vec![record(1), record(2)]);

        assert_eq!(source.next_record().unwrap().unwrap().sighting.mmsi, 1);
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next_record().unwrap().unwrap().sighting.mmsi, 2);
        assert_eq!(source.next_record(), Ok(None));
        assert_eq!(source.next_record(), Ok(None));
    }

    #[test]
    fn test_memory_source_error() {
        let error = SourceError::Parse {
            line: 3,
            message: "bad".to_string(),
        };
        let mut source = MemorySource::new(vec![record(1)]).with_error(error.clone());

        assert!(source.next_record().unwrap().is_some());
        assert_eq!(source.next_record(), Err(error));
        assert_eq!(source.next_record(), Ok(None));
    }
}
