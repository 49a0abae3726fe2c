//! NOAA / marinecadastre.gov AIS CSV reader.
//!
//! Column layout of the daily AIS files:
//!
//! | # | Column          | # | Column      |
//! |---|-----------------|---|-------------|
//! | 0 | MMSI            | 9 | CallSign    |
//! | 1 | BaseDateTime    | 10| VesselType  |
//! | 2 | LAT             | 11| Status      |
//! | 3 | LON             | 12| Length      |
//! | 4 | SOG             | 13| Width       |
//! | 5 | COG             | 14| Draft       |
//! | 6 | Heading         | 15| Cargo       |
//! | 7 | VesselName      | 16| TransceiverClass |
//! | 8 | IMO             |   |             |
//!
//! Only MMSI, time, position and name are used.

use chrono::{DateTime, NaiveDateTime, Utc};
use csv::StringRecord;
use lockwatch_core::{AisRecord, Position, Sighting, SightingSource, SourceError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COL_MMSI: usize = 0;
const COL_WHEN: usize = 1;
const COL_LAT: usize = 2;
const COL_LON: usize = 3;
const COL_NAME: usize = 7;

/// Fewest columns a usable row can have
const MIN_COLUMNS: usize = COL_LON + 1;

/// Reads AIS records from NOAA CSV text
pub struct NoaaCsvSource<R> {
    reader: csv::Reader<R>,
    record: StringRecord,
    line_no: usize,
}

impl NoaaCsvSource<File> {
    /// Open a CSV file
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)
            .map_err(|e| SourceError::Io(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(file))
    }
}

impl<R: Read> NoaaCsvSource<R> {
    pub fn new(reader: R) -> Self {
        // The header is recognised per row, rows may be short
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        NoaaCsvSource {
            reader,
            record: StringRecord::new(),
            line_no: 0,
        }
    }

    /// Line on which the last record read started
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Open a file, or standard input for `-`
pub fn open(path: &Path) -> Result<Box<dyn SightingSource>, SourceError> {
    if path.as_os_str() == "-" {
        log::info!("Reading AIS records from standard input");
        Ok(Box::new(NoaaCsvSource::new(std::io::stdin().lock())))
    } else {
        log::info!("Reading AIS records from {}", path.display());
        Ok(Box::new(NoaaCsvSource::open(path)?))
    }
}

impl<R: Read> SightingSource for NoaaCsvSource<R> {
    fn next_record(&mut self) -> Result<Option<AisRecord>, SourceError> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(true) => {}
                Ok(false) => return Ok(None),
                Err(e) => return Err(read_error(e)),
            }
            if let Some(position) = self.record.position() {
                self.line_no = position.line() as usize;
            }

            if self.record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            if self.record[COL_MMSI].trim().eq_ignore_ascii_case("mmsi") {
                log::debug!("Skipping header on line {}", self.line_no);
                continue;
            }

            return parse_record(&self.record)
                .map(Some)
                .map_err(|message| SourceError::Parse {
                    line: self.line_no,
                    message,
                });
        }
    }
}

fn read_error(e: csv::Error) -> SourceError {
    let line = e.position().map(|p| p.line() as usize).unwrap_or_default();
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(e) => e.into(),
        _ => SourceError::Parse { line, message },
    }
}

fn parse_record(record: &StringRecord) -> Result<AisRecord, String> {
    if record.len() < MIN_COLUMNS {
        return Err(format!(
            "expected at least {} columns, got {}",
            MIN_COLUMNS,
            record.len()
        ));
    }

    let mmsi = record[COL_MMSI]
        .trim()
        .parse()
        .map_err(|_| format!("invalid MMSI '{}'", &record[COL_MMSI]))?;
    let when = parse_time(record[COL_WHEN].trim())?;
    let lat = parse_coordinate(&record[COL_LAT], "latitude")?;
    let lon = parse_coordinate(&record[COL_LON], "longitude")?;
    let position = Position::new(lat, lon);
    if !position.is_valid() {
        return Err(format!("position out of range ({}, {})", lat, lon));
    }

    let name = record
        .get(COL_NAME)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(AisRecord::new(Sighting::new(mmsi, when, position), name))
}

fn parse_coordinate(field: &str, what: &str) -> Result<f64, String> {
    field
        .trim()
        .parse()
        .map_err(|_| format!("invalid {} '{}'", what, field))
}

/// `BaseDateTime` is UTC without an offset; RFC 3339 is accepted too
fn parse_time(field: &str) -> Result<DateTime<Utc>, String> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(field, format) {
            return Ok(naive.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(field)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("invalid timestamp '{}'", field))
}
