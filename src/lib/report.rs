//! Plain text state report
//!
//! Lists finished transits, then the tracked vessels currently inside each
//! zone.

use chrono::{DateTime, Utc};
use lockwatch_core::{Direction, Locking, Mmsi, Watcher};

const SEPARATOR: &str = "------------------------------------";

fn clock(when: &DateTime<Utc>) -> String {
    when.format("%H:%M:%S").to_string()
}

fn vessel_name(watcher: &Watcher, mmsi: Mmsi) -> String {
    watcher
        .vessel_info(mmsi)
        .map(|v| v.name.clone())
        .unwrap_or_else(|| mmsi.to_string())
}

/// One line per transit, e.g. `08:15:02: -> 12 minutes ISLAND QUEEN [08:27:40]`
pub fn transit_line(watcher: &Watcher, locking: &Locking) -> String {
    let arrow = match locking.direction {
        Direction::East => "->",
        Direction::West => "<-",
    };
    let minutes = (locking.duration().num_milliseconds() as f64 / 60_000.0).round();
    format!(
        "{}: {} {} minutes {} [{}]",
        clock(&locking.from.when),
        arrow,
        minutes,
        vessel_name(watcher, locking.mmsi),
        clock(&locking.to.when)
    )
}

/// Render the full report
pub fn render(watcher: &Watcher) -> String {
    let mut out = String::new();

    let mut lockings: Vec<&Locking> = watcher.lockings().iter().collect();
    lockings.sort_by_key(|l| l.from.when);
    for locking in lockings {
        out.push_str(&transit_line(watcher, locking));
        out.push('\n');
    }

    for status in watcher.zone_status() {
        let tracked: Vec<Mmsi> = status
            .vessels
            .into_iter()
            .filter(|mmsi| watcher.active_track(*mmsi).is_some())
            .collect();
        out.push_str(&format!("{} ({}):\n", status.zone_id, tracked.len()));

        for mmsi in tracked {
            let Some(track) = watcher.active_track(mmsi) else {
                continue;
            };
            let Some((first, last)) = track.time_span() else {
                continue;
            };
            out.push_str(&format!(
                "{}: {}-{} {}km/h\n",
                vessel_name(watcher, mmsi),
                clock(&first),
                clock(&last),
                track.average_speed_kmh().round()
            ));
        }
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}
