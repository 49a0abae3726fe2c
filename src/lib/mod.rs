//! # Lockwatch
//!
//! Detects vessels passing through a navigation lock from AIS position
//! reports and prints a running report of transits.
//!
//! The detection itself lives in [`lockwatch_core`]; this crate adds the
//! parts that touch the outside world:
//!
//! - [`cli`] - Command line options
//! - [`config`] - Zone configuration loading
//! - [`noaa`] - NOAA / marinecadastre.gov AIS CSV reader
//! - [`report`] - Text report of transits and zone occupancy
//!
//! ## Command-Line Interface
//!
//! ```text
//! lockwatch [-v...] [-z zones.json] [-r N] <input.csv | ->
//! ```
//!
//! AIS archives: <https://coast.noaa.gov/htdata/CMSP/AISDataHandler/2022/index.html>

pub mod cli;
pub mod config;
pub mod noaa;
pub mod report;

pub use cli::{Cli, InputFormat};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
