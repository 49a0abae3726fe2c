use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// marinecadastre.gov / NOAA daily AIS CSV
    #[default]
    Noaa,
}

#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// AIS file to read, `-` for standard input
    pub input: PathBuf,

    /// Lock zone configuration (JSON); defaults to the Ballard Locks
    #[arg(short, long)]
    pub zones: Option<PathBuf>,

    /// Format of the input file
    #[arg(short, long, default_value_t, value_enum)]
    pub format: InputFormat,

    /// Print the state report after every N sightings, 0 for only at the end
    #[arg(short, long, default_value_t = 100_000)]
    pub report_every: u64,

    /// Print the lock configuration as JSON before processing
    #[arg(long, default_value_t = false)]
    pub show_zones: bool,
}
