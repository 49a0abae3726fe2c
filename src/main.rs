use clap::Parser;
use lockwatch::{cli::Cli, config, noaa, report, InputFormat, VERSION};
use lockwatch_core::{StopReason, Watcher};
use miette::{miette, IntoDiagnostic, Result};

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();
    log::info!("lockwatch {}", VERSION);

    let lock = config::load_lock_config(args.zones.as_deref())?;
    if args.show_zones {
        println!("{}", serde_json::to_string_pretty(&lock).into_diagnostic()?);
    }
    let mut watcher = Watcher::new(&lock).into_diagnostic()?;
    log::info!("Watching {}", watcher.name());

    let mut source = match args.format {
        InputFormat::Noaa => noaa::open(&args.input).into_diagnostic()?,
    };

    let result = watcher.run_with_progress(&mut source, args.report_every, |w| {
        print!("{}", report::render(w));
    });

    // One last time, whatever stopped the run
    print!("{}", report::render(&watcher));

    match result {
        Ok(StopReason::EndOfStream) => Ok(()),
        Ok(StopReason::SourceFailed(e)) => Err(miette!("Input stopped early: {}", e)),
        Err(e) => Err(miette!("Aborted: {}", e)),
    }
}
