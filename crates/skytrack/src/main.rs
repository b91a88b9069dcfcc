//! Command-line driver for the satellite globe geometry core.
//!
//! Prints the current subsolar point, formats and parses coordinates, and
//! replays recorded telemetry through heading tracking and orbit-track
//! placement so the renderer-facing values can be inspected without a GPU.

mod args;
mod commands;
mod error;
mod telemetry;

use args::{Cli, Command};
use clap::Parser;

fn run(cli: &Cli) -> error::Result<String> {
    let catalog = telemetry::load_catalog(cli.catalog.as_deref())?;
    let output = match &cli.command {
        Command::Sun(args) => commands::sun(args),
        Command::Format(args) => commands::format_coordinates(args)?,
        Command::ToDecimal(args) => commands::to_decimal(args),
        Command::Project(args) => commands::project(args),
        Command::Replay(args) => {
            let samples = telemetry::load_samples(&args.file)?;
            commands::replay(args, &catalog, cli.max_latitude_step, &samples)
        }
        Command::Satellites => commands::satellites(&catalog),
    };
    Ok(output)
}

fn main() {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
