//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use skytrack_core::{CivilDateTime, CoordinateTemplate, constants::DEFAULT_MAX_LATITUDE_STEP_DEG};

/// Default marker radius in scene units (globe radius is 1).
const DEFAULT_MARKER_RADIUS: f64 = 1.07;

#[derive(Parser, Debug)]
#[command(about = "Subsolar point, coordinate text and orbit-track geometry for satellite globes")]
pub struct Cli {
    /// JSON file with extra or replacement satellite descriptors.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Largest latitude change (degrees) between samples still treated as continuous.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_LATITUDE_STEP_DEG,
        value_parser = parse_latitude_step
    )]
    pub max_latitude_step: f64,

    #[command(subcommand)]
    pub command: Command,
}

/// Parse a positive, finite latitude step in degrees.
fn parse_latitude_step(s: &str) -> Result<f64, String> {
    let step: f64 = s
        .parse()
        .map_err(|e| format!("invalid latitude step '{s}': {e}"))?;
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(format!("latitude step must be positive and finite, got {s}"))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the subsolar point.
    Sun(SunArgs),
    /// Format a coordinate pair as degrees/minutes[/seconds].
    Format(FormatArgs),
    /// Convert degrees, minutes, seconds and direction to decimal degrees.
    ToDecimal(ToDecimalArgs),
    /// Project a coordinate onto the globe in scene coordinates.
    Project(ProjectArgs),
    /// Replay recorded telemetry through heading and orbit-track placement.
    Replay(ReplayArgs),
    /// List known satellites.
    Satellites,
}

#[derive(Args, Debug)]
pub struct SunArgs {
    /// UTC date-time (format: YYYY-MM-DDTHH:MM:SS). Defaults to now.
    #[arg(long)]
    pub at: Option<CivilDateTime>,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct FormatArgs {
    /// Latitude in decimal degrees.
    pub lat: f64,

    /// Longitude in decimal degrees.
    pub lon: f64,

    /// Omit seconds.
    #[arg(long)]
    pub minutes_only: bool,

    /// printf-style template with degree, minute, [second] and letter slots.
    #[arg(long)]
    pub template: Option<String>,
}

impl FormatArgs {
    /// The template text to use, honouring `--minutes-only` when no template is given.
    pub fn template_text(&self) -> &str {
        match (&self.template, self.minutes_only) {
            (Some(template), _) => template,
            (None, true) => CoordinateTemplate::DEG_MIN,
            (None, false) => CoordinateTemplate::DEG_MIN_SEC,
        }
    }
}

#[derive(Args, Debug)]
pub struct ToDecimalArgs {
    /// Whole degrees.
    pub degrees: f64,

    /// Minutes.
    pub minutes: f64,

    /// Seconds.
    pub seconds: f64,

    /// Direction letter (N, S, E or W).
    pub direction: String,
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct ProjectArgs {
    /// Latitude in decimal degrees.
    pub lat: f64,

    /// Longitude in decimal degrees.
    pub lon: f64,

    /// Distance from the globe centre in scene units.
    #[arg(default_value_t = DEFAULT_MARKER_RADIUS)]
    pub altitude: f64,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON array of samples: `{latitude, longitude, altitude, timestamp}`.
    pub file: PathBuf,

    /// Satellite id to look up in the catalog.
    #[arg(long, default_value = "iss")]
    pub satellite: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sun_at() {
        let cli = Cli::try_parse_from(["skytrack", "sun", "--at", "2025-01-01T00:00:00"]).unwrap();
        let Command::Sun(args) = cli.command else {
            panic!("expected sun command");
        };
        assert_eq!(args.at.unwrap().year(), 2025);
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cli = Cli::try_parse_from(["skytrack", "format", "-33.86", "-151.2", "--minutes-only"])
            .unwrap();
        let Command::Format(args) = cli.command else {
            panic!("expected format command");
        };
        assert!((args.lat + 33.86).abs() < 1e-12);
        assert_eq!(args.template_text(), CoordinateTemplate::DEG_MIN);
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "skytrack",
            "replay",
            "pass.json",
            "--satellite",
            "hubble",
            "--max-latitude-step",
            "2.5",
        ])
        .unwrap();
        assert!((cli.max_latitude_step - 2.5).abs() < 1e-12);
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_rejects_non_positive_latitude_step() {
        for step in ["0", "-1.5", "NaN", "inf", "wide"] {
            let argv = ["skytrack", "satellites", "--max-latitude-step", step];
            assert!(Cli::try_parse_from(argv).is_err(), "accepted {step}");
        }
        let cli = Cli::try_parse_from(["skytrack", "satellites"]).unwrap();
        assert!((cli.max_latitude_step - DEFAULT_MAX_LATITUDE_STEP_DEG).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_datetime() {
        assert!(Cli::try_parse_from(["skytrack", "sun", "--at", "yesterday"]).is_err());
    }
}
