//! Subcommand implementations.
//!
//! Each command renders its report into a `String`; `main` prints it.

use std::fmt::Write as _;

use skytrack_core::{
    CivilDateTime, CoordinateTemplate, HeadingDecision, SatelliteCatalog, SatelliteTracker,
    format, projection, solar, time,
};

use crate::args::{FormatArgs, ProjectArgs, ReplayArgs, SunArgs, ToDecimalArgs};
use crate::error::Result;
use crate::telemetry::TelemetrySample;

/// Current Unix time in seconds.
fn now_unix_seconds() -> f64 {
    use web_time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

pub fn sun(args: &SunArgs) -> String {
    let unix = args
        .at
        .map_or_else(now_unix_seconds, |at| at.to_unix_seconds());
    sun_report(unix)
}

fn sun_report(unix: f64) -> String {
    let point = solar::SubsolarPoint::at(unix);
    let template = CoordinateTemplate::default();
    let (lat_text, lon_text) = template.format_lat_lon(point.latitude, point.longitude);
    let direction = solar::sun_direction(unix);

    let mut out = String::new();
    let _ = writeln!(out, "time:             {}", CivilDateTime::from_unix_seconds(unix));
    let _ = writeln!(out, "julian date:      {:.6}", time::julian_date(unix));
    let _ = writeln!(out, "julian century:   {:.10}", time::julian_century(unix));
    let _ = writeln!(out, "equation of time: {:+.3} min", solar::equation_of_time(unix));
    let _ = writeln!(
        out,
        "subsolar point:   {:.4}, {:.4} ({lat_text}, {lon_text})",
        point.latitude, point.longitude
    );
    let _ = writeln!(
        out,
        "sun direction:    ({:+.6}, {:+.6}, {:+.6})",
        direction.x, direction.y, direction.z
    );
    out
}

pub fn format_coordinates(args: &FormatArgs) -> Result<String> {
    let template = CoordinateTemplate::parse(args.template_text())?;
    let (lat, lon) = template.format_lat_lon(args.lat, args.lon);
    Ok(format!("{lat}, {lon}\n"))
}

pub fn to_decimal(args: &ToDecimalArgs) -> String {
    let value =
        format::deg_min_sec_to_decimal(args.degrees, args.minutes, args.seconds, &args.direction);
    format!("{value:.6}\n")
}

pub fn project(args: &ProjectArgs) -> String {
    let p = projection::marker_position(args.lat, args.lon, args.altitude);
    format!("({:+.6}, {:+.6}, {:+.6})\n", p.x, p.y, p.z)
}

pub fn satellites(catalog: &SatelliteCatalog) -> String {
    let mut out = String::new();
    for descriptor in catalog.sorted() {
        let _ = writeln!(
            out,
            "{:<10} {:<30} inclination {:>5.1}°  ring {:.3}  table {} thresholds",
            descriptor.id(),
            descriptor.name(),
            descriptor.inclination_rad().to_degrees(),
            descriptor.ring_radius(),
            descriptor.correction().thresholds_deg().len()
        );
    }
    out
}

pub fn replay(
    args: &ReplayArgs,
    catalog: &SatelliteCatalog,
    max_latitude_step: f64,
    samples: &[TelemetrySample],
) -> String {
    if catalog.get(&args.satellite).is_none() {
        tracing::warn!(
            satellite = %args.satellite,
            "satellite not in catalog, orbit tracks will be skipped"
        );
    }

    let mut tracker = SatelliteTracker::with_max_latitude_step(&args.satellite, max_latitude_step);
    let mut out = String::new();
    for sample in samples {
        let update = tracker.update(catalog, sample.latitude, sample.longitude, sample.altitude);
        let decision = match update.decision {
            HeadingDecision::FirstSample => "first sample".to_owned(),
            HeadingDecision::Draw { heading_sign } => format!("draw ({heading_sign:?})"),
            HeadingDecision::Discontinuity { delta } => format!("skip (jump {delta:+.2}°)"),
        };
        let _ = writeln!(
            out,
            "{} lat {:+8.3} lon {:+9.3}  marker ({:+.4}, {:+.4}, {:+.4})  {decision}",
            CivilDateTime::from_unix_seconds(sample.timestamp),
            sample.latitude,
            sample.longitude,
            update.marker.x,
            update.marker.y,
            update.marker.z,
        );
        if let Some(orbit) = update.orbit {
            let _ = writeln!(
                out,
                "    tilt {:+.5} rad  power {:.2}  exponent {:.5}",
                orbit.corrected_inclination, orbit.correction_power, orbit.exponent
            );
            // Print rows; glam stores columns.
            let r = orbit.rotation.transpose();
            for row in [r.x_axis, r.y_axis, r.z_axis] {
                let _ = writeln!(out, "    [{:+.6} {:+.6} {:+.6}]", row.x, row.y, row.z);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_sun_report() {
        let report = sun_report(1_735_689_600.0);
        assert!(report.contains("2025-01-01T00:00:00Z"));
        assert!(report.contains("julian date:      2460676.500000"));
        assert!(report.contains("S, 179°"));
    }

    #[test]
    fn test_format_with_template() {
        let args = FormatArgs {
            lat: 37.7749,
            lon: -122.4194,
            minutes_only: false,
            template: Some("%02d-%02d-%02d%@".to_owned()),
        };
        assert_eq!(format_coordinates(&args).unwrap(), "37-46-29N, 122-25-09W\n");
    }

    #[test]
    fn test_format_rejects_bad_template() {
        let args = FormatArgs {
            lat: 0.0,
            lon: 0.0,
            minutes_only: false,
            template: Some("%d".to_owned()),
        };
        assert!(format_coordinates(&args).is_err());
    }

    #[test]
    fn test_to_decimal() {
        let args = ToDecimalArgs {
            degrees: 33.0,
            minutes: 52.0,
            seconds: 7.0,
            direction: "S".to_owned(),
        };
        assert_eq!(to_decimal(&args), "-33.868611\n");
    }

    #[test]
    fn test_replay_draws_after_first_sample() {
        let args = ReplayArgs {
            file: PathBuf::from("unused.json"),
            satellite: "iss".to_owned(),
        };
        let samples = [
            TelemetrySample {
                latitude: 10.0,
                longitude: 20.0,
                altitude: 1.07,
                timestamp: 1_735_689_600.0,
            },
            TelemetrySample {
                latitude: 11.0,
                longitude: 24.0,
                altitude: 1.07,
                timestamp: 1_735_689_605.0,
            },
        ];
        let report = replay(&args, &SatelliteCatalog::builtin(), 5.0, &samples);
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].ends_with("first sample"));
        assert!(lines[1].ends_with("draw (Ascending)"));
        assert!(lines[2].contains("power 0.80"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_satellites_lists_builtins() {
        let listing = satellites(&SatelliteCatalog::builtin());
        assert_eq!(listing.lines().count(), 3);
        assert!(listing.starts_with("hubble"));
    }
}
