//! Solar ephemeris and subsolar point.
//!
//! Low-precision series in Julian centuries since J2000.0, good to a few
//! hundredths of a degree over the present era. That is plenty for lighting a
//! globe and drawing the day/night terminator.
//!
//! Series take `t` in Julian centuries; the public subsolar functions take Unix
//! seconds. Angles are degrees unless a name says otherwise, and every
//! trigonometric call converts at the use site.

use glam::DVec3;

use crate::constants::{AXIAL_TILT_DEG, EQUATION_OF_TIME_OBLIQUITY_TERM, GLOBE_RADIUS};
use crate::projection;
use crate::time::{julian_century, utc_decimal_hours};

/// A point on the globe where the Sun is at the zenith.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsolarPoint {
    /// Latitude in degrees (equal to the solar declination).
    pub latitude: f64,
    /// Longitude in degrees, within `[-180, 180]`.
    pub longitude: f64,
}

impl SubsolarPoint {
    /// Compute the subsolar point at a Unix instant.
    #[must_use]
    pub fn at(unix_seconds: f64) -> Self {
        Self {
            latitude: subsolar_latitude(unix_seconds),
            longitude: subsolar_longitude(unix_seconds),
        }
    }
}

/// Eccentricity of Earth's orbit (unitless).
#[must_use]
pub fn orbit_eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Mean anomaly of the Sun in degrees (not normalized).
#[must_use]
pub fn mean_anomaly(t: f64) -> f64 {
    357.529_11 + t * 35_999.050_29 - t * t * 0.000_153_7
}

/// Geometric mean longitude of the Sun in degrees, within `[0, 360)`.
#[must_use]
pub fn geometric_mean_longitude(t: f64) -> f64 {
    (280.466_46 + t * 36_000.769_83 + t * t * 0.000_303_2).rem_euclid(360.0)
}

/// Equation of center of the Sun in degrees.
#[must_use]
pub fn equation_of_center(t: f64) -> f64 {
    let m = mean_anomaly(t).to_radians();
    m.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * m).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * m).sin() * 0.000_289
}

/// True longitude of the Sun in degrees (not normalized).
#[must_use]
pub fn true_longitude(t: f64) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

/// Equation of time in minutes at a Unix instant.
///
/// Positive when apparent solar time runs ahead of mean solar time.
#[must_use]
pub fn equation_of_time(unix_seconds: f64) -> f64 {
    let t = julian_century(unix_seconds);
    let y = EQUATION_OF_TIME_OBLIQUITY_TERM;
    let l = geometric_mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = orbit_eccentricity(t);

    let radians = y * (2.0 * l).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l).cos()
        - 0.5 * y * y * (4.0 * l).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    // Four minutes of time per degree of rotation.
    4.0 * radians.to_degrees()
}

/// Latitude of the subsolar point in degrees.
#[must_use]
pub fn subsolar_latitude(unix_seconds: f64) -> f64 {
    let t = julian_century(unix_seconds);
    let true_longitude = true_longitude(t).to_radians();
    (true_longitude.sin() * AXIAL_TILT_DEG.to_radians().sin())
        .asin()
        .to_degrees()
}

/// Longitude of the subsolar point in degrees, within `[-180, 180]`.
///
/// At 12:00 apparent solar time the Sun is over the prime meridian, and it
/// moves westward at 15°/hour.
#[must_use]
pub fn subsolar_longitude(unix_seconds: f64) -> f64 {
    let utc_hours = utc_decimal_hours(unix_seconds);
    let eot_minutes = equation_of_time(unix_seconds);
    let longitude = (12.0 - utc_hours - eot_minutes / 60.0) * 15.0;

    // The equation of time never exceeds ~17 minutes, so one turn suffices.
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}

/// Subsolar `(latitude, longitude)` in degrees at a Unix instant.
#[must_use]
pub fn subsolar_point(unix_seconds: f64) -> (f64, f64) {
    let point = SubsolarPoint::at(unix_seconds);
    (point.latitude, point.longitude)
}

/// Unit vector from the globe centre toward the Sun, in the rendering frame.
///
/// Uses the same texture offset and axis remap as marker placement, so a
/// directional light aimed along `-sun_direction` lights the subsolar point.
#[must_use]
pub fn sun_direction(unix_seconds: f64) -> DVec3 {
    let point = SubsolarPoint::at(unix_seconds);
    projection::marker_position(point.latitude, point.longitude, GLOBE_RADIUS).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 2025-01-01T00:00:00Z.
    const NEW_YEAR_2025: f64 = 1_735_689_600.0;

    /// 2000-01-01T12:00:00Z.
    const J2000_UNIX: f64 = 946_728_000.0;

    #[test]
    fn test_series_at_j2000() {
        assert!((orbit_eccentricity(0.0) - 0.016_708_634).abs() < 1e-12);
        assert!((mean_anomaly(0.0) - 357.529_11).abs() < 1e-9);
        assert!((geometric_mean_longitude(0.0) - 280.466_46).abs() < 1e-9);
    }

    #[test]
    fn test_geometric_mean_longitude_is_normalized() {
        for i in -50..50 {
            let l = geometric_mean_longitude(f64::from(i) * 0.013);
            assert!((0.0..360.0).contains(&l), "{l}");
        }
    }

    #[test]
    fn test_equation_of_center_bounds() {
        // The first harmonic dominates; the sum never exceeds ~1.92°.
        for i in 0..360 {
            let t = f64::from(i) / 36_000.0;
            assert!(equation_of_center(t).abs() < 1.95);
        }
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // Early November: apparent time is ~16.4 minutes ahead.
        let november = 1_730_592_000.0; // 2024-11-03T00:00:00Z
        assert!((equation_of_time(november) - 16.4).abs() < 0.3);

        // Mid February: apparent time is ~14.2 minutes behind.
        let february = 1_739_232_000.0; // 2025-02-11T00:00:00Z
        assert!((equation_of_time(february) + 14.2).abs() < 0.3);
    }

    #[test]
    fn test_subsolar_point_new_year_2025() {
        // NOAA solar calculator: declination -23.01°, equation of time -3.3 min.
        let (lat, lon) = subsolar_point(NEW_YEAR_2025);
        assert!((lat - -23.01).abs() < 0.05, "lat {lat}");
        assert!((lon - -179.16).abs() < 0.05, "lon {lon}");
    }

    #[test]
    fn test_subsolar_point_near_j2000() {
        let (lat, lon) = subsolar_point(J2000_UNIX);
        assert!((lat - -23.03).abs() < 0.05, "lat {lat}");
        assert!((lon - 0.83).abs() < 0.05, "lon {lon}");
    }

    #[test]
    fn test_subsolar_latitude_near_solstice() {
        // 2025-06-21T02:42:00Z, June solstice.
        let lat = subsolar_latitude(1_750_473_720.0);
        assert!((lat - AXIAL_TILT_DEG).abs() < 0.01, "lat {lat}");
    }

    #[test]
    fn test_subsolar_latitude_bounded_over_a_year() {
        for hour in 0..(366 * 24) {
            let t = NEW_YEAR_2025 + f64::from(hour) * 3600.0;
            assert!(subsolar_latitude(t).abs() <= 23.45);
        }
    }

    #[test]
    fn test_sun_direction_matches_projection() {
        let dir = sun_direction(NEW_YEAR_2025);
        assert!((dir.length() - 1.0).abs() < 1e-12);
        // Southern summer: the Sun is below the equatorial plane (Y is up).
        assert!(dir.y < -0.38);
    }

    proptest! {
        #[test]
        fn subsolar_longitude_in_range(t in -1.0e9f64..4.0e9) {
            let lon = subsolar_longitude(t);
            prop_assert!((-180.0..=180.0).contains(&lon), "{lon}");
        }

        #[test]
        fn subsolar_latitude_bounded(t in -1.0e9f64..4.0e9) {
            prop_assert!(subsolar_latitude(t).abs() <= 23.45);
        }
    }
}
