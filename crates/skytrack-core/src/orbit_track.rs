//! Orbit-ring orientation around the globe.
//!
//! The orbit track is drawn as a torus parented to the globe. This module
//! computes the ring's local rotation so that it passes through the
//! satellite's current position with a plausible inclination and heading,
//! whatever rotation the user has applied to the globe.
//!
//! The model is a tuned visual heuristic rather than orbital mechanics:
//!
//! 1. Offset the position to `(lat + 180°, lon - 180°)`.
//! 2. Select a correction power `p` from the satellite's latitude table.
//! 3. Tilt by `inclination^p * heading` about Z.
//! 4. Compose `Rz(tilt) * (Rx(lat') * Ry(lon'))`.
//!
//! glam matrices are column-major and `a * b` applies `b` first, so the
//! composite applies the longitude turn, then the latitude turn, then the tilt.
//! Any other order visibly misorients the ring.

use std::f64::consts::PI;

use glam::{DMat3, DMat4};

use crate::catalog::{OrbitDescriptor, SatelliteCatalog};
use crate::constants::{ORBIT_LATITUDE_OFFSET_DEG, ORBIT_LONGITUDE_OFFSET_DEG};
use crate::heading::HeadingSign;

/// Everything a renderer needs to place one orbit ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTrackPlacement {
    /// Local rotation of the ring relative to the globe.
    pub rotation: DMat3,
    /// Signed tilt about Z in radians.
    pub corrected_inclination: f64,
    /// Power selected from the correction table.
    pub correction_power: f64,
    /// Latitude-scaled exponent term, reported for calibration.
    pub exponent: f64,
    /// Ring radius in scene units.
    pub ring_radius: f64,
    /// Linear RGBA ring color.
    pub color: [f32; 4],
}

impl OrbitTrackPlacement {
    /// The rotation as a homogeneous transform with no translation.
    #[must_use]
    pub fn transform(&self) -> DMat4 {
        DMat4::from_mat3(self.rotation)
    }
}

/// Latitude-scaled exponent term: `π / multiplier + |lat| (rad) / inclination`.
#[must_use]
pub fn calibration_exponent(descriptor: &OrbitDescriptor, lat_deg: f64) -> f64 {
    PI / descriptor.multiplier() + lat_deg.abs().to_radians() / descriptor.inclination_rad()
}

/// Signed ring tilt in radians: `inclination^p * heading`.
#[must_use]
pub fn corrected_inclination(
    descriptor: &OrbitDescriptor,
    lat_deg: f64,
    heading: HeadingSign,
) -> f64 {
    let power = descriptor.correction().select_power(lat_deg.abs());
    descriptor.inclination_rad().powf(power) * heading.factor()
}

/// Compute the orbit-ring placement for a satellite at `(lat, lon)` degrees.
#[must_use]
pub fn orient_orbit_track(
    descriptor: &OrbitDescriptor,
    lat_deg: f64,
    lon_deg: f64,
    heading: HeadingSign,
) -> OrbitTrackPlacement {
    let adjusted_lat = (lat_deg + ORBIT_LATITUDE_OFFSET_DEG).to_radians();
    let adjusted_lon = (lon_deg + ORBIT_LONGITUDE_OFFSET_DEG).to_radians();

    let exponent = calibration_exponent(descriptor, lat_deg);
    let correction_power = descriptor.correction().select_power(lat_deg.abs());
    let corrected_inclination = corrected_inclination(descriptor, lat_deg, heading);

    let tilt = DMat3::from_rotation_z(corrected_inclination);
    let around_lon = DMat3::from_rotation_y(adjusted_lon);
    let around_lat = DMat3::from_rotation_x(adjusted_lat);
    let rotation = tilt * (around_lat * around_lon);

    tracing::trace!(
        satellite = descriptor.id(),
        lat_deg,
        lon_deg,
        correction_power,
        corrected_inclination,
        exponent,
        "oriented orbit track"
    );

    OrbitTrackPlacement {
        rotation,
        corrected_inclination,
        correction_power,
        exponent,
        ring_radius: descriptor.ring_radius(),
        color: descriptor.color(),
    }
}

/// Look up `satellite` and orient its orbit ring.
///
/// Returns `None` for an unknown satellite id; the caller skips drawing.
#[must_use]
pub fn orient_for_satellite(
    catalog: &SatelliteCatalog,
    satellite: &str,
    lat_deg: f64,
    lon_deg: f64,
    heading: HeadingSign,
) -> Option<OrbitTrackPlacement> {
    let Some(descriptor) = catalog.get(satellite) else {
        tracing::debug!(satellite, "no orbit descriptor, skipping orbit track");
        return None;
    };
    Some(orient_orbit_track(descriptor, lat_deg, lon_deg, heading))
}
