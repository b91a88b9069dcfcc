//! Spherical projection between geographic and scene coordinates.
//!
//! The scene frame is Y-up. A geographic point is first expanded into the
//! usual Z-up spherical frame and then remapped as `(x, y, z) -> (-x, z, y)`.
//! The consumer's globe mesh is built in that frame, so the remap is fixed.

use glam::DVec3;

use crate::constants::TEXTURE_LONGITUDE_OFFSET_DEG;

/// Convert latitude, longitude (degrees) and radius to a scene position.
///
/// Uses a spherical Earth approximation. No texture offset is applied; see
/// [`marker_position`] for placement on the textured globe.
#[must_use]
pub fn lat_lon_alt_to_xyz(lat_deg: f64, lon_deg: f64, altitude: f64) -> DVec3 {
    let lat_rad = lat_deg.to_radians();
    let lon_rad = lon_deg.to_radians();
    let x = altitude * lat_rad.cos() * lon_rad.cos();
    let y = altitude * lat_rad.cos() * lon_rad.sin();
    let z = altitude * lat_rad.sin();
    DVec3::new(-x, z, y)
}

/// Convert a scene position back to latitude, longitude (degrees) and radius.
///
/// Inverse of [`lat_lon_alt_to_xyz`]. The origin maps to `(0, 0, 0)`.
#[must_use]
pub fn xyz_to_lat_lon_alt(position: DVec3) -> (f64, f64, f64) {
    let radius = position.length();
    if radius == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    // Undo the remap: scene (X, Y, Z) = (-x, z, y).
    let (x, y, z) = (-position.x, position.z, position.y);
    let lat_rad = (z / radius).asin();
    let lon_rad = y.atan2(x);
    (lat_rad.to_degrees(), lon_rad.to_degrees(), radius)
}

/// Scene position of a marker on the textured globe.
///
/// Applies the +90° texture longitude offset before projecting.
#[must_use]
pub fn marker_position(lat_deg: f64, lon_deg: f64, altitude: f64) -> DVec3 {
    lat_lon_alt_to_xyz(lat_deg, lon_deg + TEXTURE_LONGITUDE_OFFSET_DEG, altitude)
}
