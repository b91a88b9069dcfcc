//! Shared astronomical and scene constants.

/// Julian date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5;

/// Julian date of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JULIAN_DATE: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in an hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Earth's axial tilt in degrees.
pub const AXIAL_TILT_DEG: f64 = 23.44;

/// Calibrated `tan²(ε/2)` term of the equation of time.
///
/// Kept as-is; the subsolar longitude calibration depends on this exact value.
pub const EQUATION_OF_TIME_OBLIQUITY_TERM: f64 = 0.043_026_491_654_516_5;

/// Longitude offset applied to markers before projection, in degrees.
///
/// The globe texture is centred so that the prime meridian sits a quarter turn
/// away from the projection's zero longitude.
pub const TEXTURE_LONGITUDE_OFFSET_DEG: f64 = 90.0;

/// Latitude offset applied before building orbit-ring rotations, in degrees.
pub const ORBIT_LATITUDE_OFFSET_DEG: f64 = 180.0;

/// Longitude offset applied before building orbit-ring rotations, in degrees.
pub const ORBIT_LONGITUDE_OFFSET_DEG: f64 = -180.0;

/// Radius of the rendered globe in scene units.
pub const GLOBE_RADIUS: f64 = 1.0;

/// Default bound on the latitude change between consecutive samples, in degrees.
///
/// Larger jumps are treated as a stale or garbled sample.
pub const DEFAULT_MAX_LATITUDE_STEP_DEG: f64 = 5.0;
