//! Geometry core for real-time satellite globe viewers.
//!
//! This crate turns raw telemetry (latitude, longitude, altitude, timestamps)
//! into quantities a renderer can consume directly: the subsolar point for
//! lighting, Cartesian marker positions, orbit-ring rotations, and
//! human-readable coordinate strings.
//!
//! # Design principles
//!
//! - **Synchronous and pure**: No I/O, no threading primitives, no globals
//! - **Caller-owned state**: The only mutable state, [`HeadingState`], is
//!   owned by the caller (one per tracked satellite) and passed in by `&mut`
//! - **Renderer-agnostic**: Outputs are plain `glam` vectors and matrices
//!
//! # Example
//!
//! ```
//! use skytrack_core::{SatelliteCatalog, SatelliteTracker, solar};
//!
//! let (lat, lon) = solar::subsolar_point(1_735_689_600.0);
//! assert!(lat.abs() <= 23.45 && (-180.0..=180.0).contains(&lon));
//!
//! let catalog = SatelliteCatalog::builtin();
//! let mut tracker = SatelliteTracker::new("iss");
//! let first = tracker.update(&catalog, 10.0, 20.0, 1.07);
//! assert!(first.orbit.is_none());
//! let second = tracker.update(&catalog, 12.0, 24.0, 1.07);
//! assert!(second.orbit.is_some());
//! ```

pub mod catalog;
pub mod constants;
mod error;
pub mod format;
pub mod heading;
pub mod orbit_track;
pub mod projection;
pub mod solar;
pub mod time;

pub use catalog::{CorrectionTable, OrbitDescriptor, SatelliteCatalog};
pub use error::{Error, Result};
pub use format::{CoordinateTemplate, DegMin, DegMinSec, Hemisphere};
pub use heading::{HeadingDecision, HeadingSign, HeadingState, SatelliteTracker, TrackingUpdate};
pub use orbit_track::OrbitTrackPlacement;
pub use time::CivilDateTime;

// Re-export glam types used in the public API.
pub use glam::{DMat3, DMat4, DVec3};
