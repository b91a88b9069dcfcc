//! Heading determination across successive telemetry samples.
//!
//! Whether a satellite is heading north or south decides which way its orbit
//! ring tilts. Telemetry only carries positions, so the heading is inferred
//! from the latitude change between consecutive samples. Each tracked
//! satellite owns one [`HeadingState`]; nothing here is shared.

use glam::DVec3;

use crate::catalog::SatelliteCatalog;
use crate::constants::DEFAULT_MAX_LATITUDE_STEP_DEG;
use crate::orbit_track::{self, OrbitTrackPlacement};
use crate::projection;

/// Direction of latitude change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingSign {
    /// Latitude is increasing (or unchanged).
    #[default]
    Ascending,
    /// Latitude is decreasing.
    Descending,
}

impl HeadingSign {
    /// Sign of a latitude delta; a zero delta counts as ascending.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            HeadingSign::Descending
        } else {
            HeadingSign::Ascending
        }
    }

    /// Returns `1.0` or `-1.0`.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            HeadingSign::Ascending => 1.0,
            HeadingSign::Descending => -1.0,
        }
    }
}

/// Outcome of feeding one latitude sample into a [`HeadingState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingDecision {
    /// No previous sample; the heading is unknown.
    FirstSample,
    /// The heading is known and the orbit track can be drawn.
    Draw { heading_sign: HeadingSign },
    /// The latitude jumped further than the sanity bound; skip this cycle.
    Discontinuity { delta: f64 },
}

impl HeadingDecision {
    /// The heading to draw with, if this cycle draws an orbit track.
    #[must_use]
    pub fn heading_sign(self) -> Option<HeadingSign> {
        match self {
            HeadingDecision::Draw { heading_sign } => Some(heading_sign),
            _ => None,
        }
    }
}

/// Per-satellite heading memory.
///
/// A `last_latitude` of exactly zero means no sample has been seen yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingState {
    pub last_latitude: f64,
    pub heading_sign: HeadingSign,
}

impl HeadingState {
    /// A fresh state with no previous sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest latitude.
    ///
    /// `last_latitude` is always updated, including when the sample is
    /// rejected as a discontinuity.
    #[allow(clippy::float_cmp)]
    pub fn update(&mut self, latitude: f64, max_latitude_step: f64) -> HeadingDecision {
        let previous = self.last_latitude;
        self.last_latitude = latitude;

        if previous == 0.0 {
            return HeadingDecision::FirstSample;
        }

        let delta = latitude - previous;
        if delta.abs() < max_latitude_step {
            self.heading_sign = HeadingSign::from_delta(delta);
            HeadingDecision::Draw {
                heading_sign: self.heading_sign,
            }
        } else {
            tracing::debug!(previous, latitude, delta, "latitude jump, skipping orbit track");
            HeadingDecision::Discontinuity { delta }
        }
    }
}

/// Result of one telemetry cycle for one satellite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingUpdate {
    /// Marker position in the scene frame.
    pub marker: DVec3,
    /// What the heading state decided this cycle.
    pub decision: HeadingDecision,
    /// Orbit ring placement, when one should be drawn.
    pub orbit: Option<OrbitTrackPlacement>,
}

/// Drives one satellite through successive telemetry samples.
#[derive(Debug, Clone)]
pub struct SatelliteTracker {
    satellite: String,
    heading: HeadingState,
    max_latitude_step: f64,
}

impl SatelliteTracker {
    /// Track `satellite` with the default latitude sanity bound.
    pub fn new(satellite: impl Into<String>) -> Self {
        Self::with_max_latitude_step(satellite, DEFAULT_MAX_LATITUDE_STEP_DEG)
    }

    /// Track `satellite`, rejecting latitude jumps of `max_latitude_step` degrees or more.
    pub fn with_max_latitude_step(satellite: impl Into<String>, max_latitude_step: f64) -> Self {
        Self {
            satellite: satellite.into(),
            heading: HeadingState::new(),
            max_latitude_step,
        }
    }

    /// The tracked satellite id.
    #[must_use]
    pub fn satellite(&self) -> &str {
        &self.satellite
    }

    /// Current heading memory.
    #[must_use]
    pub fn heading(&self) -> HeadingState {
        self.heading
    }

    /// Process one telemetry sample.
    ///
    /// The marker is always placed. The orbit ring is placed only once the
    /// heading is known, the sample is continuous with the last one, and the
    /// satellite has a descriptor in `catalog`.
    pub fn update(
        &mut self,
        catalog: &SatelliteCatalog,
        lat_deg: f64,
        lon_deg: f64,
        altitude: f64,
    ) -> TrackingUpdate {
        let marker = projection::marker_position(lat_deg, lon_deg, altitude);
        let decision = self.heading.update(lat_deg, self.max_latitude_step);
        let orbit = decision.heading_sign().and_then(|heading| {
            orbit_track::orient_for_satellite(catalog, &self.satellite, lat_deg, lon_deg, heading)
        });
        TrackingUpdate {
            marker,
            decision,
            orbit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_never_draws() {
        let mut state = HeadingState::new();
        assert_eq!(state.update(35.0, 5.0), HeadingDecision::FirstSample);
        assert!((state.last_latitude - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_second_sample_sets_heading() {
        let mut state = HeadingState::new();
        state.update(10.0, 5.0);
        assert_eq!(
            state.update(12.0, 5.0),
            HeadingDecision::Draw {
                heading_sign: HeadingSign::Ascending
            }
        );

        let mut state = HeadingState::new();
        state.update(10.0, 5.0);
        assert_eq!(
            state.update(8.0, 5.0),
            HeadingDecision::Draw {
                heading_sign: HeadingSign::Descending
            }
        );
        assert_eq!(state.heading_sign, HeadingSign::Descending);
    }

    #[test]
    fn test_zero_delta_is_ascending() {
        let mut state = HeadingState::new();
        state.update(-20.0, 5.0);
        assert_eq!(
            state.update(-20.0, 5.0).heading_sign(),
            Some(HeadingSign::Ascending)
        );
    }

    #[test]
    fn test_discontinuity_skips_but_updates_latitude() {
        let mut state = HeadingState::new();
        state.update(10.0, 5.0);
        state.update(9.0, 5.0);
        let decision = state.update(30.0, 5.0);
        assert!(matches!(
            decision,
            HeadingDecision::Discontinuity { delta } if (delta - 21.0).abs() < 1e-12
        ));
        // The previous heading is kept.
        assert_eq!(state.heading_sign, HeadingSign::Descending);
        assert!((state.last_latitude - 30.0).abs() < f64::EPSILON);

        // The next continuous sample draws again.
        assert!(state.update(31.0, 5.0).heading_sign().is_some());
    }

    #[test]
    fn test_delta_equal_to_bound_is_discontinuity() {
        let mut state = HeadingState::new();
        state.update(10.0, 5.0);
        assert_eq!(
            state.update(15.0, 5.0),
            HeadingDecision::Discontinuity { delta: 5.0 }
        );
        assert_eq!(
            state.update(10.0, 5.0),
            HeadingDecision::Discontinuity { delta: -5.0 }
        );
        assert!(state.update(14.99, 5.0).heading_sign().is_some());
    }

    #[test]
    fn test_tracker_places_marker_every_cycle() {
        let catalog = SatelliteCatalog::builtin();
        let mut tracker = SatelliteTracker::new("iss");

        let first = tracker.update(&catalog, 10.0, 20.0, 1.07);
        assert_eq!(first.decision, HeadingDecision::FirstSample);
        assert!(first.orbit.is_none());
        assert!((first.marker.length() - 1.07).abs() < 1e-12);

        let second = tracker.update(&catalog, 11.0, 24.0, 1.07);
        let orbit = second.orbit.unwrap();
        assert!(orbit.corrected_inclination > 0.0);
        assert_eq!(tracker.heading().heading_sign, HeadingSign::Ascending);
    }

    #[test]
    fn test_tracker_unknown_satellite_never_draws() {
        let catalog = SatelliteCatalog::builtin();
        let mut tracker = SatelliteTracker::new("unknown");
        tracker.update(&catalog, 10.0, 20.0, 1.07);
        let update = tracker.update(&catalog, 11.0, 24.0, 1.07);
        assert!(update.decision.heading_sign().is_some());
        assert!(update.orbit.is_none());
    }
}
