//! Per-satellite orbit descriptors.
//!
//! Each tracked object carries a small bundle of hand-tuned constants used to
//! place its orbit ring on the globe. The values are calibration data, chosen
//! by eye against the rendered globe, and are kept verbatim; they are not
//! derived from orbital mechanics.
//!
//! Descriptors live in a [`SatelliteCatalog`] keyed by id, so adding a tracked
//! object is a data change. Catalogs can be extended from JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Piecewise table mapping `|latitude|` to an inclination correction power.
///
/// Holds one more power than thresholds; the last power applies beyond every
/// threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionTable {
    thresholds_deg: Vec<f64>,
    powers: Vec<f64>,
}

impl CorrectionTable {
    /// Create a table. It is validated when used to build an [`OrbitDescriptor`].
    #[must_use]
    pub fn new(thresholds_deg: Vec<f64>, powers: Vec<f64>) -> Self {
        Self {
            thresholds_deg,
            powers,
        }
    }

    /// Threshold latitudes in degrees, strictly increasing.
    #[must_use]
    pub fn thresholds_deg(&self) -> &[f64] {
        &self.thresholds_deg
    }

    /// Correction powers, one more than the thresholds.
    #[must_use]
    pub fn powers(&self) -> &[f64] {
        &self.powers
    }

    /// Select the correction power for an absolute latitude in degrees.
    ///
    /// Uses the power at the first threshold `>= abs_lat_deg`, or the final
    /// power when the latitude exceeds every threshold.
    #[must_use]
    pub fn select_power(&self, abs_lat_deg: f64) -> f64 {
        let index = self
            .thresholds_deg
            .iter()
            .position(|&threshold| threshold >= abs_lat_deg)
            .unwrap_or(self.thresholds_deg.len());
        // Unvalidated tables fall back to their last power, or no correction.
        self.powers
            .get(index)
            .or(self.powers.last())
            .copied()
            .unwrap_or(1.0)
    }

    fn validate(&self, satellite: &str) -> Result<()> {
        let invalid = |detail: String| Error::InvalidDescriptor {
            satellite: satellite.to_owned(),
            detail,
        };

        if self.powers.len() != self.thresholds_deg.len() + 1 {
            return Err(invalid(format!(
                "expected {} powers for {} thresholds, got {}",
                self.thresholds_deg.len() + 1,
                self.thresholds_deg.len(),
                self.powers.len()
            )));
        }
        if self.thresholds_deg.iter().any(|t| !t.is_finite()) {
            return Err(invalid("thresholds must be finite".to_owned()));
        }
        if self.thresholds_deg.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("thresholds must be strictly increasing".to_owned()));
        }
        if self.powers.iter().any(|p| !p.is_finite()) {
            return Err(invalid("powers must be finite".to_owned()));
        }
        if self.powers.windows(2).any(|w| w[0] > w[1]) {
            return Err(invalid("powers must be non-decreasing".to_owned()));
        }
        Ok(())
    }
}

/// Static configuration for one tracked satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrbitDescriptorData", into = "OrbitDescriptorData")]
pub struct OrbitDescriptor {
    id: String,
    name: String,
    inclination_rad: f64,
    multiplier: f64,
    ring_radius: f64,
    color: [f32; 4],
    correction: CorrectionTable,
}

impl OrbitDescriptor {
    /// Build a validated descriptor.
    ///
    /// `inclination_deg` is the orbital inclination in degrees; it is stored in
    /// radians.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        inclination_deg: f64,
        multiplier: f64,
        ring_radius: f64,
        color: [f32; 4],
        correction: CorrectionTable,
    ) -> Result<Self> {
        let descriptor = Self {
            id: id.into(),
            name: name.into(),
            inclination_rad: inclination_deg.to_radians(),
            multiplier,
            ring_radius,
            color,
            correction,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Build a descriptor from compile-time data without validation.
    fn from_static(data: &StaticDescriptor) -> Self {
        Self {
            id: data.id.to_owned(),
            name: data.name.to_owned(),
            inclination_rad: data.inclination_deg.to_radians(),
            multiplier: data.multiplier,
            ring_radius: data.ring_radius,
            color: data.color,
            correction: CorrectionTable {
                thresholds_deg: data.thresholds_deg.to_vec(),
                powers: data.powers.to_vec(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |detail: &str| Error::InvalidDescriptor {
            satellite: self.id.clone(),
            detail: detail.to_owned(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if !(self.inclination_rad.is_finite() && self.inclination_rad > 0.0) {
            return Err(invalid("inclination must be positive"));
        }
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            return Err(invalid("multiplier must be positive"));
        }
        if !(self.ring_radius.is_finite() && self.ring_radius > 0.0) {
            return Err(invalid("ring radius must be positive"));
        }
        self.correction.validate(&self.id)
    }

    /// Catalog key, e.g. `iss`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Orbital inclination in radians.
    #[must_use]
    pub fn inclination_rad(&self) -> f64 {
        self.inclination_rad
    }

    /// Visual scale multiplier used in the diagnostic exponent.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Radius of the orbit ring in scene units (globe radius is 1).
    #[must_use]
    pub fn ring_radius(&self) -> f64 {
        self.ring_radius
    }

    /// Linear RGBA ring color.
    #[must_use]
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Latitude-keyed correction table.
    #[must_use]
    pub fn correction(&self) -> &CorrectionTable {
        &self.correction
    }
}

/// Serialized form of [`OrbitDescriptor`], with inclination in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OrbitDescriptorData {
    id: String,
    name: String,
    inclination_deg: f64,
    multiplier: f64,
    ring_radius: f64,
    color: [f32; 4],
    thresholds_deg: Vec<f64>,
    powers: Vec<f64>,
}

impl TryFrom<OrbitDescriptorData> for OrbitDescriptor {
    type Error = Error;

    fn try_from(data: OrbitDescriptorData) -> Result<Self> {
        OrbitDescriptor::new(
            data.id,
            data.name,
            data.inclination_deg,
            data.multiplier,
            data.ring_radius,
            data.color,
            CorrectionTable {
                thresholds_deg: data.thresholds_deg,
                powers: data.powers,
            },
        )
    }
}

impl From<OrbitDescriptor> for OrbitDescriptorData {
    fn from(descriptor: OrbitDescriptor) -> Self {
        Self {
            id: descriptor.id,
            name: descriptor.name,
            inclination_deg: descriptor.inclination_rad.to_degrees(),
            multiplier: descriptor.multiplier,
            ring_radius: descriptor.ring_radius,
            color: descriptor.color,
            thresholds_deg: descriptor.correction.thresholds_deg,
            powers: descriptor.correction.powers,
        }
    }
}

/// Compile-time descriptor data.
struct StaticDescriptor {
    id: &'static str,
    name: &'static str,
    inclination_deg: f64,
    multiplier: f64,
    ring_radius: f64,
    color: [f32; 4],
    thresholds_deg: &'static [f64],
    powers: &'static [f64],
}

/// Built-in tracked objects.
///
/// Table lengths differ per object; each was tuned separately.
const BUILTIN: &[StaticDescriptor] = &[
    StaticDescriptor {
        id: "iss",
        name: "International Space Station",
        inclination_deg: 51.6,
        multiplier: 3.70,
        ring_radius: 1.07,
        color: [1.0, 0.27, 0.0, 1.0],
        thresholds_deg: &[12.0, 17.0, 25.0, 33.0, 40.0, 45.0, 49.0, 51.0],
        powers: &[0.80, 0.85, 1.00, 1.25, 1.60, 2.00, 2.50, 3.20, 4.00],
    },
    StaticDescriptor {
        id: "tiangong",
        name: "Tiangong Space Station",
        inclination_deg: 41.5,
        multiplier: 3.85,
        ring_radius: 1.07,
        color: [1.0, 0.84, 0.0, 1.0],
        thresholds_deg: &[10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 38.0, 41.0],
        powers: &[0.80, 0.85, 0.95, 1.10, 1.40, 1.80, 2.30, 3.00, 3.80],
    },
    StaticDescriptor {
        id: "hubble",
        name: "Hubble Space Telescope",
        inclination_deg: 28.5,
        multiplier: 4.30,
        ring_radius: 1.08,
        color: [0.0, 0.75, 1.0, 1.0],
        thresholds_deg: &[10.0, 15.0, 20.0, 24.0, 27.0],
        powers: &[0.90, 1.00, 1.20, 1.60, 2.20, 3.00],
    },
];

/// Orbit descriptors keyed by satellite id.
#[derive(Debug, Clone, Default)]
pub struct SatelliteCatalog {
    descriptors: HashMap<String, OrbitDescriptor>,
}

impl SatelliteCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in tracked objects.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for data in BUILTIN {
            catalog.insert(OrbitDescriptor::from_static(data));
        }
        catalog
    }

    /// Add or replace a descriptor, returning the one it replaced.
    pub fn insert(&mut self, descriptor: OrbitDescriptor) -> Option<OrbitDescriptor> {
        self.descriptors.insert(descriptor.id.clone(), descriptor)
    }

    /// Look up a descriptor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&OrbitDescriptor> {
        self.descriptors.get(id)
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the catalog has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors sorted by id.
    #[must_use]
    pub fn sorted(&self) -> Vec<&OrbitDescriptor> {
        let mut descriptors: Vec<_> = self.descriptors.values().collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }
}

impl Extend<OrbitDescriptor> for SatelliteCatalog {
    fn extend<I: IntoIterator<Item = OrbitDescriptor>>(&mut self, iter: I) {
        for descriptor in iter {
            self.insert(descriptor);
        }
    }
}
