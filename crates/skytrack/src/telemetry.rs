//! Recorded telemetry and catalog files.

use std::path::Path;

use serde::Deserialize;
use skytrack_core::{OrbitDescriptor, SatelliteCatalog};

use crate::error::{Error, Result};

/// One recorded position sample.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TelemetrySample {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Marker radius in scene units.
    pub altitude: f64,
    /// Unix seconds (UTC).
    pub timestamp: f64,
}

impl TelemetrySample {
    /// Whether every field is finite.
    ///
    /// Non-finite samples would turn every downstream value into NaN.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.altitude.is_finite()
            && self.timestamp.is_finite()
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, &e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, &e))
}

/// Load a JSON array of samples, dropping non-finite ones.
pub fn load_samples(path: &Path) -> Result<Vec<TelemetrySample>> {
    let samples: Vec<TelemetrySample> = read_json(path)?;
    let total = samples.len();
    let samples: Vec<_> = samples.into_iter().filter(TelemetrySample::is_finite).collect();
    if samples.len() != total {
        tracing::warn!(
            dropped = total - samples.len(),
            "dropped non-finite telemetry samples"
        );
    }
    tracing::info!(count = samples.len(), path = %path.display(), "loaded telemetry");
    Ok(samples)
}

/// Build the catalog: built-in descriptors, then any from `extra`.
pub fn load_catalog(extra: Option<&Path>) -> Result<SatelliteCatalog> {
    let mut catalog = SatelliteCatalog::builtin();
    if let Some(path) = extra {
        let descriptors: Vec<OrbitDescriptor> = read_json(path)?;
        for descriptor in descriptors {
            if catalog.insert(descriptor.clone()).is_some() {
                tracing::info!(satellite = descriptor.id(), "replaced built-in descriptor");
            }
        }
        tracing::info!(count = catalog.len(), path = %path.display(), "loaded catalog");
    }
    Ok(catalog)
}
