//! Run configuration.

use crate::{Projection, TpError, TpResult};

/// Top-level planning configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to the synthesizer, density estimator, and
/// route optimizer.  Every field has a default, so a partial file is fine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanConfig {
    /// Master RNG seed.  The same seed and zone order always produce
    /// identical towers.
    pub seed: u64,

    /// Degree ↔ km policy shared by synthesis and distance computation.
    pub projection: Projection,

    /// Neighbour radius for tower density, in kilometres.
    pub density_radius_km: f64,

    /// Assumed average driving speed between stops.
    pub avg_speed_kmh: f64,

    /// Fixed on-site service time charged per stop, in hours.
    pub service_hours_per_stop: f64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored unless a crate is built with its `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            seed:                   42,
            projection:             Projection::default(),
            density_radius_km:      5.0,
            avg_speed_kmh:          60.0,
            service_hours_per_stop: 0.5,
            num_threads:            None,
        }
    }
}

impl PlanConfig {
    /// Reject values that would make downstream computations meaningless.
    /// Nothing is clamped.
    pub fn validate(&self) -> TpResult<()> {
        if !(self.density_radius_km.is_finite() && self.density_radius_km > 0.0) {
            return Err(TpError::Config(format!(
                "density_radius_km must be positive, got {}",
                self.density_radius_km
            )));
        }
        if !(self.avg_speed_kmh.is_finite() && self.avg_speed_kmh > 0.0) {
            return Err(TpError::Config(format!(
                "avg_speed_kmh must be positive, got {}",
                self.avg_speed_kmh
            )));
        }
        if !(self.service_hours_per_stop.is_finite() && self.service_hours_per_stop >= 0.0) {
            return Err(TpError::Config(format!(
                "service_hours_per_stop must be non-negative, got {}",
                self.service_hours_per_stop
            )));
        }
        if self.num_threads == Some(0) {
            return Err(TpError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
