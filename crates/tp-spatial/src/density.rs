//! Neighbour density per tower.
//!
//! `density(t)` is the number of *other* towers of the whole table (not just
//! t's zone) whose distance to `t` is `<= radius_km`.  Self-exclusion is by
//! id, so two towers at identical coordinates count each other.
//!
//! Towers without coordinates take no part: their density is `None`, and
//! they are never counted as anyone's neighbour.

use tracing::info;

use tp_core::{GeoPoint, PlanConfig, TowerId};
use tp_synth::TowerTable;

use crate::{DistanceModel, SpatialError, SpatialResult, TowerIndex};

#[derive(Copy, Clone, Debug)]
pub struct DensityEstimator {
    model:     DistanceModel,
    radius_km: f64,
}

impl DensityEstimator {
    pub fn new(model: DistanceModel, radius_km: f64) -> SpatialResult<Self> {
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(SpatialError::InvalidRadius(radius_km));
        }
        Ok(Self { model, radius_km })
    }

    pub fn from_config(config: &PlanConfig) -> SpatialResult<Self> {
        Self::new(DistanceModel::from_config(config), config.density_radius_km)
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn model(&self) -> DistanceModel {
        self.model
    }

    /// Density column for `table`, indexed by `TowerId`.
    pub fn estimate(&self, table: &TowerTable) -> Vec<Option<u32>> {
        let positions: Vec<Option<GeoPoint>> = table.iter().map(|t| t.position()).collect();
        let density = self.estimate_positions(&positions);

        info!(
            towers = table.len(),
            positioned = density.iter().flatten().count(),
            radius_km = self.radius_km,
            "computed tower density"
        );
        density
    }

    /// Density for a column of optional positions, using an R-tree for
    /// candidate lookup.  `result[i]` belongs to `positions[i]`.
    pub fn estimate_positions(&self, positions: &[Option<GeoPoint>]) -> Vec<Option<u32>> {
        let index = TowerIndex::from_points(
            positions
                .iter()
                .enumerate()
                .filter_map(|(i, p)| p.map(|p| (TowerId(i as u32), p))),
        );
        let projection = self.model.projection();

        let count = |i: usize, p: &Option<GeoPoint>| -> Option<u32> {
            let p = (*p)?;
            let n = index
                .candidates_within(p, self.radius_km, projection)
                .filter(|&(id, q)| id.index() != i && self.model.distance_km(p, q) <= self.radius_km)
                .count();
            Some(n as u32)
        };

        #[cfg(not(feature = "parallel"))]
        {
            positions.iter().enumerate().map(|(i, p)| count(i, p)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            positions.par_iter().enumerate().map(|(i, p)| count(i, p)).collect()
        }
    }

    /// Same result as [`estimate_positions`](Self::estimate_positions) by
    /// testing every pair.  O(n²); used as the reference in tests and for
    /// small inputs.
    pub fn estimate_brute_force(&self, positions: &[Option<GeoPoint>]) -> Vec<Option<u32>> {
        positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let p = (*p)?;
                let n = positions
                    .iter()
                    .enumerate()
                    .filter(|&(j, q)| {
                        j != i && q.is_some_and(|q| self.model.distance_km(p, q) <= self.radius_km)
                    })
                    .count();
                Some(n as u32)
            })
            .collect()
    }
}
