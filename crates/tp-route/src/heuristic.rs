//! Stop-ordering heuristics.
//!
//! [`RouteOptimizer`](crate::RouteOptimizer) asks a [`RouteHeuristic`] for a
//! visiting order and computes metrics along whatever order it gets back, so
//! a different construction (e.g. a 2-opt pass) can be dropped in without
//! touching zone grouping or metrics.

use tp_core::GeoPoint;
use tp_spatial::DistanceModel;

/// Produces a visiting order over a zone's stops.
///
/// Implementations must be `Send + Sync` so zones can be planned on Rayon
/// worker threads.
pub trait RouteHeuristic: Send + Sync {
    /// Return a permutation of `0..stops.len()`.  Must be deterministic for
    /// identical input.
    fn order(&self, stops: &[GeoPoint], model: &DistanceModel) -> Vec<usize>;
}

/// Greedy nearest-unvisited-neighbour path.
///
/// 1. Start at the stop closest to the stops' centroid, measured in degree
///    space.
/// 2. Repeatedly move to the unvisited stop with the smallest
///    [`DistanceModel`] distance from the current one.
///
/// Ties go to the stop that comes first in input order, in both steps.
/// O(n²) per zone.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Index of the stop nearest the centroid.  `None` for no stops.
    pub fn start_index(stops: &[GeoPoint]) -> Option<usize> {
        let centroid = GeoPoint::centroid(stops.iter().copied())?;
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in stops.iter().enumerate() {
            let d = p.degree_distance_2(centroid);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl RouteHeuristic for NearestNeighbor {
    fn order(&self, stops: &[GeoPoint], model: &DistanceModel) -> Vec<usize> {
        let Some(start) = Self::start_index(stops) else { return Vec::new() };

        let mut visited = vec![false; stops.len()];
        let mut order = Vec::with_capacity(stops.len());
        visited[start] = true;
        order.push(start);

        let mut current = start;
        while order.len() < stops.len() {
            let mut best: Option<(usize, f64)> = None;
            for (j, &p) in stops.iter().enumerate() {
                if visited[j] {
                    continue;
                }
                let d = model.distance_km(stops[current], p);
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((j, d));
                }
            }
            let Some((next, _)) = best else { break };
            visited[next] = true;
            order.push(next);
            current = next;
        }
        order
    }
}
