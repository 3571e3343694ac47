//! Route and route-metric types.

use tp_core::{GeoPoint, TowerId};
use tp_spatial::DistanceModel;

// ── RouteMetrics ──────────────────────────────────────────────────────────────

/// Aggregate cost of one route.
///
/// `time_hours = driving_hours + service_hours`.  Routes with fewer than two
/// stops have zero distance and zero time; `stop_count` is always the route
/// length.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetrics {
    pub distance_km:   f64,
    pub time_hours:    f64,
    pub stop_count:    usize,
    pub driving_hours: f64,
    pub service_hours: f64,
}

impl RouteMetrics {
    /// Metrics along `path` in the given order.  No closing edge back to the
    /// first stop is counted.  `avg_speed_kmh` must be finite and positive;
    /// `RouteOptimizer::new` checks it before any route is built.
    pub(crate) fn along(
        path:                   &[GeoPoint],
        model:                  &DistanceModel,
        avg_speed_kmh:          f64,
        service_hours_per_stop: f64,
    ) -> Self {
        let stop_count = path.len();
        if stop_count < 2 {
            return Self { stop_count, ..Self::default() };
        }
        let distance_km: f64 = path.windows(2).map(|w| model.distance_km(w[0], w[1])).sum();
        let driving_hours = distance_km / avg_speed_kmh;
        let service_hours = stop_count as f64 * service_hours_per_stop;
        Self {
            distance_km,
            time_hours: driving_hours + service_hours,
            stop_count,
            driving_hours,
            service_hours,
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An open visiting path through one zone's towers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub zone:    String,
    /// Towers in visiting order, each exactly once.
    pub stops:   Vec<TowerId>,
    pub metrics: RouteMetrics,
}

impl Route {
    /// A route with no stops and zero metrics.
    pub fn empty(zone: impl Into<String>) -> Self {
        Self { zone: zone.into(), stops: Vec::new(), metrics: RouteMetrics::default() }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
