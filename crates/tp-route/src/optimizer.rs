//! Zone-by-zone route planning over a tower table.

use tracing::{debug, info, warn};

use tp_core::{GeoPoint, PlanConfig, TowerId};
use tp_spatial::DistanceModel;
use tp_synth::TowerTable;
use tp_zones::ZoneCatalog;

use crate::{NearestNeighbor, Route, RouteError, RouteHeuristic, RouteMetrics, RoutePlan, RouteResult};

/// Builds one [`Route`] per zone.
///
/// Each zone's route reads only that zone's towers, so zones are independent
/// and, with the `parallel` feature, are planned concurrently.  The result
/// is the same either way.
#[derive(Clone, Debug)]
pub struct RouteOptimizer<H: RouteHeuristic = NearestNeighbor> {
    model:                  DistanceModel,
    avg_speed_kmh:          f64,
    service_hours_per_stop: f64,
    heuristic:              H,
}

impl RouteOptimizer<NearestNeighbor> {
    pub fn new(
        model:                  DistanceModel,
        avg_speed_kmh:          f64,
        service_hours_per_stop: f64,
    ) -> RouteResult<Self> {
        if !(avg_speed_kmh.is_finite() && avg_speed_kmh > 0.0) {
            return Err(RouteError::InvalidSpeed(avg_speed_kmh));
        }
        if !(service_hours_per_stop.is_finite() && service_hours_per_stop >= 0.0) {
            return Err(RouteError::InvalidServiceTime(service_hours_per_stop));
        }
        Ok(Self { model, avg_speed_kmh, service_hours_per_stop, heuristic: NearestNeighbor })
    }

    pub fn from_config(config: &PlanConfig) -> RouteResult<Self> {
        Self::new(
            DistanceModel::from_config(config),
            config.avg_speed_kmh,
            config.service_hours_per_stop,
        )
    }
}

impl<H: RouteHeuristic> RouteOptimizer<H> {
    /// Swap the stop-ordering heuristic, keeping distance model and costs.
    pub fn with_heuristic<H2: RouteHeuristic>(self, heuristic: H2) -> RouteOptimizer<H2> {
        RouteOptimizer {
            model: self.model,
            avg_speed_kmh: self.avg_speed_kmh,
            service_hours_per_stop: self.service_hours_per_stop,
            heuristic,
        }
    }

    pub fn model(&self) -> DistanceModel {
        self.model
    }

    /// Route through `stops`, all of which belong to `zone`.
    ///
    /// Never fails: no stops gives an empty route, one stop a single-stop
    /// route, both with zero distance and time.
    pub fn plan_zone(&self, zone: &str, stops: &[(TowerId, GeoPoint)]) -> Route {
        let points: Vec<GeoPoint> = stops.iter().map(|&(_, p)| p).collect();
        let order = self.heuristic.order(&points, &self.model);

        let path: Vec<GeoPoint> = order.iter().map(|&i| points[i]).collect();
        let metrics = RouteMetrics::along(&path, &self.model, self.avg_speed_kmh, self.service_hours_per_stop);
        let route = Route {
            zone:  zone.to_owned(),
            stops: order.iter().map(|&i| stops[i].0).collect(),
            metrics,
        };

        debug!(zone, stops = route.len(), distance_km = metrics.distance_km, "planned zone route");
        route
    }

    /// Plan every zone that has at least one tower in `table`, in order of
    /// first appearance.  Zones whose towers all lack coordinates get an
    /// empty route.
    pub fn plan_table(&self, table: &TowerTable) -> RoutePlan {
        let groups: Vec<(String, Vec<(TowerId, GeoPoint)>)> = table
            .by_zone()
            .into_iter()
            .map(|(zone, ids)| (zone.to_owned(), positioned(table, &ids)))
            .collect();
        self.plan_groups(groups)
    }

    /// Plan every zone of `catalog` in catalog order, including zones with
    /// no towers in `table`.  Towers whose zone is not in the catalog are
    /// planned after the catalog zones, in order of first appearance.
    pub fn plan_catalog(&self, catalog: &ZoneCatalog, table: &TowerTable) -> RoutePlan {
        let mut by_zone = table.by_zone();
        let mut groups = Vec::with_capacity(catalog.len() + by_zone.len());

        for zone in catalog.zones() {
            let stops = match by_zone.iter().position(|(z, _)| *z == zone.name()) {
                Some(i) => positioned(table, &by_zone.remove(i).1),
                None => Vec::new(),
            };
            groups.push((zone.name().to_owned(), stops));
        }
        for (zone, ids) in by_zone {
            warn!(zone, towers = ids.len(), "zone not in catalog; planning anyway");
            groups.push((zone.to_owned(), positioned(table, &ids)));
        }
        self.plan_groups(groups)
    }

    fn plan_groups(&self, groups: Vec<(String, Vec<(TowerId, GeoPoint)>)>) -> RoutePlan {
        #[cfg(not(feature = "parallel"))]
        let routes: Vec<Route> = groups
            .iter()
            .map(|(zone, stops)| self.plan_zone(zone, stops))
            .collect();

        #[cfg(feature = "parallel")]
        let routes: Vec<Route> = {
            use rayon::prelude::*;
            groups
                .par_iter()
                .map(|(zone, stops)| self.plan_zone(zone, stops))
                .collect()
        };

        for r in routes.iter().filter(|r| r.is_empty()) {
            warn!(zone = %r.zone, "zone has no towers with coordinates; empty route");
        }

        let plan = RoutePlan::new(routes);
        let summary = plan.summary();
        info!(
            zones = summary.zones,
            towers = summary.towers_routed,
            distance_km = summary.total_distance_km,
            time_hours = summary.total_time_hours,
            "planned maintenance routes"
        );
        plan
    }
}

/// `(id, position)` for the towers in `ids` that have coordinates.
fn positioned(table: &TowerTable, ids: &[TowerId]) -> Vec<(TowerId, GeoPoint)> {
    ids.iter()
        .filter_map(|&id| table.get(id).and_then(|t| t.position()).map(|p| (id, p)))
        .collect()
}
