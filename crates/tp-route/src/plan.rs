//! The result of a planning run: one route per zone.

use crate::Route;

/// Routes keyed by zone, in planning order.  Every zone that was planned is
/// present, including zones with empty routes, so "no data" and "not
/// planned" can be told apart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoutePlan {
    routes: Vec<Route>,
}

impl RoutePlan {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// The route for `zone`, or `None` if the zone was not planned.
    pub fn get(&self, zone: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.zone == zone)
    }

    pub fn summary(&self) -> PlanningSummary {
        let mut s = PlanningSummary { zones: self.routes.len(), ..PlanningSummary::default() };
        for r in &self.routes {
            s.towers_routed += r.len();
            s.total_distance_km += r.metrics.distance_km;
            s.total_time_hours += r.metrics.time_hours;
            if r.is_empty() {
                s.empty_zones.push(r.zone.clone());
            }
        }
        s
    }
}

impl<'a> IntoIterator for &'a RoutePlan {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;
    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Totals across a [`RoutePlan`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanningSummary {
    pub zones:             usize,
    pub towers_routed:     usize,
    pub total_distance_km: f64,
    pub total_time_hours:  f64,
    /// Zones whose route has no stops, in planning order.
    pub empty_zones:       Vec<String>,
}
