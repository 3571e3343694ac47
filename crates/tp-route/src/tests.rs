//! Unit tests for tp-route.

#[cfg(test)]
mod helpers {
    use tp_core::{GeoPoint, PlanConfig, Priority, TowerId, TowerStatus, TowerSubtype};
    use tp_synth::{MaintenanceDate, Placement, Tower, TowerAttrs, TowerTable};
    use tp_zones::ZoneCategory;

    use crate::RouteOptimizer;

    pub fn optimizer() -> RouteOptimizer {
        RouteOptimizer::from_config(&PlanConfig::default()).unwrap()
    }

    pub fn stops(points: &[(f64, f64)]) -> Vec<(TowerId, GeoPoint)> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| (TowerId(i as u32), GeoPoint::new(lat, lon)))
            .collect()
    }

    /// One tower per entry: (zone, position).
    pub fn table(rows: &[(&str, Option<(f64, f64)>)]) -> TowerTable {
        let towers = rows
            .iter()
            .enumerate()
            .map(|(i, &(zone, pos))| {
                let id = TowerId(i as u32);
                let placement = Placement {
                    zone:       zone.into(),
                    category:   ZoneCategory::Regional,
                    region:     "South".into(),
                    state_code: "PR".into(),
                    state_name: "Paraná".into(),
                };
                let attrs = TowerAttrs {
                    subtype:          TowerSubtype::Macro,
                    status:           TowerStatus::Maintenance,
                    priority:         Priority::High,
                    height_m:         25,
                    operator_count:   4,
                    signal_strength:  90,
                    uptime_pct:       99.1,
                    last_maintenance: MaintenanceDate::new(2024, 6, 1).unwrap(),
                    next_maintenance: MaintenanceDate::new(2025, 6, 1).unwrap(),
                    has_5g:           false,
                };
                let pos = pos.map(|(lat, lon)| GeoPoint::new(lat, lon));
                Tower::new(id, id.code(), pos, placement, attrs).unwrap()
            })
            .collect();
        TowerTable::new(towers).unwrap()
    }
}

// ── RouteMetrics ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use tp_core::{GeoPoint, Projection};
    use tp_spatial::DistanceModel;

    use crate::RouteMetrics;

    #[test]
    fn path_cost_without_closing_edge() {
        let model = DistanceModel::new(Projection::Flat);
        let path = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0), GeoPoint::new(1.0, 1.0)];
        let m = RouteMetrics::along(&path, &model, 60.0, 0.5);
        assert!((m.distance_km - 222.0).abs() < 1e-9);
        assert!((m.driving_hours - 3.7).abs() < 1e-9);
        assert!((m.service_hours - 1.5).abs() < 1e-12);
        assert!((m.time_hours - 5.2).abs() < 1e-9);
        assert_eq!(m.stop_count, 3);
    }

    #[test]
    fn fewer_than_two_stops_cost_nothing() {
        let model = DistanceModel::default();
        assert_eq!(RouteMetrics::along(&[], &model, 60.0, 0.5), RouteMetrics::default());
        let one = RouteMetrics::along(&[GeoPoint::new(-8.0, -34.9)], &model, 60.0, 0.5);
        assert_eq!(one.stop_count, 1);
        assert_eq!(one.distance_km, 0.0);
        assert_eq!(one.time_hours, 0.0);
    }
}

// ── NearestNeighbor ───────────────────────────────────────────────────────────

#[cfg(test)]
mod heuristic {
    use tp_core::GeoPoint;
    use tp_spatial::DistanceModel;

    use crate::{NearestNeighbor, RouteHeuristic};

    fn pts(v: &[(f64, f64)]) -> Vec<GeoPoint> {
        v.iter().map(|&(a, b)| GeoPoint::new(a, b)).collect()
    }

    #[test]
    fn starts_nearest_centroid() {
        let p = pts(&[(0.0, 0.0), (0.0, 0.9), (0.0, 1.0), (0.0, 2.1)]);
        // centroid lon = 1.0
        assert_eq!(NearestNeighbor::start_index(&p), Some(2));
        assert_eq!(NearestNeighbor::start_index(&[]), None);
    }

    #[test]
    fn greedy_order() {
        let p = pts(&[(0.0, 0.0), (0.0, 0.9), (0.0, 1.0), (0.0, 2.1)]);
        let order = NearestNeighbor.order(&p, &DistanceModel::default());
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let model = DistanceModel::default();
        // Centroid (0, 0) is the last point; both others are 111 km away.
        let p = pts(&[(0.0, 1.0), (0.0, -1.0), (0.0, 0.0)]);
        assert_eq!(NearestNeighbor.order(&p, &model), vec![2, 0, 1]);

        // Both points are equally far from the centroid.
        let p = pts(&[(1.0, 0.0), (-1.0, 0.0)]);
        assert_eq!(NearestNeighbor::start_index(&p), Some(0));
        assert_eq!(NearestNeighbor.order(&p, &model), vec![0, 1]);
    }

    #[test]
    fn identical_points() {
        let p = pts(&[(-23.5, -46.6); 4]);
        assert_eq!(NearestNeighbor.order(&p, &DistanceModel::default()), vec![0, 1, 2, 3]);
    }
}

// ── RouteOptimizer ────────────────────────────────────────────────────────────

#[cfg(test)]
mod optimizer {
    use tp_core::{GeoPoint, PlanConfig, RunRng, TowerId};
    use tp_spatial::DistanceModel;
    use tp_synth::CoordinateSynthesizer;
    use tp_zones::{Zone, ZoneCatalog, ZoneCategory};

    use super::helpers::{optimizer, stops, table};
    use crate::{RouteError, RouteHeuristic, RouteOptimizer};

    #[test]
    fn rejects_bad_costs() {
        let m = DistanceModel::default();
        assert!(matches!(RouteOptimizer::new(m, 0.0, 0.5), Err(RouteError::InvalidSpeed(_))));
        assert!(matches!(RouteOptimizer::new(m, f64::NAN, 0.5), Err(RouteError::InvalidSpeed(_))));
        assert!(matches!(RouteOptimizer::new(m, 60.0, -0.1), Err(RouteError::InvalidServiceTime(_))));
        assert!(RouteOptimizer::new(m, 60.0, 0.0).is_ok());
    }

    #[test]
    fn degenerate_zones() {
        let opt = optimizer();
        let empty = opt.plan_zone("Empty", &[]);
        assert!(empty.is_empty());
        assert_eq!(empty.metrics.stop_count, 0);
        assert_eq!(empty.metrics.time_hours, 0.0);

        let single = opt.plan_zone("Single", &stops(&[(-3.73, -38.52)]));
        assert_eq!(single.stops, vec![TowerId(0)]);
        assert_eq!(single.metrics.distance_km, 0.0);
        assert_eq!(single.metrics.time_hours, 0.0);
    }

    #[test]
    fn sao_paulo_scenario() {
        let config = PlanConfig::default();
        let zone = Zone::new("São Paulo Metro", GeoPoint::new(-23.5505, -46.6333), 1.8, 5, ZoneCategory::Metropolitan)
            .unwrap();
        let towers = CoordinateSynthesizer::new(&config)
            .synthesize_zone(&zone, &mut RunRng::new(config.seed), TowerId(0))
            .unwrap();
        let stops: Vec<_> = towers.iter().map(|t| (t.id(), t.position().unwrap())).collect();

        let route = optimizer().plan_zone(zone.name(), &stops);
        assert_eq!(route.len(), 5);

        let mut sorted = route.stops.clone();
        sorted.sort();
        assert_eq!(sorted, (0..5).map(TowerId).collect::<Vec<_>>());

        let centroid = GeoPoint::centroid(stops.iter().map(|&(_, p)| p)).unwrap();
        let nearest = stops
            .iter()
            .min_by(|a, b| a.1.degree_distance_2(centroid).total_cmp(&b.1.degree_distance_2(centroid)))
            .unwrap();
        assert_eq!(route.stops[0], nearest.0);

        let hours = route.metrics.distance_km / 60.0 + 5.0 * 0.5;
        assert!((route.metrics.time_hours - hours).abs() < 1e-9);
    }

    #[test]
    fn full_catalog_routes_every_tower_once() {
        let config = PlanConfig::default();
        let catalog = ZoneCatalog::brazil().unwrap();
        let table = CoordinateSynthesizer::new(&config).synthesize_catalog(&catalog).unwrap();
        let plan = optimizer().plan_catalog(&catalog, &table);

        assert_eq!(plan.len(), 17);
        for (route, zone) in plan.iter().zip(catalog.zones()) {
            assert_eq!(route.zone, zone.name());
            assert_eq!(route.len(), zone.target_count() as usize);
            assert!(route.stops.iter().all(|&id| table.get(id).unwrap().zone() == zone.name()));
        }

        let mut all: Vec<TowerId> = plan.iter().flat_map(|r| r.stops.iter().copied()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 18_000);

        let s = plan.summary();
        assert_eq!(s.towers_routed, 18_000);
        assert!(s.empty_zones.is_empty());
        assert!(s.total_distance_km > 0.0);
    }

    #[test]
    fn zones_without_coordinates_still_appear() {
        let t = table(&[
            ("Curitiba", Some((-25.43, -49.27))),
            ("Londrina", None),
            ("Curitiba", Some((-25.44, -49.26))),
            ("Londrina", None),
        ]);
        let plan = optimizer().plan_table(&t);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get("Curitiba").unwrap().stops.len(), 2);
        let londrina = plan.get("Londrina").unwrap();
        assert!(londrina.is_empty());
        assert_eq!(londrina.metrics.stop_count, 0);
        assert_eq!(plan.summary().empty_zones, vec!["Londrina".to_owned()]);
        assert!(plan.get("Maringá").is_none());
    }

    #[test]
    fn catalog_zones_without_towers_and_strays() {
        let zone = |name: &str| Zone::new(name, GeoPoint::new(-25.0, -50.0), 1.0, 0, ZoneCategory::Regional).unwrap();
        let catalog = ZoneCatalog::new(vec![zone("Cascavel"), zone("Curitiba")]).unwrap();
        let t = table(&[("Stray", Some((-25.0, -50.0))), ("Curitiba", Some((-25.43, -49.27)))]);

        let plan = optimizer().plan_catalog(&catalog, &t);
        let zones: Vec<&str> = plan.iter().map(|r| r.zone.as_str()).collect();
        assert_eq!(zones, vec!["Cascavel", "Curitiba", "Stray"]);
        assert!(plan.get("Cascavel").unwrap().is_empty());
        assert_eq!(plan.get("Stray").unwrap().stops, vec![TowerId(0)]);
    }

    /// Visits stops in reverse input order.
    struct Reverse;

    impl RouteHeuristic for Reverse {
        fn order(&self, stops: &[GeoPoint], _: &DistanceModel) -> Vec<usize> {
            (0..stops.len()).rev().collect()
        }
    }

    #[test]
    fn metrics_follow_heuristic_order() {
        let s = stops(&[(0.0, 0.0), (0.0, 3.0), (0.0, 1.0)]);
        let nn = optimizer().plan_zone("Z", &s);
        let rev = optimizer().with_heuristic(Reverse).plan_zone("Z", &s);

        assert_eq!(rev.stops, vec![TowerId(2), TowerId(1), TowerId(0)]);
        // lon 1 → 3 → 0: 222 + 333 km
        assert!((rev.metrics.distance_km - 555.0).abs() < 1e-6);
        // lon 1 → 0 → 3: 111 + 333 km
        assert_eq!(nn.stops, vec![TowerId(2), TowerId(0), TowerId(1)]);
        assert!((nn.metrics.distance_km - 444.0).abs() < 1e-6);
    }
}

// ── Parallel planning ─────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use tp_core::PlanConfig;
    use tp_synth::CoordinateSynthesizer;
    use tp_zones::ZoneCatalog;

    use super::helpers::optimizer;

    #[test]
    fn plan_independent_of_thread_count() {
        let catalog = ZoneCatalog::brazil().unwrap();
        let table = CoordinateSynthesizer::new(&PlanConfig::default())
            .synthesize_catalog(&catalog)
            .unwrap();
        let opt = optimizer();

        let plan_on = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| opt.plan_catalog(&catalog, &table))
        };
        let one = plan_on(1);
        let many = plan_on(8);
        assert_eq!(one, many);

        // Zone by zone, the same as planning each zone on its own.
        for route in &many {
            let stops: Vec<_> = table
                .by_zone()
                .into_iter()
                .find(|(z, _)| *z == route.zone)
                .map(|(_, ids)| ids.into_iter().map(|id| (id, table.get(id).unwrap().position().unwrap())).collect())
                .unwrap();
            assert_eq!(&opt.plan_zone(&route.zone, &stops), route);
        }
    }
}
