//! Unit tests for tp-synth.

#[cfg(test)]
pub(crate) mod helpers {
    use tp_core::{GeoPoint, Priority, TowerId, TowerStatus, TowerSubtype};
    use tp_zones::{Zone, ZoneCategory};

    use crate::{MaintenanceDate, Placement, Tower, TowerAttrs};

    pub fn attrs() -> TowerAttrs {
        TowerAttrs {
            subtype:          TowerSubtype::Macro,
            status:           TowerStatus::Active,
            priority:         Priority::Medium,
            height_m:         30,
            operator_count:   3,
            signal_strength:  80,
            uptime_pct:       97.5,
            last_maintenance: MaintenanceDate::new(2024, 3, 14).unwrap(),
            next_maintenance: MaintenanceDate::new(2025, 9, 2).unwrap(),
            has_5g:           false,
        }
    }

    pub fn zone(name: &str, lat: f64, lon: f64, radius: f64, count: u32) -> Zone {
        Zone::new(name, GeoPoint::new(lat, lon), radius, count, ZoneCategory::Metropolitan).unwrap()
    }

    pub fn tower(id: u32, code: &str, zone: &Zone, pos: Option<GeoPoint>) -> Tower {
        Tower::new(TowerId(id), code, pos, Placement::from_zone(zone), attrs()).unwrap()
    }
}

// ── MaintenanceDate ───────────────────────────────────────────────────────────

#[cfg(test)]
mod date {
    use crate::MaintenanceDate;

    #[test]
    fn display_is_month_day_year() {
        let d = MaintenanceDate::new(2024, 3, 7).unwrap();
        assert_eq!(d.to_string(), "03/07/2024");
    }

    #[test]
    fn parse_round_trip() {
        let d: MaintenanceDate = "11/28/2025".parse().unwrap();
        assert_eq!(d, MaintenanceDate::new(2025, 11, 28).unwrap());
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(MaintenanceDate::new(2024, 13, 1).is_err());
        assert!(MaintenanceDate::new(2024, 0, 1).is_err());
        assert!(MaintenanceDate::new(2024, 1, 0).is_err());
        assert!("2024-01-01".parse::<MaintenanceDate>().is_err());
        assert!("01/01/2024/3".parse::<MaintenanceDate>().is_err());
    }
}

// ── Tower & TowerTable ────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use tp_core::{GeoPoint, TowerId};

    use super::helpers::{attrs, tower, zone};
    use crate::{Placement, SynthError, Tower, TowerTable};

    #[test]
    fn tower_rejects_invalid_position() {
        let z = zone("Bahia", -12.9714, -38.5014, 1.1, 1);
        let r = Tower::new(TowerId(0), "T", Some(GeoPoint::new(95.0, 0.0)), Placement::from_zone(&z), attrs());
        assert!(r.is_err());
    }

    #[test]
    fn tower_without_position_is_allowed() {
        let z = zone("Bahia", -12.9714, -38.5014, 1.1, 1);
        let t = tower(0, "T", &z, None);
        assert!(t.position().is_none());
    }

    #[test]
    fn duplicate_codes_rejected() {
        let z = zone("Bahia", -12.9714, -38.5014, 1.1, 2);
        let p = Some(z.center());
        let err = TowerTable::new(vec![tower(0, "A", &z, p), tower(1, "A", &z, p)]).unwrap_err();
        assert!(matches!(err, SynthError::DuplicateTower(ref c) if c == "A"));
    }

    #[test]
    fn ids_must_match_rows() {
        let z = zone("Bahia", -12.9714, -38.5014, 1.1, 2);
        let err = TowerTable::new(vec![tower(1, "A", &z, None)]).unwrap_err();
        assert!(matches!(err, SynthError::IdMismatch { expected: 0, got: 1, .. }));
    }

    #[test]
    fn lookup_and_positioned() {
        let z = zone("Bahia", -12.9714, -38.5014, 1.1, 3);
        let table = TowerTable::new(vec![
            tower(0, "A", &z, Some(z.center())),
            tower(1, "B", &z, None),
            tower(2, "C", &z, Some(GeoPoint::new(-12.97, -38.50))),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.by_code("B").unwrap().id(), TowerId(1));
        assert!(table.by_code("Z").is_none());
        assert_eq!(table.positioned_count(), 2);
        let ids: Vec<_> = table.positioned().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![TowerId(0), TowerId(2)]);
    }

    #[test]
    fn by_zone_keeps_first_appearance_order() {
        let a = zone("Ceará", -3.7319, -38.5269, 1.0, 2);
        let b = zone("Bahia", -12.9714, -38.5014, 1.1, 1);
        let table = TowerTable::new(vec![
            tower(0, "X", &a, None),
            tower(1, "Y", &b, None),
            tower(2, "Z", &a, None),
        ])
        .unwrap();

        let groups = table.by_zone();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Ceará");
        assert_eq!(groups[0].1, vec![TowerId(0), TowerId(2)]);
        assert_eq!(groups[1].0, "Bahia");
        assert_eq!(groups[1].1, vec![TowerId(1)]);
    }

    #[test]
    fn empty_table() {
        let t = TowerTable::empty();
        assert!(t.is_empty());
        assert!(t.by_zone().is_empty());
    }
}

// ── CoordinateSynthesizer ─────────────────────────────────────────────────────

#[cfg(test)]
mod synth {
    use std::collections::HashSet;

    use tp_core::{GeoPoint, PlanConfig, Priority, Projection, RunRng, TowerId, TowerStatus, TowerSubtype};
    use tp_zones::{MAX_RADIUS_FRACTION, Zone, ZoneCatalog, ZoneCategory};

    use super::helpers::zone;
    use crate::{CoordinateSynthesizer, Tower};

    const TOL_KM: f64 = 1e-3;

    fn synth(seed: u64) -> CoordinateSynthesizer {
        CoordinateSynthesizer::new(&PlanConfig { seed, ..PlanConfig::default() })
    }

    #[test]
    fn sao_paulo_scenario() {
        let z = zone("São Paulo Metro", -23.5505, -46.6333, 1.8, 5);
        let mut rng = RunRng::new(42);
        let towers = synth(42).synthesize_zone(&z, &mut rng, TowerId(0)).unwrap();

        assert_eq!(towers.len(), 5);
        for t in &towers {
            let p = t.position().unwrap();
            let d = Projection::Equirectangular.distance_km(z.center(), p);
            assert!(d <= 1.8 * MAX_RADIUS_FRACTION + TOL_KM, "{} at {d} km", t.code());
            assert_eq!(t.zone(), "São Paulo Metro");
        }
    }

    #[test]
    fn coordinates_have_six_decimals() {
        let z = zone("Pernambuco", -8.0476, -34.8770, 0.95, 50);
        let towers = synth(3).synthesize_zone(&z, &mut RunRng::new(3), TowerId(0)).unwrap();
        for t in &towers {
            let p = t.position().unwrap();
            assert_eq!(p, p.rounded());
        }
    }

    #[test]
    fn same_seed_same_towers() {
        let catalog = ZoneCatalog::brazil().unwrap();
        let a = synth(7).synthesize_catalog(&catalog).unwrap();
        let b = synth(7).synthesize_catalog(&catalog).unwrap();
        assert_eq!(a.towers(), b.towers());
    }

    #[test]
    fn different_seed_different_towers() {
        let z = zone("Ceará", -3.7319, -38.5269, 1.0, 20);
        let a = synth(1).synthesize_zone(&z, &mut RunRng::new(1), TowerId(0)).unwrap();
        let b = synth(2).synthesize_zone(&z, &mut RunRng::new(2), TowerId(0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn full_catalog_counts_and_bounds() {
        let catalog = ZoneCatalog::brazil().unwrap();
        let table = synth(42).synthesize_catalog(&catalog).unwrap();
        assert_eq!(table.len(), 18_000);
        assert_eq!(table.positioned_count(), 18_000);

        for (zone, ids) in table.by_zone() {
            let z = catalog.by_name(zone).unwrap();
            assert_eq!(ids.len(), z.target_count() as usize, "{zone}");
            for id in ids {
                let p = table.get(id).unwrap().position().unwrap();
                let d = Projection::Equirectangular.distance_km(z.center(), p);
                assert!(d <= z.radius_km() * MAX_RADIUS_FRACTION + TOL_KM, "{zone}: {d} km");
            }
        }
    }

    #[test]
    fn codes_are_sequential_and_unique() {
        let catalog = ZoneCatalog::brazil().unwrap();
        let table = synth(42).synthesize_catalog(&catalog).unwrap();
        assert_eq!(table.get(TowerId(0)).unwrap().code(), "NCA-000001");
        assert_eq!(table.get(TowerId(17_999)).unwrap().code(), "NCA-018000");
        let codes: HashSet<_> = table.iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), table.len());
    }

    #[test]
    fn zero_count_zone_consumes_nothing() {
        let empty = zone("Empty", 0.0, 0.0, 1.0, 0);
        let real = zone("Bahia", -12.9714, -38.5014, 1.1, 10);
        let s = synth(9);

        let mut rng = RunRng::new(9);
        assert!(s.synthesize_zone(&empty, &mut rng, TowerId(0)).unwrap().is_empty());
        let after_empty = s.synthesize_zone(&real, &mut rng, TowerId(0)).unwrap();

        let direct = s.synthesize_zone(&real, &mut RunRng::new(9), TowerId(0)).unwrap();
        assert_eq!(after_empty, direct);
    }

    #[test]
    fn attributes_in_range() {
        let z = zone("Rio de Janeiro", -22.9068, -43.1729, 1.2, 200);
        let towers = synth(5).synthesize_zone(&z, &mut RunRng::new(5), TowerId(0)).unwrap();
        for t in &towers {
            let a = t.attrs();
            assert_eq!(a.subtype, TowerSubtype::Macro);
            assert!((18..65).contains(&a.height_m));
            assert!((2..6).contains(&a.operator_count));
            assert!((65..100).contains(&a.signal_strength));
            assert!((92.0..=99.9).contains(&a.uptime_pct));
            assert_eq!(a.last_maintenance.year, 2024);
            assert_eq!(a.next_maintenance.year, 2025);
            assert!(a.last_maintenance.day <= 28);
            assert!(!a.has_5g);
        }
    }

    #[test]
    fn zone_across_antimeridian_wraps_longitude() {
        let z = zone("Fiji", -17.8, 179.995, 2.0, 50);
        let towers = synth(42).synthesize_zone(&z, &mut RunRng::new(42), TowerId(0)).unwrap();

        assert_eq!(towers.len(), 50);
        for t in &towers {
            let p = t.position().unwrap();
            assert!((-180.0..=180.0).contains(&p.lon), "{}", p);
            let d = Projection::Equirectangular.distance_km(z.center(), p);
            assert!(d <= 2.0 * MAX_RADIUS_FRACTION + TOL_KM, "{} at {d} km", t.code());
        }
        // Some towers land east of the antimeridian.
        assert!(towers.iter().any(|t| t.position().unwrap().lon < 0.0));
    }

    #[test]
    fn zone_near_pole_stays_valid() {
        let z = zone("Svalbard cap", 89.99, 15.0, 1.0, 40);
        let towers = synth(11).synthesize_zone(&z, &mut RunRng::new(11), TowerId(0)).unwrap();

        assert_eq!(towers.len(), 40);
        let reach = MAX_RADIUS_FRACTION * 1.0 / tp_core::KM_PER_DEGREE;
        for t in &towers {
            let p = t.position().unwrap();
            assert!(GeoPoint::try_new(p.lat, p.lon).is_ok());
            assert!((p.lat - 89.99).abs() <= reach + 1e-6, "{}", p);
        }
    }

    /// Share of `towers` for which `pick` holds.
    fn share(towers: &[Tower], pick: impl Fn(&Tower) -> bool) -> f64 {
        towers.iter().filter(|t| pick(t)).count() as f64 / towers.len() as f64
    }

    #[test]
    fn status_and_priority_follow_category_weights() {
        const N: u32 = 6_000;
        const TOL: f64 = 0.03;
        let s = synth(21);

        let urban = zone("Belo Horizonte", -19.9167, -43.9345, 1.5, N);
        let standard = Zone::new("Joinville", GeoPoint::new(-26.3045, -48.8487), 1.5, N, ZoneCategory::Industrial)
            .unwrap();

        let mut rng = RunRng::new(21);
        let u = s.synthesize_zone(&urban, &mut rng, TowerId(0)).unwrap();
        let st = s.synthesize_zone(&standard, &mut rng, TowerId(N)).unwrap();

        for towers in [&u, &st] {
            for (status, w) in [
                (TowerStatus::Maintenance, 0.70),
                (TowerStatus::Active, 0.25),
                (TowerStatus::Inactive, 0.05),
            ] {
                let got = share(towers, |t| t.attrs().status == status);
                assert!((got - w).abs() < TOL, "{status}: {got}");
            }
        }

        for (towers, weights) in [(&u, [0.5, 0.3, 0.2]), (&st, [0.3, 0.4, 0.3])] {
            for (priority, w) in [Priority::High, Priority::Medium, Priority::Low].into_iter().zip(weights) {
                let got = share(towers, |t| t.attrs().priority == priority);
                assert!((got - w).abs() < TOL, "{priority}: {got} vs {w}");
            }
        }
    }

    #[test]
    fn flat_projection_stays_in_latitude_band() {
        let z = zone("Rio Grande do Sul", -30.0277, -51.2287, 1.4, 100);
        let s = CoordinateSynthesizer::new(&PlanConfig {
            projection: Projection::Flat,
            ..PlanConfig::default()
        });
        let towers = s.synthesize_zone(&z, &mut RunRng::new(42), TowerId(0)).unwrap();
        for t in &towers {
            let d = Projection::Flat.distance_km(z.center(), t.position().unwrap());
            assert!(d <= 1.4 * MAX_RADIUS_FRACTION + TOL_KM);
        }
    }
}

// ── InventorySummary ──────────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use tp_core::{PlanConfig, TowerStatus};
    use tp_zones::ZoneCatalog;

    use crate::{CoordinateSynthesizer, InventorySummary};

    #[test]
    fn hierarchy_adds_up() {
        let catalog = ZoneCatalog::brazil().unwrap();
        let table = CoordinateSynthesizer::new(&PlanConfig::default())
            .synthesize_catalog(&catalog)
            .unwrap();
        let s = InventorySummary::from_table(&table);

        assert_eq!(s.total, 18_000);
        assert_eq!(s.positioned, 18_000);
        assert_eq!(s.by_zone.len(), 17);
        assert_eq!(s.regions.len(), 4);

        let region_sum: usize = s.regions.values().map(|r| r.towers).sum();
        assert_eq!(region_sum, s.total);

        let sp = &s.regions["Southeast"].states["SP"];
        assert_eq!(sp.name, "São Paulo");
        assert_eq!(sp.towers, 3123 + 830 + 553);
        assert_eq!(sp.zones["Santos Litoral"], 553);

        let status_sum: usize = TowerStatus::ALL.iter().map(|&st| s.status_count(st)).sum();
        assert_eq!(status_sum, s.total);
        assert!(s.status_count(TowerStatus::Maintenance) > s.status_count(TowerStatus::Active));
    }
}
