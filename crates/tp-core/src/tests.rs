//! Unit tests for tp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TowerId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = TowerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TowerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn limits_are_type_max() {
        assert_eq!(TowerId::LIMIT.0, u32::MAX);
        assert_eq!(ZoneId::LIMIT.0, u16::MAX);
    }

    #[test]
    fn tower_code_is_one_based_and_padded() {
        assert_eq!(TowerId(0).code(), "NCA-000001");
        assert_eq!(TowerId(18_349).code(), "NCA-018350");
    }

    #[test]
    fn display() {
        assert_eq!(TowerId(7).to_string(), "TowerId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, KM_PER_DEGREE, Projection, TpError};

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(-23.55, -46.63).is_ok());
        assert!(matches!(
            GeoPoint::try_new(91.0, 0.0),
            Err(TpError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn rounding_keeps_six_decimals() {
        let p = GeoPoint::new(-23.550_500_49, -46.633_299_51).rounded();
        assert_eq!(p, GeoPoint::new(-23.5505, -46.6333));
    }

    #[test]
    fn centroid_of_empty_is_none() {
        assert!(GeoPoint::centroid(std::iter::empty()).is_none());
        let c = GeoPoint::centroid([GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 4.0)]).unwrap();
        assert_eq!(c, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn one_degree_latitude_is_111_km() {
        let a = GeoPoint::new(-20.0, -45.0);
        let b = GeoPoint::new(-21.0, -45.0);
        for proj in [Projection::Flat, Projection::Equirectangular] {
            assert!((proj.distance_km(a, b) - KM_PER_DEGREE).abs() < 1e-9);
        }
    }

    #[test]
    fn longitude_scale_depends_on_policy() {
        let a = GeoPoint::new(60.0, 10.0);
        let b = GeoPoint::new(60.0, 11.0);
        assert!((Projection::Flat.distance_km(a, b) - 111.0).abs() < 1e-9);
        // cos(60°) = 0.5
        assert!((Projection::Equirectangular.distance_km(a, b) - 55.5).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(-23.5505, -46.6333);
        let b = GeoPoint::new(-22.9068, -43.1729);
        for proj in [Projection::Flat, Projection::Equirectangular] {
            assert!((proj.distance_km(a, b) - proj.distance_km(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn offset_then_distance_recovers_radius() {
        let center = GeoPoint::new(-23.5505, -46.6333);
        let p = Projection::Equirectangular.offset(center, 0.0, 1.0);
        let d = Projection::Equirectangular.distance_km(center, p);
        // Pure east offsets share the centre latitude, so the scale matches.
        assert!((d - 1.0).abs() < 1e-9, "got {d}");
    }
}

#[cfg(test)]
mod rng {
    use crate::RunRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = RunRng::new(12345);
        let mut r2 = RunRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = RunRng::new(1).random();
        let b: u64 = RunRng::new(2).random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = RunRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(18u16..65);
            assert!((18..65).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{PlanConfig, TpError};

    #[test]
    fn defaults_are_valid() {
        let cfg = PlanConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.avg_speed_kmh, 60.0);
        assert_eq!(cfg.service_hours_per_stop, 0.5);
    }

    #[test]
    fn rejects_non_positive_values() {
        let bad = [
            PlanConfig { density_radius_km: 0.0, ..PlanConfig::default() },
            PlanConfig { avg_speed_kmh: -1.0, ..PlanConfig::default() },
            PlanConfig { service_hours_per_stop: f64::NAN, ..PlanConfig::default() },
            PlanConfig { num_threads: Some(0), ..PlanConfig::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(TpError::Config(_))), "{cfg:?}");
        }
    }
}

#[cfg(test)]
mod status {
    use crate::{Priority, TowerStatus, TowerSubtype, TpError};

    #[test]
    fn labels_round_trip() {
        for s in TowerStatus::ALL {
            assert_eq!(s.as_str().parse::<TowerStatus>().unwrap(), *s);
        }
        for p in Priority::ALL {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), *p);
        }
        assert_eq!("Macro".parse::<TowerSubtype>().unwrap(), TowerSubtype::Macro);
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!(matches!(
            "retired".parse::<TowerStatus>(),
            Err(TpError::UnknownLabel { kind: "tower status", .. })
        ));
    }
}
