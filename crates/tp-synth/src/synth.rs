//! Seeded tower synthesis.
//!
//! # Sampling policy
//!
//! For each tower of a zone with radius `r`:
//!
//! 1. angle `θ ~ U[0, 2π)`
//! 2. radial distance `d = |N(0, r/3)|`, then `d = min(d, 0.9·r)`
//! 3. offset `(north, east) = (d·cos θ, d·sin θ)` km, converted to degrees
//!    with the run's [`Projection`] at the zone centre; longitude wraps at
//!    ±180°
//! 4. coordinates rounded to 6 decimals
//!
//! Step 2 is a clip, not a truncated normal: draws beyond `0.9·r` pile up on
//! the boundary circle instead of being redrawn.  About 0.7 % of towers land
//! exactly on it.  That keeps the number of RNG draws per tower constant,
//! which is what makes output depend only on seed and zone order.
//!
//! Attribute draws follow in a fixed order: status, priority, height, last
//! maintenance, next maintenance, operator count, signal strength, uptime.

use std::f64::consts::TAU;

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand_distr::StandardNormal;
use tracing::{debug, info};

use tp_core::{PlanConfig, Priority, Projection, RunRng, TowerId, TowerStatus};
use tp_zones::{CategoryProfile, MAX_RADIUS_FRACTION, Zone, ZoneCatalog};

use crate::{MaintenanceDate, Placement, SynthError, SynthResult, Tower, TowerAttrs, TowerTable};

/// Standard deviations of the radial half-normal that fit in one radius.
const RADIUS_SIGMAS: f64 = 3.0;

const LAST_MAINTENANCE_YEAR: u16 = 2024;
const NEXT_MAINTENANCE_YEAR: u16 = 2025;

// ── Per-category weighted draws ───────────────────────────────────────────────

struct CategorySampler {
    profile:  &'static CategoryProfile,
    status:   WeightedIndex<f64>,
    priority: WeightedIndex<f64>,
}

impl CategorySampler {
    fn new(profile: &'static CategoryProfile) -> SynthResult<Self> {
        let status = WeightedIndex::new(profile.status_weights.iter().map(|(_, w)| *w))
            .map_err(|e| SynthError::Weights(e.to_string()))?;
        let priority = WeightedIndex::new(profile.priority_weights.iter().map(|(_, w)| *w))
            .map_err(|e| SynthError::Weights(e.to_string()))?;
        Ok(Self { profile, status, priority })
    }

    fn status(&self, rng: &mut RunRng) -> TowerStatus {
        self.profile.status_weights[self.status.sample(rng.inner())].0
    }

    fn priority(&self, rng: &mut RunRng) -> Priority {
        self.profile.priority_weights[self.priority.sample(rng.inner())].0
    }
}

// ── CoordinateSynthesizer ─────────────────────────────────────────────────────

/// Generates tower records for zones.  Holds no RNG state of its own; the
/// caller threads one [`RunRng`] through every zone of a run.
#[derive(Clone, Debug)]
pub struct CoordinateSynthesizer {
    seed:       u64,
    projection: Projection,
}

impl CoordinateSynthesizer {
    pub fn new(config: &PlanConfig) -> Self {
        Self { seed: config.seed, projection: config.projection }
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Synthesize every zone of `catalog` in catalog order with a fresh
    /// generator seeded from the configured seed.
    ///
    /// Tower ids are assigned consecutively across zones, starting at 0.
    pub fn synthesize_catalog(&self, catalog: &ZoneCatalog) -> SynthResult<TowerTable> {
        let expected = catalog.total_target();
        if expected > TowerId::LIMIT.0 as u64 {
            return Err(SynthError::TableFull(TowerId::LIMIT.0));
        }

        let mut rng = RunRng::new(self.seed);
        let mut towers = Vec::with_capacity(expected as usize);

        for zone in catalog.zones() {
            let first = TowerId(towers.len() as u32);
            towers.extend(self.synthesize_zone(zone, &mut rng, first)?);
        }

        info!(
            towers = towers.len(),
            zones = catalog.len(),
            seed = self.seed,
            projection = %self.projection,
            "synthesized tower inventory"
        );
        TowerTable::new(towers)
    }

    /// Produce exactly `zone.target_count()` towers with ids starting at
    /// `first_id`, drawing from `rng`.
    ///
    /// A zone with target count 0 yields an empty `Vec` and consumes no
    /// randomness.
    pub fn synthesize_zone(
        &self,
        zone:     &Zone,
        rng:      &mut RunRng,
        first_id: TowerId,
    ) -> SynthResult<Vec<Tower>> {
        let count = zone.target_count();
        if first_id.0 as u64 + count as u64 > TowerId::LIMIT.0 as u64 {
            return Err(SynthError::TableFull(TowerId::LIMIT.0));
        }

        let sampler = CategorySampler::new(zone.category().profile())?;
        let placement = Placement::from_zone(zone);
        let mut towers = Vec::with_capacity(count as usize);

        for i in 0..count {
            let id = TowerId(first_id.0 + i);
            let position = self.sample_position(zone, rng);
            let attrs = sample_attrs(&sampler, rng)?;
            towers.push(Tower::new(id, id.code(), Some(position), placement.clone(), attrs)?);
        }

        debug!(zone = zone.name(), towers = count, "synthesized zone");
        Ok(towers)
    }

    /// Draw one position inside the zone's clipped disc.
    fn sample_position(&self, zone: &Zone, rng: &mut RunRng) -> tp_core::GeoPoint {
        let radius = zone.radius_km();
        let angle: f64 = rng.gen_range(0.0..TAU);
        let z: f64 = rng.inner().sample(StandardNormal);
        let dist = (z * radius / RADIUS_SIGMAS).abs().min(radius * MAX_RADIUS_FRACTION);

        self.projection
            .offset(zone.center(), dist * angle.cos(), dist * angle.sin())
            .rounded()
    }
}

fn sample_attrs(sampler: &CategorySampler, rng: &mut RunRng) -> SynthResult<TowerAttrs> {
    let status = sampler.status(rng);
    let priority = sampler.priority(rng);
    let height_m = rng.gen_range(18..65);
    let last_maintenance = sample_date(rng, LAST_MAINTENANCE_YEAR)?;
    let next_maintenance = sample_date(rng, NEXT_MAINTENANCE_YEAR)?;
    let operator_count = rng.gen_range(2..6);
    let signal_strength = rng.gen_range(65..100);
    let uptime: f64 = rng.gen_range(92.0..99.9);

    Ok(TowerAttrs {
        subtype: sampler.profile.subtype,
        status,
        priority,
        height_m,
        operator_count,
        signal_strength,
        uptime_pct: (uptime * 10.0).round() / 10.0,
        last_maintenance,
        next_maintenance,
        has_5g: false,
    })
}

/// Month 1–12, day 1–28: always a real date, no calendar needed.
fn sample_date(rng: &mut RunRng, year: u16) -> SynthResult<MaintenanceDate> {
    let month = rng.gen_range(1..13);
    let day = rng.gen_range(1..29);
    Ok(MaintenanceDate::new(year, month, day)?)
}
