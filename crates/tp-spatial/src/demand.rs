//! Equipment demand for expansion candidates.

use std::collections::BTreeMap;
use std::ops::Add;

use tracing::{debug, info};

use tp_synth::TowerTable;

use crate::{ExpansionTier, SpatialError, SpatialResult};

/// Equipment quantities.  As a per-tower value it is the kit installed on one
/// candidate; as a total it is the sum over candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentKit {
    pub antennas:       u64,
    pub radios:         u64,
    pub cable_m:        u64,
    pub power_supplies: u64,
    pub cooling_units:  u64,
}

impl EquipmentKit {
    /// Kit for one upgraded tower.
    pub const PER_TOWER: EquipmentKit = EquipmentKit {
        antennas:       3,
        radios:         2,
        cable_m:        100,
        power_supplies: 1,
        cooling_units:  1,
    };

    pub fn times(self, n: u64) -> Self {
        Self {
            antennas:       self.antennas * n,
            radios:         self.radios * n,
            cable_m:        self.cable_m * n,
            power_supplies: self.power_supplies * n,
            cooling_units:  self.cooling_units * n,
        }
    }
}

impl Add for EquipmentKit {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self {
            antennas:       self.antennas + o.antennas,
            radios:         self.radios + o.radios,
            cable_m:        self.cable_m + o.cable_m,
            power_supplies: self.power_supplies + o.power_supplies,
            cooling_units:  self.cooling_units + o.cooling_units,
        }
    }
}

/// Relative expansion demand of a region.  Unknown regions weigh 1.0.
pub fn regional_multiplier(region: &str) -> f64 {
    match region.trim() {
        "Southeast" => 1.5,
        "South" => 1.3,
        "Northeast" => 1.2,
        "Central-West" | "Central West" => 1.1,
        _ => 1.0,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierDemand {
    pub towers:    u64,
    pub equipment: EquipmentKit,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionDemand {
    pub candidates: u64,
    pub multiplier: f64,
    /// `candidates × multiplier`.
    pub weighted:   f64,
}

/// Demand roll-up over a tier column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquipmentDemand {
    /// One entry per candidate tier, including tiers with zero towers.
    pub by_tier:   BTreeMap<ExpansionTier, TierDemand>,
    pub by_region: BTreeMap<String, RegionDemand>,
    pub towers:    u64,
    pub total:     EquipmentKit,
}

impl EquipmentDemand {
    pub fn estimate(table: &TowerTable, tiers: &[ExpansionTier]) -> SpatialResult<Self> {
        if tiers.len() != table.len() {
            return Err(SpatialError::LengthMismatch { expected: table.len(), got: tiers.len() });
        }

        let mut by_tier: BTreeMap<ExpansionTier, TierDemand> = ExpansionTier::CANDIDATES
            .iter()
            .map(|&t| (t, TierDemand::default()))
            .collect();
        let mut by_region: BTreeMap<String, RegionDemand> = BTreeMap::new();

        for (tower, &tier) in table.iter().zip(tiers) {
            let Some(slot) = by_tier.get_mut(&tier) else { continue };
            slot.towers += 1;

            let region = &tower.placement().region;
            let entry = by_region.entry(region.clone()).or_insert_with(|| RegionDemand {
                multiplier: regional_multiplier(region),
                ..RegionDemand::default()
            });
            entry.candidates += 1;
        }

        let mut demand = EquipmentDemand { by_region, ..EquipmentDemand::default() };
        for (tier, slot) in &mut by_tier {
            slot.equipment = EquipmentKit::PER_TOWER.times(slot.towers);
            demand.towers += slot.towers;
            demand.total = demand.total + slot.equipment;
            debug!(tier = %tier, towers = slot.towers, "tier demand");
        }
        for r in demand.by_region.values_mut() {
            r.weighted = r.candidates as f64 * r.multiplier;
        }
        demand.by_tier = by_tier;

        info!(candidates = demand.towers, antennas = demand.total.antennas, "estimated equipment demand");
        Ok(demand)
    }
}
