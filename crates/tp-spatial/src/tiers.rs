//! Expansion-priority tiers from density quantiles.
//!
//! | Tier | Condition                                              |
//! |------|--------------------------------------------------------|
//! | 3    | `density > q75`                                        |
//! | 2    | `q50 < density <= q75`                                 |
//! | 1    | `density <= q50`                                       |
//! | 0    | tower already has the capability, or has no density    |
//!
//! Quantiles are taken over every tower with a density, including towers
//! that end up in tier 0 because of the capability flag, and use linear
//! interpolation between order statistics.

use std::fmt;

use tracing::info;

use tp_synth::TowerTable;

use crate::{SpatialError, SpatialResult};

// ── ExpansionTier ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ExpansionTier {
    /// Not a candidate.
    #[default]
    None   = 0,
    Low    = 1,
    Medium = 2,
    High   = 3,
}

impl ExpansionTier {
    /// Candidate tiers, highest first.
    pub const CANDIDATES: [ExpansionTier; 3] =
        [ExpansionTier::High, ExpansionTier::Medium, ExpansionTier::Low];

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(ExpansionTier::None),
            1 => Some(ExpansionTier::Low),
            2 => Some(ExpansionTier::Medium),
            3 => Some(ExpansionTier::High),
            _ => None,
        }
    }

    pub fn is_candidate(self) -> bool {
        self != ExpansionTier::None
    }
}

impl fmt::Display for ExpansionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ── Quantiles ─────────────────────────────────────────────────────────────────

/// The `q`-quantile of ascending `sorted`, interpolating linearly between the
/// two nearest order statistics.  `None` for empty input or `q` outside
/// `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

// ── TierThresholds ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TierThresholds {
    pub q50: f64,
    pub q75: f64,
}

impl TierThresholds {
    /// Thresholds over every `Some` density.  `None` when no tower has one.
    pub fn from_densities(density: &[Option<u32>]) -> Option<Self> {
        let mut values: Vec<f64> = density.iter().flatten().map(|&d| d as f64).collect();
        values.sort_by(f64::total_cmp);
        Some(Self { q50: quantile(&values, 0.5)?, q75: quantile(&values, 0.75)? })
    }

    pub fn tier(&self, density: Option<u32>, has_capability: bool) -> ExpansionTier {
        let Some(d) = density else { return ExpansionTier::None };
        if has_capability {
            return ExpansionTier::None;
        }
        let d = d as f64;
        if d > self.q75 {
            ExpansionTier::High
        } else if d > self.q50 {
            ExpansionTier::Medium
        } else {
            ExpansionTier::Low
        }
    }
}

/// Tier column for `table` given its density column.
///
/// Thresholds are recomputed from `density` on every call.
pub fn assign_tiers(table: &TowerTable, density: &[Option<u32>]) -> SpatialResult<Vec<ExpansionTier>> {
    if density.len() != table.len() {
        return Err(SpatialError::LengthMismatch { expected: table.len(), got: density.len() });
    }
    let Some(thresholds) = TierThresholds::from_densities(density) else {
        return Ok(vec![ExpansionTier::None; table.len()]);
    };

    let tiers: Vec<ExpansionTier> = table
        .iter()
        .zip(density)
        .map(|(t, &d)| thresholds.tier(d, t.attrs().has_5g))
        .collect();

    info!(
        q50 = thresholds.q50,
        q75 = thresholds.q75,
        candidates = tiers.iter().filter(|t| t.is_candidate()).count(),
        "assigned expansion tiers"
    );
    Ok(tiers)
}
