//! The `Zone` record and its category tag.

use std::fmt;
use std::str::FromStr;

use tp_core::{GeoPoint, KM_PER_DEGREE};

use crate::profile::{CategoryProfile, profile_for};
use crate::{ZoneError, ZoneResult};

// ── ZoneCategory ──────────────────────────────────────────────────────────────

/// What kind of area a zone covers.  Drives the sampling profile of its
/// towers through [`ZoneCategory::profile`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoneCategory {
    Metropolitan,
    Tech,
    Logistics,
    Industrial,
    Regional,
    Institutional,
}

impl ZoneCategory {
    pub const ALL: [ZoneCategory; 6] = [
        ZoneCategory::Metropolitan,
        ZoneCategory::Tech,
        ZoneCategory::Logistics,
        ZoneCategory::Industrial,
        ZoneCategory::Regional,
        ZoneCategory::Institutional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ZoneCategory::Metropolitan  => "metropolitan",
            ZoneCategory::Tech          => "tech",
            ZoneCategory::Logistics     => "logistics",
            ZoneCategory::Industrial    => "industrial",
            ZoneCategory::Regional      => "regional",
            ZoneCategory::Institutional => "institutional",
        }
    }

    /// Sampling profile (subtype, status and priority weights) for towers in
    /// zones of this category.
    #[inline]
    pub fn profile(self) -> &'static CategoryProfile {
        profile_for(self)
    }
}

impl fmt::Display for ZoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneCategory {
    type Err = ZoneError;
    fn from_str(s: &str) -> Result<Self, ZoneError> {
        let s = s.trim();
        ZoneCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ZoneError::Parse(format!("unknown zone category {s:?}")))
    }
}

/// Fraction of the zone radius that tower positions may reach.  Synthesis
/// clips radial draws here, and zone validation keeps this disc clear of
/// the poles.
pub const MAX_RADIUS_FRACTION: f64 = 0.9;

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A named maintenance zone: a centre, a radius, and how many towers it holds.
///
/// Fields are private so that a `Zone` can only exist in a validated state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zone {
    name:         String,
    center:       GeoPoint,
    radius_km:    f64,
    target_count: u32,
    category:     ZoneCategory,
    region:       String,
    state_code:   String,
    state_name:   String,
}

impl Zone {
    /// Create a zone with empty administrative metadata.
    ///
    /// Fails if the name is blank, the centre is not a valid coordinate, the
    /// radius is not a positive finite number, or the tower disc
    /// (`MAX_RADIUS_FRACTION` of the radius) would reach a pole.
    pub fn new(
        name:         impl Into<String>,
        center:       GeoPoint,
        radius_km:    f64,
        target_count: u32,
        category:     ZoneCategory,
    ) -> ZoneResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ZoneError::InvalidZone { zone: name, reason: "name is empty".into() });
        }
        let center = GeoPoint::try_new(center.lat, center.lon).map_err(|e| ZoneError::InvalidZone {
            zone:   name.clone(),
            reason: e.to_string(),
        })?;
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(ZoneError::InvalidZone {
                zone:   name,
                reason: format!("radius must be positive, got {radius_km} km"),
            });
        }
        let reach_deg = MAX_RADIUS_FRACTION * radius_km / KM_PER_DEGREE;
        if center.lat.abs() + reach_deg >= 90.0 {
            return Err(ZoneError::InvalidZone {
                zone:   name,
                reason: format!(
                    "tower disc of {:.3} km around latitude {} reaches a pole",
                    MAX_RADIUS_FRACTION * radius_km,
                    center.lat
                ),
            });
        }
        Ok(Self {
            name,
            center,
            radius_km,
            target_count,
            category,
            region:     String::new(),
            state_code: String::new(),
            state_name: String::new(),
        })
    }

    /// Attach region and state metadata.
    pub fn with_admin(
        mut self,
        region:     impl Into<String>,
        state_code: impl Into<String>,
        state_name: impl Into<String>,
    ) -> Self {
        self.region = region.into();
        self.state_code = state_code.into();
        self.state_name = state_name.into();
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn center(&self) -> GeoPoint { self.center }
    pub fn radius_km(&self) -> f64 { self.radius_km }
    pub fn target_count(&self) -> u32 { self.target_count }
    pub fn category(&self) -> ZoneCategory { self.category }
    pub fn region(&self) -> &str { &self.region }
    pub fn state_code(&self) -> &str { &self.state_code }
    pub fn state_name(&self) -> &str { &self.state_name }
}
