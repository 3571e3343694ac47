//! The `Tower` record.
//!
//! A tower's identity (`id`, `code`) and position never change after
//! construction.  Derived values such as density or expansion tier are kept
//! in separate columns by the crates that compute them.

use std::fmt;
use std::str::FromStr;

use tp_core::{GeoPoint, Priority, TowerId, TowerStatus, TowerSubtype, TpError, TpResult};
use tp_zones::{Zone, ZoneCategory};

// ── MaintenanceDate ───────────────────────────────────────────────────────────

/// A calendar date without calendar validation.
///
/// Synthesized days never exceed 28, so every generated date exists in every
/// month.  Parsed dates are only range-checked (month 1–12, day 1–31).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaintenanceDate {
    pub year:  u16,
    pub month: u8,
    pub day:   u8,
}

impl MaintenanceDate {
    pub fn new(year: u16, month: u8, day: u8) -> TpResult<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TpError::UnknownLabel {
                kind:  "date",
                value: format!("{month:02}/{day:02}/{year}"),
            });
        }
        Ok(Self { year, month, day })
    }
}

/// `MM/DD/YYYY`, the format used in exported inventories.
impl fmt::Display for MaintenanceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for MaintenanceDate {
    type Err = TpError;
    fn from_str(s: &str) -> Result<Self, TpError> {
        let bad = || TpError::UnknownLabel { kind: "date", value: s.to_owned() };
        let mut parts = s.trim().split('/');
        let (Some(m), Some(d), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let month = m.parse().map_err(|_| bad())?;
        let day = d.parse().map_err(|_| bad())?;
        let year = y.parse().map_err(|_| bad())?;
        MaintenanceDate::new(year, month, day)
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Which zone a tower belongs to, with the zone's administrative metadata
/// copied in so the tower table is self-contained.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub zone:       String,
    pub category:   ZoneCategory,
    pub region:     String,
    pub state_code: String,
    pub state_name: String,
}

impl Placement {
    pub fn from_zone(zone: &Zone) -> Self {
        Self {
            zone:       zone.name().to_owned(),
            category:   zone.category(),
            region:     zone.region().to_owned(),
            state_code: zone.state_code().to_owned(),
            state_name: zone.state_name().to_owned(),
        }
    }
}

// ── TowerAttrs ────────────────────────────────────────────────────────────────

/// Operational attributes of a tower.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowerAttrs {
    pub subtype:          TowerSubtype,
    pub status:           TowerStatus,
    pub priority:         Priority,
    pub height_m:         u16,
    pub operator_count:   u8,
    /// Signal strength score, 0–100.
    pub signal_strength:  u8,
    /// Uptime percentage, one decimal.
    pub uptime_pct:       f64,
    pub last_maintenance: MaintenanceDate,
    pub next_maintenance: MaintenanceDate,
    /// Already has the capability targeted by expansion planning (5G).
    pub has_5g:           bool,
}

// ── Tower ─────────────────────────────────────────────────────────────────────

/// One tower row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tower {
    id:        TowerId,
    code:      String,
    position:  Option<GeoPoint>,
    placement: Placement,
    attrs:     TowerAttrs,
}

impl Tower {
    /// Construct a tower.  A `Some` position must be a valid coordinate;
    /// `None` marks a tower whose location is unknown.
    pub fn new(
        id:        TowerId,
        code:      impl Into<String>,
        position:  Option<GeoPoint>,
        placement: Placement,
        attrs:     TowerAttrs,
    ) -> TpResult<Self> {
        let position = position
            .map(|p| GeoPoint::try_new(p.lat, p.lon))
            .transpose()?;
        Ok(Self { id, code: code.into(), position, placement, attrs })
    }

    #[inline]
    pub fn id(&self) -> TowerId { self.id }

    /// Opaque external identifier, e.g. `NCA-000001`.
    pub fn code(&self) -> &str { &self.code }

    /// `None` when the tower's coordinates are missing.
    #[inline]
    pub fn position(&self) -> Option<GeoPoint> { self.position }

    pub fn zone(&self) -> &str { &self.placement.zone }
    pub fn placement(&self) -> &Placement { &self.placement }
    pub fn attrs(&self) -> &TowerAttrs { &self.attrs }
}
