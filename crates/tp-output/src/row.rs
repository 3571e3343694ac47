//! Plain data row types written and read by output backends.
//!
//! Categorical columns hold the same labels the core types print
//! (`active`, `High`, `metropolitan`, ...), identifiers are opaque strings,
//! and coordinates are written with exactly six decimals.  An empty
//! coordinate, density, or tier cell means "missing".

use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use tp_core::{GeoPoint, TowerId};
use tp_route::Route;
use tp_spatial::ExpansionTier;
use tp_synth::{Placement, Tower, TowerAttrs};
use tp_zones::ZoneCategory;

use crate::{OutputError, OutputResult};

/// Header of `towers.csv`, in column order.
pub const TOWER_COLUMNS: [&str; 20] = [
    "tower_id", "zone", "region", "state_code", "state_name", "category",
    "latitude", "longitude", "subtype", "status", "priority", "height_m",
    "operator_count", "signal_strength", "uptime_pct", "last_maintenance",
    "next_maintenance", "has_5g", "density", "expansion_tier",
];

/// Header of `routes.csv`.
pub const ROUTE_COLUMNS: [&str; 3] = ["zone", "sequence", "tower_id"];

/// Header of `route_metrics.csv`.
pub const METRICS_COLUMNS: [&str; 6] =
    ["zone", "distance_km", "time_hours", "stop_count", "driving_hours", "service_hours"];

fn write_coord<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(x) => s.serialize_str(&format!("{x:.6}")),
        None => s.serialize_none(),
    }
}

// ── TowerRow ──────────────────────────────────────────────────────────────────

/// One row of the enriched tower table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerRow {
    pub tower_id:         String,
    pub zone:             String,
    pub region:           String,
    pub state_code:       String,
    pub state_name:       String,
    pub category:         String,
    #[serde(serialize_with = "write_coord")]
    pub latitude:         Option<f64>,
    #[serde(serialize_with = "write_coord")]
    pub longitude:        Option<f64>,
    pub subtype:          String,
    pub status:           String,
    pub priority:         String,
    pub height_m:         u16,
    pub operator_count:   u8,
    pub signal_strength:  u8,
    pub uptime_pct:       f64,
    pub last_maintenance: String,
    pub next_maintenance: String,
    pub has_5g:           bool,
    pub density:          Option<u32>,
    pub expansion_tier:   Option<u8>,
}

impl TowerRow {
    pub fn from_tower(tower: &Tower, density: Option<u32>, tier: Option<ExpansionTier>) -> Self {
        let p = tower.placement();
        let a = tower.attrs();
        let pos = tower.position();
        Self {
            tower_id:         tower.code().to_owned(),
            zone:             p.zone.clone(),
            region:           p.region.clone(),
            state_code:       p.state_code.clone(),
            state_name:       p.state_name.clone(),
            category:         p.category.as_str().to_owned(),
            latitude:         pos.map(|p| p.lat),
            longitude:        pos.map(|p| p.lon),
            subtype:          a.subtype.as_str().to_owned(),
            status:           a.status.as_str().to_owned(),
            priority:         a.priority.as_str().to_owned(),
            height_m:         a.height_m,
            operator_count:   a.operator_count,
            signal_strength:  a.signal_strength,
            uptime_pct:       a.uptime_pct,
            last_maintenance: a.last_maintenance.to_string(),
            next_maintenance: a.next_maintenance.to_string(),
            has_5g:           a.has_5g,
            density,
            expansion_tier:   tier.map(ExpansionTier::as_u8),
        }
    }

    /// Coordinates if both are present and valid.  Out-of-range values are
    /// logged and treated as missing, so the row is kept.
    pub fn position(&self) -> Option<GeoPoint> {
        let (lat, lon) = (self.latitude?, self.longitude?);
        match GeoPoint::try_new(lat, lon) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(tower = %self.tower_id, error = %e, "dropping invalid coordinates");
                None
            }
        }
    }

    pub fn tier(&self) -> OutputResult<Option<ExpansionTier>> {
        self.expansion_tier
            .map(|v| ExpansionTier::from_u8(v).ok_or(OutputError::InvalidTier(v)))
            .transpose()
    }

    /// Rebuild the tower this row describes, with row position `id`.
    pub fn to_tower(&self, id: TowerId) -> OutputResult<Tower> {
        let placement = Placement {
            zone:       self.zone.clone(),
            category:   self.category.parse::<ZoneCategory>()?,
            region:     self.region.clone(),
            state_code: self.state_code.clone(),
            state_name: self.state_name.clone(),
        };
        let attrs = TowerAttrs {
            subtype:          self.subtype.parse()?,
            status:           self.status.parse()?,
            priority:         self.priority.parse()?,
            height_m:         self.height_m,
            operator_count:   self.operator_count,
            signal_strength:  self.signal_strength,
            uptime_pct:       self.uptime_pct,
            last_maintenance: self.last_maintenance.parse()?,
            next_maintenance: self.next_maintenance.parse()?,
            has_5g:           self.has_5g,
        };
        Ok(Tower::new(id, self.tower_id.clone(), self.position(), placement, attrs)?)
    }
}

// ── Route rows ────────────────────────────────────────────────────────────────

/// One stop of a route.  `sequence` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStopRow {
    pub zone:     String,
    pub sequence: usize,
    pub tower_id: String,
}

/// Metrics of one zone's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetricsRow {
    pub zone:          String,
    pub distance_km:   f64,
    pub time_hours:    f64,
    pub stop_count:    usize,
    pub driving_hours: f64,
    pub service_hours: f64,
}

impl From<&Route> for RouteMetricsRow {
    fn from(r: &Route) -> Self {
        Self {
            zone:          r.zone.clone(),
            distance_km:   r.metrics.distance_km,
            time_hours:    r.metrics.time_hours,
            stop_count:    r.metrics.stop_count,
            driving_hours: r.metrics.driving_hours,
            service_hours: r.metrics.service_hours,
        }
    }
}
