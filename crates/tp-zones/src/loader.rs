//! CSV zone-catalog loader.
//!
//! # CSV format
//!
//! One row per zone, in the order synthesis should visit them.
//!
//! ```csv
//! name,center_lat,center_lon,radius_km,target_count,category,region,state_code,state_name
//! São Paulo Metro,-23.5505,-46.6333,1.8,3123,metropolitan,Southeast,SP,São Paulo
//! Santos Litoral,-23.9608,-46.3334,0.9,553,logistics,Southeast,SP,São Paulo
//! ```
//!
//! `region`, `state_code` and `state_name` may be empty.  A zone with a
//! non-positive radius or a negative target count aborts the load with
//! [`ZoneError::InvalidZone`]; nothing is clamped.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tp_core::GeoPoint;

use crate::{Zone, ZoneCatalog, ZoneCategory, ZoneError, ZoneResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZoneRecord {
    name:         String,
    center_lat:   f64,
    center_lon:   f64,
    radius_km:    f64,
    // Signed so that a negative count is reported, not a parse failure.
    target_count: i64,
    category:     String,
    #[serde(default)]
    region:       String,
    #[serde(default)]
    state_code:   String,
    #[serde(default)]
    state_name:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ZoneCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> ZoneResult<ZoneCatalog> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
pub fn load_catalog_reader<R: Read>(reader: R) -> ZoneResult<ZoneCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut zones = Vec::new();

    for result in csv_reader.deserialize::<ZoneRecord>() {
        let row = result.map_err(|e| ZoneError::Parse(e.to_string()))?;
        zones.push(zone_from_record(row)?);
    }

    ZoneCatalog::new(zones)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn zone_from_record(r: ZoneRecord) -> ZoneResult<Zone> {
    let target_count = u32::try_from(r.target_count).map_err(|_| ZoneError::InvalidZone {
        zone:   r.name.clone(),
        reason: format!("target count must be between 0 and {}, got {}", u32::MAX, r.target_count),
    })?;
    let category: ZoneCategory = r.category.parse()?;

    Ok(Zone::new(r.name, GeoPoint::new(r.center_lat, r.center_lon), r.radius_km, target_count, category)?
        .with_admin(r.region, r.state_code, r.state_name))
}
