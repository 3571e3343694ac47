//! The zone catalog and the built-in Brazilian network.

use std::collections::HashSet;

use tp_core::{GeoPoint, ZoneId};

use crate::{Zone, ZoneCategory, ZoneError, ZoneResult};

/// An ordered, name-unique set of zones.
///
/// Order matters: synthesis walks zones in catalog order with a single RNG,
/// so reordering the catalog changes every tower after the first moved zone.
#[derive(Clone, Debug, Default)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl ZoneCatalog {
    /// Build a catalog, rejecting duplicate zone names.
    pub fn new(zones: Vec<Zone>) -> ZoneResult<Self> {
        let mut seen = HashSet::with_capacity(zones.len());
        for z in &zones {
            if !seen.insert(z.name()) {
                return Err(ZoneError::DuplicateZone(z.name().to_owned()));
            }
        }
        if zones.len() > ZoneId::LIMIT.index() {
            return Err(ZoneError::Parse(format!("too many zones: {}", zones.len())));
        }
        Ok(Self { zones })
    }

    /// The 17 maintenance zones of the Brazilian tower network (18,000
    /// towers in total).
    pub fn brazil() -> ZoneResult<Self> {
        use ZoneCategory::*;

        // (name, lat, lon, radius km, towers, category, region, state code, state name)
        const ZONES: [(&str, f64, f64, f64, u32, ZoneCategory, &str, &str, &str); 17] = [
            // Southeast
            ("São Paulo Metro",     -23.5505, -46.6333, 1.8,  3123, Metropolitan,  "Southeast",    "SP", "São Paulo"),
            ("São Paulo Interior",  -22.9056, -47.0608, 1.2,   830, Tech,          "Southeast",    "SP", "São Paulo"),
            ("Santos Litoral",      -23.9608, -46.3334, 0.9,   553, Logistics,     "Southeast",    "SP", "São Paulo"),
            ("Minas Gerais Centro", -19.9167, -43.9345, 1.6,  1938, Industrial,    "Southeast",    "MG", "Minas Gerais"),
            ("Minas Gerais Sul",    -21.2,    -44.8,    1.0,   830, Regional,      "Southeast",    "MG", "Minas Gerais"),
            ("Rio de Janeiro",      -22.9068, -43.1729, 1.2,  1523, Metropolitan,  "Southeast",    "RJ", "Rio de Janeiro"),
            ("Espírito Santo",      -20.3155, -40.3128, 0.9,   623, Regional,      "Southeast",    "ES", "Espírito Santo"),
            // South
            ("São Paulo Sudoeste",  -24.5,    -48.5,    1.1,  1038, Metropolitan,  "South",        "SP", "São Paulo"),
            ("Paraná",              -25.4290, -49.2671, 1.3,  1246, Metropolitan,  "South",        "PR", "Paraná"),
            ("Santa Catarina",      -27.5969, -48.5494, 1.2,  1107, Metropolitan,  "South",        "SC", "Santa Catarina"),
            ("Rio Grande do Sul",   -30.0277, -51.2287, 1.4,  1176, Metropolitan,  "South",        "RS", "Rio Grande do Sul"),
            // Northeast
            ("Bahia",               -12.9714, -38.5014, 1.1,  1038, Metropolitan,  "Northeast",    "BA", "Bahia"),
            ("Pernambuco",           -8.0476, -34.8770, 0.95,  761, Metropolitan,  "Northeast",    "PE", "Pernambuco"),
            ("Ceará",                -3.7319, -38.5269, 1.0,   692, Metropolitan,  "Northeast",    "CE", "Ceará"),
            // Central-West
            ("Brasília DF",         -15.7942, -47.8822, 0.8,   623, Institutional, "Central-West", "DF", "Distrito Federal"),
            ("Goiás",               -15.8267, -48.9385, 0.7,   415, Regional,      "Central-West", "GO", "Goiás"),
            ("Mato Grosso do Sul",  -20.0,    -55.5,    0.8,   484, Regional,      "Central-West", "MS", "Mato Grosso do Sul"),
        ];

        let zones = ZONES
            .iter()
            .map(|&(name, lat, lon, radius, towers, category, region, code, state)| {
                Zone::new(name, GeoPoint::new(lat, lon), radius, towers, category)
                    .map(|z| z.with_admin(region, code, state))
            })
            .collect::<ZoneResult<Vec<_>>>()?;
        Self::new(zones)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Iterate zones with their catalog position.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &Zone)> + '_ {
        self.zones
            .iter()
            .enumerate()
            .map(|(i, z)| (ZoneId(i as u16), z))
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name() == name)
    }

    /// Sum of target tower counts across all zones.
    pub fn total_target(&self) -> u64 {
        self.zones.iter().map(|z| z.target_count() as u64).sum()
    }
}
