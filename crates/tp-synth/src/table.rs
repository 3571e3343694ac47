//! The tower table: every tower of a run, indexed by `TowerId`.
//!
//! # Invariants
//!
//! - `towers[i].id() == TowerId(i)`: ids are row positions, so derived
//!   columns (density, tier) are plain `Vec`s indexed the same way.
//! - Tower codes are unique.
//! - Towers with missing coordinates stay in the table; only the
//!   geospatial consumers skip them.

use std::collections::HashMap;

use tp_core::{GeoPoint, TowerId};

use crate::{SynthError, SynthResult, Tower};

#[derive(Debug)]
pub struct TowerTable {
    towers:  Vec<Tower>,
    by_code: HashMap<String, TowerId>,
}

impl TowerTable {
    /// Validate and index a set of towers.
    pub fn new(towers: Vec<Tower>) -> SynthResult<Self> {
        if towers.len() > TowerId::LIMIT.index() {
            return Err(SynthError::TableFull(TowerId::LIMIT.0));
        }
        let mut by_code = HashMap::with_capacity(towers.len());
        for (i, t) in towers.iter().enumerate() {
            if t.id().index() != i {
                return Err(SynthError::IdMismatch {
                    code:     t.code().to_owned(),
                    expected: i as u32,
                    got:      t.id().0,
                });
            }
            if by_code.insert(t.code().to_owned(), t.id()).is_some() {
                return Err(SynthError::DuplicateTower(t.code().to_owned()));
            }
        }
        Ok(Self { towers, by_code })
    }

    pub fn empty() -> Self {
        Self { towers: Vec::new(), by_code: HashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tower> {
        self.towers.iter()
    }

    #[inline]
    pub fn get(&self, id: TowerId) -> Option<&Tower> {
        self.towers.get(id.index())
    }

    pub fn by_code(&self, code: &str) -> Option<&Tower> {
        self.by_code.get(code).map(|id| &self.towers[id.index()])
    }

    /// Towers that have coordinates, in table order.
    pub fn positioned(&self) -> impl Iterator<Item = (TowerId, GeoPoint)> + '_ {
        self.towers
            .iter()
            .filter_map(|t| t.position().map(|p| (t.id(), p)))
    }

    /// Number of towers with coordinates.
    pub fn positioned_count(&self) -> usize {
        self.towers.iter().filter(|t| t.position().is_some()).count()
    }

    /// Group tower ids by zone.  Zones appear in order of their first tower;
    /// ids within a zone keep table order.
    pub fn by_zone(&self) -> Vec<(&str, Vec<TowerId>)> {
        let mut slot: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<TowerId>)> = Vec::new();
        for t in &self.towers {
            let i = *slot.entry(t.zone()).or_insert_with(|| {
                groups.push((t.zone(), Vec::new()));
                groups.len() - 1
            });
            groups[i].1.push(t.id());
        }
        groups
    }
}
