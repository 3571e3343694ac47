//! Inventory roll-ups for reporting.
//!
//! Counts are kept in `BTreeMap`s so printed summaries come out in a stable,
//! sorted order regardless of table order.

use std::collections::BTreeMap;

use tp_core::{Priority, TowerStatus};

use crate::TowerTable;

/// One state inside a region, with its zones' tower counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateNode {
    pub name:   String,
    pub towers: usize,
    pub zones:  BTreeMap<String, usize>,
}

/// One region and its states.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionNode {
    pub towers: usize,
    /// Keyed by state code.
    pub states: BTreeMap<String, StateNode>,
}

/// Aggregate counts over a tower table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventorySummary {
    pub total:       usize,
    pub positioned:  usize,
    pub by_status:   BTreeMap<TowerStatus, usize>,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_zone:     BTreeMap<String, usize>,
    /// Region → state → zone hierarchy.
    pub regions:     BTreeMap<String, RegionNode>,
}

impl InventorySummary {
    pub fn from_table(table: &TowerTable) -> Self {
        let mut s = Self::default();
        for t in table.iter() {
            s.total += 1;
            if t.position().is_some() {
                s.positioned += 1;
            }
            *s.by_status.entry(t.attrs().status).or_default() += 1;
            *s.by_priority.entry(t.attrs().priority).or_default() += 1;
            *s.by_zone.entry(t.zone().to_owned()).or_default() += 1;

            let p = t.placement();
            let region = s.regions.entry(p.region.clone()).or_default();
            region.towers += 1;
            let state = region.states.entry(p.state_code.clone()).or_insert_with(|| StateNode {
                name: p.state_name.clone(),
                ..StateNode::default()
            });
            state.towers += 1;
            *state.zones.entry(p.zone.clone()).or_default() += 1;
        }
        s
    }

    pub fn status_count(&self, status: TowerStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}
