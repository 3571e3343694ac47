//! Per-category sampling profiles.
//!
//! Each [`ZoneCategory`] maps to one row of a static table.  The synthesizer
//! only ever looks up the row for a zone's category; there is no string
//! matching on category names anywhere else.
//!
//! | Category      | Subtype | Status (maint/active/inactive) | Priority (H/M/L) |
//! |---------------|---------|--------------------------------|------------------|
//! | metropolitan  | Macro   | 0.70 / 0.25 / 0.05             | 0.5 / 0.3 / 0.2  |
//! | institutional | Macro   | 0.70 / 0.25 / 0.05             | 0.5 / 0.3 / 0.2  |
//! | all others    | Macro   | 0.70 / 0.25 / 0.05             | 0.3 / 0.4 / 0.3  |
//!
//! The status mix deliberately leans towards `maintenance`; it mirrors the
//! demo inventory this engine was built for, not a field-measured ratio.

use tp_core::{Priority, TowerStatus, TowerSubtype};

use crate::ZoneCategory;

/// Sampling parameters for towers in one zone category.
#[derive(Debug, PartialEq)]
pub struct CategoryProfile {
    /// Subtype assigned to every tower (mapped, not sampled).
    pub subtype: TowerSubtype,
    /// Weighted categorical distribution for `TowerStatus`.
    pub status_weights: [(TowerStatus, f64); 3],
    /// Weighted categorical distribution for `Priority`.
    pub priority_weights: [(Priority, f64); 3],
}

const STATUS_WEIGHTS: [(TowerStatus, f64); 3] = [
    (TowerStatus::Maintenance, 0.70),
    (TowerStatus::Active,      0.25),
    (TowerStatus::Inactive,    0.05),
];

static URBAN: CategoryProfile = CategoryProfile {
    subtype:          TowerSubtype::Macro,
    status_weights:   STATUS_WEIGHTS,
    priority_weights: [(Priority::High, 0.5), (Priority::Medium, 0.3), (Priority::Low, 0.2)],
};

static STANDARD: CategoryProfile = CategoryProfile {
    subtype:          TowerSubtype::Macro,
    status_weights:   STATUS_WEIGHTS,
    priority_weights: [(Priority::High, 0.3), (Priority::Medium, 0.4), (Priority::Low, 0.3)],
};

pub(crate) fn profile_for(category: ZoneCategory) -> &'static CategoryProfile {
    match category {
        ZoneCategory::Metropolitan | ZoneCategory::Institutional => &URBAN,
        ZoneCategory::Tech
        | ZoneCategory::Logistics
        | ZoneCategory::Industrial
        | ZoneCategory::Regional => &STANDARD,
    }
}
