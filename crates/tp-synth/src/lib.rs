//! `tp-synth` — synthetic tower inventory.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`tower`]   | `Tower`, `Placement`, `TowerAttrs`, `MaintenanceDate`        |
//! | [`table`]   | `TowerTable` (validated, id-indexed tower rows)              |
//! | [`synth`]   | `CoordinateSynthesizer`                                      |
//! | [`summary`] | `InventorySummary` (counts and region → state → zone tree)   |
//! | [`error`]   | `SynthError`, `SynthResult<T>`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tp_core::PlanConfig;
//! use tp_synth::CoordinateSynthesizer;
//! use tp_zones::ZoneCatalog;
//!
//! let catalog = ZoneCatalog::brazil()?;
//! let table = CoordinateSynthesizer::new(&PlanConfig::default()).synthesize_catalog(&catalog)?;
//! assert_eq!(table.len(), 18_000);
//! ```

pub mod error;
pub mod summary;
pub mod synth;
pub mod table;
pub mod tower;

#[cfg(test)]
mod tests;

pub use error::{SynthError, SynthResult};
pub use summary::{InventorySummary, RegionNode, StateNode};
pub use synth::CoordinateSynthesizer;
pub use table::TowerTable;
pub use tower::{MaintenanceDate, Placement, Tower, TowerAttrs};
