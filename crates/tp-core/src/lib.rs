//! `tp-core` — foundational types for the `towerplan` engine.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and minimal external ones (`rand`, `rand_chacha`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TowerId`, `ZoneId`                                   |
//! | [`geo`]         | `GeoPoint`, `Projection`, flat-Earth km conversion    |
//! | [`rng`]         | `RunRng` (one seeded generator per synthesis run)     |
//! | [`status`]      | `TowerStatus`, `Priority`, `TowerSubtype`             |
//! | [`config`]      | `PlanConfig`                                          |
//! | [`error`]       | `TpError`, `TpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlanConfig;
pub use error::{TpError, TpResult};
pub use geo::{GeoPoint, KM_PER_DEGREE, Projection, lon_delta, wrap_lon};
pub use ids::{TowerId, ZoneId};
pub use rng::RunRng;
pub use status::{Priority, TowerStatus, TowerSubtype};
