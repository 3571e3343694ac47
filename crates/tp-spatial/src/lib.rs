//! `tp-spatial` — distances, spatial indexing, density, and expansion tiers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`distance`] | `DistanceModel` (scalar + batch), `DistanceMatrix`        |
//! | [`index`]    | `TowerIndex` (R-tree over tower positions)                |
//! | [`density`]  | `DensityEstimator`                                        |
//! | [`tiers`]    | `ExpansionTier`, `TierThresholds`, `assign_tiers`         |
//! | [`demand`]   | `EquipmentDemand`, `EquipmentKit`, regional multipliers   |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Rayon for density counting and batch distance matrices.   |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod demand;
pub mod density;
pub mod distance;
pub mod error;
pub mod index;
pub mod tiers;


pub use demand::{EquipmentDemand, EquipmentKit, RegionDemand, TierDemand, regional_multiplier};
pub use density::DensityEstimator;
pub use distance::{DistanceMatrix, DistanceModel};
pub use error::{SpatialError, SpatialResult};
pub use index::TowerIndex;
pub use tiers::{ExpansionTier, TierThresholds, assign_tiers, quantile};
