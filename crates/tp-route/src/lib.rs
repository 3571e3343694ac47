//! `tp-route` — per-zone maintenance routes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`route`]     | `Route`, `RouteMetrics`                                |
//! | [`heuristic`] | `RouteHeuristic` trait, `NearestNeighbor`              |
//! | [`optimizer`] | `RouteOptimizer` (zone grouping, metrics, parallelism) |
//! | [`plan`]      | `RoutePlan`, `PlanningSummary`                         |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                     |
//! |------------|--------------------------------------------|
//! | `parallel` | Plan zones on the Rayon pool.              |
//! | `serde`    | Derives `Serialize`/`Deserialize`.         |

pub mod error;
pub mod heuristic;
pub mod optimizer;
pub mod plan;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use heuristic::{NearestNeighbor, RouteHeuristic};
pub use optimizer::RouteOptimizer;
pub use plan::{PlanningSummary, RoutePlan};
pub use route::{Route, RouteMetrics};
