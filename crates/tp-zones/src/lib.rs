//! `tp-zones` — the static maintenance-zone configuration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`zone`]    | `Zone`, `ZoneCategory`                                      |
//! | [`profile`] | `CategoryProfile` table (subtype, status/priority weights)  |
//! | [`catalog`] | `ZoneCatalog`, the built-in Brazilian catalog               |
//! | [`loader`]  | `load_catalog_csv`, `load_catalog_reader`                   |
//! | [`error`]   | `ZoneError`, `ZoneResult<T>`                                |
//!
//! Zones are read-only for the engine's lifetime.  Every invariant (positive
//! radius, valid centre clear of the poles, unique names) is checked when a zone or catalog is
//! constructed, so downstream crates never re-validate.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod profile;
pub mod zone;


pub use catalog::ZoneCatalog;
pub use error::{ZoneError, ZoneResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use profile::CategoryProfile;
pub use zone::{MAX_RADIUS_FRACTION, Zone, ZoneCategory};
