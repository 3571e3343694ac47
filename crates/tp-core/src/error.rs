//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `TpError` as one variant
//! via `#[from]`, so a configuration problem detected in `tp-core` surfaces
//! unchanged at every layer above it.

use thiserror::Error;

/// The top-level error type for `tp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate {
        lat:    f64,
        lon:    f64,
        reason: &'static str,
    },

    #[error("unknown {kind} {value:?}")]
    UnknownLabel {
        kind:  &'static str,
        value: String,
    },
}

/// Shorthand result type for `tp-core`.
pub type TpResult<T> = Result<T, TpError>;
