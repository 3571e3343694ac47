//! Error types for tp-output.

use thiserror::Error;

use tp_core::{TowerId, TpError};
use tp_synth::SynthError;
use tp_zones::ZoneError;

/// Errors that can occur when exporting or loading tables.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{column} column has {got} rows, tower table has {expected}")]
    LengthMismatch { column: &'static str, expected: usize, got: usize },

    #[error("route for zone {zone:?} references unknown tower {id}")]
    UnknownTower { zone: String, id: TowerId },

    #[error("expansion tier must be 0-3, got {0}")]
    InvalidTier(u8),

    #[error(transparent)]
    Core(#[from] TpError),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Synth(#[from] SynthError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
