use thiserror::Error;

use tp_core::TpError;
use tp_zones::ZoneError;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("duplicate tower code {0:?}")]
    DuplicateTower(String),

    #[error("tower {code:?} has id {got}, expected {expected} (ids must match row order)")]
    IdMismatch { code: String, expected: u32, got: u32 },

    #[error("tower table is full: more than {0} rows")]
    TableFull(u32),

    #[error("invalid sampling weights: {0}")]
    Weights(String),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Core(#[from] TpError),
}

pub type SynthResult<T> = Result<T, SynthError>;
