use thiserror::Error;

use tp_core::TpError;

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("invalid zone {zone:?}: {reason}")]
    InvalidZone { zone: String, reason: String },

    #[error("duplicate zone name {0:?}")]
    DuplicateZone(String),

    #[error("zone catalog parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] TpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
