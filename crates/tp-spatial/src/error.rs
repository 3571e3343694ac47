//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `tp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("density radius must be positive and finite, got {0} km")]
    InvalidRadius(f64),

    #[error("column length {got} does not match tower table length {expected}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
