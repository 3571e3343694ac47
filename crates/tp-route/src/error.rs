//! Routing error type.

use thiserror::Error;

/// Errors produced by `tp-route`.  Degenerate zones are not errors.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("average speed must be positive and finite, got {0} km/h")]
    InvalidSpeed(f64),

    #[error("service time per stop must be non-negative and finite, got {0} h")]
    InvalidServiceTime(f64),
}

pub type RouteResult<T> = Result<T, RouteError>;
