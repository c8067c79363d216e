//! Error types for ray construction.

use finray_math::Vec3;
use thiserror::Error;

/// Errors that can occur when building a [`Ray`](crate::Ray).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RayError {
    /// The ray's origin was never set.
    #[error("ray origin is not set")]
    MissingOrigin,

    /// The ray's destination was never set.
    #[error("ray destination is not set")]
    MissingDestination,

    /// A precomputed direction does not match the endpoints.
    #[error("direction {given:?} does not match endpoints (expected {expected:?})")]
    DirectionMismatch {
        /// Direction supplied by the caller.
        given: Vec3,
        /// Direction derived from origin and destination.
        expected: Vec3,
    },
}

/// Result type for ray construction.
pub type Result<T> = std::result::Result<T, RayError>;
