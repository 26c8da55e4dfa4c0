//! Error types for coordinate validation.

use thiserror::Error;

/// Result type alias using CoordError.
pub type CoordResult<T> = Result<T, CoordError>;

/// Errors raised when a coordinate or distance cannot be used in a computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("Invalid distance: {0}")]
    InvalidDistance(String),

    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
