//! Error types for geodesic and projection computations.

use geo_common::CoordError;
use thiserror::Error;

/// Errors that can occur while solving geodesics or projecting points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// The geodesic between two points has no unique solution.
    #[error("undefined geodesic: {0}")]
    UndefinedGeodesic(String),

    /// A forward or inverse projection produced a non-finite value.
    #[error("projection failed: {0}")]
    ProjectionFailed(String),

    /// An input coordinate was rejected.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordError),
}

impl ProjectionError {
    /// Create an UndefinedGeodesic error.
    pub fn undefined_geodesic(msg: impl Into<String>) -> Self {
        Self::UndefinedGeodesic(msg.into())
    }

    /// Create a ProjectionFailed error.
    pub fn projection_failed(msg: impl Into<String>) -> Self {
        Self::ProjectionFailed(msg.into())
    }
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
