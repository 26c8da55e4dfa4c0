//! Error types for grid generation.

use geo_common::CoordError;
use projection::ProjectionError;
use thiserror::Error;

/// Errors that can occur while building a route grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Rank or node counts that cannot produce a grid.
    #[error("invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    /// An endpoint or center point outside the valid coordinate range.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordError),

    /// Geodesic or projection failure, including undefined geodesics.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl GridError {
    /// Create an InvalidDimensions error.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Create a ConfigError.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// True if the error comes from an undefined geodesic (coincident or
    /// antipodal endpoints).
    pub fn is_undefined_geodesic(&self) -> bool {
        matches!(
            self,
            Self::Projection(ProjectionError::UndefinedGeodesic(_))
        )
    }
}

impl From<serde_yaml::Error> for GridError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigError(format!("YAML error: {}", err))
    }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
