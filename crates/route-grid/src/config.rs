//! Configuration for grid generation.

use crate::error::{GridError, Result};
use geo_common::NauticalMiles;
use projection::EllipsoidKind;
use serde::{Deserialize, Serialize};

/// Default number of ranks along the route.
pub const DEFAULT_N_RANKS: usize = 10;

/// Default number of nodes per rank.
pub const DEFAULT_N_NODES: usize = 10;

/// Default node spacing in nautical miles.
pub const DEFAULT_SPACING_NM: f64 = 5000.0;

/// Configuration for the grid generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of ranks (cross-sections) between start and finish.
    pub n_ranks: usize,

    /// Number of nodes in each rank, including the two end nodes.
    pub n_nodes: usize,

    /// Base node spacing in nautical miles.
    pub spacing_nm: f64,

    /// Reference ellipsoid for geodesic calculations.
    pub ellipsoid: EllipsoidKind,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            n_ranks: DEFAULT_N_RANKS,
            n_nodes: DEFAULT_N_NODES,
            spacing_nm: DEFAULT_SPACING_NM,
            ellipsoid: EllipsoidKind::Clarke1866,
        }
    }
}

impl GridConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their default value. Unparseable ones are logged
    /// at warn level and also keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ROUTE_GRID_N_RANKS") {
            match val.parse() {
                Ok(n) => config.n_ranks = n,
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable ROUTE_GRID_N_RANKS"),
            }
        }

        if let Ok(val) = std::env::var("ROUTE_GRID_N_NODES") {
            match val.parse() {
                Ok(n) => config.n_nodes = n,
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable ROUTE_GRID_N_NODES"),
            }
        }

        if let Ok(val) = std::env::var("ROUTE_GRID_SPACING_NM") {
            match val.parse() {
                Ok(spacing) => config.spacing_nm = spacing,
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable ROUTE_GRID_SPACING_NM"),
            }
        }

        if let Ok(val) = std::env::var("ROUTE_GRID_ELLIPSOID") {
            match EllipsoidKind::parse(&val) {
                Some(kind) => config.ellipsoid = kind,
                None => tracing::warn!(value = %val, "ignoring unknown ellipsoid"),
            }
        }

        config
    }

    /// Parse configuration from a YAML document. Missing fields take their
    /// default value.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.n_ranks, self.n_nodes)?;

        if !self.spacing_nm.is_finite() {
            return Err(GridError::config_error(format!(
                "spacing_nm must be finite, got {}",
                self.spacing_nm
            )));
        }

        Ok(())
    }

    /// Spacing as a typed distance.
    pub fn spacing(&self) -> NauticalMiles {
        NauticalMiles(self.spacing_nm)
    }
}

/// Check that a grid of `n_ranks x n_nodes` can be built.
pub(crate) fn validate_dimensions(n_ranks: usize, n_nodes: usize) -> Result<()> {
    if n_ranks < 1 {
        return Err(GridError::invalid_dimensions(
            "n_ranks must be at least 1, no ranks to generate",
        ));
    }
    validate_node_count(n_nodes)
}

pub(crate) fn validate_node_count(n_nodes: usize) -> Result<()> {
    if n_nodes < 2 {
        return Err(GridError::invalid_dimensions(format!(
            "n_nodes must be at least 2 (upper and lower node), got {}",
            n_nodes
        )));
    }
    Ok(())
}
