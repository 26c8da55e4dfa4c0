//! Parameters for a single grid computation.

use crate::config::{validate_dimensions, GridConfig};
use crate::error::Result;
use geo_common::{GeoPoint, NauticalMiles};
use serde::{Deserialize, Serialize};

/// Endpoints, dimensions and spacing of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRequest {
    pub start: GeoPoint,
    pub finish: GeoPoint,
    pub n_ranks: usize,
    pub n_nodes: usize,
    /// Base node spacing; converted to meters before any geometry is done.
    pub spacing: NauticalMiles,
}

impl GridRequest {
    /// A request using the default dimensions and spacing.
    pub fn new(start: GeoPoint, finish: GeoPoint) -> Self {
        Self::from_config(start, finish, &GridConfig::default())
    }

    /// A request taking dimensions and spacing from `config`.
    pub fn from_config(start: GeoPoint, finish: GeoPoint, config: &GridConfig) -> Self {
        Self {
            start,
            finish,
            n_ranks: config.n_ranks,
            n_nodes: config.n_nodes,
            spacing: config.spacing(),
        }
    }

    pub fn with_dimensions(mut self, n_ranks: usize, n_nodes: usize) -> Self {
        self.n_ranks = n_ranks;
        self.n_nodes = n_nodes;
        self
    }

    pub fn with_spacing(mut self, spacing: NauticalMiles) -> Self {
        self.spacing = spacing;
        self
    }

    /// Check dimensions, endpoint ranges and spacing.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.n_ranks, self.n_nodes)?;
        self.start.validate()?;
        self.finish.validate()?;
        self.spacing.validate()?;
        Ok(())
    }
}
