//! Rounded longitude/latitude output grids.

use geo_common::{round_to, Array2, BoundingBox, GeoPoint};
use serde::{Deserialize, Serialize};

/// Decimal places kept in every output coordinate (~0.11 m).
pub const OUTPUT_DECIMALS: i32 = 6;

/// Two aligned `(n_ranks, n_nodes)` arrays of longitudes and latitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordGrid {
    pub lons: Array2<f64>,
    pub lats: Array2<f64>,
}

impl CoordGrid {
    /// Split a point grid into longitude and latitude channels, rounding
    /// each value to [`OUTPUT_DECIMALS`] places.
    pub fn from_points(points: &Array2<GeoPoint>) -> Self {
        Self {
            lons: points.map(|p| round_to(p.lon, OUTPUT_DECIMALS)),
            lats: points.map(|p| round_to(p.lat, OUTPUT_DECIMALS)),
        }
    }

    /// (n_ranks, n_nodes)
    pub fn shape(&self) -> (usize, usize) {
        self.lons.shape()
    }

    /// The node at (`rank`, `node`).
    pub fn point(&self, rank: usize, node: usize) -> Option<GeoPoint> {
        let lon = self.lons.get(rank, node)?;
        let lat = self.lats.get(rank, node)?;
        Some(GeoPoint::new(*lon, *lat))
    }

    /// All nodes in row-major order.
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.lons
            .iter()
            .zip(self.lats.iter())
            .map(|(&lon, &lat)| GeoPoint::new(lon, lat))
    }

    /// Box enclosing every node, or `None` for an empty grid.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let points: Vec<GeoPoint> = self.points().collect();
        BoundingBox::from_points(&points)
    }

    /// Split into `(longitudes, latitudes)`.
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>) {
        (self.lons, self.lats)
    }
}
