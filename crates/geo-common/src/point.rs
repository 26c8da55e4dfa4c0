//! Geographic and projected point types.

use crate::error::{CoordError, CoordResult};
use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Axis order is always (longitude, latitude), matching the x/y order used by
/// the projection layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Create a point, rejecting values outside [-180, 180] x [-90, 90].
    pub fn checked(lon: f64, lat: f64) -> CoordResult<Self> {
        let point = Self { lon, lat };
        point.validate()?;
        Ok(point)
    }

    /// Check that both components are finite and within their geographic range.
    pub fn validate(&self) -> CoordResult<()> {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            return Err(CoordError::NonFinite {
                x: self.lon,
                y: self.lat,
            });
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoordError::LongitudeOutOfRange(self.lon));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordError::LatitudeOutOfRange(self.lat));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// A point in a planar projected coordinate system, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point along the northing axis.
    pub fn offset_y(&self, dy: f64) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Round a value to a fixed number of decimal places using round-half-to-even,
/// the same rule numpy's `around` applies.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
