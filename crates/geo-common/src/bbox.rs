//! Bounding box types and operations.

use crate::point::GeoPoint;
use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
///
/// Boxes that cross the antimeridian are not represented specially; a grid
/// straddling 180° yields a box spanning the full longitude range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first.lon, first.lat, first.lon, first.lat);
        for p in iter {
            bbox.expand_to(p);
        }
        Some(bbox)
    }

    /// Grow the box to include `point`.
    pub fn expand_to(&mut self, point: &GeoPoint) {
        self.min_x = self.min_x.min(point.lon);
        self.min_y = self.min_y.min(point.lat);
        self.max_x = self.max_x.max(point.lon);
        self.max_y = self.max_y.max(point.lat);
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if this bbox intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [
            GeoPoint::new(2.0, -1.0),
            GeoPoint::new(-3.0, 4.0),
            GeoPoint::new(0.5, 0.5),
        ];
        let bbox = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bbox, BoundingBox::new(-3.0, -1.0, 2.0, 4.0));
        assert_eq!(bbox.width(), 5.0);
        assert_eq!(bbox.height(), 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        let points: [GeoPoint; 0] = [];
        assert!(BoundingBox::from_points(&points).is_none());
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
