//! Spherical Web Mercator projection (EPSG:3857).
//!
//! Maps (lon, lat) in degrees to (x, y) in meters on a sphere of radius
//! 6378137 m with the origin at (0°, 0°). Easting is linear in longitude;
//! northing grows without bound towards the poles, so the poles themselves
//! cannot be projected.

use crate::error::{ProjectionError, Result};
use geo_common::{GeoPoint, ProjectedPoint};
use std::f64::consts::FRAC_PI_4;

/// Easting overshoot past the antimeridian that is treated as rounding error.
const ANTIMERIDIAN_SNAP_DEG: f64 = 1e-9;

/// Sphere radius used by EPSG:3857 (meters).
pub const WEB_MERCATOR_RADIUS: f64 = 6_378_137.0;

/// Bidirectional mapping between geographic and planar coordinates.
pub trait PlanarProjection {
    /// Project a geographic point to planar meters.
    fn geo_to_planar(&self, point: GeoPoint) -> Result<ProjectedPoint>;

    /// Inverse of [`geo_to_planar`](Self::geo_to_planar).
    fn planar_to_geo(&self, point: ProjectedPoint) -> Result<GeoPoint>;
}

/// Web Mercator projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    /// Sphere radius (meters)
    pub radius: f64,
}

impl WebMercator {
    pub fn new() -> Self {
        Self {
            radius: WEB_MERCATOR_RADIUS,
        }
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanarProjection for WebMercator {
    fn geo_to_planar(&self, point: GeoPoint) -> Result<ProjectedPoint> {
        point.validate()?;
        if point.lat.abs() >= 90.0 {
            return Err(ProjectionError::projection_failed(format!(
                "latitude {} has no finite Mercator northing",
                point.lat
            )));
        }

        let x = self.radius * point.lon.to_radians();
        let y = self.radius * (FRAC_PI_4 + point.lat.to_radians() / 2.0).tan().ln();

        let projected = ProjectedPoint::new(x, y);
        if !projected.is_finite() {
            return Err(ProjectionError::projection_failed(format!(
                "latitude {} has no finite Mercator northing",
                point.lat
            )));
        }
        Ok(projected)
    }

    fn planar_to_geo(&self, point: ProjectedPoint) -> Result<GeoPoint> {
        if !point.is_finite() {
            return Err(ProjectionError::projection_failed(format!(
                "non-finite planar point ({}, {})",
                point.x, point.y
            )));
        }

        let lon = wrap_longitude((point.x / self.radius).to_degrees());
        let lat = (2.0 * (point.y / self.radius).exp().atan() - std::f64::consts::FRAC_PI_2)
            .to_degrees();

        Ok(GeoPoint::new(lon, lat))
    }
}

/// Bring a longitude back into [-180, 180]. Values a hair past ±180 snap to
/// the antimeridian instead of jumping to the other side.
fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    if lon.abs() - 180.0 <= ANTIMERIDIAN_SNAP_DEG {
        return 180.0_f64.copysign(lon);
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let proj = WebMercator::new();
        let p = proj.geo_to_planar(GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(p.x, 0.0);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_known_values() {
        let proj = WebMercator::new();

        // Antimeridian easting is half the equator
        let p = proj.geo_to_planar(GeoPoint::new(180.0, 0.0)).unwrap();
        assert!((p.x - 20_037_508.342_789_244).abs() < 1e-6);

        // Web Mercator square extent is reached at ~85.0511 degrees
        let p = proj.geo_to_planar(GeoPoint::new(0.0, 85.051_128_779_806_6)).unwrap();
        assert!((p.y - 20_037_508.342_789_244).abs() < 1e-3, "y = {}", p.y);
    }

    #[test]
    fn test_roundtrip() {
        let proj = WebMercator::new();
        for &(lon, lat) in &[(0.0, 0.0), (-122.4, 37.8), (139.7, 35.7), (18.4, -33.9), (179.9, 84.0)] {
            let back = proj
                .planar_to_geo(proj.geo_to_planar(GeoPoint::new(lon, lat)).unwrap())
                .unwrap();
            assert!((back.lon - lon).abs() < 1e-9, "lon {} vs {}", back.lon, lon);
            assert!((back.lat - lat).abs() < 1e-9, "lat {} vs {}", back.lat, lat);
        }
    }

    #[test]
    fn test_antimeridian_roundtrip_stays_in_range() {
        let proj = WebMercator::new();
        for lon in [180.0, -180.0] {
            let p = proj.geo_to_planar(GeoPoint::new(lon, 12.5)).unwrap();
            let back = proj.planar_to_geo(p).unwrap();
            assert!((back.lon - lon).abs() < 1e-9, "lon {} vs {}", back.lon, lon);
            assert!(back.validate().is_ok(), "{:?} left the valid range", back);
        }
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(179.5), 179.5);
        assert_eq!(wrap_longitude(180.000_000_000_01), 180.0);
        assert_eq!(wrap_longitude(-180.000_000_000_01), -180.0);
        assert!((wrap_longitude(190.0) + 170.0).abs() < 1e-12);
        assert!((wrap_longitude(-190.0) - 170.0).abs() < 1e-12);
    }

    #[test]
    fn test_pole_fails() {
        let proj = WebMercator::new();
        assert!(matches!(
            proj.geo_to_planar(GeoPoint::new(0.0, 90.0)),
            Err(ProjectionError::ProjectionFailed(_))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let proj = WebMercator::new();
        assert!(matches!(
            proj.geo_to_planar(GeoPoint::new(0.0, 95.0)),
            Err(ProjectionError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_planar_to_geo_rejects_nan() {
        let proj = WebMercator::new();
        assert!(proj.planar_to_geo(ProjectedPoint::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_large_northing_stays_below_pole() {
        let proj = WebMercator::new();
        let p = proj.planar_to_geo(ProjectedPoint::new(0.0, 1e8)).unwrap();
        assert!(p.lat <= 90.0 && p.lat > 89.9);
    }
}
