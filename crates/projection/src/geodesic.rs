//! Geodesic computations on a reference ellipsoid.
//!
//! Wraps Karney's algorithms from `geographiclib-rs` behind a small API that
//! works in (lon, lat) order and turns the degenerate cases (coincident or
//! antipodal endpoints) into errors instead of arbitrary azimuths.

use crate::ellipsoid::Ellipsoid;
use crate::error::{ProjectionError, Result};
use geo_common::{GeoPoint, Meters};
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

/// Endpoints closer than this are treated as the same point.
const COINCIDENT_TOLERANCE_M: f64 = 1e-9;

/// Angular tolerance for detecting antipodal endpoints.
const ANTIPODAL_TOLERANCE_DEG: f64 = 1e-9;

/// Solution of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Azimuth at the first point towards the second (degrees from north)
    pub forward_azimuth: f64,
    /// Azimuth at the second point back towards the first (degrees, (-180, 180])
    pub back_azimuth: f64,
    /// Geodesic distance
    pub distance: Meters,
}

/// Geodesic solver bound to one ellipsoid.
///
/// Construction precomputes the series coefficients for the ellipsoid, so
/// build one engine and reuse it.
#[derive(Debug, Clone)]
pub struct GeodesicEngine {
    geod: Geodesic,
}

impl GeodesicEngine {
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            geod: Geodesic::new(ellipsoid.a, ellipsoid.f),
        }
    }

    pub fn clarke1866() -> Self {
        Self::new(Ellipsoid::clarke1866())
    }

    /// Solve the inverse problem between two points.
    ///
    /// Fails when the points coincide (no defined azimuth) or are antipodal
    /// (infinitely many geodesics).
    pub fn inverse(&self, p1: GeoPoint, p2: GeoPoint) -> Result<InverseSolution> {
        p1.validate()?;
        p2.validate()?;

        if is_antipodal(p1, p2) {
            return Err(ProjectionError::undefined_geodesic(format!(
                "points ({}, {}) and ({}, {}) are antipodal",
                p1.lon, p1.lat, p2.lon, p2.lat
            )));
        }

        let (s12, azi1, azi2, a12): (f64, f64, f64, f64) =
            self.geod.inverse(p1.lat, p1.lon, p2.lat, p2.lon);

        if !(s12.is_finite() && azi1.is_finite() && azi2.is_finite() && a12.is_finite()) {
            return Err(ProjectionError::undefined_geodesic(format!(
                "no finite solution between ({}, {}) and ({}, {})",
                p1.lon, p1.lat, p2.lon, p2.lat
            )));
        }
        if s12 <= COINCIDENT_TOLERANCE_M {
            return Err(ProjectionError::undefined_geodesic(format!(
                "points ({}, {}) and ({}, {}) coincide",
                p1.lon, p1.lat, p2.lon, p2.lat
            )));
        }
        if a12 >= 180.0 - ANTIPODAL_TOLERANCE_DEG {
            return Err(ProjectionError::undefined_geodesic(format!(
                "arc length {} between ({}, {}) and ({}, {}) is a half circle",
                a12, p1.lon, p1.lat, p2.lon, p2.lat
            )));
        }

        Ok(InverseSolution {
            forward_azimuth: azi1,
            back_azimuth: reverse_azimuth(azi2),
            distance: Meters(s12),
        })
    }

    /// Solve the direct problem: the point `distance` along the geodesic
    /// leaving `p1` at `azimuth` degrees.
    pub fn direct(&self, p1: GeoPoint, azimuth: f64, distance: Meters) -> Result<GeoPoint> {
        let (lat2, lon2): (f64, f64) = self.geod.direct(p1.lat, p1.lon, azimuth, distance.0);
        if !lat2.is_finite() || !lon2.is_finite() {
            return Err(ProjectionError::undefined_geodesic(format!(
                "direct solution from ({}, {}) at azimuth {} for {} is not finite",
                p1.lon, p1.lat, azimuth, distance
            )));
        }
        Ok(GeoPoint::new(lon2, lat2))
    }

    /// `n` points evenly spaced along the geodesic strictly between `p1` and
    /// `p2`. Point `i` (1-based) lies at `i / (n + 1)` of the total distance.
    pub fn npts(&self, p1: GeoPoint, p2: GeoPoint, n: usize) -> Result<Vec<GeoPoint>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let solution = self.inverse(p1, p2)?;
        let step = solution.distance.0 / (n + 1) as f64;

        tracing::trace!(
            n,
            distance_m = solution.distance.0,
            azimuth = solution.forward_azimuth,
            "generating geodesic points"
        );

        (1..=n)
            .map(|i| self.direct(p1, solution.forward_azimuth, Meters(step * i as f64)))
            .collect()
    }
}

impl Default for GeodesicEngine {
    fn default() -> Self {
        Self::clarke1866()
    }
}

/// Turn the forward azimuth at point 2 into the azimuth pointing back at
/// point 1, normalized to (-180, 180].
fn reverse_azimuth(azi2: f64) -> f64 {
    let back = azi2 + 180.0;
    if back > 180.0 {
        back - 360.0
    } else {
        back
    }
}

fn is_antipodal(p1: GeoPoint, p2: GeoPoint) -> bool {
    if (p1.lat + p2.lat).abs() > ANTIPODAL_TOLERANCE_DEG {
        return false;
    }
    // Opposite poles are antipodal whatever their longitudes
    if p1.lat.abs() >= 90.0 - ANTIPODAL_TOLERANCE_DEG {
        return true;
    }
    let dlon = (p2.lon - p1.lon).rem_euclid(360.0);
    (dlon - 180.0).abs() <= ANTIPODAL_TOLERANCE_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_due_east_on_equator() {
        let engine = GeodesicEngine::clarke1866();
        let sol = engine
            .inverse(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 0.0))
            .unwrap();
        assert!((sol.forward_azimuth - 90.0).abs() < 1e-9, "azi = {}", sol.forward_azimuth);
        assert!((sol.back_azimuth + 90.0).abs() < 1e-9, "back = {}", sol.back_azimuth);
        // Equatorial arc: a * dlon in radians
        let expected = Ellipsoid::clarke1866().a * 10f64.to_radians();
        assert!((sol.distance.0 - expected).abs() < 1e-3);
    }

    #[test]
    fn test_inverse_due_north() {
        let engine = GeodesicEngine::clarke1866();
        let sol = engine
            .inverse(GeoPoint::new(5.0, 10.0), GeoPoint::new(5.0, 20.0))
            .unwrap();
        assert!(sol.forward_azimuth.abs() < 1e-9);
        assert!((sol.back_azimuth - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_rejects_coincident() {
        let engine = GeodesicEngine::clarke1866();
        let p = GeoPoint::new(3.0, 4.0);
        assert!(matches!(
            engine.inverse(p, p),
            Err(ProjectionError::UndefinedGeodesic(_))
        ));
    }

    #[test]
    fn test_inverse_rejects_antipodal() {
        let engine = GeodesicEngine::clarke1866();
        let cases = [
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(180.0, 0.0)),
            (GeoPoint::new(-30.0, 45.0), GeoPoint::new(150.0, -45.0)),
            (GeoPoint::new(10.0, 90.0), GeoPoint::new(-70.0, -90.0)),
        ];
        for (a, b) in cases {
            assert!(
                matches!(engine.inverse(a, b), Err(ProjectionError::UndefinedGeodesic(_))),
                "{:?} -> {:?} should be undefined",
                a,
                b
            );
        }
    }

    #[test]
    fn test_inverse_rejects_out_of_range() {
        let engine = GeodesicEngine::clarke1866();
        let result = engine.inverse(GeoPoint::new(200.0, 0.0), GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, Err(ProjectionError::InvalidCoordinate(_))));
    }

    #[test]
    fn test_npts_zero_is_empty() {
        let engine = GeodesicEngine::clarke1866();
        let p = GeoPoint::new(1.0, 1.0);
        // Coincident endpoints would fail if anything were solved
        assert!(engine.npts(p, p, 0).unwrap().is_empty());
    }

    #[test]
    fn test_npts_equator_spacing() {
        let engine = GeodesicEngine::clarke1866();
        let pts = engine
            .npts(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 0.0), 4)
            .unwrap();
        assert_eq!(pts.len(), 4);
        for (i, p) in pts.iter().enumerate() {
            let expected_lon = 10.0 * (i + 1) as f64 / 5.0;
            assert!((p.lon - expected_lon).abs() < 1e-9, "lon {} vs {}", p.lon, expected_lon);
            assert!(p.lat.abs() < 1e-9);
        }
    }

    #[test]
    fn test_npts_equal_distances() {
        let engine = GeodesicEngine::clarke1866();
        let start = GeoPoint::new(-0.1, 51.5);
        let finish = GeoPoint::new(-73.9, 40.7);
        let pts = engine.npts(start, finish, 9).unwrap();
        let total = engine.inverse(start, finish).unwrap().distance.0;

        let mut prev = start;
        for p in pts.iter().chain(std::iter::once(&finish)) {
            let leg = engine.inverse(prev, *p).unwrap().distance.0;
            assert!((leg - total / 10.0).abs() < 1e-3, "leg {} vs {}", leg, total / 10.0);
            prev = *p;
        }
    }

    #[test]
    fn test_direct_inverts_inverse() {
        let engine = GeodesicEngine::new(Ellipsoid::wgs84());
        let start = GeoPoint::new(151.2, -33.9);
        let finish = GeoPoint::new(-118.4, 33.9);
        let sol = engine.inverse(start, finish).unwrap();
        let end = engine.direct(start, sol.forward_azimuth, sol.distance).unwrap();
        assert!((end.lon - finish.lon).abs() < 1e-8);
        assert!((end.lat - finish.lat).abs() < 1e-8);
    }

    #[test]
    fn test_reverse_azimuth_range() {
        assert_eq!(reverse_azimuth(90.0), -90.0);
        assert_eq!(reverse_azimuth(-90.0), 90.0);
        assert_eq!(reverse_azimuth(0.0), 180.0);
        assert_eq!(reverse_azimuth(180.0), 0.0);
    }
}
