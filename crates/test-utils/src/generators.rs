//! Deterministic coordinate generators.
//!
//! These produce spread-out but repeatable points so tests do not depend on
//! a random number generator.

use geo_common::GeoPoint;

/// Creates `n` points on a lon/lat lattice inside `max_abs_lat`.
///
/// Points are laid out row by row from the south-west corner, with
/// longitudes in [-180, 180).
///
/// # Example
///
/// ```
/// use test_utils::lattice_points;
///
/// let points = lattice_points(12, 60.0);
/// assert_eq!(points.len(), 12);
/// assert!(points.iter().all(|p| p.lat.abs() <= 60.0));
/// ```
pub fn lattice_points(n: usize, max_abs_lat: f64) -> Vec<GeoPoint> {
    if n == 0 {
        return Vec::new();
    }
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    let dlon = 360.0 / cols as f64;
    let dlat = if rows > 1 {
        2.0 * max_abs_lat / (rows - 1) as f64
    } else {
        0.0
    };

    (0..n)
        .map(|i| {
            let row = i / cols;
            let col = i % cols;
            GeoPoint::new(-180.0 + col as f64 * dlon, -max_abs_lat + row as f64 * dlat)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_points_count_and_range() {
        for n in [0, 1, 2, 7, 16, 50] {
            let points = lattice_points(n, 80.0);
            assert_eq!(points.len(), n);
            for p in &points {
                assert!(p.validate().is_ok(), "{:?}", p);
                assert!(p.lat.abs() <= 80.0);
                assert!(p.lon < 180.0);
            }
        }
    }

    #[test]
    fn test_lattice_points_deterministic() {
        assert_eq!(lattice_points(25, 45.0), lattice_points(25, 45.0));
    }
}
