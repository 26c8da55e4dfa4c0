//! Distance units.
//!
//! Grid spacing is supplied in nautical miles at the top level and used in
//! meters everywhere below it. Keeping the two as distinct types stops a raw
//! `f64` from crossing that boundary unconverted.

use crate::error::{CoordError, CoordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meters per nautical mile used for grid spacing conversion.
///
/// Slightly above the international 1852 m; kept for output compatibility
/// with existing grids.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.001;

/// A distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Meters(pub f64);

/// A distance in nautical miles.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct NauticalMiles(pub f64);

impl Meters {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Reject NaN and infinite distances.
    pub fn validate(&self) -> CoordResult<()> {
        check_finite(self.0, "m")
    }
}

impl NauticalMiles {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_meters(self) -> Meters {
        Meters(self.0 * METERS_PER_NAUTICAL_MILE)
    }

    /// Reject NaN and infinite distances.
    pub fn validate(&self) -> CoordResult<()> {
        check_finite(self.0, "nm")
    }
}

fn check_finite(value: f64, unit: &str) -> CoordResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoordError::InvalidDistance(format!("{} {}", value, unit)))
    }
}

impl From<NauticalMiles> for Meters {
    fn from(nm: NauticalMiles) -> Self {
        nm.to_meters()
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

impl fmt::Display for NauticalMiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} nm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nautical_miles_to_meters() {
        let m: Meters = NauticalMiles(1.0).into();
        assert_eq!(m, Meters(1852.001));

        let m = NauticalMiles(5000.0).to_meters();
        assert!((m.value() - 9_260_005.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(Meters(0.0).validate().is_ok());
        assert!(NauticalMiles(-3.0).validate().is_ok());
        assert_eq!(
            Meters(f64::INFINITY).validate(),
            Err(CoordError::InvalidDistance("inf m".to_string()))
        );
        assert!(matches!(
            NauticalMiles(f64::NAN).validate(),
            Err(CoordError::InvalidDistance(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Meters(12.5).to_string(), "12.5 m");
        assert_eq!(NauticalMiles(100.0).to_string(), "100 nm");
    }
}
