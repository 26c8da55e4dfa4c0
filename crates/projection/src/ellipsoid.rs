//! Reference ellipsoids.
//!
//! An ellipsoid is described by its semi-major axis `a` (meters) and
//! flattening `f = (a - b) / a`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named reference ellipsoids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EllipsoidKind {
    /// Clarke 1866, used by NAD27
    #[default]
    Clarke1866,
    /// World Geodetic System 1984
    Wgs84,
    /// Geodetic Reference System 1980
    Grs80,
}

impl EllipsoidKind {
    /// Parse a name (case-insensitive). Accepts proj-style aliases such as
    /// `clrk66`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clarke1866" | "clrk66" => Some(Self::Clarke1866),
            "wgs84" => Some(Self::Wgs84),
            "grs80" => Some(Self::Grs80),
            _ => None,
        }
    }
}

impl fmt::Display for EllipsoidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EllipsoidKind::Clarke1866 => "clarke1866",
            EllipsoidKind::Wgs84 => "wgs84",
            EllipsoidKind::Grs80 => "grs80",
        };
        write!(f, "{}", name)
    }
}

/// Ellipsoid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub a: f64,
    /// Flattening
    pub f: f64,
}

impl Ellipsoid {
    pub fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// Build from semi-major and semi-minor axes.
    pub fn from_axes(a: f64, b: f64) -> Self {
        Self { a, f: (a - b) / a }
    }

    /// Clarke 1866: a = 6378206.4 m, b = 6356583.8 m.
    pub fn clarke1866() -> Self {
        Self::from_axes(6_378_206.4, 6_356_583.8)
    }

    pub fn wgs84() -> Self {
        Self::new(6_378_137.0, 1.0 / 298.257_223_563)
    }

    pub fn grs80() -> Self {
        Self::new(6_378_137.0, 1.0 / 298.257_222_101)
    }

    /// Semi-minor axis (meters).
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::clarke1866()
    }
}

impl From<EllipsoidKind> for Ellipsoid {
    fn from(kind: EllipsoidKind) -> Self {
        match kind {
            EllipsoidKind::Clarke1866 => Self::clarke1866(),
            EllipsoidKind::Wgs84 => Self::wgs84(),
            EllipsoidKind::Grs80 => Self::grs80(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clarke1866_flattening() {
        let e = Ellipsoid::clarke1866();
        // 1/f is 294.978698...
        assert!((1.0 / e.f - 294.978_698_2).abs() < 1e-6, "1/f = {}", 1.0 / e.f);
        assert!((e.b() - 6_356_583.8).abs() < 1e-6);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(EllipsoidKind::parse("clrk66"), Some(EllipsoidKind::Clarke1866));
        assert_eq!(EllipsoidKind::parse("WGS84"), Some(EllipsoidKind::Wgs84));
        assert_eq!(EllipsoidKind::parse("airy"), None);
    }

    #[test]
    fn test_kind_roundtrips_through_display() {
        for kind in [EllipsoidKind::Clarke1866, EllipsoidKind::Wgs84, EllipsoidKind::Grs80] {
            assert_eq!(EllipsoidKind::parse(&kind.to_string()), Some(kind));
        }
    }
}
