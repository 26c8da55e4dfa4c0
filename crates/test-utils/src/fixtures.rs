//! Common test fixtures for route grid tests.
//!
//! Endpoint pairs are given as `(lon, lat)` in degrees.

/// Named start/finish pairs.
pub mod routes {
    use geo_common::GeoPoint;

    /// A route between two points.
    #[derive(Debug, Clone, Copy)]
    pub struct Route {
        pub name: &'static str,
        pub start: (f64, f64),
        pub finish: (f64, f64),
    }

    impl Route {
        pub fn start(&self) -> GeoPoint {
            GeoPoint::new(self.start.0, self.start.1)
        }

        pub fn finish(&self) -> GeoPoint {
            GeoPoint::new(self.finish.0, self.finish.1)
        }
    }

    /// Along the equator from 0°E to 10°E
    pub const EQUATOR_EAST: Route = Route {
        name: "equator_east",
        start: (0.0, 0.0),
        finish: (10.0, 0.0),
    };

    /// Due north along the prime meridian
    pub const MERIDIAN_NORTH: Route = Route {
        name: "meridian_north",
        start: (0.0, 10.0),
        finish: (0.0, 40.0),
    };

    /// London to New York, a long transatlantic great circle
    pub const LONDON_NEW_YORK: Route = Route {
        name: "london_new_york",
        start: (-0.1276, 51.5072),
        finish: (-74.006, 40.7128),
    };

    /// Southampton to Cape Town, crossing the equator
    pub const SOUTHAMPTON_CAPE_TOWN: Route = Route {
        name: "southampton_cape_town",
        start: (-1.4044, 50.9097),
        finish: (18.4241, -33.9249),
    };

    /// Short hop across the Strait of Dover
    pub const DOVER_CALAIS: Route = Route {
        name: "dover_calais",
        start: (1.3134, 51.1279),
        finish: (1.8587, 50.9513),
    };

    /// Westbound across the antimeridian
    pub const ACROSS_ANTIMERIDIAN: Route = Route {
        name: "across_antimeridian",
        start: (170.0, -20.0),
        finish: (-170.0, -15.0),
    };

    /// Endpoints on opposite sides of the globe
    pub const ANTIPODAL: Route = Route {
        name: "antipodal",
        start: (0.0, 0.0),
        finish: (180.0, 0.0),
    };

    /// Start and finish are the same point
    pub const COINCIDENT: Route = Route {
        name: "coincident",
        start: (12.0, 34.0),
        finish: (12.0, 34.0),
    };

    /// Routes with a well-defined geodesic.
    pub const VALID: [Route; 6] = [
        EQUATOR_EAST,
        MERIDIAN_NORTH,
        LONDON_NEW_YORK,
        SOUTHAMPTON_CAPE_TOWN,
        DOVER_CALAIS,
        ACROSS_ANTIMERIDIAN,
    ];
}

#[cfg(test)]
mod tests {
    use super::routes;

    #[test]
    fn test_valid_routes_in_range() {
        for route in routes::VALID {
            assert!(route.start().validate().is_ok(), "{}", route.name);
            assert!(route.finish().validate().is_ok(), "{}", route.name);
        }
    }

    #[test]
    fn test_coincident_route() {
        assert_eq!(routes::COINCIDENT.start(), routes::COINCIDENT.finish());
    }
}
