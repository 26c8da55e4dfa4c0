//! Great-circle route grids.
//!
//! Lays out a regular grid of sampling nodes between a start and finish
//! point. Ranks are spaced along the geodesic joining the endpoints; each
//! rank is a north-south line of nodes through its center.
//!
//! # Architecture
//!
//! ```text
//! return_co_ords(request)
//!      │
//!      ▼
//! gen_grid ─► GeodesicEngine::inverse   (heading → node spacing)
//!      │
//!      ├─► GeodesicEngine::npts         (rank centers, endpoints excluded)
//!      │
//!      └─► line_points per center
//!               │
//!               ├─► WebMercator offsets (upper / lower node)
//!               └─► GeodesicEngine::npts (interior nodes)
//!      │
//!      ▼
//! CoordGrid { lons, lats }  rounded to 6 decimals
//! ```
//!
//! # Example
//!
//! ```ignore
//! use route_grid::{GridGenerator, GridRequest};
//! use geo_common::{GeoPoint, NauticalMiles};
//!
//! let generator = GridGenerator::new();
//! let request = GridRequest::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 0.0))
//!     .with_dimensions(3, 2)
//!     .with_spacing(NauticalMiles(100.0));
//! let coords = generator.return_co_ords(&request)?;
//! assert_eq!(coords.shape(), (3, 2));
//! ```

pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod index;
pub mod request;

use std::sync::OnceLock;

pub use config::GridConfig;
pub use coords::{CoordGrid, OUTPUT_DECIMALS};
pub use error::{GridError, Result};
pub use generator::GridGenerator;
pub use index::{gen_indx, IndexGrid, UNASSIGNED};
pub use request::GridRequest;

use geo_common::{GeoPoint, NauticalMiles};

fn default_generator() -> &'static GridGenerator {
    static GENERATOR: OnceLock<GridGenerator> = OnceLock::new();
    GENERATOR.get_or_init(GridGenerator::new)
}

/// Rounded longitude and latitude grids between two points, using the
/// default Clarke 1866 / Web Mercator generator.
///
/// `dist` is the base node spacing in nautical miles.
pub fn return_co_ords(
    start_lon: f64,
    finish_lon: f64,
    start_lat: f64,
    finish_lat: f64,
    n_ranks: usize,
    n_nodes: usize,
    dist: NauticalMiles,
) -> Result<CoordGrid> {
    let request = GridRequest::new(
        GeoPoint::new(start_lon, start_lat),
        GeoPoint::new(finish_lon, finish_lat),
    )
    .with_dimensions(n_ranks, n_nodes)
    .with_spacing(dist);

    default_generator().return_co_ords(&request)
}
