//! Common types shared across the route grid crates.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod point;
pub mod units;

pub use bbox::BoundingBox;
pub use error::{CoordError, CoordResult};
pub use grid::Array2;
pub use point::{round_to, GeoPoint, ProjectedPoint};
pub use units::{Meters, NauticalMiles, METERS_PER_NAUTICAL_MILE};
