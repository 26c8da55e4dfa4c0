//! Geodesic and planar coordinate transformations.
//!
//! Geodesics are solved on a reference ellipsoid via `geographiclib-rs`;
//! the planar projection is implemented from scratch.

pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod mercator;

pub use ellipsoid::{Ellipsoid, EllipsoidKind};
pub use error::{ProjectionError, Result};
pub use geodesic::{GeodesicEngine, InverseSolution};
pub use mercator::{PlanarProjection, WebMercator, WEB_MERCATOR_RADIUS};
