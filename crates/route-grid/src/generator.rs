//! Rank/node grid construction.
//!
//! Ranks are centered on points spaced evenly along the start→finish
//! geodesic. Each rank runs north-south in Web Mercator space through its
//! center, and its interior nodes follow the geodesic between the two end
//! nodes.

use crate::config::{validate_node_count, GridConfig};
use crate::coords::CoordGrid;
use crate::error::Result;
use crate::request::GridRequest;
use geo_common::{Array2, GeoPoint, Meters};
use projection::{Ellipsoid, GeodesicEngine, PlanarProjection, WebMercator};
use rayon::prelude::*;

/// Builds rank/node grids with a fixed geodesic model and planar projection.
///
/// Holds no per-call state; construct once and reuse across requests and
/// threads.
#[derive(Debug, Clone)]
pub struct GridGenerator<P = WebMercator> {
    geodesic: GeodesicEngine,
    projection: P,
}

impl GridGenerator<WebMercator> {
    /// Clarke 1866 geodesics with Web Mercator offsets.
    pub fn new() -> Self {
        Self::with_components(GeodesicEngine::clarke1866(), WebMercator::new())
    }

    pub fn with_ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self::with_components(GeodesicEngine::new(ellipsoid), WebMercator::new())
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::with_ellipsoid(config.ellipsoid.into())
    }
}

impl Default for GridGenerator<WebMercator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PlanarProjection> GridGenerator<P> {
    pub fn with_components(geodesic: GeodesicEngine, projection: P) -> Self {
        Self {
            geodesic,
            projection,
        }
    }

    pub fn geodesic(&self) -> &GeodesicEngine {
        &self.geodesic
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Nodes of one rank centered on `center`.
    ///
    /// The end nodes sit `dist * n_nodes / 2` meters above and below the
    /// center along the planar y axis. The result is
    /// `[upper, interior..., lower]` with `n_nodes - 2` interior nodes spaced
    /// evenly along the geodesic between the ends.
    ///
    /// Mercator northing is unbounded, so a very large `dist * n_nodes` pushes
    /// both end nodes to within rounding of the poles. Their latitudes then
    /// saturate at ±90 and, with `n_nodes > 2`, the geodesic between them is
    /// antipodal and the call fails with an undefined-geodesic error.
    pub fn line_points(&self, center: GeoPoint, n_nodes: usize, dist: Meters) -> Result<Vec<GeoPoint>> {
        validate_node_count(n_nodes)?;
        center.validate()?;
        dist.validate()?;

        let planar = self.projection.geo_to_planar(center)?;
        let half_span = dist.value() * n_nodes as f64 / 2.0;

        let upper = self.projection.planar_to_geo(planar.offset_y(half_span))?;
        let lower = self.projection.planar_to_geo(planar.offset_y(-half_span))?;

        let mut nodes = Vec::with_capacity(n_nodes);
        nodes.push(upper);
        if n_nodes > 2 {
            nodes.extend(self.geodesic.npts(upper, lower, n_nodes - 2)?);
        }
        nodes.push(lower);

        Ok(nodes)
    }

    /// The `(n_ranks, n_nodes)` point grid for `request`.
    pub fn gen_grid(&self, request: &GridRequest) -> Result<Array2<GeoPoint>> {
        let (centers, height) = self.rank_layout(request)?;

        let ranks = centers
            .iter()
            .enumerate()
            .map(|(i, &center)| {
                tracing::trace!(rank = i, lon = center.lon, lat = center.lat, "building rank");
                self.line_points(center, request.n_nodes, height)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Array2::from_rows(ranks)?)
    }

    /// Same as [`gen_grid`](Self::gen_grid), building ranks in parallel.
    pub fn gen_grid_par(&self, request: &GridRequest) -> Result<Array2<GeoPoint>>
    where
        P: Sync,
    {
        let (centers, height) = self.rank_layout(request)?;

        let ranks = centers
            .par_iter()
            .map(|&center| self.line_points(center, request.n_nodes, height))
            .collect::<Result<Vec<_>>>()?;

        Ok(Array2::from_rows(ranks)?)
    }

    /// Longitude and latitude grids for `request`, rounded to 6 decimals.
    pub fn return_co_ords(&self, request: &GridRequest) -> Result<CoordGrid> {
        let points = self.gen_grid(request)?;
        Ok(CoordGrid::from_points(&points))
    }

    /// Rank centers along the route and the node spacing used in every rank.
    fn rank_layout(&self, request: &GridRequest) -> Result<(Vec<GeoPoint>, Meters)> {
        request.validate()?;

        let dist = request.spacing.to_meters();
        let heading = self.geodesic.inverse(request.start, request.finish)?;

        // `rot` is a degree value fed to sin/cos as radians. Existing grids
        // depend on this exact spacing.
        let rot = heading.forward_azimuth - 90.0;
        let height = Meters(dist.value() * rot.sin() + dist.value() * rot.cos());

        tracing::debug!(
            n_ranks = request.n_ranks,
            n_nodes = request.n_nodes,
            azimuth = heading.forward_azimuth,
            route_m = heading.distance.value(),
            height_m = height.value(),
            "generating route grid"
        );

        let centers = self
            .geodesic
            .npts(request.start, request.finish, request.n_ranks)?;

        Ok((centers, height))
    }
}
