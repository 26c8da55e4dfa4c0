//! Node index bookkeeping arrays.

use geo_common::Array2;
use serde::{Deserialize, Serialize};

/// Sentinel for a node that has no previous node assigned yet.
pub const UNASSIGNED: i64 = -1;

/// Current and previous node indices for a grid of a given shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexGrid {
    /// Row-major node numbers `0..rows*cols`
    pub current: Array2<i64>,
    /// Previous node per cell, initially [`UNASSIGNED`]
    pub previous: Array2<i64>,
}

impl IndexGrid {
    pub fn from_shape(rows: usize, cols: usize) -> Self {
        Self {
            current: Array2::from_fn(rows, cols, |r, c| (r * cols + c) as i64),
            previous: Array2::filled(rows, cols, UNASSIGNED),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.current.shape()
    }
}

/// Index arrays shaped like `x_locs`.
pub fn gen_indx<T>(x_locs: &Array2<T>) -> IndexGrid {
    let (rows, cols) = x_locs.shape();
    IndexGrid::from_shape(rows, cols)
}
