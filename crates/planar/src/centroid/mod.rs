//! Planar centroid and area of any supported geometry.
//!
//! Purpose
//! - One uniform primitive, `centroid_area(g) -> (centroid, area)`, across points,
//!   polylines, rings, polygons, bounds and mixed collections.
//! - Pure and total: no state, no allocation beyond locals, no error channel.
//!   Inputs are borrowed and never mutated.
//!
//! Second return value by variant
//! - Point, MultiPoint, LineString, MultiLineString: `0`
//! - Ring: signed area (CCW positive, CW negative)
//! - Polygon, MultiPolygon: unsigned net area (outer minus holes)
//! - Bound: `width * height`
//! - Collection: sum of 2D member areas
//!
//! Layout
//! - `ring`: shoelace kernel with recentering (the numerically delicate part).
//! - `kernels`: point sets, polylines, bounds.
//! - `polygon`: outer ring minus holes.
//! - `collection`: multi-variants and mixed collections (dimension priority).
//! - `accum`: recentered weighted-point accumulators shared by all of the above.
//!
//! Code cross-refs: `crate::geom::Geometry`, `CentroidCfg`

pub mod accum;
mod cfg;
mod collection;
mod kernels;
mod polygon;
mod ring;

pub use accum::{DimAccum, Weighted};
pub use cfg::{CentroidCfg, Recenter};

use collection::Accumulate;
use crate::geom::{
    Bound, Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Ring,
};

/// Centroid and area of `g` with the default configuration.
#[inline]
pub fn centroid_area(g: &Geometry) -> (Point, f64) {
    centroid_area_with(g, CentroidCfg::default())
}

/// Centroid and area of `g`.
///
/// Empty inputs (and empties of empties) yield `((0,0), 0)`. Degenerate
/// inputs fall back to a representative point: a zero-length polyline
/// reports its first point, a zero-area ring the mean of its vertices.
pub fn centroid_area_with(g: &Geometry, cfg: CentroidCfg) -> (Point, f64) {
    match g {
        Geometry::Point(p) => (*p, 0.0),
        Geometry::MultiPoint(mp) => (
            kernels::point_set_centroid(&mp.0).unwrap_or_else(kernels::zero),
            0.0,
        ),
        Geometry::LineString(ls) => (
            kernels::line_centroid_length(ls.points()).map_or_else(kernels::zero, |(c, _)| c),
            0.0,
        ),
        Geometry::Ring(r) => ring::ring_centroid_area(r, cfg),
        Geometry::Polygon(p) => polygon::polygon_centroid_area(p, cfg),
        Geometry::Bound(b) => kernels::bound_centroid_area(b),
        Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) | Geometry::Collection(_) => {
            collection::aggregate(g, cfg)
        }
    }
}

/// Per-variant entry point, for callers holding a concrete shape.
pub trait CentroidArea {
    fn centroid_area_with(&self, cfg: CentroidCfg) -> (Point, f64);

    #[inline]
    fn centroid_area(&self) -> (Point, f64) {
        self.centroid_area_with(CentroidCfg::default())
    }
}

impl CentroidArea for Geometry {
    fn centroid_area_with(&self, cfg: CentroidCfg) -> (Point, f64) {
        centroid_area_with(self, cfg)
    }
}

impl CentroidArea for Point {
    fn centroid_area_with(&self, _cfg: CentroidCfg) -> (Point, f64) {
        (*self, 0.0)
    }
}

impl CentroidArea for MultiPoint {
    fn centroid_area_with(&self, _cfg: CentroidCfg) -> (Point, f64) {
        (
            kernels::point_set_centroid(&self.0).unwrap_or_else(kernels::zero),
            0.0,
        )
    }
}

impl CentroidArea for LineString {
    fn centroid_area_with(&self, _cfg: CentroidCfg) -> (Point, f64) {
        (
            kernels::line_centroid_length(self.points()).map_or_else(kernels::zero, |(c, _)| c),
            0.0,
        )
    }
}

impl CentroidArea for Ring {
    fn centroid_area_with(&self, cfg: CentroidCfg) -> (Point, f64) {
        ring::ring_centroid_area(self, cfg)
    }
}

impl CentroidArea for Polygon {
    fn centroid_area_with(&self, cfg: CentroidCfg) -> (Point, f64) {
        polygon::polygon_centroid_area(self, cfg)
    }
}

impl CentroidArea for Bound {
    fn centroid_area_with(&self, _cfg: CentroidCfg) -> (Point, f64) {
        kernels::bound_centroid_area(self)
    }
}

// Aggregating variants feed their members straight into a `DimAccum`.
macro_rules! impl_aggregate {
    ($($ty:ident),*) => {
        $(
            impl CentroidArea for $ty {
                fn centroid_area_with(&self, cfg: CentroidCfg) -> (Point, f64) {
                    let mut acc = DimAccum::new();
                    for member in self.0.iter() {
                        member.accumulate(cfg, &mut acc);
                    }
                    acc.resolve()
                }
            }
        )*
    };
}

impl_aggregate!(MultiLineString, MultiPolygon, Collection);

#[cfg(test)]
mod tests_props;
