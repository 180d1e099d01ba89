//! Planar centroid and area core.
//!
//! One primitive, `centroid_area(g) -> (centroid, area)`, over a closed set of 2D
//! geometries: points, polylines, rings, polygons with holes, bounds and mixed
//! collections. Flat-plane (Euclidean) assumptions throughout.
//!
//! Layout
//! - `geom`: value shapes (`Geometry` and its variants), bounds, affine images,
//!   seeded random rings.
//! - `centroid`: the dispatcher, its per-variant kernels and the
//!   dimension-priority combiner.

pub mod centroid;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use centroid::{centroid_area, centroid_area_with, CentroidArea, CentroidCfg, Recenter};
pub use geom::{
    Aff2, Bound, Bounded, Collection, Dim, Geometry, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Ring,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::centroid::{
        centroid_area, centroid_area_with, CentroidArea, CentroidCfg, Recenter,
    };
    pub use crate::geom::rand::{draw_polygon_with_hole, draw_ring, ReplayToken, RingCfg, VertexCount};
    pub use crate::geom::{
        Aff2, Bound, Bounded, Collection, Dim, Geometry, LineString, MultiLineString, MultiPoint,
        MultiPolygon, Point, Polygon, Ring,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}
