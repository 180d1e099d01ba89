//! Planar geometry value shapes.
//!
//! Purpose
//! - Provide the closed set of 2D geometry variants (`Geometry`) consumed by the
//!   centroid core, plus the small helpers callers need around it: bounding
//!   rectangles (`Bound`, `Bounded`) and affine images (`Aff2`).
//! - Seeded random rings (`rand`) for property tests and benchmarks.
//! - No validation: rings may be open or closed, CW or CCW, self-intersecting.
//!
//! Code cross-refs: `crate::centroid::centroid_area`

mod bound;
pub mod rand;
mod transform;
mod types;

pub use bound::{Bound, Bounded};
pub use transform::Aff2;
pub use types::{
    Collection, Dim, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Ring,
};
