//! Polygon combiner: outer ring minus holes.

use super::accum::Weighted;
use super::cfg::CentroidCfg;
use super::kernels::zero;
use super::ring::ring_centroid_area;
use crate::geom::{Point, Polygon};

/// Area centroid and unsigned net area of a polygon.
///
/// Holes always subtract their unsigned area, whatever their orientation.
/// - No rings or empty outer ring: `((0,0), 0)`.
/// - Degenerate outer ring: the outer ring's fallback point, area `0`.
/// - Holes cancelling the whole outer area: outer centroid, area `0`.
pub(crate) fn polygon_centroid_area(poly: &Polygon, cfg: CentroidCfg) -> (Point, f64) {
    let Some(outer) = poly.outer() else {
        return (zero(), 0.0);
    };
    let (outer_c, outer_a) = ring_centroid_area(outer, cfg);
    let outer_a = outer_a.abs();
    if outer_a == 0.0 {
        return (outer_c, 0.0);
    }

    let mut acc = Weighted::new();
    acc.add(outer_c, outer_a);
    for hole in poly.holes() {
        let (c, a) = ring_centroid_area(hole, cfg);
        if a != 0.0 {
            acc.add(c, -a.abs());
        }
    }
    match acc.centroid() {
        Some(c) => (c, acc.weight().abs()),
        None => (outer_c, 0.0),
    }
}
