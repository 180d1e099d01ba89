//! Collection combiners and the dimension-priority rule.
//!
//! Every multi-variant and mixed collection is reduced by feeding its members
//! into a `DimAccum`:
//! - non-zero area → 2D (weighted by unsigned area),
//! - non-zero length → 1D (weighted by length),
//! - anything else non-empty → 0D representative point (weight 1).
//!
//! The highest non-empty dimension then decides the centroid, so a polygon is
//! never diluted by stray points. Reported area is the sum of 2D areas.
//!
//! A NaN area or length counts as non-zero: it lands in its own dimension and
//! poisons the result instead of being demoted to a point.

use super::accum::DimAccum;
use super::cfg::CentroidCfg;
use super::kernels::{bound_centroid_area, line_centroid_length};
use super::polygon::polygon_centroid_area;
use super::ring::ring_centroid_area;
use crate::geom::{Geometry, LineString, Point, Polygon, Ring};

/// Shapes that can be fed into a `DimAccum`. Empty shapes contribute nothing.
pub(crate) trait Accumulate {
    fn accumulate(&self, cfg: CentroidCfg, acc: &mut DimAccum);
}

impl Accumulate for Geometry {
    fn accumulate(&self, cfg: CentroidCfg, acc: &mut DimAccum) {
        accumulate(self, cfg, acc)
    }
}

impl Accumulate for LineString {
    fn accumulate(&self, _cfg: CentroidCfg, acc: &mut DimAccum) {
        add_line(self, acc)
    }
}

impl Accumulate for Polygon {
    fn accumulate(&self, cfg: CentroidCfg, acc: &mut DimAccum) {
        add_polygon(self, cfg, acc)
    }
}

/// Feed `g` (recursively) into `acc`.
fn accumulate(g: &Geometry, cfg: CentroidCfg, acc: &mut DimAccum) {
    match g {
        Geometry::Point(p) => acc.add_point(*p),
        Geometry::MultiPoint(mp) => {
            for p in &mp.0 {
                acc.add_point(*p);
            }
        }
        Geometry::LineString(ls) => add_line(ls, acc),
        Geometry::MultiLineString(mls) => {
            for ls in &mls.0 {
                add_line(ls, acc);
            }
        }
        Geometry::Ring(r) => add_ring(r, cfg, acc),
        Geometry::Polygon(p) => add_polygon(p, cfg, acc),
        Geometry::MultiPolygon(mp) => {
            for p in &mp.0 {
                add_polygon(p, cfg, acc);
            }
        }
        Geometry::Bound(b) => {
            let (c, a) = bound_centroid_area(b);
            let extent = b.width() + b.height();
            if a > 0.0 || a.is_nan() {
                acc.add_area(c, a);
            } else if extent > 0.0 || extent.is_nan() {
                // Flat rectangle: a segment.
                acc.add_line(c, extent);
            } else {
                acc.add_point(c);
            }
        }
        Geometry::Collection(c) => {
            for g in &c.0 {
                accumulate(g, cfg, acc);
            }
        }
    }
}

/// Aggregate centroid and 2D area of `g` under the dimension-priority rule.
pub(crate) fn aggregate(g: &Geometry, cfg: CentroidCfg) -> (Point, f64) {
    let mut acc = DimAccum::new();
    accumulate(g, cfg, &mut acc);
    acc.resolve()
}

fn add_line(ls: &LineString, acc: &mut DimAccum) {
    match line_centroid_length(ls.points()) {
        Some((c, len)) if len != 0.0 => acc.add_line(c, len),
        Some((c, _)) => acc.add_point(c),
        None => {}
    }
}

fn add_ring(r: &Ring, cfg: CentroidCfg, acc: &mut DimAccum) {
    if r.is_empty() {
        return;
    }
    let (c, a) = ring_centroid_area(r, cfg);
    if a != 0.0 {
        acc.add_area(c, a.abs());
    } else {
        acc.add_point(c);
    }
}

fn add_polygon(p: &Polygon, cfg: CentroidCfg, acc: &mut DimAccum) {
    if p.outer().map_or(true, Ring::is_empty) {
        return;
    }
    let (c, a) = polygon_centroid_area(p, cfg);
    if a != 0.0 {
        acc.add_area(c, a);
    } else {
        acc.add_point(c);
    }
}
