//! Affine maps applied to whole geometries.
//!
//! Used to state the equivariance laws of the centroid core:
//! translation moves the centroid and keeps the area, uniform scaling by `s`
//! scales the centroid by `s` and the area by `s²`.

use nalgebra::{Matrix2, Vector2};

use super::bound::Bound;
use super::types::{
    Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    Ring,
};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aff2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Aff2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Uniform scaling about the origin.
    #[inline]
    pub fn scaling(s: f64) -> Self {
        Self {
            m: Matrix2::identity() * s,
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}

fn map_points(points: &[Point], f: &Aff2) -> Vec<Point> {
    points.iter().map(|p| f.apply(*p)).collect()
}

fn map_ring(r: &Ring, f: &Aff2) -> Ring {
    Ring(map_points(&r.0, f))
}

fn map_polygon(p: &Polygon, f: &Aff2) -> Polygon {
    Polygon(p.0.iter().map(|r| map_ring(r, f)).collect())
}

impl Geometry {
    /// Image of the geometry under `f`, coordinate by coordinate.
    ///
    /// A bound is mapped corner-wise and re-normalized, which is exact for
    /// maps that keep axes aligned (translations, uniform scalings).
    pub fn transformed(&self, f: &Aff2) -> Geometry {
        match self {
            Geometry::Point(p) => Geometry::Point(f.apply(*p)),
            Geometry::MultiPoint(mp) => MultiPoint(map_points(&mp.0, f)).into(),
            Geometry::LineString(ls) => LineString(map_points(&ls.0, f)).into(),
            Geometry::MultiLineString(mls) => MultiLineString(
                mls.0
                    .iter()
                    .map(|ls| LineString(map_points(&ls.0, f)))
                    .collect(),
            )
            .into(),
            Geometry::Ring(r) => map_ring(r, f).into(),
            Geometry::Polygon(p) => map_polygon(p, f).into(),
            Geometry::MultiPolygon(mp) => {
                MultiPolygon(mp.0.iter().map(|p| map_polygon(p, f)).collect()).into()
            }
            Geometry::Bound(b) => {
                let mut out = Bound::from_point(f.apply(b.min));
                out.extend(f.apply(b.max));
                out.into()
            }
            Geometry::Collection(c) => {
                Collection(c.0.iter().map(|g| g.transformed(f)).collect()).into()
            }
        }
    }
}
