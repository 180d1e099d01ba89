//! Planar geometry value shapes consumed by the centroid core.
//!
//! - `Point` is a plain `Vector2<f64>` (x, y).
//! - Newtypes wrap vertex sequences; none of them enforce validity
//!   (self-intersections, hole placement, orientation are the caller's business).
//! - `Geometry` is the closed variant set dispatched on by `centroid_area`.
//!
//! Code cross-refs: `bound::Bound`, `crate::centroid::centroid_area`

use nalgebra::Vector2;

use super::bound::Bound;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Intrinsic dimension of a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dim {
    Zero,
    One,
    Two,
}

/// Finite, possibly empty, ordered set of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPoint(pub Vec<Point>);

/// Open polyline. May be empty or hold a single point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString(pub Vec<Point>);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineString(pub Vec<LineString>);

/// Closed polygon boundary. The last point may repeat the first; if it
/// does not, closure is implicit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring(pub Vec<Point>);

/// First ring is the outer boundary, the rest are holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon(pub Vec<Ring>);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// Heterogeneous sequence of geometries (may nest).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection(pub Vec<Geometry>);

/// Closed set of supported geometry variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Ring(Ring),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    Bound(Bound),
    Collection(Collection),
}

impl LineString {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn reverse(&mut self) {
        self.0.reverse();
    }
}

impl Ring {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// True if the last point repeats the first (exact comparison).
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.0.first() == self.0.last()
    }
    /// Vertices without an explicit closing duplicate.
    #[inline]
    pub fn distinct(&self) -> &[Point] {
        if self.is_closed() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        }
    }
    /// Flip orientation in place (CCW <-> CW).
    pub fn reverse(&mut self) {
        self.0.reverse();
    }
    pub fn reversed(&self) -> Ring {
        let mut r = self.clone();
        r.reverse();
        r
    }
}

impl Polygon {
    /// Outer ring, if any.
    #[inline]
    pub fn outer(&self) -> Option<&Ring> {
        self.0.first()
    }
    #[inline]
    pub fn holes(&self) -> &[Ring] {
        self.0.get(1..).unwrap_or(&[])
    }
}

impl Geometry {
    /// Intrinsic dimension of the variant. For a collection this is the
    /// highest member dimension; `None` if it has no members.
    pub fn dimension(&self) -> Option<Dim> {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Some(Dim::Zero),
            Geometry::LineString(_) | Geometry::MultiLineString(_) => Some(Dim::One),
            Geometry::Ring(_)
            | Geometry::Polygon(_)
            | Geometry::MultiPolygon(_)
            | Geometry::Bound(_) => Some(Dim::Two),
            Geometry::Collection(c) => c.0.iter().filter_map(Geometry::dimension).max(),
        }
    }

    /// Short variant name (used in logs and error messages).
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Ring(_) => "Ring",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Bound(_) => "Bound",
            Geometry::Collection(_) => "Collection",
        }
    }

    /// Total number of coordinates held (a bound counts as two).
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(mp) => mp.0.len(),
            Geometry::LineString(ls) => ls.0.len(),
            Geometry::MultiLineString(mls) => mls.0.iter().map(|ls| ls.0.len()).sum(),
            Geometry::Ring(r) => r.0.len(),
            Geometry::Polygon(p) => p.0.iter().map(|r| r.0.len()).sum(),
            Geometry::MultiPolygon(mp) => mp
                .0
                .iter()
                .flat_map(|p| p.0.iter())
                .map(|r| r.0.len())
                .sum(),
            Geometry::Bound(_) => 2,
            Geometry::Collection(c) => c.0.iter().map(Geometry::vertex_count).sum(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Geometry {
                #[inline]
                fn from(g: $ty) -> Self {
                    Geometry::$ty(g)
                }
            }
        )*
    };
}

impl_from_variant!(
    MultiPoint,
    LineString,
    MultiLineString,
    Ring,
    Polygon,
    MultiPolygon,
    Bound,
    Collection,
);

impl From<Point> for Geometry {
    #[inline]
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}
