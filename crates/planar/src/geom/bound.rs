//! Axis-aligned bounding rectangles.
//!
//! `Bound` is both an input variant of the centroid core and the helper used to
//! state the containment invariant (centroid of a polygon lies in its bound).

use nalgebra::Vector2;

use super::types::{
    Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    Ring,
};

/// Axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
///
/// Invariant (not enforced): `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub min: Point,
    pub max: Point,
}

impl Bound {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Degenerate bound holding a single point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest bound containing all points; `None` if the slice is empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bound::from_point(*first);
        for p in rest {
            b.extend(*p);
        }
        Some(b)
    }

    /// Grow to include `p`.
    #[inline]
    pub fn extend(&mut self, p: Point) {
        self.min = Vector2::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Vector2::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    #[inline]
    pub fn union(&self, other: &Bound) -> Bound {
        let mut out = *self;
        out.extend(other.min);
        out.extend(other.max);
        out
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Vector2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True if the bound collapses to a single point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }
}

/// Geometries that have an axis-aligned extent.
pub trait Bounded {
    /// Bounding rectangle, or `None` if the geometry holds no coordinates.
    fn bound(&self) -> Option<Bound>;
}

fn union_all<'a, T: Bounded + 'a>(items: impl IntoIterator<Item = &'a T>) -> Option<Bound> {
    items
        .into_iter()
        .filter_map(Bounded::bound)
        .reduce(|a, b| a.union(&b))
}

impl Bounded for Point {
    fn bound(&self) -> Option<Bound> {
        Some(Bound::from_point(*self))
    }
}

impl Bounded for MultiPoint {
    fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.0)
    }
}

impl Bounded for LineString {
    fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.0)
    }
}

impl Bounded for MultiLineString {
    fn bound(&self) -> Option<Bound> {
        union_all(&self.0)
    }
}

impl Bounded for Ring {
    fn bound(&self) -> Option<Bound> {
        Bound::from_points(&self.0)
    }
}

impl Bounded for Polygon {
    /// Holes lie inside the outer ring, so the outer ring decides.
    fn bound(&self) -> Option<Bound> {
        self.outer().and_then(Bounded::bound)
    }
}

impl Bounded for MultiPolygon {
    fn bound(&self) -> Option<Bound> {
        union_all(&self.0)
    }
}

impl Bounded for Bound {
    fn bound(&self) -> Option<Bound> {
        Some(*self)
    }
}

impl Bounded for Collection {
    fn bound(&self) -> Option<Bound> {
        union_all(&self.0)
    }
}

impl Bounded for Geometry {
    fn bound(&self) -> Option<Bound> {
        match self {
            Geometry::Point(p) => p.bound(),
            Geometry::MultiPoint(g) => g.bound(),
            Geometry::LineString(g) => g.bound(),
            Geometry::MultiLineString(g) => g.bound(),
            Geometry::Ring(g) => g.bound(),
            Geometry::Polygon(g) => g.bound(),
            Geometry::MultiPolygon(g) => g.bound(),
            Geometry::Bound(g) => g.bound(),
            Geometry::Collection(g) => g.bound(),
        }
    }
}
