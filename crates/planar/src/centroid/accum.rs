//! Weighted-point accumulators.
//!
//! `Weighted` stores `(origin, Σ (p - origin)·w, Σ w)`. The origin is the first
//! point added, so sums stay small even when all inputs sit near 1e8.
//! `DimAccum` keeps one accumulator per intrinsic dimension and resolves them
//! with the highest-dimension-wins rule.

use nalgebra::Vector2;

use crate::geom::{Dim, Point};

/// Recentered weighted sum of points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Weighted {
    origin: Option<Point>,
    sum: Vector2<f64>,
    weight: f64,
}

impl Weighted {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `p` with weight `w` (negative weights subtract, e.g. holes).
    #[inline]
    pub fn add(&mut self, p: Point, w: f64) {
        let origin = *self.origin.get_or_insert(p);
        self.sum += (p - origin) * w;
        self.weight += w;
    }

    /// Fold `other` into `self`. Associative up to rounding.
    pub fn merge(&mut self, other: &Weighted) {
        let Some(o) = other.origin else {
            return;
        };
        let origin = *self.origin.get_or_insert(o);
        self.sum += other.sum + (o - origin) * other.weight;
        self.weight += other.weight;
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// True if nothing was ever added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
    }

    /// Weighted mean, or `None` if the total weight is zero.
    #[inline]
    pub fn centroid(&self) -> Option<Point> {
        let origin = self.origin?;
        if self.weight == 0.0 {
            return None;
        }
        Some(origin + self.sum / self.weight)
    }
}

/// One accumulator per intrinsic dimension.
///
/// - 0D: representative points, weight 1 each.
/// - 1D: segment midpoints / polyline centroids weighted by length.
/// - 2D: area centroids weighted by unsigned area.
#[derive(Clone, Copy, Debug, Default)]
pub struct DimAccum {
    pub points: Weighted,
    pub lines: Weighted,
    pub areas: Weighted,
}

impl DimAccum {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_point(&mut self, p: Point) {
        self.points.add(p, 1.0);
    }

    #[inline]
    pub fn add_line(&mut self, c: Point, length: f64) {
        self.lines.add(c, length);
    }

    #[inline]
    pub fn add_area(&mut self, c: Point, area: f64) {
        self.areas.add(c, area);
    }

    pub fn merge(&mut self, other: &DimAccum) {
        self.points.merge(&other.points);
        self.lines.merge(&other.lines);
        self.areas.merge(&other.areas);
    }

    /// Highest dimension with positive (or NaN) weight, if any.
    pub fn dominant(&self) -> Option<Dim> {
        if carries_weight(&self.areas) {
            Some(Dim::Two)
        } else if carries_weight(&self.lines) {
            Some(Dim::One)
        } else if !self.points.is_empty() {
            Some(Dim::Zero)
        } else {
            None
        }
    }

    /// Total 2D area collected.
    #[inline]
    pub fn area(&self) -> f64 {
        self.areas.weight()
    }

    /// Resolve to `(centroid, area)`; lower dimensions are ignored when a
    /// higher one is present. Empty input gives `((0,0), 0)`.
    pub fn resolve(&self) -> (Point, f64) {
        let (acc, area) = match self.dominant() {
            Some(Dim::Two) => (&self.areas, self.area()),
            Some(Dim::One) => (&self.lines, 0.0),
            Some(Dim::Zero) => (&self.points, 0.0),
            None => return (Vector2::zeros(), 0.0),
        };
        (acc.centroid().unwrap_or_else(Vector2::zeros), area)
    }
}

/// Non-empty and not provably weightless. NaN passes.
#[inline]
fn carries_weight(w: &Weighted) -> bool {
    !w.is_empty() && (w.weight() > 0.0 || w.weight().is_nan())
}
