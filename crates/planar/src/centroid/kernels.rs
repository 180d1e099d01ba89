//! Small kernels: point sets, polylines, bounds.

use nalgebra::Vector2;

use super::accum::Weighted;
use crate::geom::{Bound, Point};

/// Arithmetic mean of `pts`; `None` if empty.
pub(crate) fn point_set_centroid(pts: &[Point]) -> Option<Point> {
    let mut acc = Weighted::new();
    for p in pts {
        acc.add(*p, 1.0);
    }
    acc.centroid()
}

/// Length-weighted centroid of a polyline and its total length.
///
/// Each segment contributes its midpoint weighted by its Euclidean length.
/// A polyline whose segments all have zero length (including a single point)
/// reports its first point and length `0`. `None` if empty.
pub(crate) fn line_centroid_length(pts: &[Point]) -> Option<(Point, f64)> {
    let first = *pts.first()?;
    let mut acc = Weighted::new();
    for w in pts.windows(2) {
        let (p, q) = (w[0] - first, w[1] - first);
        let len = (q - p).norm();
        acc.add((p + q) / 2.0, len);
    }
    match acc.centroid() {
        Some(c) => Some((c + first, acc.weight())),
        None => Some((first, 0.0)),
    }
}

/// Center and area of an axis-aligned rectangle. A bound collapsed to a point
/// returns that point with area `0`.
pub(crate) fn bound_centroid_area(b: &Bound) -> (Point, f64) {
    if b.is_empty() {
        return (b.min, 0.0);
    }
    (b.center(), b.width() * b.height())
}

#[inline]
pub(crate) fn zero() -> Point {
    Vector2::zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn point_set_mean() {
        let pts = [vector![0.0, 0.0], vector![1.0, 1.5], vector![2.0, 0.0]];
        assert_eq!(point_set_centroid(&pts), Some(vector![1.0, 0.5]));
        assert_eq!(point_set_centroid(&pts[1..2]), Some(vector![1.0, 1.5]));
        assert_eq!(point_set_centroid(&[]), None);
    }

    #[test]
    fn polyline_weighted_by_length() {
        let (c, len) = line_centroid_length(&[vector![0.0, 0.0], vector![3.0, 4.0]]).unwrap();
        assert_eq!(c, vector![1.5, 2.0]);
        assert_eq!(len, 5.0);

        // Long leg dominates: segments of length 2 and 1.
        let (c, len) = line_centroid_length(&[
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 1.0],
        ])
        .unwrap();
        assert_eq!(len, 3.0);
        assert!((c - vector![(1.0 * 2.0 + 2.0) / 3.0, 0.5 / 3.0]).norm() < 1e-12);
    }

    #[test]
    fn polyline_degenerate_cases() {
        assert_eq!(line_centroid_length(&[]), None);
        assert_eq!(
            line_centroid_length(&[vector![7.0, -1.0]]),
            Some((vector![7.0, -1.0], 0.0))
        );
        assert_eq!(
            line_centroid_length(&[vector![2.0, 2.0], vector![2.0, 2.0]]),
            Some((vector![2.0, 2.0], 0.0))
        );
    }

    #[test]
    fn bound_kernel() {
        let b = Bound::new(vector![0.0, 2.0], vector![1.0, 3.0]);
        assert_eq!(bound_centroid_area(&b), (vector![0.5, 2.5], 1.0));
        let d = Bound::from_point(vector![0.0, 2.0]);
        assert_eq!(bound_centroid_area(&d), (vector![0.0, 2.0], 0.0));
    }
}
