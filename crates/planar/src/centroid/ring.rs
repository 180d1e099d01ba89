//! Ring kernel: signed area and area centroid of one closed polygon boundary.
//!
//! Shoelace identities over the distinct vertices `p_0..p_{n-1}` (indices wrap):
//!
//! ```text
//! 2A  = Σ (x_i y_{i+1} − x_{i+1} y_i)
//! C_x = Σ (x_i + x_{i+1})(x_i y_{i+1} − x_{i+1} y_i) / 6A
//! C_y = Σ (y_i + y_{i+1})(x_i y_{i+1} − x_{i+1} y_i) / 6A
//! ```
//!
//! Numerics
//! - Every vertex is read as an offset from an origin (`Recenter`), so the cross
//!   products involve the ring's extent instead of its absolute position. With the
//!   default first-vertex origin a small ring at ±1e8 (or ±1e15 for area) gives
//!   bit-identical results to the same ring at the origin.
//! - The two edges touching the first vertex contribute exactly zero under the
//!   first-vertex origin, so an explicit closing duplicate changes nothing.
//!
//! Sign: CCW positive, CW negative. The sign is returned unchanged.

use nalgebra::Vector2;

use super::cfg::{CentroidCfg, Recenter};
use crate::geom::{Bound, Point, Ring};
use crate::parallelogram_area;

/// Signed area and centroid of `ring`.
///
/// - Empty ring: `((0,0), 0)`.
/// - Zero signed area (collinear, fewer than 3 distinct vertices): mean of the
///   distinct vertices, area `0`.
pub(crate) fn ring_centroid_area(ring: &Ring, cfg: CentroidCfg) -> (Point, f64) {
    let pts = ring.distinct();
    let Some(&first) = pts.first() else {
        return (Vector2::zeros(), 0.0);
    };
    let origin = match cfg.recenter {
        Recenter::FirstVertex => first,
        Recenter::BoundCenter => Bound::from_points(pts).map_or(first, |b| b.center()),
        Recenter::Off => Vector2::zeros(),
    };

    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (p, q) in pts.iter().zip(pts.iter().cycle().skip(1)) {
        let p = p - origin;
        let q = q - origin;
        let cross = parallelogram_area(p, q);
        twice_area += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }

    if twice_area == 0.0 {
        return (vertex_mean(pts, origin), 0.0);
    }

    let area = twice_area / 2.0;
    let centroid = Vector2::new(cx / (6.0 * area), cy / (6.0 * area)) + origin;
    (centroid, area)
}

/// Mean of `pts`, summed as offsets from `origin`. `pts` must be non-empty.
fn vertex_mean(pts: &[Point], origin: Point) -> Point {
    let sum = pts
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + (p - origin));
    sum / pts.len() as f64 + origin
}
