//! Random star-shaped rings in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple polygons for property
//!   tests and benchmarks of the centroid core. Draws are reproducible from a
//!   `(seed, index)` replay token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π) around `center`, add
//!   bounded angular and radial jitter. Angles stay strictly increasing, so the
//!   ring is simple, star-shaped about `center`, and counter-clockwise.
//! - Holes are smaller, unjittered rings with half the outer vertex count,
//!   placed inside the largest disk the outer ring is guaranteed to contain.

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Polygon, Ring};

/// Vertex count distribution. Counts below a triangle are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    /// Fewest distinct vertices a draw can have.
    pub fn min_count(&self) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, .. } => min.max(3),
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let lo = self.min_count();
        match *self {
            VertexCount::Fixed(_) => lo,
            VertexCount::Uniform { max, .. } => rng.gen_range(lo..=max.max(lo)),
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `radius * (1 + u)`, `u ∈ [-radial_jitter, radial_jitter]`. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub radius: f64,
    pub center: Point,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            radius: 1.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// Names one draw: the same token always yields the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    /// The token `by` draws further along the same seed.
    #[inline]
    pub fn advance(self, by: u64) -> Self {
        Self {
            index: self.index.wrapping_add(by),
            ..self
        }
    }

    /// Generator keyed by `(seed, index)`.
    fn rng(self) -> StdRng {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw a closed, counter-clockwise, star-shaped ring.
pub fn draw_ring(cfg: RingCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.sample(&mut rng);
    star_ring(&cfg, n, &mut rng)
}

fn star_ring<R: Rng>(cfg: &RingCfg, n: usize, rng: &mut R) -> Ring {
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius.max(1e-9);
    let delta = 2.0 * PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * PI
    } else {
        0.0
    };
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    pts.push(pts[0]);
    Ring(pts)
}

/// Radius of a disk around `cfg.center` that every ring drawn with `cfg`
/// contains, whatever vertex count is sampled. `None` if the angular gaps of
/// the sparsest draw can reach π.
pub fn inscribed_radius(cfg: &RingCfg) -> Option<f64> {
    clearance(cfg, cfg.vertex_count.min_count())
}

/// Guaranteed inner radius for a ring of exactly `n` vertices.
fn clearance(cfg: &RingCfg, n: usize) -> Option<f64> {
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let max_gap = 2.0 * PI / (n.max(3) as f64) * (1.0 + 2.0 * aj);
    if max_gap >= PI {
        return None;
    }
    Some(cfg.radius.max(1e-9) * (1.0 - rj) * (max_gap / 2.0).cos())
}

/// Draw a polygon with one clockwise hole strictly inside the outer ring.
///
/// The outer ring is exactly `draw_ring(cfg, tok)`. The hole is an unjittered
/// ring with half as many vertices (at least 3), sized to half the clearance
/// of the sampled outer vertex count. `None` if that count leaves no
/// guaranteed room.
pub fn draw_polygon_with_hole(cfg: RingCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let r_in = clearance(&cfg, n)?;
    let outer = star_ring(&cfg, n, &mut rng);
    let hole_cfg = RingCfg {
        angle_jitter_frac: 0.0,
        radial_jitter: 0.0,
        radius: 0.5 * r_in,
        ..cfg
    };
    let hole = star_ring(&hole_cfg, (n / 2).max(3), &mut rng).reversed();
    Some(Polygon(vec![outer, hole]))
}
