//! Property tests for the centroid core on random star-shaped rings and the
//! polygons, polylines and collections built from them.
//!
//! Tolerances are relative to the ring radius (O(1)) and deliberately loose
//! where inputs are perturbed by translation rounding.

use super::*;
use crate::geom::rand::{draw_polygon_with_hole, draw_ring, ReplayToken, RingCfg, VertexCount};
use crate::geom::{Aff2, Bounded};
use nalgebra::vector;
use proptest::prelude::*;

fn ring_cfg(n: usize) -> RingCfg {
    RingCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RingCfg::default()
    }
}

fn tok(seed: u64) -> ReplayToken {
    ReplayToken { seed, index: 0 }
}

/// One instance of every aggregating shape, all drawn from `seed`.
fn drawn_shapes(seed: u64, n: usize) -> Vec<Geometry> {
    let cfg = ring_cfg(n);
    let t = tok(seed);
    let ring = draw_ring(cfg, t);
    let holey = draw_polygon_with_hole(cfg, t).expect("n >= 8 leaves room for a hole");
    let far = RingCfg { center: vector![3.0, -2.0], ..cfg };
    let other = draw_polygon_with_hole(far, t.advance(2)).expect("n >= 8 leaves room for a hole");
    let path = LineString(ring.0[..n / 2 + 1].to_vec());
    let bend = LineString(draw_ring(cfg, t.advance(1)).0);
    vec![
        holey.clone().into(),
        MultiPolygon(vec![holey.clone(), other]).into(),
        path.clone().into(),
        MultiLineString(vec![path.clone(), bend]).into(),
        Collection(vec![
            Geometry::Point(vector![7.0, 7.0]),
            path.into(),
            ring.into(),
            holey.into(),
        ])
        .into(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn translation_moves_centroid_keeps_area(
        seed in any::<u64>(),
        n in 3usize..40,
        dx in -1e6f64..1e6,
        dy in -1e6f64..1e6,
    ) {
        let g: Geometry = draw_ring(ring_cfg(n), tok(seed)).into();
        let (c0, a0) = centroid_area(&g);
        let (c1, a1) = centroid_area(&g.transformed(&Aff2::translation(vector![dx, dy])));
        prop_assert!((c1 - (c0 + vector![dx, dy])).norm() < 1e-6);
        prop_assert!((a1 - a0).abs() < 1e-6);
    }

    #[test]
    fn scaling_law(seed in any::<u64>(), n in 3usize..40, s in 0.1f64..100.0) {
        let g: Geometry = draw_ring(ring_cfg(n), tok(seed)).into();
        let (c0, a0) = centroid_area(&g);
        let (c1, a1) = centroid_area(&g.transformed(&Aff2::scaling(s)));
        prop_assert!((a1 - s * s * a0).abs() <= 1e-9 * s * s * a0.abs().max(1.0));
        prop_assert!((c1 - c0 * s).norm() <= 1e-9 * s);
    }

    #[test]
    fn translation_law_for_every_shape(
        seed in any::<u64>(),
        n in 8usize..32,
        dx in -1e8f64..1e8,
        dy in -1e8f64..1e8,
    ) {
        let d = vector![dx, dy];
        for g in drawn_shapes(seed, n) {
            let (c0, a0) = centroid_area(&g);
            let (c1, a1) = centroid_area(&g.transformed(&Aff2::translation(d)));
            prop_assert!((c1 - (c0 + d)).norm() < 1e-5, "{}: {:?} vs {:?}", g.kind(), c1, c0 + d);
            prop_assert!((a1 - a0).abs() < 1e-5, "{}: {} vs {}", g.kind(), a1, a0);
        }
    }

    #[test]
    fn scaling_law_for_holey_polygons(seed in any::<u64>(), n in 8usize..32, s in 0.1f64..100.0) {
        for g in drawn_shapes(seed, n).into_iter().take(2) {
            let (c0, a0) = centroid_area(&g);
            let (c1, a1) = centroid_area(&g.transformed(&Aff2::scaling(s)));
            prop_assert!(a0 > 0.0);
            prop_assert!((a1 - s * s * a0).abs() <= 1e-9 * s * s * a0);
            prop_assert!((c1 - c0 * s).norm() <= 1e-9 * s * c0.norm().max(1.0));
        }
    }

    #[test]
    fn reversal_flips_sign_only(seed in any::<u64>(), n in 3usize..40) {
        let r = draw_ring(ring_cfg(n), tok(seed));
        let (c0, a0) = r.centroid_area();
        let (c1, a1) = r.reversed().centroid_area();
        prop_assert!(a0 > 0.0);
        prop_assert!((a1 + a0).abs() < 1e-12);
        prop_assert!((c1 - c0).norm() < 1e-12);
    }

    #[test]
    fn closing_vertex_is_irrelevant(seed in any::<u64>(), n in 3usize..40) {
        let closed = draw_ring(ring_cfg(n), tok(seed));
        let mut open = closed.clone();
        open.0.pop();
        prop_assert_eq!(closed.centroid_area(), open.centroid_area());
    }

    #[test]
    fn holey_polygon_centroid_within_bounds(
        seed in any::<u64>(),
        n in 8usize..40,
        cx in -1e7f64..1e7,
        cy in -1e7f64..1e7,
    ) {
        let cfg = RingCfg { center: vector![cx, cy], ..ring_cfg(n) };
        let p = draw_polygon_with_hole(cfg, tok(seed)).expect("n >= 8 leaves room for a hole");
        let (c, a) = p.centroid_area();
        prop_assert!(a > 0.0);
        prop_assert!(p.bound().unwrap().contains(c));
        let (_, outer_a) = p.0[0].centroid_area();
        prop_assert!(a < outer_a);
    }

    #[test]
    fn stray_points_do_not_dilute_area(
        seed in any::<u64>(),
        n in 3usize..40,
        xs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..8),
    ) {
        let r = draw_ring(ring_cfg(n), tok(seed));
        let (c0, a0) = r.centroid_area();
        let mut members: Vec<Geometry> = xs.iter().map(|&(x, y)| Geometry::Point(vector![x, y])).collect();
        members.push(r.into());
        let (c1, a1) = centroid_area(&Collection(members).into());
        prop_assert_eq!(c1, c0);
        prop_assert_eq!(a1, a0);
    }

    #[test]
    fn accumulator_merge_is_associative(
        items in prop::collection::vec(((-1e3f64..1e3, -1e3f64..1e3), 0.1f64..10.0), 1..20),
        split in 0usize..20,
    ) {
        let split = split.min(items.len());
        let mut all = Weighted::new();
        let mut left = Weighted::new();
        let mut right = Weighted::new();
        for (i, &((x, y), w)) in items.iter().enumerate() {
            all.add(vector![x, y], w);
            if i < split {
                left.add(vector![x, y], w);
            } else {
                right.add(vector![x, y], w);
            }
        }
        left.merge(&right);
        let (a, b) = (left.centroid().unwrap(), all.centroid().unwrap());
        prop_assert!((a - b).norm() < 1e-9);
        prop_assert!((left.weight() - all.weight()).abs() < 1e-9);
    }
}
