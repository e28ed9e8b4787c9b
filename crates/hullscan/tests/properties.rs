//! Property tests for `compute_hull` on integer-valued inputs (exact f64 arithmetic).

use hullscan::prelude::*;
use proptest::prelude::*;

fn lattice_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50i32..=50, -50i32..=50), 1..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vec2::new(x as f64, y as f64)).collect())
}

proptest! {
    #[test]
    fn hull_is_convex_and_contains_every_point(points in lattice_points(60)) {
        let hull = compute_hull(&points).unwrap();
        prop_assert!(!hull.is_empty());
        if hull.len() >= 3 {
            prop_assert!(is_convex_ccw(&hull));
        }
        prop_assert!(contains_all(&hull, &points));
        prop_assert!(is_subset_of(&hull, &points));
    }

    #[test]
    fn hull_starts_at_lowest_then_leftmost(points in lattice_points(60)) {
        prop_assume!(points.len() >= 3);
        let hull = compute_hull(&points).unwrap();
        let lowest = points
            .iter()
            .copied()
            .min_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
            .unwrap();
        prop_assert_eq!(hull[0], lowest);
    }

    #[test]
    fn hull_ignores_input_order(
        (points, shuffled) in lattice_points(40)
            .prop_filter("need three points", |v| v.len() >= 3)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(compute_hull(&points).unwrap(), compute_hull(&shuffled).unwrap());
    }

    #[test]
    fn hull_of_hull_is_unchanged(points in lattice_points(60)) {
        let hull = compute_hull(&points).unwrap();
        prop_assert_eq!(compute_hull(&hull).unwrap(), hull);
    }

    #[test]
    fn power_of_two_scaling_commutes_with_the_hull(
        points in lattice_points(40),
        k in prop_oneof![Just(-700i32), Just(700i32)],
    ) {
        let s = 2f64.powi(k);
        let scaled: Vec<Point> = points.iter().map(|p| p * s).collect();
        let expected: Vec<Point> = compute_hull(&points).unwrap().iter().map(|p| p * s).collect();
        prop_assert_eq!(compute_hull(&scaled).unwrap(), expected);
    }

    #[test]
    fn small_inputs_are_copied(points in lattice_points(3)) {
        prop_assert_eq!(compute_hull(&points).unwrap(), points);
    }

    #[test]
    fn collinear_inputs_keep_two_extremes(
        base in (-20i32..=20, -20i32..=20),
        dir in (-5i32..=5, 1i32..=5),
        steps in prop::collection::btree_set(0i32..=12, 3..10),
    ) {
        let p = |k: i32| Vec2::new((base.0 + k * dir.0) as f64, (base.1 + k * dir.1) as f64);
        let points: Vec<Point> = steps.iter().rev().map(|&k| p(k)).collect();
        let lo = *steps.iter().next().unwrap();
        let hi = *steps.iter().next_back().unwrap();
        // dir.1 > 0, so the smallest step is the anchor
        prop_assert_eq!(compute_hull(&points).unwrap(), vec![p(lo), p(hi)]);
    }
}

#[test]
fn seeded_clouds_satisfy_post_conditions() {
    let shapes = [
        CloudShape::Disk { radius: 5.0 },
        CloudShape::Box {
            half_width: 3.0,
            half_height: 1.0,
        },
        CloudShape::Lattice { extent: 4 },
    ];
    for shape in shapes {
        let cfg = CloudCfg {
            count: 300,
            shape,
            ..CloudCfg::default()
        };
        let mut tok = ReplayToken::new(2024);
        for _ in 0..5 {
            let points = draw_cloud(cfg, tok);
            let hull = compute_hull(&points).unwrap();
            assert!(hull.len() >= 3, "{shape:?}: hull too small");
            assert!(is_subset_of(&hull, &points));
            assert!(contains_all_eps(&hull, &points, 1e-9), "{shape:?}: point outside");
            tok = tok.next();
        }
    }
}

#[test]
fn cached_wrapper_matches_free_function() {
    let points = draw_cloud(CloudCfg::default(), ReplayToken::new(1));
    let mut ch = ConvexHull::new(points.clone());
    let cached = ch.compute_hull().unwrap().to_vec();
    assert_eq!(cached, compute_hull(&points).unwrap());
}
