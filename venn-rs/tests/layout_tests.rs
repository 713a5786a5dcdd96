use std::f64::consts::PI;

use float_cmp::approx_eq;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use venn_rs::entities::{RegionSpec, VennInstance};
use venn_rs::geometry::geo_traits::DistanceTo;
use venn_rs::geometry::intersection::circle_overlap;
use venn_rs::geometry::primitives::{Circle, Point};
use venn_rs::layout::{
    initial_layout, label_anchors, loss, normalize_solution, refine_layout, scale_solution, solve,
};
use venn_rs::util::LayoutConfig;

fn region(sets: &[&str], size: f64) -> RegionSpec {
    RegionSpec::new(sets.iter().map(|s| s.to_string()).collect(), size)
}

#[test]
fn single_set_sits_at_origin_with_exact_radius() {
    let size = 7.0;
    let instance = VennInstance::new(&[region(&["A"], size)]).unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();

    let circle = &solution.circles[0];
    assert!(circle.center.0.abs() < 1e-9);
    assert!(circle.center.1.abs() < 1e-9);
    assert_eq!(circle.radius, (size / PI).sqrt());
}

#[test]
fn two_overlapping_sets_realize_the_requested_overlap() {
    let instance = VennInstance::new(&[
        region(&["A"], 10.0),
        region(&["B"], 10.0),
        region(&["A", "B"], 3.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();

    let (a, b) = (&solution.circles[0], &solution.circles[1]);
    assert!((a.radius - 1.7841).abs() < 1e-4);
    assert!((b.radius - 1.7841).abs() < 1e-4);

    let achieved = circle_overlap(a.radius, b.radius, a.center.distance(&b.center));
    assert!(
        (achieved - 3.0).abs() < 1e-4,
        "achieved overlap {achieved}, requested 3"
    );
}

#[test]
fn missing_pairwise_regions_are_completed_as_disjoint() {
    let instance = VennInstance::new(&[
        region(&["A"], 5.0),
        region(&["B"], 5.0),
        region(&["C"], 5.0),
    ])
    .unwrap();

    // three synthetic pairwise regions of size 0
    assert_eq!(instance.regions.len(), 6);
    let synthetic: Vec<_> = instance.regions.iter().filter(|r| r.origin.is_none()).collect();
    assert_eq!(synthetic.len(), 3);
    assert!(synthetic.iter().all(|r| r.sets.len() == 2 && r.size == 0.0));
}

#[test]
fn unrelated_sets_come_out_disjoint() {
    let instance = VennInstance::new(&[
        region(&["A"], 5.0),
        region(&["B"], 5.0),
        region(&["C"], 5.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();

    for i in 0..3 {
        for j in (i + 1)..3 {
            let (a, b) = (&solution.circles[i], &solution.circles[j]);
            let d = a.center.distance(&b.center);
            assert!(
                d >= a.radius + b.radius - 1e-6,
                "circles {i} and {j} overlap: distance {d}"
            );
        }
    }
}

#[test]
fn subset_stays_inside_its_superset() {
    let instance = VennInstance::new(&[
        region(&["A"], 20.0),
        region(&["B"], 5.0),
        region(&["A", "B"], 5.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();

    let (a, b) = (&solution.circles[0], &solution.circles[1]);
    assert!(
        a.center.distance(&b.center) + b.radius <= a.radius + 1e-4,
        "B escaped A"
    );
}

#[test]
fn refinement_never_increases_the_loss() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let instance = VennInstance::new(&[
        region(&["A"], 12.0),
        region(&["B"], 12.0),
        region(&["C"], 12.0),
        region(&["A", "B"], 2.0),
        region(&["A", "C"], 2.0),
        region(&["B", "C"], 2.0),
        region(&["A", "B", "C"], 1.0),
    ])
    .unwrap();

    let config = LayoutConfig::default();
    let mut rng = SmallRng::seed_from_u64(0);
    let initial = initial_layout(&instance, &config, &mut rng).unwrap();
    let initial_loss = loss(&initial, &instance.regions);

    let (_, residual_loss) = refine_layout(&instance, &initial, config.refine_max_iterations);
    assert!(residual_loss <= initial_loss);
}

#[test]
fn radii_survive_the_whole_pipeline_untouched() {
    let instance = VennInstance::new(&[
        region(&["A"], 12.0),
        region(&["B"], 6.0),
        region(&["A", "B"], 2.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();

    for (set, circle) in instance.sets.iter().zip(solution.circles.iter()) {
        assert_eq!(circle.radius, set.radius);
        assert!(approx_eq!(
            f64,
            PI * circle.radius * circle.radius,
            set.size,
            epsilon = 1e-9
        ));
    }
}

#[test]
fn normalization_orients_the_two_largest_circles() {
    let circles = [
        Circle::new(Point(3.0, 4.0), 2.0),
        Circle::new(Point(4.5, 4.0), 1.5),
        Circle::new(Point(3.5, 5.5), 1.0),
    ];

    let normalized = normalize_solution(&circles, PI / 2.0, None);

    // largest at the origin
    assert!(normalized[0].center.0.abs() < 1e-9);
    assert!(normalized[0].center.1.abs() < 1e-9);

    // second largest rotated onto the orientation ray
    let second = &normalized[1].center;
    let angle = f64::atan2(second.0, second.1);
    assert!(approx_eq!(f64, angle, PI / 2.0, epsilon = 1e-9));

    // rigid motion: pairwise distances unchanged
    let d_before = circles[0].center.distance(&circles[1].center);
    let d_after = normalized[0].center.distance(&normalized[1].center);
    assert!(approx_eq!(f64, d_before, d_after, epsilon = 1e-9));
}

#[test]
fn scaling_fits_the_layout_into_the_padded_target() {
    let instance = VennInstance::new(&[
        region(&["A"], 10.0),
        region(&["B"], 10.0),
        region(&["A", "B"], 3.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();

    let (width, height, padding) = (600.0, 350.0, 15.0);
    let scaled = scale_solution(&solution.circles, width, height, padding);

    for c in &scaled {
        assert!(c.center.0 - c.radius >= padding - 1e-6);
        assert!(c.center.1 - c.radius >= padding - 1e-6);
        assert!(c.center.0 + c.radius <= width - padding + 1e-6);
        assert!(c.center.1 + c.radius <= height - padding + 1e-6);
    }
}

#[test]
fn label_anchors_land_inside_their_regions() {
    let instance = VennInstance::new(&[
        region(&["A"], 10.0),
        region(&["B"], 10.0),
        region(&["A", "B"], 3.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();
    let anchors = label_anchors(&instance, &solution.circles);

    assert_eq!(anchors.len(), 3);
    assert!(anchors.iter().all(|a| !a.disjoint));

    let (a, b) = (&solution.circles[0], &solution.circles[1]);

    // anchor of "A" is inside A but outside B
    assert!(a.center.distance(&anchors[0].pos) <= a.radius);
    assert!(b.center.distance(&anchors[0].pos) >= b.radius);

    // anchor of the intersection is inside both circles
    assert!(a.center.distance(&anchors[2].pos) <= a.radius);
    assert!(b.center.distance(&anchors[2].pos) <= b.radius);
}

#[test]
fn empty_intersection_region_yields_a_disjoint_sentinel() {
    let instance = VennInstance::new(&[
        region(&["A"], 5.0),
        region(&["B"], 5.0),
        region(&["A", "B"], 0.0),
    ])
    .unwrap();
    let solution = solve(&instance, &LayoutConfig::default()).unwrap();
    let anchors = label_anchors(&instance, &solution.circles);

    assert_eq!(anchors.len(), 3);
    assert!(!anchors[0].disjoint);
    assert!(!anchors[1].disjoint);
    assert!(anchors[2].disjoint);
}

#[test]
fn invalid_inputs_are_rejected_at_ingestion() {
    assert!(VennInstance::new(&[region(&["A"], -1.0)]).is_err());
    assert!(VennInstance::new(&[region(&["A"], f64::NAN)]).is_err());
    assert!(VennInstance::new(&[region(&["A", "A"], 1.0)]).is_err());
    assert!(VennInstance::new(&[region(&["A"], 1.0), region(&["A", "B"], 1.0)]).is_err());
    assert!(VennInstance::new(&[]).is_err());
}
