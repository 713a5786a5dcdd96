use std::f64::consts::PI;

use float_cmp::approx_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;

use venn_rs::geometry::geo_traits::Shape;
use venn_rs::geometry::intersection::{
    circle_circle_intersection, circle_overlap, intersection_area,
};
use venn_rs::geometry::primitives::{Circle, Point};
use venn_rs::layout::distance_from_intersect_area;

#[test_case(1.0; "unit radius")]
#[test_case(0.5; "small radius")]
#[test_case(7.3; "large radius")]
fn overlap_of_coincident_circles_is_full_area(r: f64) {
    assert!(approx_eq!(
        f64,
        circle_overlap(r, r, 0.0),
        PI * r * r,
        epsilon = 1e-10
    ));
}

#[test_case(1.0, 2.0, 3.0; "exactly touching")]
#[test_case(1.0, 2.0, 3.5; "well apart")]
#[test_case(0.5, 0.5, 100.0; "far apart")]
fn overlap_of_disjoint_circles_is_zero(r1: f64, r2: f64, d: f64) {
    assert_eq!(circle_overlap(r1, r2, d), 0.0);
}

#[test]
fn overlap_of_contained_circle_is_its_area() {
    // the smaller circle fits entirely inside the larger one
    assert!(approx_eq!(
        f64,
        circle_overlap(3.0, 1.0, 0.5),
        PI,
        epsilon = 1e-10
    ));
}

#[test]
fn overlap_is_non_increasing_in_distance() {
    let (r1, r2) = (2.0, 1.5);
    let mut previous = circle_overlap(r1, r2, 0.0);
    for i in 1..=100 {
        let d = (r1 + r2 + 0.5) * i as f64 / 100.0;
        let overlap = circle_overlap(r1, r2, d);
        assert!(
            overlap <= previous + 1e-12,
            "overlap increased from {previous} to {overlap} at distance {d}"
        );
        previous = overlap;
    }
}

#[test]
fn overlap_inversion_round_trip() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..100 {
        let r1 = rng.random_range(0.1..5.0);
        let r2 = rng.random_range(0.1..5.0);
        let max_overlap = PI * f64::min(r1, r2).powi(2);
        let overlap = rng.random_range(0.0..max_overlap);

        let d = distance_from_intersect_area(r1, r2, overlap).unwrap();
        let achieved = circle_overlap(r1, r2, d);
        assert!(
            (achieved - overlap).abs() < 1e-6,
            "requested {overlap}, got {achieved} at distance {d} (r1: {r1}, r2: {r2})"
        );
    }
}

#[test]
fn intersection_points_lie_on_both_circles() {
    let c1 = Circle::new(Point(0.0, 0.0), 1.0);
    let c2 = Circle::new(Point(1.0, 0.3), 1.2);

    let points = circle_circle_intersection(&c1, &c2);
    assert_eq!(points.len(), 2);
    for p in points {
        let d1 = ((p.0 - c1.center.0).powi(2) + (p.1 - c1.center.1).powi(2)).sqrt();
        let d2 = ((p.0 - c2.center.0).powi(2) + (p.1 - c2.center.1).powi(2)).sqrt();
        assert!(approx_eq!(f64, d1, c1.radius, epsilon = 1e-10));
        assert!(approx_eq!(f64, d2, c2.radius, epsilon = 1e-10));
    }
}

#[test_case(Point(5.0, 0.0), 1.0; "disjoint")]
#[test_case(Point(0.1, 0.0), 0.2; "contained")]
fn degenerate_circle_pairs_have_no_intersection_points(center: Point, radius: f64) {
    let c1 = Circle::new(Point(0.0, 0.0), 2.0);
    let c2 = Circle::new(center, radius);
    assert!(circle_circle_intersection(&c1, &c2).is_empty());
}

#[test]
fn two_circle_intersection_area_matches_closed_form() {
    let c1 = Circle::new(Point(0.0, 0.0), 1.0);
    let c2 = Circle::new(Point(1.2, 0.0), 1.0);

    let stats = intersection_area(&[c1, c2]);
    let lens = circle_overlap(1.0, 1.0, 1.2);
    assert!(approx_eq!(f64, stats.area, lens, epsilon = 1e-9));
    assert!(approx_eq!(
        f64,
        stats.area,
        stats.polygon_area + stats.arc_area,
        epsilon = 1e-12
    ));
}

#[test]
fn three_circle_intersection_is_smaller_than_any_lens() {
    // equilateral arrangement, every pair overlaps and so do all three
    let circles = [
        Circle::new(Point(0.0, 0.0), 1.0),
        Circle::new(Point(1.0, 0.0), 1.0),
        Circle::new(Point(0.5, 0.866), 1.0),
    ];

    let stats = intersection_area(&circles);
    let lens = circle_overlap(1.0, 1.0, 1.0);
    assert!(stats.area > 0.0);
    assert!(stats.area < lens);
    assert_eq!(stats.arcs.len(), 3);
}

#[test]
fn disjoint_circles_have_zero_intersection_area() {
    let circles = [
        Circle::new(Point(0.0, 0.0), 1.0),
        Circle::new(Point(10.0, 0.0), 1.0),
    ];

    let stats = intersection_area(&circles);
    assert_eq!(stats.area, 0.0);
    assert!(stats.arcs.is_empty());
}

#[test]
fn enclosed_circle_dominates_intersection_area() {
    // the small circle is engulfed by both others: the area is its own, and a single
    // synthetic full-circle arc is reported for rendering
    let small = Circle::new(Point(0.0, 0.0), 0.5);
    let circles = [
        Circle::new(Point(0.1, 0.0), 5.0),
        Circle::new(Point(-0.1, 0.0), 4.0),
        small,
    ];

    let stats = intersection_area(&circles);
    assert!(approx_eq!(f64, stats.area, small.area(), epsilon = 1e-10));
    assert_eq!(stats.arcs.len(), 1);
    assert_eq!(stats.arcs[0].circle, small);
}
