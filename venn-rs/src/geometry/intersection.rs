use std::cmp::Reverse;

use std::f64::consts::PI;

use itertools::Itertools;
use ordered_float::NotNan;

use crate::SMALL;
use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::{Circle, Point};

/// A point where the boundaries of exactly two circles cross
#[derive(Clone, Debug)]
pub struct IntersectionPoint {
    pub pos: Point,
    /// Indices (into the queried slice) of the two circles whose boundaries cross here
    pub parents: [usize; 2],
}

/// One circular boundary segment of a multi-circle intersection region
#[derive(Clone, Debug)]
pub struct Arc {
    pub circle: Circle,
    pub p1: Point,
    pub p2: Point,
    /// Perpendicular chord-to-arc distance, the integration width of the circular segment
    pub width: f64,
}

/// Full decomposition of a multi-circle intersection area computation
#[derive(Clone, Debug, Default)]
pub struct AreaStats {
    pub area: f64,
    pub polygon_area: f64,
    pub arc_area: f64,
    pub arcs: Vec<Arc>,
    pub inner_points: Vec<IntersectionPoint>,
    pub intersection_points: Vec<IntersectionPoint>,
}

/// Intersection points of two circle boundaries: two points, or none if the circles
/// are disjoint or one contains the other. Tangent and coincident circles also yield
/// no points, they are not special-cased.
pub fn circle_circle_intersection(c1: &Circle, c2: &Circle) -> Vec<Point> {
    let d = c1.center.distance(&c2.center);
    let (r1, r2) = (c1.radius, c2.radius);

    if d >= r1 + r2 || d <= (r1 - r2).abs() {
        return vec![];
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).sqrt();
    let x0 = c1.center.0 + a * (c2.center.0 - c1.center.0) / d;
    let y0 = c1.center.1 + a * (c2.center.1 - c1.center.1) / d;
    let rx = -(c2.center.1 - c1.center.1) * (h / d);
    let ry = -(c2.center.0 - c1.center.0) * (h / d);

    vec![Point(x0 + rx, y0 - ry), Point(x0 - rx, y0 + ry)]
}

/// Antiderivative of the circular segment: integral of sqrt(r^2 - x^2) related terms,
/// evaluated at offset `x` from the center.
fn circle_integral(r: f64, x: f64) -> f64 {
    let y = (r * r - x * x).sqrt();
    x * y + r * r * f64::atan2(x, y)
}

/// Area of the circular segment of a circle of radius `r`, up to chord offset `width`.
fn circle_segment_area(r: f64, width: f64) -> f64 {
    circle_integral(r, width - r) - circle_integral(r, -r)
}

/// Closed-form lens area of two circles with radii `r1`, `r2` and center distance `d`.
pub fn circle_overlap(r1: f64, r2: f64, d: f64) -> f64 {
    // no overlap
    if d >= r1 + r2 {
        return 0.0;
    }
    // completely overlapped
    if d <= (r1 - r2).abs() {
        let r_min = f64::min(r1, r2);
        return PI * r_min * r_min;
    }

    let w1 = r1 - (d * d - r2 * r2 + r1 * r1) / (2.0 * d);
    let w2 = r2 - (d * d - r1 * r1 + r2 * r2) / (2.0 * d);
    circle_segment_area(r1, w1) + circle_segment_area(r2, w2)
}

/// Whether `point` lies within every circle of `circles` (with tolerance).
fn contained_in_circles(point: &Point, circles: &[Circle]) -> bool {
    circles
        .iter()
        .all(|c| c.center.distance(point) <= c.radius + SMALL)
}

/// All pairwise boundary intersection points of `circles`, tagged with their parents.
fn intersection_points(circles: &[Circle]) -> Vec<IntersectionPoint> {
    let mut points = vec![];
    for ((i, c1), (j, c2)) in circles.iter().enumerate().tuple_combinations() {
        for pos in circle_circle_intersection(c1, c2) {
            points.push(IntersectionPoint {
                pos,
                parents: [i, j],
            });
        }
    }
    points
}

/// Intersection area shared by all of `circles`, decomposed into the straight-edge
/// polygon through the inner intersection points plus the circular segment correction
/// of the narrowest arc along each edge.
pub fn intersection_area(circles: &[Circle]) -> AreaStats {
    let all_points = intersection_points(circles);

    // filter out points that aren't included in all the circles
    let mut inner_points = all_points
        .iter()
        .filter(|p| contained_in_circles(&p.pos, circles))
        .cloned()
        .collect_vec();

    let mut arc_area = 0.0;
    let mut polygon_area = 0.0;
    let mut arcs: Vec<Arc> = vec![];

    if inner_points.len() > 1 {
        // sort the points by descending angle from the centroid of the polygon, which
        // lets us iterate over consecutive points to get the edges
        let center = Point::centroid_of(&inner_points.iter().map(|p| p.pos).collect_vec());
        let angle = |p: &IntersectionPoint| f64::atan2(p.pos.0 - center.0, p.pos.1 - center.1);
        inner_points.sort_by_cached_key(|p| Reverse(NotNan::new(angle(p)).unwrap()));

        let mut p2 = inner_points.last().unwrap().clone();
        for p1 in inner_points.iter() {
            polygon_area += (p2.pos.0 + p1.pos.0) * (p1.pos.1 - p2.pos.1);

            // of all circles shared by both endpoints, the narrowest arc bounds the region
            let mid_point = Point((p1.pos.0 + p2.pos.0) / 2.0, (p1.pos.1 + p2.pos.1) / 2.0);
            let mut arc: Option<Arc> = None;

            for &parent in p1.parents.iter().filter(|i| p2.parents.contains(*i)) {
                let circle = &circles[parent];
                let a1 = f64::atan2(p1.pos.0 - circle.center.0, p1.pos.1 - circle.center.1);
                let a2 = f64::atan2(p2.pos.0 - circle.center.0, p2.pos.1 - circle.center.1);

                let mut angle_diff = a2 - a1;
                if angle_diff < 0.0 {
                    angle_diff += 2.0 * PI;
                }

                // the width follows from the arc point halfway between the two endpoints
                let a = a2 - angle_diff / 2.0;
                let arc_point = Point(
                    circle.center.0 + circle.radius * a.sin(),
                    circle.center.1 + circle.radius * a.cos(),
                );
                let width = mid_point.distance(&arc_point);

                if arc.as_ref().is_none_or(|arc| arc.width > width) {
                    arc = Some(Arc {
                        circle: *circle,
                        p1: p1.pos,
                        p2: p2.pos,
                        width,
                    });
                }
            }

            if let Some(arc) = arc {
                arc_area += circle_segment_area(arc.circle.radius, arc.width);
                arcs.push(arc);
                p2 = p1.clone();
            }
        }
    } else {
        // either all circles are disjoint, or the smallest circle is completely
        // enclosed by all the others. examine the smallest circle to find out which
        let smallest = circles
            .iter()
            .min_by_key(|c| NotNan::new(c.radius).unwrap())
            .expect("no circles provided");

        let disjoint = circles
            .iter()
            .any(|c| c.center.distance(&smallest.center) > (smallest.radius - c.radius).abs());

        if !disjoint {
            arc_area = smallest.area();
            // a single synthetic full-circle arc, so renderers can still trace the region
            arcs.push(Arc {
                circle: *smallest,
                p1: Point(smallest.center.0, smallest.center.1 + smallest.radius),
                p2: Point(
                    smallest.center.0 - SMALL,
                    smallest.center.1 + smallest.radius,
                ),
                width: smallest.radius * 2.0,
            });
        }
    }

    polygon_area /= 2.0;

    AreaStats {
        area: arc_area + polygon_area,
        polygon_area,
        arc_area,
        arcs,
        inner_points,
        intersection_points: all_points,
    }
}
