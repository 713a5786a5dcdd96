use std::collections::HashSet;

use itertools::Itertools;
use log::warn;
use ordered_float::NotNan;

use crate::SMALL;
use crate::entities::{LabelAnchor, VennInstance};
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{DistanceTo, SeparationDistance};
use crate::geometry::intersection::intersection_area;
use crate::geometry::primitives::{Circle, Point};
use crate::opt::{NelderMeadOptions, nelder_mead};

/// Signed clearance of `point` from the border of `circle`: positive inside the
/// circle, negative outside.
fn signed_clearance(circle: &Circle, point: &Point) -> f64 {
    match circle.separation_distance(point) {
        (GeoPosition::Interior, d) => d,
        (GeoPosition::Exterior, d) => -d,
    }
}

/// Margin of a candidate anchor point: the clearance to the nearest relevant circle
/// boundary. Positive only when the point is inside every interior circle and
/// outside every exterior circle.
fn circle_margin(point: &Point, interior: &[Circle], exterior: &[Circle]) -> f64 {
    let interior_margins = interior.iter().map(|c| signed_clearance(c, point));
    let exterior_margins = exterior.iter().map(|c| -signed_clearance(c, point));

    interior_margins
        .chain(exterior_margins)
        .fold(f64::INFINITY, f64::min)
}

/// For each circle, the indices of the circles that fully engulf it
fn engulfing_circles(circles: &[Circle]) -> Vec<Vec<usize>> {
    let mut ret: Vec<Vec<usize>> = vec![vec![]; circles.len()];
    for ((i, a), (j, b)) in circles.iter().enumerate().tuple_combinations() {
        let d = a.center.distance(&b.center);
        if d + b.radius <= a.radius + SMALL {
            ret[j].push(i);
        } else if d + a.radius <= b.radius + SMALL {
            ret[i].push(j);
        }
    }
    ret
}

/// The point of maximum margin inside all `interior` and outside all `exterior`
/// circles: sampled around the interior circles, refined with Nelder–Mead, with
/// degenerate-case fallbacks. The flag marks a region with no representation at all.
fn compute_text_centre(interior: &[Circle], exterior: &[Circle]) -> (Point, bool) {
    // initial estimate: sample the center and four radius offsets of every interior
    // circle and keep the point with the biggest margin
    let mut points = vec![];
    for c in interior {
        let Point(x, y) = c.center;
        points.push(c.center);
        points.push(Point(x + c.radius / 2.0, y));
        points.push(Point(x - c.radius / 2.0, y));
        points.push(Point(x, y + c.radius / 2.0));
        points.push(Point(x, y - c.radius / 2.0));
    }
    let initial = points
        .iter()
        .max_by_key(|p| {
            NotNan::new(circle_margin(p, interior, exterior)).expect("margin is NaN")
        })
        .copied()
        .expect("no interior circles");

    // maximize the margin numerically
    let opts = NelderMeadOptions {
        max_iterations: Some(500),
        min_error_delta: 1e-10,
        min_tolerance: 1e-10,
        ..NelderMeadOptions::default()
    };
    let solution = nelder_mead(
        |p| -circle_margin(&Point(p[0], p[1]), interior, exterior),
        &[initial.0, initial.1],
        &opts,
    );
    let ret = Point(solution.x[0], solution.x[1]);

    let valid = interior.iter().all(|c| c.center.distance(&ret) <= c.radius)
        && exterior.iter().all(|c| c.center.distance(&ret) >= c.radius);
    if valid {
        return (ret, false);
    }

    // the refined point escaped the region (fully overlapped circles etc), fall back
    if let [only] = interior {
        return (only.center, false);
    }

    let stats = intersection_area(interior);
    match stats.arcs.as_slice() {
        // no arcs at all: the interior circles are disjoint, there is nothing to label
        [] => (Point(0.0, -1000.0), true),
        // a single full-circle arc: the smallest circle is engulfed, label its center
        [arc] => (arc.circle.center, false),
        arcs => {
            if !exterior.is_empty() {
                // try again unconstrained by the other circles
                compute_text_centre(interior, &[])
            } else {
                // average of the intersection polygon's points; should basically never happen
                let arc_points = arcs.iter().map(|a| a.p1).collect_vec();
                (Point::centroid_of(&arc_points), false)
            }
        }
    }
}

/// Computes a label anchor for every caller-supplied region, in the caller's
/// original region order. Regions without any geometric representation come back
/// flagged as disjoint with an off-diagram sentinel position.
pub fn label_anchors(instance: &VennInstance, circles: &[Circle]) -> Vec<LabelAnchor> {
    let engulfed_by = engulfing_circles(circles);

    instance
        .regions
        .iter()
        .filter(|r| r.origin.is_some())
        .map(|region| {
            // circles engulfing any of the region's sets can never be escaped, so they
            // play no part in the anchor search
            let exclude: HashSet<usize> = region
                .sets
                .iter()
                .flat_map(|&s| engulfed_by[s].iter().copied())
                .collect();

            let interior = region.sets.iter().map(|&s| circles[s]).collect_vec();
            let exterior = (0..circles.len())
                .filter(|i| !region.sets.contains(i) && !exclude.contains(i))
                .map(|i| circles[i])
                .collect_vec();

            let (pos, disjoint) = compute_text_centre(&interior, &exterior);
            if disjoint && region.size > 0.0 {
                let ids = region
                    .sets
                    .iter()
                    .map(|&i| instance.sets[i].id.as_str())
                    .collect_vec();
                warn!("[LABELS] region {ids:?} is not represented in the layout");
            }

            LabelAnchor { pos, disjoint }
        })
        .collect_vec()
}
