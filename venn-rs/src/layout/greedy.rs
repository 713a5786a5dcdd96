use std::cmp::Reverse;

use anyhow::{Result, bail};
use itertools::Itertools;
use log::debug;
use ordered_float::NotNan;

use crate::SMALL;
use crate::entities::VennInstance;
use crate::geometry::intersection::circle_circle_intersection;
use crate::geometry::primitives::{Circle, Point};
use crate::layout::distance_from_intersect_area;
use crate::layout::loss::loss;

struct Overlap {
    set: usize,
    size: f64,
    weight: f64,
}

/// Lays out the diagram greedily, going from the most overlapped set to the least
/// overlapped one, positioning each new set such that the overlap areas with the
/// already placed sets come out basically right.
pub fn greedy_layout(instance: &VennInstance) -> Result<Vec<Circle>> {
    let n = instance.n_sets();

    // park every circle far away until it gets positioned
    let mut circles = instance
        .sets
        .iter()
        .map(|s| Circle::new(Point(1e10, 1e10), s.radius))
        .collect_vec();

    // map each set to all the other sets that overlap it
    let mut set_overlaps: Vec<Vec<Overlap>> = (0..n).map(|_| vec![]).collect();
    for region in instance.pairwise_regions() {
        let &[left, right] = region.sets.as_slice() else {
            unreachable!()
        };

        // completely engulfed pairs shouldn't drive the placement order
        let min_size = f64::min(instance.sets[left].size, instance.sets[right].size);
        let weight = match region.size + SMALL >= min_size {
            true => 0.0,
            false => region.weight,
        };

        set_overlaps[left].push(Overlap {
            set: right,
            size: region.size,
            weight,
        });
        set_overlaps[right].push(Overlap {
            set: left,
            size: region.size,
            weight,
        });
    }

    // process the sets by descending total weighted overlap
    let order = (0..n)
        .sorted_by_cached_key(|&i| {
            let total: f64 = set_overlaps[i].iter().map(|o| o.size * o.weight).sum();
            Reverse(NotNan::new(total).expect("total overlap is NaN"))
        })
        .collect_vec();

    let pairwise = instance.pairwise_regions().cloned().collect_vec();
    let mut positioned = vec![false; n];

    // the most overlapped set anchors the layout at the origin
    circles[order[0]].center = Point(0.0, 0.0);
    positioned[order[0]] = true;

    for &set_index in &order[1..] {
        let mut overlap = set_overlaps[set_index]
            .iter()
            .filter(|o| positioned[o.set])
            .collect_vec();
        overlap.sort_by_key(|o| Reverse(NotNan::new(o.size).expect("overlap size is NaN")));

        if overlap.is_empty() {
            // cannot happen once the instance completed all pairwise regions
            bail!(
                "missing pairwise overlap information for set {:?}",
                instance.sets[set_index].id
            );
        }

        let radius = circles[set_index].radius;
        let mut points = vec![];
        for (j, o1) in overlap.iter().enumerate() {
            let p1 = circles[o1.set].center;
            let d1 = distance_from_intersect_area(radius, circles[o1.set].radius, o1.size)?;

            // candidate positions at 90 degree offsets, for maximum aesthetics
            points.push(Point(p1.0 + d1, p1.1));
            points.push(Point(p1.0 - d1, p1.1));
            points.push(Point(p1.0, p1.1 + d1));
            points.push(Point(p1.0, p1.1 - d1));

            // with two or more placed neighbors the position can be pinned down
            // analytically: intersect the distance-constraint circles
            for o2 in &overlap[j + 1..] {
                let p2 = circles[o2.set].center;
                let d2 = distance_from_intersect_area(radius, circles[o2.set].radius, o2.size)?;

                points.extend(circle_circle_intersection(
                    &Circle::new(p1, d1),
                    &Circle::new(p2, d2),
                ));
            }
        }

        // examine the partial loss at every candidate position and keep the best
        let mut best_loss = 1e50;
        let mut best_point = points[0];
        for &point in &points {
            circles[set_index].center = point;
            let candidate_loss = loss(&circles, &pairwise);
            if candidate_loss < best_loss {
                best_loss = candidate_loss;
                best_point = point;
            }
        }

        circles[set_index].center = best_point;
        positioned[set_index] = true;
        debug!(
            "[GREEDY] placed set {:?} at ({:.3}, {:.3}), partial loss {:.6}",
            instance.sets[set_index].id, best_point.0, best_point.1, best_loss
        );
    }

    Ok(circles)
}
