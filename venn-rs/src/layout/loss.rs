use crate::entities::Region;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::intersection::{circle_overlap, intersection_area};
use crate::geometry::primitives::Circle;
use itertools::Itertools;

/// Sum of weighted squared deviations between the achieved and the requested overlap
/// area of every multi-set region. Single-set regions contribute nothing: their area
/// is already fixed through the circle radii.
pub fn loss(circles: &[Circle], regions: &[Region]) -> f64 {
    let mut output = 0.0;

    for region in regions {
        let overlap = match region.sets.as_slice() {
            [_] => continue,
            &[a, b] => {
                let (left, right) = (&circles[a], &circles[b]);
                circle_overlap(
                    left.radius,
                    right.radius,
                    left.center.distance(&right.center),
                )
            }
            sets => {
                let members = sets.iter().map(|&i| circles[i]).collect_vec();
                intersection_area(&members).area
            }
        };

        output += region.weight * (overlap - region.size).powi(2);
    }

    output
}
