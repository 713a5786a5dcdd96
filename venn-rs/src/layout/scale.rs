use itertools::Itertools;

use crate::geometry::primitives::{Circle, Point, Rect};

/// Scales a normalized layout such that it fits in a rectangle of `width` x `height`
/// with `padding` around the borders, centering the diagram in the available space.
pub fn scale_solution(circles: &[Circle], width: f64, height: f64, padding: f64) -> Vec<Circle> {
    let width = width - 2.0 * padding;
    let height = height - 2.0 * padding;

    let bounds = Rect::bounding_circles(circles.iter());
    let x_scaling = width / bounds.width();
    let y_scaling = height / bounds.height();
    let scaling = f64::min(x_scaling, y_scaling);

    // center the diagram in the leftover space
    let x_offset = (width - bounds.width() * scaling) / 2.0;
    let y_offset = (height - bounds.height() * scaling) / 2.0;

    circles
        .iter()
        .map(|c| {
            Circle::new(
                Point(
                    padding + x_offset + (c.center.0 - bounds.x_min) * scaling,
                    padding + y_offset + (c.center.1 - bounds.y_min) * scaling,
                ),
                c.radius * scaling,
            )
        })
        .collect_vec()
}
