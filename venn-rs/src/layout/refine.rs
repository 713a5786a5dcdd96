use itertools::Itertools;

use crate::entities::VennInstance;
use crate::geometry::primitives::{Circle, Point};
use crate::layout::loss::loss;
use crate::opt::{NelderMeadOptions, nelder_mead};

/// Refines a layout by minimizing the loss function over the flattened circle
/// centers with Nelder–Mead; the radii never change. Returns the refined circles
/// and the residual loss at the returned layout.
pub fn refine_layout(
    instance: &VennInstance,
    circles: &[Circle],
    max_iterations: usize,
) -> (Vec<Circle>, f64) {
    let initial = circles
        .iter()
        .flat_map(|c| [c.center.0, c.center.1])
        .collect_vec();

    let opts = NelderMeadOptions {
        max_iterations: Some(max_iterations),
        ..NelderMeadOptions::default()
    };

    let mut buffer = circles.to_vec();
    let solution = nelder_mead(
        |values| {
            for (i, c) in buffer.iter_mut().enumerate() {
                c.center = Point(values[2 * i], values[2 * i + 1]);
            }
            loss(&buffer, &instance.regions)
        },
        &initial,
        &opts,
    );

    let refined = circles
        .iter()
        .enumerate()
        .map(|(i, c)| Circle::new(Point(solution.x[2 * i], solution.x[2 * i + 1]), c.radius))
        .collect_vec();

    (refined, solution.fx)
}
