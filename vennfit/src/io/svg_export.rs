use itertools::Itertools;
use svg::Document;
use svg::node::element;

use crate::io::ext_repr::{ExtInstance, ExtSolution};

const FILL_COLORS: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

/// Renders a scaled solution as a simple SVG preview: translucent filled circles with
/// a label at every non-disjoint anchor point.
pub fn solution_to_svg(
    instance: &ExtInstance,
    solution: &ExtSolution,
    width: f64,
    height: f64,
) -> Document {
    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height));

    for (i, circle) in solution.circles.iter().enumerate() {
        let fill = FILL_COLORS[i % FILL_COLORS.len()];
        document = document.add(
            element::Circle::new()
                .set("cx", circle.x)
                .set("cy", circle.y)
                .set("r", circle.radius)
                .set("fill", fill)
                .set("fill-opacity", 0.25)
                .set("stroke", fill)
                .set("stroke-width", 1.0),
        );
    }

    for (region, anchor) in instance.regions.iter().zip(solution.anchors.iter()) {
        if anchor.disjoint {
            continue;
        }
        let label = region.sets.iter().join("&");
        document = document.add(
            element::Text::new(label)
                .set("x", anchor.x)
                .set("y", anchor.y)
                .set("text-anchor", "middle")
                .set("font-size", 12)
                .set("font-family", "sans-serif"),
        );
    }

    document
}
