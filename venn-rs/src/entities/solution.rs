use crate::geometry::primitives::{Circle, Point};

/// Solved layout: one circle per set, indexed like
/// [VennInstance::sets](crate::entities::VennInstance::sets). Immutable once returned.
#[derive(Clone, Debug)]
pub struct VennSolution {
    pub circles: Vec<Circle>,
    /// Value of the loss function at the returned layout. Optimizer non-convergence is
    /// not an error: callers relying on a tight fit should inspect this residual.
    pub residual_loss: f64,
}

/// Anchor point for one region's label: the point of maximum clearance from all
/// boundaries defining the region.
#[derive(Clone, Debug)]
pub struct LabelAnchor {
    pub pos: Point,
    /// The region has no geometric representation in the layout; `pos` is an
    /// off-diagram sentinel and should not be rendered as a regular label.
    pub disjoint: bool,
}
