//! Area-proportional set diagram layout engine.
//!
//! Given a collection of sets and the desired sizes of their overlaps, computes a set of
//! circles in the plane whose geometric overlap areas approximate the requested sizes,
//! normalizes and scales the result for presentation, and derives a label anchor point
//! for every requested region.

/// Entities modeling the input regions, the validated instance and the solved layout
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// The layout pipeline: initial placement, refinement, normalization, scaling and labeling
pub mod layout;

/// General-purpose numerical routines (root finding, unconstrained minimization)
pub mod opt;

/// Helper functions and configuration which do not belong to any specific module
pub mod util;

/// Tolerance used for containment and degeneracy checks throughout the engine
pub const SMALL: f64 = 1e-10;
