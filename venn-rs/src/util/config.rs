use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Configuration of the layout pipeline.
///
/// The iteration caps are the only bound on runtime: the engine carries no wall-clock
/// budget or cancellation hook, callers needing one must wrap the whole pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct LayoutConfig {
    /// Iteration cap for the global Nelder–Mead refinement of the circle centers
    pub refine_max_iterations: usize,
    /// Number of random restarts of the constrained MDS initial layout
    pub mds_restarts: usize,
    /// Seed for the PRNG. If not defined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Angle (radians) at which the second largest circle of each cluster is placed
    /// during normalization
    pub orientation: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            refine_max_iterations: 500,
            mds_restarts: 10,
            prng_seed: Some(0),
            orientation: PI / 2.0,
        }
    }
}
