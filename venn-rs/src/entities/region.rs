use serde::{Deserialize, Serialize};

/// A requested region, as supplied by the caller: one set id describes the set's own
/// total area, two or more ids describe the size of the intersection of those sets.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegionSpec {
    /// Identifiers of the sets spanning this region
    pub sets: Vec<String>,
    /// Requested area of the region
    pub size: f64,
    /// Relative weight of this region in the loss function
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl RegionSpec {
    pub fn new(sets: Vec<String>, size: f64) -> Self {
        Self {
            sets,
            size,
            weight: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}
