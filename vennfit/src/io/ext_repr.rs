use serde::{Deserialize, Serialize};

use venn_rs::entities::RegionSpec;

/// External representation of a layout problem
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// The requested regions: one entry per set and per explicit overlap
    pub regions: Vec<RegionSpec>,
}

/// External representation of a solved layout
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// One circle per set, scaled into the target canvas
    pub circles: Vec<ExtCircle>,
    /// One label anchor per input region, in input order
    pub anchors: Vec<ExtAnchor>,
    /// Value of the loss function at the returned layout
    pub residual_loss: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCircle {
    /// Identifier of the set this circle represents
    pub set: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAnchor {
    pub x: f64,
    pub y: f64,
    /// The region has no geometric representation; the position is an off-diagram
    /// sentinel and the label should not be drawn
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disjoint: bool,
}
