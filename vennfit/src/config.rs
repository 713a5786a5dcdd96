use serde::{Deserialize, Serialize};

use venn_rs::util::LayoutConfig;

/// Configuration for a vennfit run
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct VennfitConfig {
    /// Configuration of the layout pipeline
    pub layout: LayoutConfig,
    /// Width of the target canvas
    pub width: f64,
    /// Height of the target canvas
    pub height: f64,
    /// Padding kept free on every side of the target canvas
    pub padding: f64,
}

impl Default for VennfitConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            width: 600.0,
            height: 350.0,
            padding: 15.0,
        }
    }
}
