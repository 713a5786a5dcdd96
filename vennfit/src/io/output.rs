use serde::Serialize;

use crate::config::VennfitConfig;
use crate::io::ext_repr::{ExtInstance, ExtSolution};

/// Everything a vennfit run writes back to disk
#[derive(Serialize, Clone, Debug)]
pub struct Output {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: VennfitConfig,
}
