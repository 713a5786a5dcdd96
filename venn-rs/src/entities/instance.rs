use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use anyhow::{Result, bail, ensure};
use itertools::Itertools;

use crate::entities::RegionSpec;

/// A single set of the diagram, with its dense index implied by position
#[derive(Clone, Debug)]
pub struct SetEntry {
    /// Identifier supplied by the caller
    pub id: String,
    /// Requested total area of the set
    pub size: f64,
    /// Radius realizing the requested area. Fixed for the whole layout:
    /// only the circle centers are free variables.
    pub radius: f64,
}

/// A region over dense set indices
#[derive(Clone, Debug)]
pub struct Region {
    /// Indices into [VennInstance::sets]
    pub sets: Vec<usize>,
    /// Requested area of the region
    pub size: f64,
    /// Relative weight of this region in the loss function
    pub weight: f64,
    /// Position of the originating [RegionSpec] in the caller's input.
    /// `None` for synthetic pairwise completions.
    pub origin: Option<usize>,
}

/// A validated layout problem: set ids interned to dense indices, radii derived from
/// the requested set sizes, and every missing pairwise region completed as disjoint
/// (size 0). Absent pairwise information means "disjoint", never "unconstrained".
#[derive(Clone, Debug)]
pub struct VennInstance {
    pub sets: Vec<SetEntry>,
    pub regions: Vec<Region>,
    /// Number of regions supplied by the caller; the remainder of [VennInstance::regions]
    /// are synthetic completions
    pub n_input_regions: usize,
}

impl VennInstance {
    /// Validates and ingests the caller's region specs.
    /// Fails on non-finite or negative sizes, on duplicate ids within a region,
    /// on regions referencing sets without a declared size, and on duplicate regions.
    pub fn new(specs: &[RegionSpec]) -> Result<VennInstance> {
        let mut sets: Vec<SetEntry> = vec![];
        let mut set_index: HashMap<&str, usize> = HashMap::new();

        for spec in specs {
            ensure!(
                spec.size.is_finite() && spec.size >= 0.0,
                "region {:?} has invalid size: {}",
                spec.sets,
                spec.size
            );
            ensure!(
                spec.weight.is_finite() && spec.weight >= 0.0,
                "region {:?} has invalid weight: {}",
                spec.sets,
                spec.weight
            );
            ensure!(!spec.sets.is_empty(), "region without set ids");
            ensure!(
                spec.sets.iter().all_unique(),
                "region {:?} contains duplicate set ids",
                spec.sets
            );

            if let [id] = spec.sets.as_slice() {
                if set_index.contains_key(id.as_str()) {
                    bail!("set {id:?} is declared more than once");
                }
                set_index.insert(id.as_str(), sets.len());
                sets.push(SetEntry {
                    id: id.clone(),
                    size: spec.size,
                    radius: (spec.size / PI).sqrt(),
                });
            }
        }
        ensure!(!sets.is_empty(), "no single-set regions provided");

        let mut regions = Vec::with_capacity(specs.len());
        let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();
        let mut seen_regions: HashSet<Vec<usize>> = HashSet::new();

        for (origin, spec) in specs.iter().enumerate() {
            let indices = spec
                .sets
                .iter()
                .map(|id| match set_index.get(id.as_str()) {
                    Some(&i) => Ok(i),
                    None => bail!("region {:?} references set {id:?}, which has no size", spec.sets),
                })
                .collect::<Result<Vec<usize>>>()?;

            if indices.len() > 1 {
                let key = indices.iter().copied().sorted().collect_vec();
                ensure!(
                    seen_regions.insert(key),
                    "region {:?} is declared more than once",
                    spec.sets
                );
            }
            if let &[a, b] = indices.as_slice() {
                seen_pairs.insert((usize::min(a, b), usize::max(a, b)));
            }

            regions.push(Region {
                sets: indices,
                size: spec.size,
                weight: spec.weight,
                origin: Some(origin),
            });
        }

        // complete every pairwise region that was only implied: a missing pair is laid
        // out as disjoint rather than left unconstrained
        for a in 0..sets.len() {
            for b in (a + 1)..sets.len() {
                if !seen_pairs.contains(&(a, b)) {
                    regions.push(Region {
                        sets: vec![a, b],
                        size: 0.0,
                        weight: 1.0,
                        origin: None,
                    });
                }
            }
        }

        Ok(VennInstance {
            sets,
            regions,
            n_input_regions: specs.len(),
        })
    }

    pub fn n_sets(&self) -> usize {
        self.sets.len()
    }

    /// Regions spanning exactly two sets, after completion
    pub fn pairwise_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.sets.len() == 2)
    }
}
