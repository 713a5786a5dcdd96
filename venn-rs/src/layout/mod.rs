use std::f64::consts::PI;

use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::SMALL;
use crate::entities::{VennInstance, VennSolution};
use crate::geometry::intersection::{AreaStats, circle_overlap, intersection_area};
use crate::geometry::primitives::Circle;
use crate::opt::{BisectOptions, bisect};
use crate::util::LayoutConfig;

mod cluster;
mod greedy;
mod labels;
mod loss;
mod mds;
mod refine;
mod scale;

#[doc(inline)]
pub use cluster::{OrientationOrder, disjoint_clusters, normalize_solution};
#[doc(inline)]
pub use greedy::greedy_layout;
#[doc(inline)]
pub use labels::label_anchors;
#[doc(inline)]
pub use loss::loss;
#[doc(inline)]
pub use mds::constrained_mds_layout;
#[doc(inline)]
pub use refine::refine_layout;
#[doc(inline)]
pub use scale::scale_solution;

/// Constrained MDS is only attempted from this set count onwards: greedy wins on
/// smaller inputs and keeps the clean axis-aligned aesthetic
pub const MDS_MIN_SETS: usize = 8;

/// Constrained MDS must beat greedy's loss by more than this margin to be adopted
pub const MDS_ADOPT_MARGIN: f64 = 1e-8;

/// Center distance at which two circles of radii `r1` and `r2` overlap by exactly
/// `overlap`, found by bisecting the lens area over `[0, r1 + r2]`.
pub fn distance_from_intersect_area(r1: f64, r2: f64, overlap: f64) -> Result<f64> {
    // an overlap engulfing the smaller circle entirely needs no search
    if f64::min(r1, r2).powi(2) * PI <= overlap + SMALL {
        return Ok((r1 - r2).abs());
    }

    bisect(
        |distance| circle_overlap(r1, r2, distance) - overlap,
        0.0,
        r1 + r2,
        &BisectOptions::default(),
    )
}

/// The better of the two initial layout strategies for this instance.
pub fn initial_layout(
    instance: &VennInstance,
    config: &LayoutConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Circle>> {
    let initial = greedy_layout(instance)?;

    if instance.n_sets() >= MDS_MIN_SETS {
        let constrained = constrained_mds_layout(instance, config.mds_restarts, rng)?;
        let constrained_loss = loss(&constrained, &instance.regions);
        let greedy_loss = loss(&initial, &instance.regions);

        if constrained_loss + MDS_ADOPT_MARGIN < greedy_loss {
            debug!(
                "[LAYOUT] constrained MDS start adopted ({constrained_loss:.6} vs greedy {greedy_loss:.6})"
            );
            return Ok(constrained);
        }
    }
    Ok(initial)
}

/// Runs the full layout pipeline on a validated instance: initial layout (greedy or
/// constrained MDS), global Nelder–Mead refinement of the circle centers, and
/// canonical normalization of the result.
///
/// Use [scale_solution] and [label_anchors] to prepare the returned solution for
/// presentation.
pub fn solve(instance: &VennInstance, config: &LayoutConfig) -> Result<VennSolution> {
    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let initial = initial_layout(instance, config, &mut rng)?;
    debug!(
        "[LAYOUT] initial layout loss: {:.6}",
        loss(&initial, &instance.regions)
    );

    let (circles, residual_loss) = refine_layout(instance, &initial, config.refine_max_iterations);
    info!(
        "[LAYOUT] laid out {} sets, residual loss {residual_loss:.6}",
        instance.n_sets()
    );

    let circles = normalize_solution(&circles, config.orientation, None);

    Ok(VennSolution {
        circles,
        residual_loss,
    })
}

/// Arc decomposition of the region shared by the given sets, for renderers drawing
/// exact circular-arc boundaries instead of approximations.
pub fn region_stats(circles: &[Circle], sets: &[usize]) -> AreaStats {
    let members = sets.iter().map(|&i| circles[i]).collect_vec();
    intersection_area(&members)
}
