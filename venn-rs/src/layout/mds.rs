use anyhow::Result;
use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use rand::Rng;

use crate::SMALL;
use crate::entities::VennInstance;
use crate::geometry::primitives::{Circle, Point};
use crate::layout::distance_from_intersect_area;
use crate::opt::blas::norm2;
use crate::opt::{ConjugateGradientOptions, GradientState, conjugate_gradient};

/// Pairwise relationship constraint of the stress function
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PairConstraint {
    /// One circle should stay within the other: being closer than the target is fine
    Subset,
    /// The circles should not overlap: being further than the target is fine
    Disjoint,
    /// The distance should match the target
    #[default]
    Free,
}

/// Builds the target distance matrix (center distances realizing the requested
/// pairwise overlaps) and the constraint matrix marking subset/disjoint pairs.
fn distance_matrices(instance: &VennInstance) -> Result<(Array2<f64>, Array2<PairConstraint>)> {
    let n = instance.n_sets();
    let mut distances = Array2::zeros((n, n));
    let mut constraints = Array2::from_elem((n, n), PairConstraint::Free);

    for region in instance.pairwise_regions() {
        let &[left, right] = region.sets.as_slice() else {
            unreachable!()
        };
        let (s1, s2) = (&instance.sets[left], &instance.sets[right]);

        let distance = distance_from_intersect_area(s1.radius, s2.radius, region.size)?;
        distances[[left, right]] = distance;
        distances[[right, left]] = distance;

        let constraint = if region.size + SMALL >= f64::min(s1.size, s2.size) {
            PairConstraint::Subset
        } else if region.size <= SMALL {
            PairConstraint::Disjoint
        } else {
            PairConstraint::Free
        };
        constraints[[left, right]] = constraint;
        constraints[[right, left]] = constraint;
    }

    Ok((distances, constraints))
}

/// Stress and gradient of the constrained MDS objective: only violated constraints
/// are penalized, satisfied subset/disjoint pairs contribute nothing.
fn constrained_mds_gradient(
    x: &[f64],
    fxprime: &mut [f64],
    distances: &Array2<f64>,
    constraints: &Array2<PairConstraint>,
) -> f64 {
    let mut stress = 0.0;
    fxprime.fill(0.0);

    let n = distances.nrows();
    for i in 0..n {
        let (xi, yi) = (x[2 * i], x[2 * i + 1]);
        for j in (i + 1)..n {
            let (xj, yj) = (x[2 * j], x[2 * j + 1]);
            let dij = distances[[i, j]];

            let squared_distance = (xj - xi).powi(2) + (yj - yi).powi(2);
            let distance = squared_distance.sqrt();
            let delta = squared_distance - dij * dij;

            let satisfied = match constraints[[i, j]] {
                PairConstraint::Subset => distance <= dij,
                PairConstraint::Disjoint => distance >= dij,
                PairConstraint::Free => false,
            };
            if satisfied {
                continue;
            }

            stress += 2.0 * delta * delta;

            fxprime[2 * i] += 4.0 * delta * (xi - xj);
            fxprime[2 * i + 1] += 4.0 * delta * (yi - yj);
            fxprime[2 * j] += 4.0 * delta * (xj - xi);
            fxprime[2 * j + 1] += 4.0 * delta * (yj - yi);
        }
    }

    stress
}

/// Initial layout via constrained multidimensional scaling: positions the circle
/// centers so the pairwise distances approach the targets, restarting the conjugate
/// gradient minimization from several random configurations and keeping the best.
pub fn constrained_mds_layout(
    instance: &VennInstance,
    restarts: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Circle>> {
    let (mut distances, constraints) = distance_matrices(instance)?;

    // keep distances bounded, the stress gradient gets messed up otherwise
    let row_norms = distances
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect_vec();
    let norm = norm2(&row_norms) / distances.nrows() as f64;
    distances.mapv_inplace(|v| v / norm);

    let n = instance.n_sets();
    let mut best: Option<GradientState> = None;
    for restart in 0..restarts {
        let initial = (0..2 * n).map(|_| rng.random::<f64>()).collect_vec();
        let current = conjugate_gradient(
            |x, fxprime| constrained_mds_gradient(x, fxprime, &distances, &constraints),
            &initial,
            &ConjugateGradientOptions::default(),
        );

        debug!("[MDS] restart {restart}: stress {:.6}", current.fx);
        if best.as_ref().is_none_or(|b| current.fx < b.fx) {
            best = Some(current);
        }
    }
    let positions = best.expect("at least one MDS restart required").x;

    Ok(instance
        .sets
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Circle::new(
                Point(positions[2 * i] * norm, positions[2 * i + 1] * norm),
                s.radius,
            )
        })
        .collect_vec())
}
