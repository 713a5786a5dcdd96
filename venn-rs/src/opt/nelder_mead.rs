use serde::{Deserialize, Serialize};

use crate::opt::blas::weighted_sum;

/// Options for the downhill simplex minimizer.
/// The defaults are the standard Nelder–Mead coefficients.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct NelderMeadOptions {
    /// Iteration cap; 20x the problem dimension when not set
    pub max_iterations: Option<usize>,
    /// Relative perturbation seeding the simplex from a non-zero coordinate
    pub non_zero_delta: f64,
    /// Absolute perturbation seeding the simplex from a zero coordinate
    pub zero_delta: f64,
    /// Terminate once the objective spread over the simplex falls below this,
    /// together with [NelderMeadOptions::min_tolerance]
    pub min_error_delta: f64,
    /// Terminate once the coordinate spread between the two best points falls below this,
    /// together with [NelderMeadOptions::min_error_delta]
    pub min_tolerance: f64,
    /// Reflection coefficient
    pub rho: f64,
    /// Expansion coefficient
    pub chi: f64,
    /// Contraction coefficient
    pub psi: f64,
    /// Reduction coefficient
    pub sigma: f64,
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            max_iterations: None,
            non_zero_delta: 1.05,
            zero_delta: 1e-3,
            min_error_delta: 1e-6,
            min_tolerance: 1e-5,
            rho: 1.0,
            chi: 2.0,
            psi: -0.5,
            sigma: 0.5,
        }
    }
}

/// Best point found by a minimizer together with its objective value
#[derive(Debug, Clone)]
pub struct Minimum {
    pub x: Vec<f64>,
    pub fx: f64,
}

#[derive(Debug, Clone)]
struct SimplexPoint {
    x: Vec<f64>,
    fx: f64,
}

impl SimplexPoint {
    fn placeholder(n: usize) -> Self {
        Self {
            x: vec![0.0; n],
            fx: 0.0,
        }
    }
}

/// Minimizes `f` over an `N`-dimensional vector using the downhill simplex method,
/// starting from `x0`.
pub fn nelder_mead(
    mut f: impl FnMut(&[f64]) -> f64,
    x0: &[f64],
    opts: &NelderMeadOptions,
) -> Minimum {
    let n = x0.len();
    let max_iterations = opts.max_iterations.unwrap_or(20 * n);
    let (rho, chi, psi, sigma) = (opts.rho, opts.chi, opts.psi, opts.sigma);

    // initialize the simplex: x0 plus one point per dimension, perturbed along that axis
    let mut simplex = Vec::with_capacity(n + 1);
    simplex.push(SimplexPoint {
        x: x0.to_vec(),
        fx: f(x0),
    });
    for i in 0..n {
        let mut x = x0.to_vec();
        x[i] = match x[i] != 0.0 {
            true => x[i] * opts.non_zero_delta,
            false => opts.zero_delta,
        };
        let fx = f(&x);
        simplex.push(SimplexPoint { x, fx });
    }

    let mut centroid = vec![0.0; n];
    let mut reflected = SimplexPoint::placeholder(n);
    let mut contracted = SimplexPoint::placeholder(n);
    let mut expanded = SimplexPoint::placeholder(n);

    for _ in 0..max_iterations {
        simplex.sort_by(|a, b| a.fx.partial_cmp(&b.fx).unwrap());

        let max_diff = (0..n)
            .map(|i| (simplex[0].x[i] - simplex[1].x[i]).abs())
            .fold(0.0, f64::max);

        if (simplex[0].fx - simplex[n].fx).abs() < opts.min_error_delta
            && max_diff < opts.min_tolerance
        {
            break;
        }

        // centroid of all but the worst point
        for i in 0..n {
            centroid[i] = simplex[..n].iter().map(|p| p.x[i]).sum::<f64>() / n as f64;
        }

        // reflect the worst point past the centroid
        weighted_sum(&mut reflected.x, 1.0 + rho, &centroid, -rho, &simplex[n].x);
        reflected.fx = f(&reflected.x);

        if reflected.fx < simplex[0].fx {
            // best point seen so far: try to expand even further
            weighted_sum(&mut expanded.x, 1.0 + chi, &centroid, -chi, &simplex[n].x);
            expanded.fx = f(&expanded.x);
            if expanded.fx < reflected.fx {
                std::mem::swap(&mut simplex[n], &mut expanded);
            } else {
                std::mem::swap(&mut simplex[n], &mut reflected);
            }
        } else if reflected.fx >= simplex[n - 1].fx {
            // worse than the second worst point: contract
            let mut should_reduce = false;

            if reflected.fx > simplex[n].fx {
                // inside contraction
                weighted_sum(&mut contracted.x, 1.0 + psi, &centroid, -psi, &simplex[n].x);
                contracted.fx = f(&contracted.x);
                if contracted.fx < simplex[n].fx {
                    std::mem::swap(&mut simplex[n], &mut contracted);
                } else {
                    should_reduce = true;
                }
            } else {
                // outside contraction
                weighted_sum(
                    &mut contracted.x,
                    1.0 - psi * rho,
                    &centroid,
                    psi * rho,
                    &simplex[n].x,
                );
                contracted.fx = f(&contracted.x);
                if contracted.fx < reflected.fx {
                    std::mem::swap(&mut simplex[n], &mut contracted);
                } else {
                    should_reduce = true;
                }
            }

            if should_reduce {
                if sigma >= 1.0 {
                    break;
                }
                // shrink the whole simplex towards the best point
                let (best, rest) = simplex.split_first_mut().unwrap();
                for point in rest {
                    for (x, b) in point.x.iter_mut().zip(&best.x) {
                        *x = (1.0 - sigma) * b + sigma * *x;
                    }
                    point.fx = f(&point.x);
                }
            }
        } else {
            std::mem::swap(&mut simplex[n], &mut reflected);
        }
    }

    simplex.sort_by(|a, b| a.fx.partial_cmp(&b.fx).unwrap());
    let best = simplex.swap_remove(0);
    Minimum {
        x: best.x,
        fx: best.fx,
    }
}
