use serde::{Deserialize, Serialize};

use crate::opt::blas::{dot, norm2, scale, weighted_sum};

/// Sufficient-decrease constant of the Wolfe conditions
const C1: f64 = 1e-6;
/// Curvature constant of the Wolfe conditions
const C2: f64 = 0.1;
/// Bisection steps of the zoom stage of the line search
const MAX_ZOOM_ITERATIONS: usize = 16;
/// Step-doubling bracketing attempts of the line search
const MAX_BRACKET_ITERATIONS: usize = 10;

/// Options for the conjugate gradient minimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ConjugateGradientOptions {
    /// Iteration cap; 20x the problem dimension when not set
    pub max_iterations: Option<usize>,
}

/// Iterate of a gradient-based minimization: position, objective value and gradient
#[derive(Debug, Clone)]
pub struct GradientState {
    pub x: Vec<f64>,
    pub fx: f64,
    pub fxprime: Vec<f64>,
}

impl GradientState {
    fn new(x: Vec<f64>) -> Self {
        let fxprime = vec![0.0; x.len()];
        Self {
            x,
            fx: 0.0,
            fxprime,
        }
    }
}

/// Searches along direction `pk` for a step size satisfying the (strong) Wolfe
/// conditions, bracketing first and zooming in afterwards.
/// See 'Numerical Optimization' by Nocedal and Wright, p59-60.
///
/// Writes the accepted point into `next` and returns the step size taken,
/// or 0 if no acceptable step was found.
pub fn wolfe_line_search(
    f: &mut impl FnMut(&[f64], &mut [f64]) -> f64,
    pk: &[f64],
    current: &GradientState,
    next: &mut GradientState,
    a: f64,
) -> f64 {
    let phi0 = current.fx;
    let phi_prime0 = dot(&current.fxprime, pk);
    let mut phi_old = phi0;

    let mut a = if a != 0.0 { a } else { 1.0 };
    let mut a0 = 0.0;

    for iteration in 0..MAX_BRACKET_ITERATIONS {
        weighted_sum(&mut next.x, 1.0, &current.x, a, pk);
        next.fx = f(&next.x, &mut next.fxprime);
        let phi = next.fx;
        let phi_prime = dot(&next.fxprime, pk);

        if phi > phi0 + C1 * a * phi_prime0 || (iteration > 0 && phi >= phi_old) {
            return zoom(f, pk, current, next, a0, a, phi_old, phi0, phi_prime0);
        }
        if phi_prime.abs() <= -C2 * phi_prime0 {
            return a;
        }
        if phi_prime >= 0.0 {
            return zoom(f, pk, current, next, a, a0, phi, phi0, phi_prime0);
        }

        phi_old = phi;
        a0 = a;
        a *= 2.0;
    }

    a
}

#[allow(clippy::too_many_arguments)]
fn zoom(
    f: &mut impl FnMut(&[f64], &mut [f64]) -> f64,
    pk: &[f64],
    current: &GradientState,
    next: &mut GradientState,
    mut a_lo: f64,
    mut a_high: f64,
    mut phi_lo: f64,
    phi0: f64,
    phi_prime0: f64,
) -> f64 {
    for _ in 0..MAX_ZOOM_ITERATIONS {
        let a = (a_lo + a_high) / 2.0;
        weighted_sum(&mut next.x, 1.0, &current.x, a, pk);
        next.fx = f(&next.x, &mut next.fxprime);
        let phi = next.fx;
        let phi_prime = dot(&next.fxprime, pk);

        if phi > phi0 + C1 * a * phi_prime0 || phi >= phi_lo {
            a_high = a;
        } else {
            if phi_prime.abs() <= -C2 * phi_prime0 {
                return a;
            }
            if phi_prime * (a_high - a_lo) >= 0.0 {
                a_high = a_lo;
            }
            a_lo = a;
            phi_lo = phi;
        }
    }

    0.0
}

/// Minimizes `f` using nonlinear conjugate gradient (Polak–Ribière) with a Wolfe
/// line search, starting from `initial`. `f` must write the gradient into its second
/// argument and return the objective value.
///
/// Terminates once the gradient norm drops below 1e-5 or the iteration cap is hit;
/// the best iterate found is returned either way.
pub fn conjugate_gradient(
    mut f: impl FnMut(&[f64], &mut [f64]) -> f64,
    initial: &[f64],
    opts: &ConjugateGradientOptions,
) -> GradientState {
    let n = initial.len();
    let max_iterations = opts.max_iterations.unwrap_or(20 * n);

    let mut current = GradientState::new(initial.to_vec());
    let mut next = GradientState::new(initial.to_vec());
    let mut yk = vec![0.0; n];
    let mut pk = vec![0.0; n];
    let mut a = 1.0;

    current.fx = f(&current.x, &mut current.fxprime);
    scale(&mut pk, &current.fxprime, -1.0);

    for _ in 0..max_iterations {
        a = wolfe_line_search(&mut f, &pk, &current, &mut next, a);

        if a == 0.0 {
            // no step satisfies the wolfe conditions, reset to steepest descent
            scale(&mut pk, &current.fxprime, -1.0);
        } else {
            // update the direction using the Polak–Ribière method
            weighted_sum(&mut yk, 1.0, &next.fxprime, -1.0, &current.fxprime);

            let delta_k = dot(&current.fxprime, &current.fxprime);
            let beta_k = f64::max(0.0, dot(&yk, &next.fxprime) / delta_k);

            for (p, g) in pk.iter_mut().zip(&next.fxprime) {
                *p = beta_k * *p - g;
            }

            std::mem::swap(&mut current, &mut next);
        }

        if norm2(&current.fxprime) <= 1e-5 {
            break;
        }
    }

    current
}
