use anyhow::{Result, bail};

/// Options for [bisect]
#[derive(Debug, Clone, Copy)]
pub struct BisectOptions {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for BisectOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
        }
    }
}

/// Finds a zero of `f` between `a` and `b` by bracketing bisection.
/// `f(a)` and `f(b)` must have opposite signs, otherwise an error is returned.
pub fn bisect(mut f: impl FnMut(f64) -> f64, mut a: f64, b: f64, opts: &BisectOptions) -> Result<f64> {
    let f_a = f(a);
    let f_b = f(b);
    let mut delta = b - a;

    if f_a * f_b > 0.0 {
        bail!("initial bisect points must have opposite signs: f({a}) and f({b})");
    }
    if f_a == 0.0 {
        return Ok(a);
    }
    if f_b == 0.0 {
        return Ok(b);
    }

    for _ in 0..opts.max_iterations {
        delta /= 2.0;
        let mid = a + delta;
        let f_mid = f(mid);

        if f_mid * f_a >= 0.0 {
            a = mid;
        }

        if delta.abs() < opts.tolerance || f_mid == 0.0 {
            return Ok(mid);
        }
    }
    Ok(a + delta)
}
