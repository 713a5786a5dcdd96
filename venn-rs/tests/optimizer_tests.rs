use float_cmp::approx_eq;

use venn_rs::opt::blas::{dot, norm2};
use venn_rs::opt::{
    BisectOptions, ConjugateGradientOptions, NelderMeadOptions, bisect, conjugate_gradient,
    nelder_mead,
};

#[test]
fn bisect_finds_root_of_monotone_function() {
    let root = bisect(|x| x - 0.7, 0.0, 1.0, &BisectOptions::default()).unwrap();
    assert!(approx_eq!(f64, root, 0.7, epsilon = 1e-9));
}

#[test]
fn bisect_finds_root_of_cosine() {
    let root = bisect(f64::cos, 0.0, 3.0, &BisectOptions::default()).unwrap();
    assert!(approx_eq!(f64, root, std::f64::consts::FRAC_PI_2, epsilon = 1e-8));
}

#[test]
fn bisect_rejects_non_bracketing_interval() {
    // both endpoints on the same side of the root
    assert!(bisect(|x| x * x + 1.0, -1.0, 1.0, &BisectOptions::default()).is_err());
}

#[test]
fn bisect_returns_exact_endpoint_root() {
    let root = bisect(|x| x - 1.0, 0.0, 1.0, &BisectOptions::default()).unwrap();
    assert_eq!(root, 1.0);
}

#[test]
fn nelder_mead_minimizes_shifted_sphere() {
    let opts = NelderMeadOptions {
        max_iterations: Some(200),
        ..NelderMeadOptions::default()
    };
    let minimum = nelder_mead(
        |x| (x[0] - 1.5).powi(2) + (x[1] + 0.5).powi(2),
        &[0.0, 0.0],
        &opts,
    );

    assert!((minimum.x[0] - 1.5).abs() < 1e-3);
    assert!((minimum.x[1] + 0.5).abs() < 1e-3);
    assert!(minimum.fx < 1e-6);
}

#[test]
fn nelder_mead_never_returns_worse_than_start() {
    let f = |x: &[f64]| x[0].powi(2) + 10.0 * (x[1] - 0.3).powi(2);
    let start = [2.0, 2.0];
    let opts = NelderMeadOptions {
        max_iterations: Some(3),
        ..NelderMeadOptions::default()
    };

    let minimum = nelder_mead(f, &start, &opts);
    assert!(minimum.fx <= f(&start));
}

#[test]
fn conjugate_gradient_minimizes_quadratic_bowl() {
    let target = [3.0, -2.0, 0.5];
    let result = conjugate_gradient(
        |x, grad| {
            let mut fx = 0.0;
            for i in 0..x.len() {
                let delta = x[i] - target[i];
                fx += delta * delta;
                grad[i] = 2.0 * delta;
            }
            fx
        },
        &[0.0, 0.0, 0.0],
        &ConjugateGradientOptions::default(),
    );

    for (x, t) in result.x.iter().zip(target.iter()) {
        assert!((x - t).abs() < 1e-4, "expected {t}, got {x}");
    }
    assert!(norm2(&result.fxprime) <= 1e-5);
}

#[test]
fn conjugate_gradient_improves_on_rosenbrock() {
    let rosenbrock = |x: &[f64], grad: &mut [f64]| {
        let (a, b) = (x[0], x[1]);
        grad[0] = -400.0 * a * (b - a * a) - 2.0 * (1.0 - a);
        grad[1] = 200.0 * (b - a * a);
        (1.0 - a).powi(2) + 100.0 * (b - a * a).powi(2)
    };

    let start = [-1.2, 1.0];
    let mut initial_grad = [0.0, 0.0];
    let initial_fx = rosenbrock(&start, &mut initial_grad);

    let opts = ConjugateGradientOptions {
        max_iterations: Some(5000),
    };
    let result = conjugate_gradient(rosenbrock, &start, &opts);
    assert!(result.fx < initial_fx / 100.0);
}

#[test]
fn blas_helpers() {
    assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    assert_eq!(norm2(&[3.0, 4.0]), 5.0);
}
