/// Dense vector helpers shared by the minimizers
pub mod blas;

mod bisect;
mod conjugate_gradient;
mod nelder_mead;

#[doc(inline)]
pub use bisect::{BisectOptions, bisect};
#[doc(inline)]
pub use conjugate_gradient::{
    ConjugateGradientOptions, GradientState, conjugate_gradient, wolfe_line_search,
};
#[doc(inline)]
pub use nelder_mead::{Minimum, NelderMeadOptions, nelder_mead};
