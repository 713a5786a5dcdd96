use ordered_float::NotNan;

/// Affine transformation in matrix form: rotations, translations and reflections
#[derive(Clone, Debug)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub const fn empty() -> Self {
        Self {
            matrix: EMPTY_MATRIX,
        }
    }

    pub fn from_translation((tx, ty): (f64, f64)) -> Self {
        Self {
            matrix: transl_m((tx, ty)),
        }
    }

    pub fn from_rotation(angle: f64) -> Self {
        Self {
            matrix: rot_m(angle),
        }
    }

    /// Reflection across the line through the origin with the given slope.
    pub fn from_reflection(slope: f64) -> Self {
        Self {
            matrix: refl_m(slope),
        }
    }

    pub fn rotate(mut self, angle: f64) -> Self {
        self.matrix = dot_prod(&rot_m(angle), &self.matrix);
        self
    }

    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        self.matrix = dot_prod(&transl_m((tx, ty)), &self.matrix);
        self
    }

    pub fn matrix(&self) -> &[[NotNan<f64>; 3]; 3] {
        &self.matrix
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

const EMPTY_MATRIX: [[NotNan<f64>; 3]; 3] = [[_1, _0, _0], [_0, _1, _0], [_0, _0, _1]];

fn rot_m(angle: f64) -> [[NotNan<f64>; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    let cos = NotNan::new(cos).expect("cos is NaN");
    let sin = NotNan::new(sin).expect("sin is NaN");

    [[cos, -sin, _0], [sin, cos, _0], [_0, _0, _1]]
}

fn transl_m((tx, ty): (f64, f64)) -> [[NotNan<f64>; 3]; 3] {
    let h = NotNan::new(tx).expect("tx is NaN");
    let k = NotNan::new(ty).expect("ty is NaN");

    [[_1, _0, h], [_0, _1, k], [_0, _0, _1]]
}

fn refl_m(slope: f64) -> [[NotNan<f64>; 3]; 3] {
    let f = 1.0 / (1.0 + slope * slope);
    let a = NotNan::new((1.0 - slope * slope) * f).expect("slope is NaN");
    let b = NotNan::new(2.0 * slope * f).expect("slope is NaN");

    [[a, b, _0], [b, -a, _0], [_0, _0, _1]]
}

fn dot_prod(lhs: &[[NotNan<f64>; 3]; 3], rhs: &[[NotNan<f64>; 3]; 3]) -> [[NotNan<f64>; 3]; 3] {
    let mut result = [[_0; 3]; 3];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            for (k, l_val) in lhs[i].iter().enumerate() {
                *val += *l_val * rhs[k][j];
            }
        }
    }
    result
}
