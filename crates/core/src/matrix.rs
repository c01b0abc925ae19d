//! Dense matrix type and numeric helpers.

/// Dense, column-major `f64` matrix with runtime dimensions.
pub type Matrix = nalgebra::DMatrix<f64>;

/// The 0x0 matrix, used as "no matrix set yet".
pub fn empty() -> Matrix {
    Matrix::zeros(0, 0)
}

/// The `n`x`n` identity matrix.
pub fn identity(n: usize) -> Matrix {
    Matrix::identity(n, n)
}

/// Matrix 1-norm: maximum absolute column sum.
///
/// Returns 0.0 for an empty matrix and NaN if any element is NaN.
pub fn norm_one(m: &Matrix) -> f64 {
    // f64::max drops NaN, so fold by hand
    m.column_iter()
        .map(|col| col.iter().map(|x| x.abs()).sum::<f64>())
        .fold(0.0, |acc, sum| {
            if acc.is_nan() || sum.is_nan() {
                f64::NAN
            } else {
                acc.max(sum)
            }
        })
}

/// Reciprocal condition number in the 1-norm: `1 / (|A|_1 * |A^-1|_1)`.
///
/// Close to 1.0 for well-conditioned matrices, close to 0.0 for nearly
/// singular ones. NaN if either matrix contains NaN.
pub fn reciprocal_condition(m: &Matrix, inverse: &Matrix) -> f64 {
    let product = norm_one(m) * norm_one(inverse);
    if product.is_nan() {
        return f64::NAN;
    }
    if product == 0.0 {
        return 0.0;
    }
    1.0 / product
}

/// Element-wise comparison within an absolute tolerance.
///
/// Matrices of different shapes are never equal.
pub fn approx_eq(a: &Matrix, b: &Matrix, tolerance: f64) -> bool {
    a.shape() == b.shape()
        && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Check if `m` is the identity matrix within `tolerance`.
pub fn is_identity(m: &Matrix, tolerance: f64) -> bool {
    m.is_square() && approx_eq(m, &identity(m.nrows()), tolerance)
}
