//! Pure operations over [`DenseMatrix`].
//!
//! Every function allocates and returns a new matrix; inputs are never mutated.
//! Shape requirements are checked up front and reported as
//! [`NmfError::DimensionMismatch`].

use ndarray::{Array2, Zip};

use crate::error::NmfError;
use crate::matrix::DenseMatrix;

fn check_same_shape(op: &'static str, a: &DenseMatrix, b: &DenseMatrix) -> Result<(), NmfError> {
    if a.shape() != b.shape() {
        return Err(NmfError::DimensionMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

fn zip_with<F>(a: &DenseMatrix, b: &DenseMatrix, f: F) -> DenseMatrix
where
    F: Fn(f64, f64) -> f64,
{
    let mut result = Array2::zeros(a.shape());
    Zip::from(&mut result)
        .and(a.as_array())
        .and(b.as_array())
        .for_each(|r, &x, &y| *r = f(x, y));
    DenseMatrix::from_array(result)
}

pub fn transpose(a: &DenseMatrix) -> DenseMatrix {
    DenseMatrix::from_array(a.as_array().t().to_owned())
}

/// Matrix product A (n×m) · B (m×p) = C (n×p).
pub fn multiply(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix, NmfError> {
    if a.cols() != b.rows() {
        return Err(NmfError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(DenseMatrix::from_array(a.as_array().dot(b.as_array())))
}

/// Hadamard product A ⊙ B.
pub fn elem_multiply(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix, NmfError> {
    check_same_shape("elem_multiply", a, b)?;
    Ok(zip_with(a, b, |x, y| x * y))
}

/// Guarded elementwise division: A[i][j] / (B[i][j] + epsilon).
pub fn elem_divide(a: &DenseMatrix, b: &DenseMatrix, epsilon: f64) -> Result<DenseMatrix, NmfError> {
    check_same_shape("elem_divide", a, b)?;
    Ok(zip_with(a, b, |x, y| x / (y + epsilon)))
}

pub fn elem_add(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix, NmfError> {
    check_same_shape("elem_add", a, b)?;
    Ok(zip_with(a, b, |x, y| x + y))
}

pub fn elem_subtract(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix, NmfError> {
    check_same_shape("elem_subtract", a, b)?;
    Ok(zip_with(a, b, |x, y| x - y))
}

pub fn scalar_multiply(a: &DenseMatrix, c: f64) -> DenseMatrix {
    DenseMatrix::from_array(a.as_array().mapv(|v| v * c))
}

/// sqrt of the sum of squares of all entries.
pub fn frobenius_norm(a: &DenseMatrix) -> f64 {
    a.as_array().iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Euclidean norm of each row, in row order.
pub fn row_norms(a: &DenseMatrix) -> Vec<f64> {
    a.rows_iter()
        .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect()
}
