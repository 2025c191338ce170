use crate::error::NmfError;
use crate::matrix::DenseMatrix;
use crate::ops::{multiply, row_norms, scalar_multiply};

/// Row-norm balancing matrix:
///   U = diag(1 / ||G_i||_2)
/// with one diagonal entry per row of G. Rows whose norm does not exceed
/// `epsilon` get 0 instead of a huge reciprocal.
pub fn compute_u(g: &DenseMatrix, epsilon: f64) -> DenseMatrix {
    let norms = row_norms(g);
    let mut u = DenseMatrix::zeros(norms.len(), norms.len());
    for (i, &norm) in norms.iter().enumerate() {
        if norm > epsilon {
            u[(i, i)] = 1.0 / norm;
        }
    }
    u
}

/// Additive denominator term for the regularized W-update:
///   lambda * (U * W),  U = compute_u(W)
pub fn row_norm_penalty(w: &DenseMatrix, lambda: f64, epsilon: f64) -> Result<DenseMatrix, NmfError> {
    let u = compute_u(w, epsilon);
    Ok(scalar_multiply(&multiply(&u, w)?, lambda))
}
