/// Shared test utilities for the factorization modules
use crate::matrix::DenseMatrix;

pub use crate::config::sample_matrix;

/// Create a synthetic block-diagonal matrix with a clear rank-2 structure.
/// Blocks (0,0) and (1,1) hold 5.0, off-diagonal blocks hold 0.1.
/// Returns a 20x20 matrix split at row/column 10.
pub fn make_block_diagonal() -> DenseMatrix {
    let n = 20;
    let mut x = DenseMatrix::from_array(ndarray::Array2::from_elem((n, n), 0.1));
    for i in 0..n {
        for j in 0..n {
            if (i < 10) == (j < 10) {
                x[(i, j)] = 5.0;
            }
        }
    }
    x
}

/// All entries of `m` are finite and >= 0.
pub fn all_non_negative(m: &DenseMatrix) -> bool {
    m.as_array().iter().all(|&v| v.is_finite() && v >= 0.0)
}
