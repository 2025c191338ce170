use ndarray::Array2;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use crate::matrix::DenseMatrix;

/// Fill a rows×cols matrix with independent draws from U[0, 1).
///
/// The caller supplies the random source; pass a seeded `StdRng` for
/// reproducible factorizations.
pub fn random_initialize<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> DenseMatrix {
    DenseMatrix::from_array(Array2::random_using(
        (rows, cols),
        Uniform::new(0.0, 1.0),
        rng,
    ))
}
