use std::error::Error;
use std::fs::File;

/**
 * File: /src/config.rs
 * Created Date: Sunday, July 20th 2025
 * Author: Zihan
 * -----
 * Last Modified: Sunday, 20th July 2025 4:27:51 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use ndarray::{array, Array2};
use ndarray_npy::ReadNpyExt;

use crate::factor::{NmfConfig, UpdateRule};
use crate::matrix::DenseMatrix;

const DEFAULT_RANK: usize = 2;
const DEFAULT_MAX_ITER: usize = 500;
const DEFAULT_LAMBDA: f64 = 0.01;

/// The built-in 4x5 demonstration input.
pub fn sample_matrix() -> DenseMatrix {
    DenseMatrix::from_array(array![
        [1.0, 2.0, 3.0, 4.0, 5.0],
        [5.0, 4.0, 3.0, 2.0, 1.0],
        [1.0, 3.0, 5.0, 3.0, 1.0],
        [5.0, 3.0, 1.0, 3.0, 5.0],
    ])
}

/// Read a 2-D `f64` matrix from an `.npy` file.
pub fn load_npy(path: &str) -> Result<DenseMatrix, Box<dyn Error>> {
    let reader = File::open(path)?;
    let data = Array2::<f64>::read_npy(reader)?;
    Ok(DenseMatrix::from_array(data))
}

/// Driver configuration
pub struct Config {
    matrix: DenseMatrix,
    // "sample" or the .npy path the matrix came from
    source: String,
    rank: usize,
    max_iter: usize,
    lambda: f64,
    seed: Option<u64>,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- data/matrix.npy 3 1000 0.05 42
    /// $ cargo run -- sample 2 500
    /// ```
    pub fn new(mut args: impl Iterator<Item = String>) -> Result<Config, Box<dyn Error>> {
        // read args, all optional
        // 0: program name
        // 1: matrix path, or "sample"
        // 2: rank
        // 3: max_iter
        // 4: lambda (0 disables regularization)
        // 5: seed
        args.next();
        let source = args.next().unwrap_or_else(|| "sample".to_string());
        let matrix = if source == "sample" {
            sample_matrix()
        } else {
            load_npy(&source)?
        };
        let rank = match args.next() {
            Some(s) => s.parse::<usize>()?,
            None => DEFAULT_RANK,
        };
        let max_iter = match args.next() {
            Some(s) => s.parse::<usize>()?,
            None => DEFAULT_MAX_ITER,
        };
        let lambda = match args.next() {
            Some(s) => s.parse::<f64>()?,
            None => DEFAULT_LAMBDA,
        };
        let seed = match args.next() {
            Some(s) => Some(s.parse::<u64>()?),
            None => None,
        };

        Ok(Config {
            matrix,
            source,
            rank,
            max_iter,
            lambda,
            seed,
        })
    }

    pub fn nmf_config(&self) -> NmfConfig {
        let update_rule = if self.lambda == 0.0 {
            UpdateRule::LeeSeung
        } else {
            UpdateRule::RowNormRegularized {
                lambda: self.lambda,
            }
        };
        NmfConfig {
            rank: self.rank,
            max_iter: self.max_iter,
            update_rule,
            seed: self.seed,
            ..Default::default()
        }
    }

    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> DenseMatrix {
        self.matrix
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}
