use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::NmfError;
use crate::matrix::DenseMatrix;
use crate::ops::{elem_subtract, frobenius_norm, multiply};
use crate::util::row_norm_spread;

use super::init::random_initialize;
use super::update_rules::{update_h, update_w};

const LOG_EVERY: usize = 100;

/// How W is updated each iteration. H always follows the plain Lee–Seung rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpdateRule {
    /// W ← W * (V*H^T) / (W*H*H^T)
    LeeSeung,
    /// W ← W * (V*H^T) / (W*H*H^T + lambda*U*W), U = diag(1/||W_i||)
    RowNormRegularized { lambda: f64 },
}

impl UpdateRule {
    pub fn lambda(&self) -> Option<f64> {
        match self {
            UpdateRule::LeeSeung => None,
            UpdateRule::RowNormRegularized { lambda } => Some(*lambda),
        }
    }
}

impl fmt::Display for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateRule::LeeSeung => write!(f, "lee-seung"),
            UpdateRule::RowNormRegularized { lambda } => {
                write!(f, "row-norm regularized (lambda = {})", lambda)
            }
        }
    }
}

/// Hyperparameters of a factorization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NmfConfig {
    /// Factorization rank K
    pub rank: usize,
    /// Number of iterations; there is no early exit
    pub max_iter: usize,
    /// Added to every denominator before dividing
    pub epsilon: f64,
    pub update_rule: UpdateRule,
    /// Seed for W/H initialization; `None` draws a fresh one per engine
    pub seed: Option<u64>,
}

impl Default for NmfConfig {
    fn default() -> Self {
        Self {
            rank: 2,
            max_iter: 500,
            epsilon: 1e-9,
            update_rule: UpdateRule::RowNormRegularized { lambda: 0.01 },
            seed: None,
        }
    }
}

impl NmfConfig {
    pub fn new(rank: usize, max_iter: usize) -> Self {
        Self {
            rank,
            max_iter,
            ..Default::default()
        }
    }

    /// Check the hyperparameters against an input of shape `(rows, cols)`.
    pub fn validate(&self, shape: (usize, usize)) -> Result<(), NmfError> {
        let (rows, cols) = shape;
        let max_rank = rows.min(cols);
        if self.rank == 0 || self.rank > max_rank {
            return Err(NmfError::InvalidHyperparameter(format!(
                "rank {} is invalid for a {}x{} input (must be in 1..={})",
                self.rank, rows, cols, max_rank
            )));
        }
        if self.max_iter == 0 {
            return Err(NmfError::InvalidHyperparameter(
                "max_iter must be at least 1".to_string(),
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(NmfError::InvalidHyperparameter(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        if let Some(lambda) = self.update_rule.lambda() {
            if !(lambda.is_finite() && lambda >= 0.0) {
                return Err(NmfError::InvalidHyperparameter(format!(
                    "lambda must be finite and non-negative, got {}",
                    lambda
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of [`NmfEngine::factorize`]
#[derive(Debug, Clone, Serialize)]
pub struct FactorizationSummary {
    /// Total iterations applied to W and H so far
    pub iterations: usize,
    pub reconstruction_error: f64,
    pub relative_error: f64,
    /// Largest over smallest row norm of W
    pub w_row_norm_spread: f64,
    pub elapsed: Duration,
}

/// Lee–Seung multiplicative-update NMF: V (n×m) ≈ W (n×k) * H (k×m).
///
/// The engine owns V, W and H. V is never modified; W and H are replaced
/// after every iteration and only handed out as shared borrows.
#[derive(Debug, Clone)]
pub struct NmfEngine {
    v: DenseMatrix,
    w: DenseMatrix,
    h: DenseMatrix,
    config: NmfConfig,
    iterations_run: usize,
}

impl NmfEngine {
    /// Validate the input and initialize W and H from `config.seed`, or from a
    /// freshly drawn seed when none is given.
    pub fn new(v: DenseMatrix, config: NmfConfig) -> Result<Self, NmfError> {
        validate_input(&v, &config)?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!("No seed configured, initializing with seed {}", seed);
                seed
            }
        };
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(Self::initialize(v, config, &mut rng))
    }

    /// Like [`NmfEngine::new`] but draws W and H from `rng`; `config.seed` is ignored.
    pub fn with_rng<R: Rng + ?Sized>(
        v: DenseMatrix,
        config: NmfConfig,
        rng: &mut R,
    ) -> Result<Self, NmfError> {
        validate_input(&v, &config)?;
        Ok(Self::initialize(v, config, rng))
    }

    fn initialize<R: Rng + ?Sized>(v: DenseMatrix, config: NmfConfig, rng: &mut R) -> Self {
        let (n, m) = v.shape();
        let w = random_initialize(n, config.rank, rng);
        let h = random_initialize(config.rank, m, rng);
        Self {
            v,
            w,
            h,
            config,
            iterations_run: 0,
        }
    }

    /// One iteration: H-update, then W-update using the new H.
    pub fn step(&mut self) -> Result<(), NmfError> {
        let eps = self.config.epsilon;
        let h = update_h(&self.v, &self.w, &self.h, eps)?;
        let w = update_w(&self.v, &self.w, &h, eps, self.config.update_rule.lambda())?;
        self.h = h;
        self.w = w;
        self.iterations_run += 1;
        Ok(())
    }

    pub fn run_iterations(&mut self, n: usize) -> Result<(), NmfError> {
        for iter in 0..n {
            self.step()?;
            if log::log_enabled!(log::Level::Debug) && (iter + 1) % LOG_EVERY == 0 {
                debug!(
                    "iteration {}/{}: reconstruction error {:.6}",
                    iter + 1,
                    n,
                    self.reconstruction_error()?
                );
            }
        }
        Ok(())
    }

    /// Run exactly `max_iter` iterations.
    pub fn factorize(&mut self) -> Result<FactorizationSummary, NmfError> {
        let start = Instant::now();
        info!(
            "Starting NMF on {}x{} input: rank {}, {} iterations, {}",
            self.v.rows(),
            self.v.cols(),
            self.config.rank,
            self.config.max_iter,
            self.config.update_rule
        );

        self.run_iterations(self.config.max_iter)?;

        let summary = FactorizationSummary {
            iterations: self.iterations_run,
            reconstruction_error: self.reconstruction_error()?,
            relative_error: self.relative_reconstruction_error()?,
            w_row_norm_spread: row_norm_spread(&self.w),
            elapsed: start.elapsed(),
        };
        info!(
            "NMF completed in {:?}, reconstruction error {:.6} (relative {:.6})",
            summary.elapsed, summary.reconstruction_error, summary.relative_error
        );
        Ok(summary)
    }

    /// ||V - W*H||_F
    pub fn reconstruction_error(&self) -> Result<f64, NmfError> {
        let approx = multiply(&self.w, &self.h)?;
        let residual = elem_subtract(&self.v, &approx)?;
        Ok(frobenius_norm(&residual))
    }

    /// ||V - W*H||_F / (||V||_F + epsilon)
    pub fn relative_reconstruction_error(&self) -> Result<f64, NmfError> {
        Ok(self.reconstruction_error()? / (frobenius_norm(&self.v) + self.config.epsilon))
    }

    pub fn v(&self) -> &DenseMatrix {
        &self.v
    }

    pub fn w(&self) -> &DenseMatrix {
        &self.w
    }

    pub fn h(&self) -> &DenseMatrix {
        &self.h
    }

    pub fn config(&self) -> &NmfConfig {
        &self.config
    }

    pub fn iterations_run(&self) -> usize {
        self.iterations_run
    }

    /// Give up the engine and keep (W, H).
    pub fn into_factors(self) -> (DenseMatrix, DenseMatrix) {
        (self.w, self.h)
    }
}

impl fmt::Display for NmfEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "W = ")?;
        writeln!(f, "{}", self.w)?;
        writeln!(f, "H = ")?;
        writeln!(f, "{}", self.h)
    }
}

fn validate_input(v: &DenseMatrix, config: &NmfConfig) -> Result<(), NmfError> {
    if v.rows() == 0 || v.cols() == 0 {
        return Err(NmfError::EmptyMatrix);
    }
    config.validate(v.shape())?;
    if let Some((row, col, value)) = v.first_degenerate() {
        return Err(NmfError::NumericDegeneracy { row, col, value });
    }
    Ok(())
}
