/*
 * File: /src/lib.rs
 * Created Date: Saturday, July 19th 2025
 * Author: Zihan
 * -----
 * Last Modified: Sunday, 20th July 2025 5:02:18 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
//! Non-negative matrix factorization V ≈ W·H with Lee–Seung multiplicative
//! updates, optionally with a row-norm penalty on W.
//!
//! ```
//! use fast_nmf::config::sample_matrix;
//! use fast_nmf::factor::{NmfConfig, NmfEngine};
//!
//! let config = NmfConfig {
//!     seed: Some(42),
//!     ..NmfConfig::new(2, 200)
//! };
//! let mut engine = NmfEngine::new(sample_matrix(), config).unwrap();
//! let summary = engine.factorize().unwrap();
//! assert_eq!(engine.w().shape(), (4, 2));
//! assert_eq!(engine.h().shape(), (2, 5));
//! assert!(summary.relative_error < 1.0);
//! ```
pub mod config;
pub mod error;
pub mod factor;
pub mod matrix;
pub mod ops;
pub mod util;

pub use error::NmfError;
pub use factor::{FactorizationSummary, NmfConfig, NmfEngine, UpdateRule};
pub use matrix::DenseMatrix;
