/**
 * File: /src/error.rs
 * Created Date: Saturday, July 19th 2025
 * Author: Zihan
 * -----
 * Last Modified: Saturday, 19th July 2025 3:12:40 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction, matrix operations and the NMF engine.
///
/// All of them are caller-input problems: nothing is retried, and the engine
/// reports them before touching W or H.
#[derive(Debug, Clone, PartialEq)]
pub enum NmfError {
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A row of a row-major input has a different length than the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The input has zero rows or zero columns.
    EmptyMatrix,
    InvalidHyperparameter(String),
    /// An entry of V is negative or not finite.
    NumericDegeneracy { row: usize, col: usize, value: f64 },
}

impl fmt::Display for NmfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmfError::DimensionMismatch { op, left, right } => write!(
                f,
                "Dimension mismatch in {}: {}x{} vs {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            NmfError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} columns, expected {}",
                row, found, expected
            ),
            NmfError::EmptyMatrix => write!(f, "Matrix must have at least one row and one column"),
            NmfError::InvalidHyperparameter(msg) => write!(f, "Invalid hyperparameter: {}", msg),
            NmfError::NumericDegeneracy { row, col, value } => write!(
                f,
                "Entry ({}, {}) = {} violates the non-negativity precondition",
                row, col, value
            ),
        }
    }
}

impl Error for NmfError {}
