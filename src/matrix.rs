/*
 * File: /matrix.rs
 * Created Date: Saturday, July 19th 2025
 * Author: Zihan
 * -----
 * Last Modified: Sunday, 20th July 2025 11:05:12 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use std::fmt;
use std::ops::{Index, IndexMut};

use ndarray::{Array2, ArrayView1};

use crate::error::NmfError;
use crate::util::format_significant;

/// Dense row-major matrix of `f64`, the container every factor lives in.
///
/// # Example
/// ```
/// use fast_nmf::matrix::DenseMatrix;
/// let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m[(1, 0)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Array2<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// Build from an ordered sequence of equal-length rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<DenseMatrix, NmfError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        if n_rows == 0 || n_cols == 0 {
            return Err(NmfError::EmptyMatrix);
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(NmfError::RaggedRows {
                row: i,
                expected: n_cols,
                found: row.len(),
            });
        }

        let data = Array2::from_shape_fn((n_rows, n_cols), |(i, j)| rows[i][j]);
        Ok(DenseMatrix::from_array(data))
    }

    // constructor with Array2<f64>
    pub fn from_array(data: Array2<f64>) -> DenseMatrix {
        let rows = data.nrows();
        let cols = data.ncols();
        DenseMatrix { data, rows, cols }
    }

    pub fn zeros(rows: usize, cols: usize) -> DenseMatrix {
        DenseMatrix::from_array(Array2::zeros((rows, cols)))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Iterate rows in order, each as a read-only view.
    pub fn rows_iter(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.rows().into_iter()
    }

    /// Copy out as an ordered sequence of ordered rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(|row| row.to_vec()).collect()
    }

    pub fn is_non_negative(&self) -> bool {
        self.data.iter().all(|&v| v >= 0.0)
    }

    /// First entry (row-major order) that is negative or not finite.
    pub fn first_degenerate(&self) -> Option<(usize, usize, f64)> {
        self.data
            .indexed_iter()
            .find(|(_, &v)| !v.is_finite() || v < 0.0)
            .map(|((i, j), &v)| (i, j, v))
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        &self.data[(row, col)]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        &mut self.data[(row, col)]
    }
}

/// Fixed-width rendering: every value with 4 significant digits, right-aligned
/// to 8 columns and followed by a space, one row per line.
impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &val in row.iter() {
                write!(f, "{:>8} ", format_significant(val, 4))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
