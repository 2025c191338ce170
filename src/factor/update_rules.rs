use crate::error::NmfError;
use crate::matrix::DenseMatrix;
use crate::ops::{elem_add, elem_divide, elem_multiply, multiply, transpose};

use super::regularization::row_norm_penalty;

/// Elementwise multiplicative update: base * numer / (denom + eps)
pub fn multiplicative_update(
    base: &DenseMatrix,
    numer: &DenseMatrix,
    denom: &DenseMatrix,
    eps: f64,
) -> Result<DenseMatrix, NmfError> {
    let ratio = elem_divide(numer, denom, eps)?;
    elem_multiply(base, &ratio)
}

/// H ← H * (W^T*V) / (W^T*W*H)
pub fn update_h(
    v: &DenseMatrix,
    w: &DenseMatrix,
    h: &DenseMatrix,
    eps: f64,
) -> Result<DenseMatrix, NmfError> {
    let wt = transpose(w);
    let numer = multiply(&wt, v)?; // k×m
    let wtw = multiply(&wt, w)?; // k×k
    let denom = multiply(&wtw, h)?; // k×m
    multiplicative_update(h, &numer, &denom, eps)
}

/// W ← W * (V*H^T) / (W*H*H^T [+ lambda*U*W])
///
/// `lambda = None` is the plain Lee–Seung rule.
pub fn update_w(
    v: &DenseMatrix,
    w: &DenseMatrix,
    h: &DenseMatrix,
    eps: f64,
    lambda: Option<f64>,
) -> Result<DenseMatrix, NmfError> {
    let ht = transpose(h);
    let numer = multiply(v, &ht)?; // n×k
    let hht = multiply(h, &ht)?; // k×k
    let mut denom = multiply(w, &hht)?; // n×k
    if let Some(lambda) = lambda {
        denom = elem_add(&denom, &row_norm_penalty(w, lambda, eps)?)?;
    }
    multiplicative_update(w, &numer, &denom, eps)
}
