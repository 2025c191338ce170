/**
 * File: /src/util.rs
 * Created Date: Saturday, July 19th 2025
 * Author: Zihan
 * -----
 * Last Modified: Sunday, 20th July 2025 10:41:07 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/
use statrs::statistics::Statistics;

use crate::matrix::DenseMatrix;
use crate::ops::row_norms;

/// Format `value` with `digits` significant digits, `%g` style: fixed notation
/// unless the decimal exponent is below -4 or at least `digits`, trailing zeros
/// dropped.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1);

    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_trailing_zeros(&mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, value))
    }
}

fn trim_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// Ratio of the largest to the smallest row norm.
///
/// 1.0 means perfectly balanced rows; `f64::INFINITY` when some row is all zeros.
pub fn row_norm_spread(m: &DenseMatrix) -> f64 {
    let norms = row_norms(m);
    let max = Statistics::max(&norms);
    let min = Statistics::min(&norms);
    if min > 0.0 {
        max / min
    } else {
        f64::INFINITY
    }
}
