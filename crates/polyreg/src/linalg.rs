//! Dense matrix products and transposition.
//!
//! Shapes are checked up front; a mismatch is reported as
//! `LinalgError::DimensionMismatch` instead of reading out of bounds.

use crate::error::{LinalgError, Result};
use crate::math::{Array1, Array2};

/// Dense product `C = A·B` for an m×n `A` and an n×p `B`.
///
/// Each `C[i][j]` is accumulated in increasing `k` with `i` outermost and
/// `j` in the middle, so rounding is reproducible for identical inputs.
pub fn multiply(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (m, n) = a.shape();
    let p = b.ncols();
    log::trace!("multiply: ({}, {}) x ({}, {})", m, n, n, p);

    let mut c = Array2::zeros(m, p);
    for i in 0..m {
        let a_row = a.row_slice(i);
        for j in 0..p {
            let mut acc = 0.0;
            for k in 0..n {
                acc += a_row[k] * b[(k, j)];
            }
            c[(i, j)] = acc;
        }
    }
    Ok(c)
}

/// Returns the n×m transpose of an m×n matrix.
pub fn transpose<T: Clone>(a: &Array2<T>) -> Array2<T> {
    let (m, n) = a.shape();
    let mut data = Vec::with_capacity(m * n);
    for j in 0..n {
        for i in 0..m {
            data.push(a[(i, j)].clone());
        }
    }
    Array2::from_shape_vec((n, m), data).expect("transpose: shape mismatch")
}

/// Matrix-vector product `A·x`.
pub fn mat_vec(a: &Array2<f64>, x: &Array1<f64>) -> Result<Array1<f64>> {
    if a.ncols() != x.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "mat_vec",
            left: a.shape(),
            right: (x.len(), 1),
        });
    }
    Ok((0..a.nrows())
        .map(|i| a.row_slice(i).iter().zip(x.iter()).map(|(l, r)| l * r).sum::<f64>())
        .collect())
}
