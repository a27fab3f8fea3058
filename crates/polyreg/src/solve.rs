//! Dense linear system solver.
//!
//! Gauss-Jordan elimination with partial pivoting on the augmented matrix
//! `[A | b]`. The caller's matrix and right-hand side are never modified;
//! elimination runs on a private copy.

use crate::config::SolverConfig;
use crate::error::{LinalgError, Result};
use crate::math::{Array1, Array2};

/// Pivots whose magnitude falls below this are treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-10;

/// Solve `A·x = b` with the default pivot tolerance.
///
/// # Example
/// ```
/// use polyreg::math::{Array1, Array2};
/// use polyreg::solve::solve;
///
/// let a = Array2::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
/// let b = Array1::from_vec(vec![3.0, 5.0]);
/// let x = solve(&a, &b).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    solve_with(a, b, &SolverConfig::default())
}

/// Solve `A·x = b` for a square `A`.
///
/// # Errors
/// * `DimensionMismatch` if `A` is not square or `b` does not have `A.nrows()` entries.
/// * `InvalidInput` for an empty system or an invalid tolerance.
/// * `Singular` when no pivot of magnitude at least `config.pivot_tolerance`
///   exists in some column. Zero and non-finite pivots are always singular.
pub fn solve_with(a: &Array2<f64>, b: &Array1<f64>, config: &SolverConfig) -> Result<Array1<f64>> {
    config.validate()?;
    if !a.is_square() || b.len() != a.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "solve",
            left: a.shape(),
            right: (b.len(), 1),
        });
    }
    let n = a.nrows();
    if n == 0 {
        return Err(LinalgError::InvalidInput("cannot solve an empty system".to_string()));
    }
    log::debug!(
        "solve: {}x{} system, pivot tolerance {:e}",
        n,
        n,
        config.pivot_tolerance
    );

    let mut m = augment(a, b);

    for i in 0..n {
        let pivot_row = select_pivot(&m, i);
        m.swap_rows(i, pivot_row);

        let pivot = m[(i, i)];
        log::trace!("column {}: pivot row {} value {:e}", i, pivot_row, pivot);
        if !pivot.is_finite() || pivot == 0.0 || pivot.abs() < config.pivot_tolerance {
            log::warn!(
                "singular system: |pivot| {:e} in column {} below tolerance {:e}",
                pivot.abs(),
                i,
                config.pivot_tolerance
            );
            return Err(LinalgError::Singular { column: i, pivot });
        }

        for v in m.row_slice_mut(i)[i..].iter_mut() {
            *v /= pivot;
        }

        let normalized: Vec<f64> = m.row_slice(i)[i..].to_vec();
        for k in (0..n).filter(|&k| k != i) {
            let row = &mut m.row_slice_mut(k)[i..];
            let factor = row[0];
            for (v, p) in row.iter_mut().zip(normalized.iter()) {
                *v -= factor * p;
            }
        }
    }

    Ok((0..n).map(|i| m[(i, n)]).collect())
}

/// Copy `A` and `b` into an n×(n+1) working matrix.
fn augment(a: &Array2<f64>, b: &Array1<f64>) -> Array2<f64> {
    let n = a.nrows();
    let mut data = Vec::with_capacity(n * (n + 1));
    for i in 0..n {
        data.extend_from_slice(a.row_slice(i));
        data.push(b[i]);
    }
    Array2::from_shape_vec((n, n + 1), data).expect("augment: shape mismatch")
}

/// Row in `col..n` with the largest magnitude in column `col`. Ties keep the earliest row.
fn select_pivot(m: &Array2<f64>, col: usize) -> usize {
    let mut best = col;
    for k in col + 1..m.nrows() {
        if m[(k, col)].abs() > m[(best, col)].abs() {
            best = k;
        }
    }
    best
}
