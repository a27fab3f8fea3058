//! Polynomial least-squares regression through the normal equations.
//!
//! The design matrix `X` has one row `[1, x, x², …, x^d]` per point, and the
//! coefficients solve `(XᵀX)β = Xᵀy`.
//!
//! `XᵀX` grows ill-conditioned quickly as the degree rises or as the
//! abscissae span a wide range, so results for high degrees or badly scaled
//! data lose accuracy compared with QR or SVD based least squares. Rescale
//! `x` into a small interval around zero before fitting high-degree models.

use serde::{Deserialize, Serialize};

use crate::config::{FitConfig, SolverConfig};
use crate::error::{LinalgError, Result};
use crate::linalg::{multiply, transpose};
use crate::math::{Array1, Array2};
use crate::solve::solve_with;
use crate::stats;

/// A single `(x, y)` observation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Fitted polynomial `a₀ + a₁x + … + a_d·x^d`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    /// `coefficients[d]` multiplies `x^d`.
    pub coefficients: Vec<f64>,
    pub degree: usize,
    pub r_squared: f64,
}

impl PolynomialFit {
    /// Evaluate the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &coeff| acc * x + coeff)
    }

    pub fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// `y - p(x)` for every point.
    pub fn residuals(&self, points: &[Point]) -> Vec<f64> {
        points.iter().map(|p| p.y - self.evaluate(p.x)).collect()
    }
}

/// Least-squares polynomial coefficients of the given degree.
///
/// Returns `degree + 1` coefficients; index `d` is the coefficient of `x^d`.
///
/// # Example
/// ```
/// use polyreg::regression::{polynomial_regression, Point};
///
/// let points = [Point::new(0.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 5.0)];
/// let coeffs = polynomial_regression(&points, 2).unwrap();
/// for c in coeffs.iter() {
///     assert!((c - 1.0).abs() < 1e-6);
/// }
/// ```
pub fn polynomial_regression(points: &[Point], degree: usize) -> Result<Array1<f64>> {
    solve_normal_equations(points, degree, &SolverConfig::default())
}

/// Fit a polynomial and report its goodness of fit.
pub fn fit_polynomial(points: &[Point], config: &FitConfig) -> Result<PolynomialFit> {
    log::debug!(
        "fitting degree {} polynomial to {} points",
        config.degree,
        points.len()
    );
    let coefficients = solve_normal_equations(points, config.degree, &config.solver)?;

    let mut fit = PolynomialFit {
        coefficients: coefficients.to_vec(),
        degree: config.degree,
        r_squared: 0.0,
    };
    let observed: Vec<f64> = points.iter().map(|p| p.y).collect();
    let predicted: Vec<f64> = points.iter().map(|p| fit.evaluate(p.x)).collect();
    fit.r_squared = stats::r_squared(&observed, &predicted)?;

    log::info!(
        "fitted degree {} polynomial, R^2 = {:.6}",
        fit.degree,
        fit.r_squared
    );
    Ok(fit)
}

fn solve_normal_equations(
    points: &[Point],
    degree: usize,
    solver: &SolverConfig,
) -> Result<Array1<f64>> {
    validate_points(points)?;

    let x = design_matrix(points, degree)?;
    let targets: Array1<f64> = points.iter().map(|p| p.y).collect();
    let y = Array2::column_vector(&targets);

    let xt = transpose(&x);
    let xtx = multiply(&xt, &x)?;
    let xty = multiply(&xt, &y)?.into_flat_column()?;

    solve_with(&xtx, &xty, solver)
}

fn validate_points(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(LinalgError::InvalidInput(
            "polynomial regression requires at least one point".to_string(),
        ));
    }
    if let Some(idx) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(LinalgError::InvalidInput(format!(
            "point {} has a non-finite coordinate: {:?}",
            idx, points[idx]
        )));
    }
    Ok(())
}

/// Vandermonde-style design matrix, row `i` = `[x_i⁰, x_i¹, …, x_i^degree]`.
fn design_matrix(points: &[Point], degree: usize) -> Result<Array2<f64>> {
    let cols = degree.checked_add(1).ok_or_else(|| {
        LinalgError::InvalidInput(format!("polynomial degree {} is too large", degree))
    })?;
    let mut data = Vec::with_capacity(points.len() * cols);
    for p in points {
        let mut power = 1.0;
        for _ in 0..cols {
            data.push(power);
            power *= p.x;
        }
    }
    Ok(Array2::from_shape_vec((points.len(), cols), data)?)
}
