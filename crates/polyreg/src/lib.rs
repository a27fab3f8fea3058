//! polyreg: dense matrix primitives and polynomial least-squares regression.
//!
//! The crate provides matrix multiplication and transposition, a dense
//! linear solver (Gauss-Jordan elimination with partial pivoting) and a
//! polynomial regression routine that solves the normal equations with it.
//!
//! Everything is synchronous and allocation-only; all functions borrow their
//! inputs and return fresh values, so they can be called from any thread.
pub mod config;
pub mod error;
pub mod linalg;
pub mod math;
pub mod regression;
pub mod solve;
pub mod stats;

pub use config::{FitConfig, SolverConfig};
pub use error::{LinalgError, Result};
pub use linalg::{multiply, transpose};
pub use regression::{fit_polynomial, polynomial_regression, Point, PolynomialFit};
pub use solve::{solve, solve_with, DEFAULT_PIVOT_TOLERANCE};
