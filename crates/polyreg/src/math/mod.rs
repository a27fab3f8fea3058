//! Small dense containers used throughout the crate.
//!
//! Provides `Array2` (row-major matrix) and `Array1` (vector) with the
//! handful of accessors the solver and regression code need, plus
//! conversions to and from `ndarray` for callers already using it.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
