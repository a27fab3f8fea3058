use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Errors raised by the matrix primitives, the solver and the regression routines.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Elimination found no usable pivot in `column`.
    Singular { column: usize, pivot: f64 },
    InvalidInput(String),
    Shape(ShapeError),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { op, left, right } => write!(
                f,
                "dimension mismatch in {}: {}x{} vs {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            LinalgError::Singular { column, pivot } => write!(
                f,
                "singular system: pivot {:e} in column {} is below tolerance",
                pivot, column
            ),
            LinalgError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            LinalgError::Shape(err) => write!(f, "{}", err),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for LinalgError {
    fn from(err: ShapeError) -> Self {
        LinalgError::Shape(err)
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
