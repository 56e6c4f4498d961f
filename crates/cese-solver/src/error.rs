//! Solver construction errors.

use std::error::Error;
use std::fmt;

use cese_field::FieldError;

/// Errors raised while assembling a solver.
///
/// All variants are construction-time failures. Once a solver is built,
/// marching itself is infallible.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// No grid was supplied to the builder.
    MissingGrid,
    /// No kernel was supplied to the builder.
    MissingKernel,
    /// No time increment was supplied to the builder.
    MissingTimeIncrement,
    /// The slope weighting exponent is not finite and non-negative.
    InvalidAlpha {
        /// The rejected exponent.
        alpha: f64,
    },
    /// Field allocation rejected the configuration.
    Field(FieldError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGrid => write!(f, "solver requires a grid"),
            Self::MissingKernel => write!(f, "solver requires a kernel"),
            Self::MissingTimeIncrement => {
                write!(f, "solver requires a time increment")
            }
            Self::InvalidAlpha { alpha } => write!(
                f,
                "slope weighting exponent must be finite and non-negative, got {alpha}"
            ),
            Self::Field(err) => write!(f, "field allocation failed: {err}"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for SolverError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}
