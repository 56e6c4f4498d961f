//! Error types for field construction.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a [`Field`](crate::Field).
///
/// Like grid errors these are static configuration errors: raised once at
/// construction, never re-checked on the marching hot path.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// The equation has no state variables.
    ZeroVariables,
    /// The configured time increment is not a finite positive number.
    InvalidTimeIncrement {
        /// The rejected increment.
        time_increment: f64,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVariables => write!(f, "field needs at least one state variable"),
            Self::InvalidTimeIncrement { time_increment } => {
                write!(
                    f,
                    "time increment must be finite and positive, got {time_increment}"
                )
            }
        }
    }
}

impl Error for FieldError {}
