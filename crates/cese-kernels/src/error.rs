//! Kernel configuration errors.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a kernel.
///
/// Raised once, at construction; the flux methods never re-validate.
#[derive(Clone, Debug, PartialEq)]
pub enum KernelConfigError {
    /// The advection velocity is NaN or infinite.
    NonFiniteVelocity {
        /// The rejected velocity.
        velocity: f64,
    },
}

impl fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteVelocity { velocity } => {
                write!(f, "advection velocity must be finite, got {velocity}")
            }
        }
    }
}

impl Error for KernelConfigError {}
