//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a [`Grid`](crate::Grid).
///
/// All variants are static configuration errors: they are raised exactly
/// once, at construction, and construction halts entirely. No grid method
/// re-validates these conditions at call time.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The ghost-boundary count is odd.
    ///
    /// The raw-index parity algebra is self-consistent only when the
    /// padding at each end covers a whole number of element pairs.
    OddBoundCount {
        /// The rejected ghost count.
        bound_count: usize,
    },
    /// The grid would contain no conservation element.
    EmptyGrid,
    /// The domain bounds are non-finite or reversed.
    InvalidDomain {
        /// Lower domain bound.
        xmin: f64,
        /// Upper domain bound.
        xmax: f64,
    },
    /// A node coordinate is not strictly greater than its predecessor.
    NonIncreasingCoordinates {
        /// Index of the offending node in the input slice.
        index: usize,
    },
    /// A node coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Index of the offending node in the input slice.
        index: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddBoundCount { bound_count } => {
                write!(f, "ghost-boundary count must be even, got {bound_count}")
            }
            Self::EmptyGrid => write!(f, "grid needs at least one conservation element"),
            Self::InvalidDomain { xmin, xmax } => {
                write!(f, "invalid domain [{xmin}, {xmax}]: bounds must be finite with xmin < xmax")
            }
            Self::NonIncreasingCoordinates { index } => {
                write!(f, "node coordinate {index} is not strictly increasing")
            }
            Self::NonFiniteCoordinate { index } => {
                write!(f, "node coordinate {index} is not finite")
            }
        }
    }
}

impl Error for GridError {}
