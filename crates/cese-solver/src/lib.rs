//! Half-step space-time marching engine for CESE simulations.
//!
//! [`Solver`] owns a grid, a field, and an equation kernel, and advances
//! the solution half a time increment per call: each half-step sweeps
//! the conservation elements of the plane holding current data and
//! writes values, slopes, and stability numbers into the opposite
//! plane's slots. Two half-steps realize one full time increment.
//!
//! Boundary handling is deliberately absent: the solver updates interior
//! elements only and exposes mutable element access for the driver to
//! maintain ghost and boundary values between half-steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod solver;

pub use error::SolverError;
pub use solver::{Solver, SolverBuilder};
