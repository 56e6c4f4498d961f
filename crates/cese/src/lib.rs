//! CESE: a space-time marching engine for 1D hyperbolic conservation laws.
//!
//! The Conservation-Element/Solution-Element method discretizes space and
//! time together on a staggered mesh: solution elements carry a value and
//! a spatial slope, diamond-shaped conservation elements connect the two
//! half-time planes, and each half-step enforces the flux balance over
//! every diamond exactly. This facade crate re-exports the public API
//! from all sub-crates; for most users a single `cese` dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use cese::prelude::*;
//!
//! // A unit-spaced grid of 8 cells with two ghost slots per side.
//! let grid = Arc::new(Grid::uniform(0.0, 8.0, 8, 2).unwrap());
//!
//! let mut solver = Solver::builder()
//!     .grid(Arc::clone(&grid))
//!     .kernel(InviscidBurgers::new())
//!     .time_increment(0.5)
//!     .alpha(1.0)
//!     .build()
//!     .unwrap();
//!
//! // Seed a uniform state on the even plane.
//! for ielm in grid.selm_indices(Parity::Even) {
//!     solver.selm_mut(ielm, Parity::Even).set_so0(0, 1.5);
//! }
//!
//! // Two half-steps advance one full time increment.
//! solver.march_half_step();
//! solver.march_half_step();
//!
//! assert_eq!(solver.half_steps(), 2);
//! assert_eq!(solver.so0(4, Parity::Even, 0), 1.5);
//! assert!(solver.cfl_max() < 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `cese-grid` | `Grid`, plane `Parity`, index algebra |
//! | [`field`] | `cese-field` | `Field` storage, `Selm`/`Celm` accessors |
//! | [`kernel`] | `cese-kernel` | The `Kernel` capability trait |
//! | [`kernels`] | `cese-kernels` | Reference kernels (linear scalar, inviscid Burgers) |
//! | [`solver`] | `cese-solver` | `Solver`, builder, half-step marching |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid topology and index algebra (`cese-grid`).
///
/// [`grid::Grid`] is immutable after construction and shared between
/// solvers via `Arc`; [`grid::Parity`] names the two half-time planes.
pub use cese_grid as grid;

/// Solution storage and element accessors (`cese-field`).
///
/// [`field::Field`] holds both half-time planes in parity-interleaved
/// flat arrays; [`field::Selm`] and [`field::Celm`] are the transient
/// element handles over it.
pub use cese_field as field;

/// The equation kernel capability trait (`cese-kernel`).
///
/// [`kernel::Kernel`] is the extension point for new conservation laws;
/// its provided methods implement the diamond flux balance and the
/// weighted slope reconstruction.
pub use cese_kernel as kernel;

/// Reference kernel implementations (`cese-kernels`).
///
/// [`kernels::LinearScalar`] for constant-speed advection and
/// [`kernels::InviscidBurgers`] for the inviscid Burgers equation.
pub use cese_kernels as kernels;

/// The marching engine (`cese-solver`).
///
/// [`solver::Solver`] owns the field and advances it half a time
/// increment per call.
pub use cese_solver as solver;

/// Common imports for typical usage.
///
/// ```rust
/// use cese::prelude::*;
/// ```
///
/// Imports the grid, the plane parity, the kernel trait, the reference
/// kernels, and the solver with its builder.
pub mod prelude {
    pub use cese_field::{Celm, Field, Selm, SelmMut};
    pub use cese_grid::{Grid, Parity};
    pub use cese_kernel::Kernel;
    pub use cese_kernels::{InviscidBurgers, LinearScalar};
    pub use cese_solver::{Solver, SolverBuilder};
}
