//! Reference equation kernels for the CESE marching engine.
//!
//! Two kernels ship: [`LinearScalar`], constant-speed advection
//! `u_t + (c·u)_x = 0` whose exact solution is a pure translation, and
//! [`InviscidBurgers`], the inviscid Burgers equation
//! `u_t + (u²/2)_x = 0`, the smallest genuinely nonlinear case. Either
//! doubles as the template for adding further equations: implement the
//! [`Kernel`](cese_kernel::Kernel) capability set against the element
//! accessors and the grid, field, and solver layers need no change.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod inviscid_burgers;
pub mod linear_scalar;

pub use error::KernelConfigError;
pub use inviscid_burgers::InviscidBurgers;
pub use linear_scalar::LinearScalar;
