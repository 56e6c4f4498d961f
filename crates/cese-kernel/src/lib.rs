//! The equation-kernel capability trait for CESE simulations.
//!
//! A [`Kernel`] supplies everything the marching engine needs to know
//! about a physical flux law: the four directional flux integrals over a
//! solution element's faces, the forward-time tip value of its linear
//! reconstruction, and the local stability (CFL) rule. The engine itself
//! is equation-agnostic; adding an equation means implementing this one
//! trait against the element accessors, with no change to the grid,
//! field, or solver layers.
//!
//! The set of equations is closed and the flux calls sit on the marching
//! hot path, so kernels plug in as a compile-time generic parameter of
//! the solver rather than through dynamic dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kernel;

pub use kernel::Kernel;
