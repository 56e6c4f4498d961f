//! Solution storage and element accessors for CESE simulations.
//!
//! [`Field`] owns the flat solution arrays (`so0`, `so1`, `cfl`) covering
//! both active half-time planes of a staggered grid, and acts as the
//! factory for the transient element handles:
//!
//! - [`Selm`] / [`SelmMut`] — a solution element: a position-keyed view of
//!   one raw slot's value, slope, and stability number.
//! - [`Celm`] — a conservation element: a diamond-shaped space-time
//!   control volume whose four bounding solution elements are recomputed
//!   from index arithmetic on every access.
//!
//! Both planes share the same arrays, distinguished by raw-index parity:
//! the plane being written during a half-step never aliases the plane
//! being read, which is what makes the marching sweep safe without any
//! copying or buffer swap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod celm;
pub mod error;
pub mod field;
pub mod selm;

pub use celm::Celm;
pub use error::FieldError;
pub use field::Field;
pub use selm::{Selm, SelmMut};
