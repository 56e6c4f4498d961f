//! Staggered space-time grid for CESE simulations.
//!
//! This crate defines the [`Grid`] — the immutable coordinate table and
//! index algebra through which all element accessors and the marching
//! engine address the mesh — along with the [`Parity`] of the two
//! alternating half-time planes.
//!
//! # Index model
//!
//! The grid stores node and half-node coordinates interleaved in one flat
//! table, padded by a fixed ghost count at each end. Which half-time plane
//! a raw slot belongs to is a pure function of its index parity, so
//! neighbor relations never need stored links: every "reference" between
//! elements is integer arithmetic on raw indices.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod parity;

pub use error::GridError;
pub use grid::Grid;
pub use parity::Parity;
