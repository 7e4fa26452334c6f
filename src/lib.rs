//! # u-collections
//!
//! Collection and sequence primitives for the U-Engine ecosystem.
//!
//! This crate extends `std` iterators, vectors, maps and arrays with small,
//! domain-agnostic conveniences. It knows nothing about scheduling, nesting,
//! geometry, or any consumer domain.
//!
//! ## Modules
//!
//! - [`ordinal`] — `second()` through `tenth()` on any iterator
//! - [`extrema`] — every element tied for the max or min key
//! - [`sequence`] — natural, arithmetic, geometric, Fibonacci, prime and
//!   Collatz sequences
//! - [`random`] — seeded RNGs, shuffling, random choice and removal
//!   (feature `random`, on by default)
//! - [`collections`] — row/column grids, case-insensitive map lookup,
//!   list replace/swap/move
//!
//! ## Design Philosophy
//!
//! - **Single pass**: ordinal and extrema scans never materialize their input
//! - **Extension traits**: blanket impls over `IntoIterator`, `[T]`, `Vec<T>`
//! - **Property-based testing**: invariants verified via proptest

pub mod collections;
pub mod error;
pub mod extrema;
pub mod ordinal;
#[cfg(feature = "random")]
pub mod random;
pub mod sequence;

pub use error::{Error, Result};
