//! # u-percolation
//!
//! Monte Carlo estimation of the site percolation threshold on a square
//! lattice.
//!
//! Sites of an N×N grid are opened uniformly at random until an open path
//! joins the top row to the bottom row. Connectivity is tracked with a
//! weighted quick-union forest and two virtual sentinel nodes, so each
//! percolation check is a single root comparison.
//!
//! ## Modules
//!
//! - [`collections`] — Disjoint-set forest (path halving, union by size)
//! - [`grid`] — The percolation grid and its sentinel wiring
//! - [`experiment`] — Single trials and multi-trial statistics
//! - [`random`] — Seeded generators and uniform site selection
//! - [`stats`] — Numerically stable mean and variance
//!
//! ## Design Philosophy
//!
//! - **Explicit randomness**: every trial takes its generator as an
//!   argument, so a seed reproduces a run exactly
//! - **Checked coordinates**: out-of-range sizes and sites are reported as
//!   [`PercolationError`] rather than indexing past the grid
//! - **Property-based testing**: connectivity invariants verified via proptest

pub mod collections;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod stats;

pub use error::{PercolationError, Result};
