//! Trifle benchmarking suite
//!
//! Benchmarks for the array, shape and record utilities.

pub mod common;

pub use common::*;
