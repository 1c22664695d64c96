//! Utility functions and helpers.
//!
//! Numeric slice operations, decimal rounding and truthiness checks.

pub mod array;
pub mod round;
pub mod truthy;

// Re-export commonly used utilities
pub use array::{remove_duplicates, sum_array, SameValueZero};
pub use round::round_to_places;
pub use truthy::Truthy;
