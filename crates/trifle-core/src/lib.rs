//! # trifle-core
//!
//! Small, independent utilities over numbers, shapes and records.
//!
//! This crate provides:
//! - `sum_array` and `remove_duplicates` over numeric slices
//! - The `Shape` tagged union and `calculate_shape_area`
//! - Typed and dynamic property access (`get_property`, `get_property_dyn`)
//! - `Profile` updates and shallow record merging
//! - Key validation against truthiness (`validate_keys`, `validate_keys_dyn`)
//! - TrifleError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Data types and the operations defined on them
//! - `error`: Error types and result aliases
//! - `utils`: Array helpers, rounding and truthiness

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{TrifleError, TrifleResult};
pub use types::{
    calculate_shape_area, calculate_shape_area_with_precision, get_property, get_property_dyn,
    merge_records, update_profile, validate_keys, validate_keys_dyn, Field, Profile, ProfileKey,
    ProfileUpdate, Record, Shape,
};
pub use utils::{remove_duplicates, sum_array, Truthy};
