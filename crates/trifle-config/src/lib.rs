//! Configuration parsing for Trifle
//!
//! This crate handles parsing and validation of trifle.toml files and layers
//! environment and explicit overrides on top of them.

pub mod merge;
pub mod toml;

// Re-export main types
pub use crate::merge::{ConfigLayering, ConfigLoader, ConfigSource};
pub use crate::toml::{AreaSection, TrifleToml};

use trifle_core::error::TrifleError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, TrifleError>;
