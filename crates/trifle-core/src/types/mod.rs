//! Data types for Trifle and the operations defined on them.
//!
//! - Shapes and their areas
//! - Profiles and partial updates
//! - Typed and dynamic record access

pub mod profile;
pub mod record;
pub mod shape;

// Re-export all public types
pub use profile::{fields, update_profile, Profile, ProfileKey, ProfileUpdate};
pub use record::{
    get_property, get_property_dyn, merge_records, validate_keys, validate_keys_dyn, DynRecord,
    Field, Record,
};
pub use shape::{
    calculate_shape_area, calculate_shape_area_with_precision, Shape, DEFAULT_AREA_PRECISION,
};
