//! Record access, validation and merging.
//!
//! Records come in two flavours. Typed records are structs: each key is a
//! zero-sized type implementing [`Field`], so a lookup can only name a key
//! that exists and returns the field's own type, and [`Record::Key`] lists
//! the keys for validation. Dynamic records are JSON objects whose keys are
//! only known at runtime; lookups on them are checked and may fail.

use crate::error::{TrifleError, TrifleResult};
use crate::utils::Truthy;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// A JSON object used as a record with runtime-known keys
pub type DynRecord = Map<String, Value>;

/// A key of record type `R` whose value has type `Self::Value`
pub trait Field<R> {
    type Value;

    /// Borrow this key's value from `record`
    fn get(self, record: &R) -> &Self::Value;
}

/// A record whose key set is enumerable at compile time
pub trait Record {
    /// One variant per field of the record
    type Key: Copy + fmt::Debug;

    /// Whether the value stored under `key` is truthy
    fn is_truthy_at(&self, key: Self::Key) -> bool;
}

/// Borrow the value stored under `key`, keeping its type
pub fn get_property<R, K>(record: &R, key: K) -> &K::Value
where
    K: Field<R>,
{
    key.get(record)
}

/// Check that every listed key holds a truthy value.
///
/// An empty key list is vacuously valid.
pub fn validate_keys<R: Record>(record: &R, keys: &[R::Key]) -> bool {
    match keys.iter().find(|key| !record.is_truthy_at(**key)) {
        Some(key) => {
            debug!(key = ?key, "Key validation failed on falsy value");
            false
        },
        None => true,
    }
}

/// Look up `key` in a dynamic record
pub fn get_property_dyn<'a>(record: &'a DynRecord, key: &str) -> TrifleResult<&'a Value> {
    record.get(key).ok_or_else(|| TrifleError::unknown_key(key))
}

/// Check that every listed key holds a truthy value in a dynamic record.
///
/// A missing key counts as falsy.
pub fn validate_keys_dyn(record: &DynRecord, keys: &[&str]) -> bool {
    match keys
        .iter()
        .find(|key| !record.get(**key).is_some_and(Truthy::is_truthy))
    {
        Some(key) => {
            debug!(key = %key, "Key validation failed on missing or falsy value");
            false
        },
        None => true,
    }
}

/// Shallow merge: every key of `base`, with `overlay` winning on collision.
///
/// Neither input is modified.
pub fn merge_records(base: &DynRecord, overlay: &DynRecord) -> DynRecord {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
