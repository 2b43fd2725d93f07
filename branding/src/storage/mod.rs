//! Key-value persistence backends for cached themes.
//!
//! The cache addresses a local, durable store through the [`KeyValueStore`]
//! trait so the same resolution logic runs against an in-memory map in tests
//! and a file-per-key directory in the binary. Backends hold serialized
//! structured text; they never interpret values.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Local key-value store addressed by string keys.
///
/// Reads are infallible from the caller's point of view: a backend failure
/// reads as an absent entry. Writes and removals report failure so callers
/// can decide whether persistence is best-effort or must succeed.
pub trait KeyValueStore {
    /// Look up the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous entry.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the entry under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
