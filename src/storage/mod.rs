//! Storage abstractions for the response cache.
//!
//! Every resolver reads and writes one flat JSON mapping:
//!
//! ```text
//! cache.json
//! {
//!   "https://www.nps.gov/index.htm":          { "michigan": "https://www.nps.gov/state/mi/index.htm", ... },
//!   "https://www.nps.gov/state/mi/index.htm": [ "https://www.nps.gov/isro/index.htm", ... ],
//!   "https://www.nps.gov/isro/index.htm":     { "category": ..., "name": ..., ... },
//!   "49931":                                  { "searchResults": [ ... ], ... }
//! }
//! ```
//!
//! Entries are never refreshed once written.

pub mod key;
pub mod local;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, Result};

// Re-export for convenience
pub use key::CacheKey;
pub use local::FileStore;
pub use memory::MemoryStore;

/// Key-value store every resolver caches through.
pub trait KeyValueStore {
    /// Look up a cached value.
    fn get(&self, key: &CacheKey) -> Option<&Value>;

    /// Insert a value and persist the whole store before returning.
    fn put(&mut self, key: CacheKey, value: Value) -> Result<()>;

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &CacheKey) -> bool {
        self.get(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &CacheKey) -> Option<&Value> {
        (**self).get(key)
    }

    fn put(&mut self, key: CacheKey, value: Value) -> Result<()> {
        (**self).put(key, value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Decode a cached value into `T`.
///
/// A value of the wrong shape is reported as a corrupt entry rather than
/// silently refetched.
pub fn read_cached<T, S>(store: &S, key: &CacheKey) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| AppError::cache_entry(key.as_str(), e)),
        None => Ok(None),
    }
}

/// Encode `value` and store it under `key`.
pub fn write_cached<T, S>(store: &mut S, key: CacheKey, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let value = serde_json::to_value(value)?;
    store.put(key, value)
}
