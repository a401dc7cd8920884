//! In-memory cache for tests and dry runs.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Result;
use crate::storage::{CacheKey, KeyValueStore};

/// Cache that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw keys currently cached, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &CacheKey) -> Option<&Value> {
        self.entries.get(key.as_str())
    }

    fn put(&mut self, key: CacheKey, value: Value) -> Result<()> {
        self.entries.insert(key.as_str().to_string(), value);
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
