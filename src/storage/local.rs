//! Local filesystem cache.
//!
//! The whole mapping is held in memory and rewritten to one JSON file after
//! every insert. Writes go to a temp file that is renamed over the cache, so
//! the file on disk is always the last complete state.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::storage::{CacheKey, KeyValueStore};

/// JSON file-backed cache.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl FileStore {
    /// Open the cache at `path`.
    ///
    /// A missing file yields an empty cache. A file that is not a JSON object,
    /// or holds a key that is neither a URL nor a postal code, is an error;
    /// it is never overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, Value> = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| AppError::cache_corrupt(&path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No cache at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        for raw in entries.keys() {
            CacheKey::parse(raw).map_err(|e| AppError::cache_corrupt(&path, e))?;
        }

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All cached entries keyed by their raw key.
    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    /// Ensure parent directory exists.
    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Sibling of the cache file with `.tmp` appended to its full name.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Write the full mapping atomically (write to temp, then rename).
    fn persist(&self) -> Result<()> {
        self.ensure_dir()?;
        let bytes = serde_json::to_vec_pretty(&self.entries)?;

        let tmp = self.temp_path();
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &CacheKey) -> Option<&Value> {
        self.entries.get(key.as_str())
    }

    fn put(&mut self, key: CacheKey, value: Value) -> Result<()> {
        let raw = key.as_str().to_string();
        let previous = self.entries.insert(raw.clone(), value);

        if let Err(e) = self.persist() {
            // Keep memory in step with the file.
            match previous {
                Some(old) => self.entries.insert(raw, old),
                None => self.entries.remove(&raw),
            };
            return Err(e);
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
