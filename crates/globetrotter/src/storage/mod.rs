//! Key-value backing stores.
//!
//! The trip store only ever reads and writes whole blobs under a fixed key,
//! so any medium that can do that can back it. Three are provided:
//! - [`MemoryStore`] - a `HashMap`, gone when dropped
//! - [`SqliteStore`] - a `SQLite` database with a versioned schema
//! - [`FileStore`] - one file per key in a directory

mod file;
pub mod migrations;
pub mod schema;
mod sqlite;

use std::collections::HashMap;

use crate::error::Result;

pub use file::FileStore;
pub use sqlite::SqliteStore;

/// Byte-oriented key-value persistence.
///
/// Implementations write through immediately: once `write` or `remove`
/// returns `Ok`, a subsequent `read` on any handle to the same medium sees
/// the change. There is no locking between handles.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn write(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove the value under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
