//! # In-Memory Backend
//!
//! Key-value backend for tests: documents live in a `HashMap`, nothing
//! touches the filesystem. Behavior matches [`super::fs::FileStore`] for
//! the whole-document contract.

use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::StoreResult;

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("memory store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("memory store mutex poisoned");
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("memory store mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
