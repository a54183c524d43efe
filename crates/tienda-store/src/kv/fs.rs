//! # File Backend
//!
//! Production key-value backend: one `<key>.json` document per key under a
//! data directory. The directory is created on first write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::KeyValueStore;
use crate::error::StoreResult;

/// File-backed key-value store.
///
/// Keys are fixed collection names (see [`super::keys`]), so they map
/// directly to file names without escaping.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a file store rooted at `root`. The directory does not need
    /// to exist yet; it is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    /// The data directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn ensure_root(&self) -> StoreResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.document_path(key);
        if !path.exists() {
            return Ok(None);
        }

        debug!(key = %key, "Reading document");
        let payload = fs::read_to_string(path)?;
        Ok(Some(payload))
    }

    fn write(&self, key: &str, payload: &str) -> StoreResult<()> {
        self.ensure_root()?;

        debug!(key = %key, bytes = payload.len(), "Writing document");
        fs::write(self.document_path(key), payload)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.document_path(key);
        if path.exists() {
            debug!(key = %key, "Removing document");
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
