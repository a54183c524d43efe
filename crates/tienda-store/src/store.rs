//! # Store Facade
//!
//! Entry point for persistence: resolves the data directory, owns the
//! key-value backend, and hands out typed repositories.
//!
//! ## Usage
//! ```rust
//! use tienda_store::{Store, StoreConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Store::open(StoreConfig::new(dir.path()));
//!
//! let products = store.products().list().unwrap();
//! assert!(products.is_empty());
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::kv::{FileStore, KeyValueStore, MemoryStore};
use crate::repository::client::ClientRepository;
use crate::repository::product::ProductRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::user::{SessionRepository, UserRepository};

// =============================================================================
// Configuration
// =============================================================================

/// Data directory configuration for the file-backed store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    /// Uses an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves the per-user default data directory.
    ///
    /// - Linux: `~/.local/share/tienda-pos/`
    /// - macOS: `~/Library/Application Support/com.tienda-pos.tienda/`
    /// - Windows: `%APPDATA%/tienda-pos/tienda/data/`
    pub fn default_dir() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("com", "tienda-pos", "tienda").ok_or_else(|| {
            StoreError::NoDataDir("no home directory for this platform".to_string())
        })?;
        Ok(StoreConfig::new(dirs.data_dir()))
    }

    /// The configured data directory.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle to the persisted collections.
///
/// Cheap to clone; repositories share the backend through an `Arc`.
#[derive(Clone)]
pub struct Store {
    kv: Arc<dyn KeyValueStore>,
}

impl Store {
    /// Opens a file-backed store over the configured data directory.
    pub fn open(config: StoreConfig) -> Self {
        info!(dir = %config.data_dir.display(), "Opening store");
        Store {
            kv: Arc::new(FileStore::new(config.data_dir)),
        }
    }

    /// Opens a store over an in-memory backend (tests, dry runs).
    pub fn in_memory() -> Self {
        Store {
            kv: Arc::new(MemoryStore::new()),
        }
    }

    /// Opens a store over a caller-provided backend.
    pub fn with_backend(kv: Arc<dyn KeyValueStore>) -> Self {
        Store { kv }
    }

    /// Product collection repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.kv.clone())
    }

    /// Client collection repository.
    pub fn clients(&self) -> ClientRepository {
        ClientRepository::new(self.kv.clone())
    }

    /// Sale history repository.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.kv.clone())
    }

    /// User account repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.kv.clone())
    }

    /// Session snapshot repository.
    pub fn session(&self) -> SessionRepository {
        SessionRepository::new(self.kv.clone())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
