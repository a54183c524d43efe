//! # Key-Value Backends
//!
//! The storage abstraction for Tienda POS: a string-keyed read/write of
//! whole JSON documents. One logical key per collection, get-all / set-all
//! semantics only - there are no partial or incremental writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   under a data directory
//! - [`memory::MemoryStore`]: in-memory storage for tests - fast, isolated,
//!   no filesystem
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── products.json       # Full product collection
//! ├── clients.json        # Full client collection
//! ├── sales.json          # Append-only sale history
//! ├── users.json          # Store accounts
//! └── session_user.json   # Logged-in user snapshot
//! ```

use crate::error::StoreResult;

pub mod fs;
pub mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

/// Fixed logical keys for the persisted collections.
pub mod keys {
    /// Product collection.
    pub const PRODUCTS: &str = "products";
    /// Client collection.
    pub const CLIENTS: &str = "clients";
    /// Append-only sale history.
    pub const SALES: &str = "sales";
    /// Store accounts.
    pub const USERS: &str = "users";
    /// Logged-in user snapshot.
    pub const SESSION: &str = "session_user";
}

/// Abstract interface for whole-document storage.
///
/// Implementations must treat every `write` as a full replacement of the
/// document stored under `key`.
pub trait KeyValueStore: Send + Sync {
    /// Reads the document stored under `key`. `Ok(None)` when the key has
    /// never been written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the document stored under `key`.
    fn write(&self, key: &str, payload: &str) -> StoreResult<()>;

    /// Removes the document stored under `key`. Removing an absent key is
    /// a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
