//! # tienda-store: Persistence Layer for Tienda POS
//!
//! This crate provides persistence for the Tienda POS system. Collections
//! are stored as whole JSON documents in a simple key-value store: one
//! logical key per collection, every mutation rewrites the full affected
//! collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Tienda POS Data Flow                           │
//! │                                                                     │
//! │  Ledger operation (commit_sale)                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  tienda-store (THIS CRATE)                    │ │
//! │  │                                                               │ │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌────────────────┐  │ │
//! │  │   │    Store     │   │ Repositories  │   │  KeyValueStore │  │ │
//! │  │   │  (store.rs)  │   │ (product.rs)  │   │   (kv/)        │  │ │
//! │  │   │              │   │               │   │                │  │ │
//! │  │   │ StoreConfig  │◄──│ ProductRepo   │──►│ FileStore      │  │ │
//! │  │   │ data dir     │   │ SaleRepo ...  │   │ MemoryStore    │  │ │
//! │  │   └──────────────┘   └───────────────┘   └────────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    Data Directory                             │ │
//! │  │   products.json  clients.json  sales.json  users.json         │ │
//! │  │   session_user.json                                           │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The key-value backends (file and in-memory)
//! - [`store`] - Store facade and data directory configuration
//! - [`error`] - Storage error types
//! - [`repository`] - Typed repositories (product, client, sale, user)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tienda_store::{Store, StoreConfig};
//!
//! // Open a store over a data directory
//! let store = Store::open(StoreConfig::new("path/to/data"))?;
//!
//! // Use repositories
//! let products = store.products().list()?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::client::ClientRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
pub use repository::user::{SessionRepository, UserRepository};

/// Generates a fresh globally-unique record id.
///
/// UUID v4: unique without coordination, safe to mint offline.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
