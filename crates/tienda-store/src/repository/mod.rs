//! # Repository Module
//!
//! Typed repositories over the key-value backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                               │
//! │                                                                     │
//! │  Ledger operation                                                   │
//! │       │                                                             │
//! │       │  store.products().get_by_id("p-1")                          │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── list()                                                         │
//! │  ├── get_by_id(id)                                                  │
//! │  ├── upsert(product)                                                │
//! │  ├── delete(id)                                                     │
//! │  └── save_all(products)                                             │
//! │       │                                                             │
//! │       │  read/write whole JSON document                             │
//! │       ▼                                                             │
//! │  KeyValueStore backend                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation deserializes the full collection, applies the change, and
//! rewrites the full document. This is the designed behavior for the data
//! volumes of a single small store; repositories never do partial writes.
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - product catalog CRUD
//! - [`client::ClientRepository`] - client records CRUD
//! - [`sale::SaleRepository`] - append-only sale history
//! - [`user::UserRepository`] / [`user::SessionRepository`] - accounts and
//!   the logged-in session snapshot

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

pub mod client;
pub mod product;
pub mod sale;
pub mod user;

/// Reads a whole collection document. A key that was never written is an
/// empty collection.
pub(crate) fn read_collection<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Vec<T>> {
    match kv.read(key)? {
        Some(payload) => Ok(serde_json::from_str(&payload)?),
        None => Ok(Vec::new()),
    }
}

/// Rewrites a whole collection document.
pub(crate) fn write_collection<T: Serialize>(
    kv: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let payload = serde_json::to_string_pretty(items)?;
    kv.write(key, &payload)
}
