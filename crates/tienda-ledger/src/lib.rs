//! # tienda-ledger: Sales Ledger Engine
//!
//! The orchestration layer of Tienda POS. Embedders hold a [`Ledger`] for
//! the sales session and an [`Auth`] for account management; both share a
//! [`tienda_store::Store`] over the same data directory.
//!
//! ## Module Organization
//! ```text
//! tienda_ledger/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── ledger.rs       ◄─── Cart session, commit, report cache
//! ├── auth.rs         ◄─── Register/login/logout, session snapshot
//! └── error.rs        ◄─── Unified error type
//! ```
//!
//! ## Example
//! ```rust
//! use tienda_core::{Client, Product};
//! use tienda_ledger::Ledger;
//! use tienda_store::Store;
//!
//! let store = Store::in_memory();
//! store
//!     .products()
//!     .upsert(&Product::new("p-1", "Cafe de olla 500g", 1000).with_stock(5))
//!     .unwrap();
//! store.clients().upsert(&Client::new("c-1", "Maria")).unwrap();
//!
//! let mut ledger = Ledger::open(store).unwrap();
//! ledger.add_item("p-1", 3).unwrap();
//! ledger.select_client("c-1").unwrap();
//!
//! let sale = ledger.commit_sale().unwrap();
//! assert_eq!(sale.total_cents, 3000);
//! assert_eq!(ledger.report().total_sales, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod ledger;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{Auth, NewAccount};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
