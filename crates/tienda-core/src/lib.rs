//! # tienda-core: Pure Business Logic for Tienda POS
//!
//! This crate is the **heart** of Tienda POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Tienda POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  tienda-ledger (engine)                       │ │
//! │  │    add_item ──► commit_sale ──► report refresh                │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ tienda-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │ │
//! │  │  │  types  │ │  money  │ │  cart   │ │ report  │ │validation│ │ │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │Summary  │ │  rules  │ │ │
//! │  │  │  Sale   │ │ (cents) │ │CartItem │ │top picks│ │  checks │ │ │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              tienda-store (persistence layer)                 │ │
//! │  │          JSON key-value documents, repositories               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Client, Sale, ReportSummary, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The sale-in-progress: line items and stock checks
//! - [`report`] - Aggregate report derivation over the sale history
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::cart::Cart;
//! use tienda_core::types::Product;
//!
//! let product = Product::new("p-1", "Cafe de olla 500g", 4000).with_stock(5);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 3).unwrap();
//!
//! assert_eq!(cart.total().cents(), 12000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tienda_core::Money` instead of
// `use tienda_core::money::Money`

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::summarize;
pub use types::*;
