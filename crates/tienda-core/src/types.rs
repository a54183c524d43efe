//! # Domain Types
//!
//! Core domain types used throughout Tienda POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │    Product    │   │    Client     │   │     User      │         │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │         │
//! │  │  id (UUID)    │   │  id (UUID)    │   │  id (UUID)    │         │
//! │  │  name         │   │  name         │   │  username     │         │
//! │  │  stock        │   │  address      │   │  password     │         │
//! │  │  price_cents  │   │  phone/email  │   │  store_name   │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │     Sale      │   │   SaleItem    │   │ ReportSummary │         │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │         │
//! │  │  id (UUID)    │   │  product_id   │   │  total_sales  │         │
//! │  │  date         │   │  name (snap)  │   │  revenue      │         │
//! │  │  client snap  │   │  price (snap) │   │  top_client   │         │
//! │  │  items, total │   │  subtotal     │   │  top_product  │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `SaleItem.name`/`unit_price_cents` and `Sale.client_name` are frozen
//! copies taken at commit time. Historical records stay stable even if the
//! referenced product or client is later renamed or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the catalog and on sale lines.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Current stock level. Never negative after any committed sale.
    pub stock: i64,

    /// Acquisition cost in cents (for margin review).
    pub cost_cents: i64,

    /// Sale price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Optional image reference (URL or data URI).
    pub image: Option<String>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with zero stock and cost; builder methods fill the
    /// rest.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        let now = Utc::now();
        Product {
            id: id.into(),
            name: name.into(),
            description: None,
            stock: 0,
            cost_cents: 0,
            price_cents,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the initial stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Sets the acquisition cost.
    pub fn with_cost(mut self, cost_cents: i64) -> Self {
        self.cost_cents = cost_cents;
        self
    }

    /// Returns the sale price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Client
// =============================================================================

/// A client record. Read-only to the sales ledger; sales snapshot the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, snapshotted onto committed sales.
    pub name: String,

    /// Postal address.
    pub address: Option<String>,

    /// Contact phone number.
    pub phone: Option<String>,

    /// Contact email.
    pub email: Option<String>,

    /// Optional image reference.
    pub image: Option<String>,
}

impl Client {
    /// Creates a client with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Client {
            id: id.into(),
            name: name.into(),
            address: None,
            phone: None,
            email: None,
            image: None,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A store account. One user owns the whole single-tenant data set.
///
/// The password is stored as provided; credential hardening is outside the
/// scope of this library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Login name. Unique across the user collection.
    pub username: String,

    /// Login password.
    pub password: String,

    /// Display name of the store this account manages.
    pub store_name: String,

    /// Optional store image reference.
    pub store_image: Option<String>,
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line item in a committed sale.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    /// Product this line references.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Quantity sold. Always positive.
    pub quantity: i64,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Line total (unit_price × quantity). Derived, never set independently.
    pub subtotal_cents: i64,
}

impl SaleItem {
    /// Builds a line with the subtotal derived from quantity and unit price.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit_price_cents: i64,
    ) -> Self {
        SaleItem {
            product_id: product_id.into(),
            name: name.into(),
            quantity,
            unit_price_cents,
            subtotal_cents: unit_price_cents * quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A committed sale transaction. Immutable once created; the sale history
/// is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the sale was committed.
    pub date: DateTime<Utc>,

    /// Client this sale was made to.
    pub client_id: String,

    /// Client name at time of sale (frozen).
    pub client_name: String,

    /// Line items, in the order they were added to the cart.
    pub items: Vec<SaleItem>,

    /// Sum of line subtotals in cents.
    pub total_cents: i64,
}

impl Sale {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total quantity across all lines.
    pub fn item_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Report Summary
// =============================================================================

/// Top client by cumulative sale amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopClient {
    /// Latest-seen name of the client in the history.
    pub name: String,

    /// Cumulative amount across all their sales, in cents.
    pub amount_cents: i64,
}

/// Top product by cumulative quantity sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Name of the product as first seen in the history.
    pub name: String,

    /// Cumulative quantity across all sale lines referencing it.
    pub quantity: i64,
}

/// Aggregate statistics derived from the full sale history.
///
/// Fully derived - always recomputable from the sale history, never
/// independently mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Count of committed sales.
    pub total_sales: usize,

    /// Sum of sale totals in cents.
    pub total_revenue_cents: i64,

    /// Sum of quantities across every sale line.
    pub total_items: i64,

    /// Client with the maximum cumulative sale amount, if any sales exist.
    pub top_client: Option<TopClient>,

    /// Product with the maximum cumulative quantity, if any sales exist.
    pub top_product: Option<TopProduct>,
}

impl ReportSummary {
    /// Returns total revenue as Money.
    #[inline]
    pub fn total_revenue(&self) -> Money {
        Money::from_cents(self.total_revenue_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
