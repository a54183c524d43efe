//! # Sales Ledger Engine
//!
//! Owns the sale-in-progress, validates it against the live stock ledger,
//! commits stock deductions and sale records, and keeps the aggregate
//! report consistent with the history.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      commit_sale()                                  │
//! │                                                                     │
//! │  1. Client selected? ──────── no ──► MissingClient                  │
//! │  2. Cart has lines? ───────── no ──► EmptyCart                      │
//! │  3. Client resolves? ──────── no ──► ClientNotFound                 │
//! │  4. Re-check EVERY line against CURRENT stock                       │
//! │     └── any line over stock ──────► InsufficientStock               │
//! │                                                                     │
//! │  ── all lines passed: mutation boundary ──                          │
//! │                                                                     │
//! │  5. Build decremented product collection (in memory)                │
//! │  6. Build sale record + appended history (in memory)                │
//! │  7. Publish: write products, write history                          │
//! │  8. Clear cart, recompute report                                    │
//! │                                                                     │
//! │  Any failure in 1-4 leaves cart, products, and history untouched.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The step-4 re-check is the one real correctness property of the system:
//! no committed sale may ever reduce any product's stock below zero, even
//! when stock changed between add-to-cart and commit.

use chrono::Utc;
use tracing::{debug, info};

use tienda_core::cart::{Cart, CartItem};
use tienda_core::report::summarize;
use tienda_core::validation::{validate_selection, validate_quantity};
use tienda_core::{CoreError, ReportSummary, Sale};
use tienda_store::{new_record_id, Store};

use crate::error::LedgerResult;

/// The sales ledger engine.
///
/// Holds the private cart for one logical session, a handle to the
/// persisted collections, and the report cache. Single-threaded by design:
/// every operation runs to completion before returning.
pub struct Ledger {
    store: Store,
    cart: Cart,
    report: ReportSummary,
}

impl Ledger {
    /// Opens a ledger over a store and computes the initial report from
    /// the persisted sale history.
    pub fn open(store: Store) -> LedgerResult<Self> {
        let sales = store.sales().list()?;
        let report = summarize(&sales);

        debug!(sales = sales.len(), "Ledger opened");
        Ok(Ledger {
            store,
            cart: Cart::new(),
            report,
        })
    }

    /// The sale-in-progress.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current aggregate report.
    ///
    /// Recomputed after every commit and at startup; always consistent
    /// with the persisted history.
    pub fn report(&self) -> &ReportSummary {
        &self.report
    }

    /// The underlying store handle.
    pub fn store(&self) -> &Store {
        &self.store
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a product to the cart, fetching its current record from the
    /// catalog.
    ///
    /// ## Failures
    /// - `ValidationError` - empty product selection or non-positive qty
    /// - `ProductNotFound` - id does not resolve in the catalog
    /// - `InsufficientStock` - cumulative cart quantity would exceed the
    ///   product's current stock
    ///
    /// The unit price is frozen the first time a product enters the cart;
    /// later adds of the same product only bump the quantity.
    pub fn add_item(&mut self, product_id: &str, quantity: i64) -> LedgerResult<()> {
        validate_selection("product", product_id)?;
        validate_quantity(quantity)?;

        let product = self
            .store
            .products()
            .get_by_id(product_id)?
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        self.cart.add_item(&product, quantity)?;

        debug!(product = %product.name, quantity, "Item added to cart");
        Ok(())
    }

    /// Removes and returns the cart line at `index`; `None` when out of
    /// bounds.
    pub fn remove_item(&mut self, index: usize) -> Option<CartItem> {
        self.cart.remove_item(index)
    }

    /// Selects the client for the sale-in-progress.
    ///
    /// Resolution against the client collection happens at commit time;
    /// this only rejects an empty selection.
    pub fn select_client(&mut self, client_id: &str) -> LedgerResult<()> {
        validate_selection("client", client_id)?;
        self.cart.set_client(client_id);
        Ok(())
    }

    /// Empties the cart and clears the client selection.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Commits the sale-in-progress.
    ///
    /// Validates the whole cart against the *current* product collection,
    /// then publishes the stock deductions and the new sale record. The
    /// operation is all-or-nothing from the caller's point of view: a
    /// validation failure leaves the cart and every collection untouched,
    /// so the caller can correct the condition and retry.
    pub fn commit_sale(&mut self) -> LedgerResult<Sale> {
        let client_id = match self.cart.client_id() {
            Some(id) => id.to_string(),
            None => return Err(CoreError::MissingClient.into()),
        };

        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let client = self
            .store
            .clients()
            .get_by_id(&client_id)?
            .ok_or_else(|| CoreError::ClientNotFound(client_id.clone()))?;

        // Re-validate every line against current stock before any mutation.
        // Stock may have changed since the lines were added.
        let mut products = self.store.products().list()?;
        for item in self.cart.items() {
            let product = products
                .iter()
                .find(|p| p.id == item.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(item.product_id.clone()))?;

            if item.quantity > product.stock {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested: item.quantity,
                }
                .into());
            }
        }

        // Mutation boundary: build the decremented collection and the new
        // history fully in memory, then publish both.
        let now = Utc::now();
        for item in self.cart.items() {
            if let Some(product) = products.iter_mut().find(|p| p.id == item.product_id) {
                product.stock -= item.quantity;
                product.updated_at = now;
            }
        }

        let sale = Sale {
            id: new_record_id(),
            date: now,
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            items: self.cart.items().iter().map(|i| i.to_sale_item()).collect(),
            total_cents: self.cart.total_cents(),
        };

        let mut sales = self.store.sales().list()?;
        sales.push(sale.clone());

        self.store.products().save_all(&products)?;
        self.store.sales().save_all(&sales)?;

        self.cart.clear();
        self.report = summarize(&sales);

        info!(
            sale_id = %sale.id,
            client = %sale.client_name,
            total = %sale.total(),
            lines = sale.items.len(),
            "Sale committed"
        );
        Ok(sale)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Recomputes the report from the persisted history.
    ///
    /// Always a full scan; never incrementalized, so the summary stays
    /// consistent even after a bulk import or an external correction of
    /// the history.
    pub fn refresh_report(&mut self) -> LedgerResult<&ReportSummary> {
        let sales = self.store.sales().list()?;
        self.report = summarize(&sales);
        Ok(&self.report)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use tienda_core::{Client, Product};
    use tienda_store::{Store, StoreConfig};

    /// Store with one product (id "p-1", stock 5, price $10.00) and one
    /// client (id "c-1").
    fn seeded_store() -> Store {
        let store = Store::in_memory();
        store
            .products()
            .upsert(&Product::new("p-1", "Cafe de olla 500g", 1000).with_stock(5))
            .unwrap();
        store
            .clients()
            .upsert(&Client::new("c-1", "Maria Lopez"))
            .unwrap();
        store
    }

    #[test]
    fn test_add_item_snapshots_line() {
        let mut ledger = Ledger::open(seeded_store()).unwrap();

        ledger.add_item("p-1", 3).unwrap();

        let items = ledger.cart().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].subtotal_cents(), 3000);
    }

    #[test]
    fn test_add_item_rejects_cumulative_over_stock() {
        let mut ledger = Ledger::open(seeded_store()).unwrap();

        ledger.add_item("p-1", 3).unwrap();

        // 3 in cart + 3 more = 6 > 5 available
        let err = ledger.add_item("p-1", 3).unwrap_err();
        match err {
            LedgerError::Core(CoreError::InsufficientStock { available, .. }) => {
                assert_eq!(available, 5)
            }
            other => panic!("unexpected error: {other}"),
        }

        // Cart unchanged: still one line of 3
        assert_eq!(ledger.cart().total_quantity(), 3);
    }

    #[test]
    fn test_remove_item_by_position() {
        let store = seeded_store();
        store
            .products()
            .upsert(&Product::new("p-2", "Pan dulce", 300).with_stock(10))
            .unwrap();
        let mut ledger = Ledger::open(store).unwrap();

        ledger.add_item("p-1", 1).unwrap();
        ledger.add_item("p-2", 2).unwrap();

        let removed = ledger.remove_item(0).unwrap();
        assert_eq!(removed.product_id, "p-1");
        assert_eq!(ledger.cart().line_count(), 1);

        assert!(ledger.remove_item(7).is_none());
    }

    #[test]
    fn test_add_item_unknown_product() {
        let mut ledger = Ledger::open(seeded_store()).unwrap();

        assert!(matches!(
            ledger.add_item("ghost", 1),
            Err(LedgerError::Core(CoreError::ProductNotFound(_)))
        ));
    }

    #[test]
    fn test_add_item_missing_selection() {
        let mut ledger = Ledger::open(seeded_store()).unwrap();

        assert!(ledger.add_item("", 1).is_err());
        assert!(ledger.add_item("p-1", 0).is_err());
        assert!(ledger.cart().is_empty());
    }

    #[test]
    fn test_commit_decrements_stock_and_appends_sale() {
        let store = seeded_store();
        let mut ledger = Ledger::open(store.clone()).unwrap();

        ledger.add_item("p-1", 3).unwrap();
        ledger.select_client("c-1").unwrap();

        let sale = ledger.commit_sale().unwrap();

        assert_eq!(sale.total_cents, 3000);
        assert_eq!(sale.client_name, "Maria Lopez");
        assert_eq!(sale.items.len(), 1);

        // Stock deducted, sale appended, cart cleared
        assert_eq!(store.products().get_by_id("p-1").unwrap().unwrap().stock, 2);
        assert_eq!(store.sales().count().unwrap(), 1);
        assert!(ledger.cart().is_empty());
        assert!(ledger.cart().client_id().is_none());
    }

    #[test]
    fn test_commit_requires_client_and_lines() {
        let mut ledger = Ledger::open(seeded_store()).unwrap();

        // No client selected
        ledger.add_item("p-1", 1).unwrap();
        assert!(matches!(
            ledger.commit_sale(),
            Err(LedgerError::Core(CoreError::MissingClient))
        ));

        // Client selected but cart empty
        ledger.clear_cart();
        ledger.select_client("c-1").unwrap();
        assert!(matches!(
            ledger.commit_sale(),
            Err(LedgerError::Core(CoreError::EmptyCart))
        ));
    }

    #[test]
    fn test_commit_rejects_unknown_client() {
        let store = seeded_store();
        let mut ledger = Ledger::open(store.clone()).unwrap();

        ledger.add_item("p-1", 1).unwrap();
        ledger.select_client("ghost").unwrap();

        assert!(matches!(
            ledger.commit_sale(),
            Err(LedgerError::Core(CoreError::ClientNotFound(_)))
        ));

        // Nothing was mutated
        assert_eq!(store.products().get_by_id("p-1").unwrap().unwrap().stock, 5);
        assert_eq!(store.sales().count().unwrap(), 0);
    }

    #[test]
    fn test_commit_recheck_catches_stale_stock() {
        let store = seeded_store();
        let mut ledger = Ledger::open(store.clone()).unwrap();

        ledger.add_item("p-1", 3).unwrap();
        ledger.select_client("c-1").unwrap();

        // Stock drops to 2 between add and commit
        let mut product = store.products().get_by_id("p-1").unwrap().unwrap();
        product.stock = 2;
        store.products().upsert(&product).unwrap();

        let err = ledger.commit_sale().unwrap_err();
        assert!(err.is_insufficient_stock());

        // No double deduction, no sale appended, cart untouched
        assert_eq!(store.products().get_by_id("p-1").unwrap().unwrap().stock, 2);
        assert_eq!(store.sales().count().unwrap(), 0);
        assert_eq!(ledger.cart().total_quantity(), 3);
    }

    #[test]
    fn test_failed_commit_leaves_cart_deep_equal() {
        let store = seeded_store();
        store
            .products()
            .upsert(&Product::new("p-2", "Pan dulce", 300).with_stock(10))
            .unwrap();
        let mut ledger = Ledger::open(store.clone()).unwrap();

        ledger.add_item("p-1", 2).unwrap();
        ledger.add_item("p-2", 4).unwrap();
        ledger.select_client("c-1").unwrap();
        let before = ledger.cart().clone();

        // Second line goes stale: p-2 stock drops below the cart quantity
        let mut product = store.products().get_by_id("p-2").unwrap().unwrap();
        product.stock = 1;
        store.products().upsert(&product).unwrap();

        assert!(ledger.commit_sale().is_err());

        // Cart is byte-for-byte what it was before the failed commit
        assert_eq!(*ledger.cart(), before);
        // And no partial stock deduction happened on the passing line
        assert_eq!(store.products().get_by_id("p-1").unwrap().unwrap().stock, 5);
    }

    #[test]
    fn test_stock_never_negative_after_any_commit_sequence() {
        let store = seeded_store();
        let mut ledger = Ledger::open(store.clone()).unwrap();

        // Sell the full stock in two sales, then fail a third
        for qty in [3, 2, 1] {
            if ledger.add_item("p-1", qty).is_err() {
                continue;
            }
            ledger.select_client("c-1").unwrap();
            let _ = ledger.commit_sale();
        }

        let product = store.products().get_by_id("p-1").unwrap().unwrap();
        assert!(product.stock >= 0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_report_recomputed_after_commit() {
        let store = seeded_store();
        store
            .clients()
            .upsert(&Client::new("c-2", "Pedro Ramirez"))
            .unwrap();
        let mut ledger = Ledger::open(store).unwrap();

        assert_eq!(ledger.report().total_sales, 0);

        ledger.add_item("p-1", 2).unwrap();
        ledger.select_client("c-1").unwrap();
        ledger.commit_sale().unwrap();

        ledger.add_item("p-1", 1).unwrap();
        ledger.select_client("c-2").unwrap();
        ledger.commit_sale().unwrap();

        let report = ledger.report();
        assert_eq!(report.total_sales, 2);
        assert_eq!(report.total_revenue_cents, 3000);
        assert_eq!(report.total_items, 3);

        // c-1 spent 2000, c-2 spent 1000
        assert_eq!(report.top_client.as_ref().unwrap().name, "Maria Lopez");
        assert_eq!(report.top_client.as_ref().unwrap().amount_cents, 2000);
        assert_eq!(report.top_product.as_ref().unwrap().quantity, 3);
    }

    #[test]
    fn test_refresh_report_is_idempotent() {
        let mut ledger = Ledger::open(seeded_store()).unwrap();

        ledger.add_item("p-1", 1).unwrap();
        ledger.select_client("c-1").unwrap();
        ledger.commit_sale().unwrap();

        let first = ledger.refresh_report().unwrap().clone();
        let second = ledger.refresh_report().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_computes_report_from_persisted_history() {
        let store = seeded_store();
        {
            let mut ledger = Ledger::open(store.clone()).unwrap();
            ledger.add_item("p-1", 2).unwrap();
            ledger.select_client("c-1").unwrap();
            ledger.commit_sale().unwrap();
        }

        // A fresh ledger over the same backend sees the history at startup
        let ledger = Ledger::open(store).unwrap();
        assert_eq!(ledger.report().total_sales, 1);
        assert_eq!(ledger.report().total_revenue_cents, 2000);
    }

    #[test]
    fn test_commit_publishes_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());

        {
            let store = Store::open(config.clone());
            store
                .products()
                .upsert(&Product::new("p-1", "Cafe de olla 500g", 1000).with_stock(5))
                .unwrap();
            store
                .clients()
                .upsert(&Client::new("c-1", "Maria Lopez"))
                .unwrap();

            let mut ledger = Ledger::open(store).unwrap();
            ledger.add_item("p-1", 3).unwrap();
            ledger.select_client("c-1").unwrap();
            ledger.commit_sale().unwrap();
        }

        // A completely fresh store over the same directory observes both
        // published collections
        let store = Store::open(config);
        assert_eq!(store.products().get_by_id("p-1").unwrap().unwrap().stock, 2);
        let sales = store.sales().list().unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].total_cents, 3000);
    }
}
