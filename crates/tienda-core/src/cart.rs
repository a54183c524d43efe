//! # Cart (Sale-in-progress)
//!
//! The mutable collection of line items representing a sale that has not
//! been committed yet, plus the selected client.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Caller Action             Cart State Change                        │
//! │  ─────────────             ─────────────────                        │
//! │                                                                     │
//! │  add_item(product, qty) ──► push line / bump quantity               │
//! │                             (stock-checked, price frozen)           │
//! │                                                                     │
//! │  remove_item(index) ──────► items.remove(index)                     │
//! │                                                                     │
//! │  set_client(id) ──────────► client_id = Some(id)                    │
//! │                                                                     │
//! │  clear() ─────────────────► items + client reset                    │
//! │                                                                     │
//! │  total() ─────────────────► (read only, sum of subtotals)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product again bumps
//!   the quantity of the existing line)
//! - Line quantity never exceeds the product stock observed at add time
//! - Unit price is frozen at first add and kept on later adds of the same
//!   product, even if the catalog price changed in between

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, SaleItem};
use crate::validation::validate_quantity;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// `name` and `unit_price_cents` are frozen copies of the product data at
/// the time the line was created, so the cart displays consistent data even
/// if the catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line references.
    pub product_id: String,

    /// Product name at time of first add (frozen).
    pub name: String,

    /// Quantity in the cart. Always positive.
    pub quantity: i64,

    /// Unit price in cents at time of first add (frozen).
    pub unit_price_cents: i64,
}

impl CartItem {
    /// Creates a cart line from a product, freezing name and price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            unit_price_cents: product.price_cents,
        }
    }

    /// Line subtotal in cents (unit price × quantity).
    #[inline]
    pub fn subtotal_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Snapshot of this line for a committed sale record.
    pub fn to_sale_item(&self) -> SaleItem {
        SaleItem::new(
            self.product_id.clone(),
            self.name.clone(),
            self.quantity,
            self.unit_price_cents,
        )
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The sale-in-progress: an ordered sequence of lines plus the selected
/// client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order. Updates never reorder.
    items: Vec<CartItem>,

    /// Selected client, if any.
    client_id: Option<String>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart or bumps the quantity of its existing
    /// line.
    ///
    /// ## Behavior
    /// - Quantity must be positive.
    /// - The *cumulative* quantity (existing line + new) is checked against
    ///   the product's current stock; exceeding it fails with
    ///   [`CoreError::InsufficientStock`] and leaves the cart untouched.
    /// - If the product is already in the cart, only the quantity changes;
    ///   the unit price stays frozen from the first add and is NOT
    ///   re-fetched.
    /// - New lines are appended in insertion order with the product's
    ///   current price as a snapshot.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let existing_qty = self
            .items
            .iter()
            .find(|i| i.product_id == product.id)
            .map(|i| i.quantity)
            .unwrap_or(0);

        let requested = existing_qty + quantity;
        if requested > product.stock {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = requested;
            return Ok(());
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes and returns the line at `index`.
    ///
    /// Out-of-bounds indices return `None` and leave the cart untouched.
    pub fn remove_item(&mut self, index: usize) -> Option<CartItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Selects the client for this sale.
    pub fn set_client(&mut self, client_id: impl Into<String>) {
        self.client_id = Some(client_id.into());
    }

    /// The selected client id, if any.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total in cents. Pure; always consistent with current lines.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|i| i.subtotal_cents()).sum()
    }

    /// Cart total as Money.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.subtotal()).sum()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the cart and clears the client selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.client_id = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents).with_stock(stock)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("p-1", 999, 10);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_cents(), 1998);
    }

    #[test]
    fn test_cart_add_same_product_bumps_quantity() {
        let mut cart = Cart::new();
        let product = test_product("p-1", 999, 10);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_cumulative_stock_check() {
        let mut cart = Cart::new();
        let product = test_product("p-1", 1000, 5);

        cart.add_item(&product, 3).unwrap();

        // 3 already in cart + 3 more = 6 > 5 in stock
        let err = cart.add_item(&product, 3).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 5);
                assert_eq!(requested, 6);
            }
            other => panic!("unexpected error: {other}"),
        }

        // Cart unchanged by the failed add
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_cents(), 3000);
    }

    #[test]
    fn test_cart_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product("p-1", 1000, 5);

        assert!(cart.add_item(&product, 0).is_err());
        assert!(cart.add_item(&product, -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_price_frozen_on_repeat_add() {
        let mut cart = Cart::new();
        let mut product = test_product("p-1", 1000, 10);

        cart.add_item(&product, 1).unwrap();

        // Catalog price changes between adds of the same product
        product.price_cents = 2000;
        cart.add_item(&product, 1).unwrap();

        // Line keeps the first-add price for both units
        assert_eq!(cart.items()[0].unit_price_cents, 1000);
        assert_eq!(cart.total_cents(), 2000);
    }

    #[test]
    fn test_cart_remove_item() {
        let mut cart = Cart::new();
        let first = test_product("p-1", 1000, 5);
        let second = test_product("p-2", 500, 5);

        cart.add_item(&first, 1).unwrap();
        cart.add_item(&second, 2).unwrap();

        let removed = cart.remove_item(0).unwrap();
        assert_eq!(removed.product_id, "p-1");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].product_id, "p-2");

        // Out of bounds is a no-op
        assert!(cart.remove_item(5).is_none());
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_cart_insertion_order_preserved() {
        let mut cart = Cart::new();
        let first = test_product("p-1", 100, 10);
        let second = test_product("p-2", 200, 10);

        cart.add_item(&first, 1).unwrap();
        cart.add_item(&second, 1).unwrap();
        // Updating the first line must not reorder
        cart.add_item(&first, 1).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p-1", "p-2"]);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        let product = test_product("p-1", 999, 5);

        cart.add_item(&product, 2).unwrap();
        cart.set_client("c-1");
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.client_id().is_none());
    }

    #[test]
    fn test_cart_to_sale_item_snapshot() {
        let mut cart = Cart::new();
        let product = test_product("p-1", 1000, 5);

        cart.add_item(&product, 3).unwrap();

        let snapshot = cart.items()[0].to_sale_item();
        assert_eq!(snapshot.quantity, 3);
        assert_eq!(snapshot.unit_price_cents, 1000);
        assert_eq!(snapshot.subtotal_cents, 3000);
    }
}
