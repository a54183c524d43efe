//! # Product Repository
//!
//! Persistence for the product catalog.
//!
//! The sales ledger only reads products and rewrites stock levels; creating
//! and deleting products is the catalog management surface.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::{keys, KeyValueStore};
use crate::repository::{read_collection, write_collection};
use tienda_core::Product;

/// Repository for the product collection.
#[derive(Clone)]
pub struct ProductRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        ProductRepository { kv }
    }

    /// Lists the full product collection in stored order.
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        read_collection(self.kv.as_ref(), keys::PRODUCTS)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - product not found
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let products = self.list()?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    /// Inserts a new product or replaces the stored record with the same
    /// id, keeping its position in the collection. `updated_at` is stamped
    /// on replacement.
    pub fn upsert(&self, product: &Product) -> StoreResult<()> {
        debug!(id = %product.id, name = %product.name, "Upserting product");

        let mut products = self.list()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = Product {
                    updated_at: Utc::now(),
                    ..product.clone()
                };
            }
            None => products.push(product.clone()),
        }

        write_collection(self.kv.as_ref(), keys::PRODUCTS, &products)
    }

    /// Deletes a product by id.
    ///
    /// ## Returns
    /// * `Err(StoreError::NotFound)` - no product with that id
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let mut products = self.list()?;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(StoreError::not_found("Product", id));
        }

        write_collection(self.kv.as_ref(), keys::PRODUCTS, &products)
    }

    /// Replaces the entire product collection.
    ///
    /// Used by the ledger to publish post-commit stock levels in one write.
    pub fn save_all(&self, products: &[Product]) -> StoreResult<()> {
        debug!(count = products.len(), "Saving product collection");
        write_collection(self.kv.as_ref(), keys::PRODUCTS, products)
    }

    /// Counts products (for diagnostics and seed guards).
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn repo() -> ProductRepository {
        ProductRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let repo = repo();
        let product = Product::new("p-1", "Cafe 500g", 4000).with_stock(10);

        repo.upsert(&product).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let renamed = Product {
            name: "Cafe de olla 500g".to_string(),
            ..product
        };
        repo.upsert(&renamed).unwrap();

        let stored = repo.get_by_id("p-1").unwrap().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(stored.name, "Cafe de olla 500g");
    }

    #[test]
    fn test_upsert_keeps_collection_order() {
        let repo = repo();
        repo.upsert(&Product::new("p-1", "Cafe", 4000)).unwrap();
        repo.upsert(&Product::new("p-2", "Pan", 300)).unwrap();
        repo.upsert(&Product::new("p-3", "Leche", 2200)).unwrap();

        // Replacing the middle record must not reorder the others
        repo.upsert(&Product::new("p-2", "Pan dulce", 350)).unwrap();

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p-1", "p-2", "p-3"]);
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let repo = repo();
        assert!(repo.get_by_id("nope").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let repo = repo();
        repo.upsert(&Product::new("p-1", "Cafe", 4000)).unwrap();

        repo.delete("p-1").unwrap();
        assert_eq!(repo.count().unwrap(), 0);

        assert!(matches!(
            repo.delete("p-1"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_save_all_replaces_collection() {
        let repo = repo();
        repo.upsert(&Product::new("p-1", "Cafe", 4000).with_stock(5))
            .unwrap();

        let mut products = repo.list().unwrap();
        products[0].stock = 2;
        repo.save_all(&products).unwrap();

        assert_eq!(repo.get_by_id("p-1").unwrap().unwrap().stock, 2);
    }
}
