//! # Sale Repository
//!
//! Persistence for the sale history.
//!
//! ## Append-Only Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Sale History                                   │
//! │                                                                     │
//! │  commit ──► append(sale) ──► [s-1, s-2, s-3, NEW]                   │
//! │                                                                     │
//! │  There is no update and no delete: a committed sale is immutable    │
//! │  and the history only grows. Aggregate reports are derived by a     │
//! │  full scan of this collection.                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::{keys, KeyValueStore};
use crate::repository::{read_collection, write_collection};
use tienda_core::Sale;

/// Repository for the append-only sale history.
#[derive(Clone)]
pub struct SaleRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        SaleRepository { kv }
    }

    /// Lists the full sale history in commit order.
    pub fn list(&self) -> StoreResult<Vec<Sale>> {
        read_collection(self.kv.as_ref(), keys::SALES)
    }

    /// Appends a committed sale to the history.
    pub fn append(&self, sale: &Sale) -> StoreResult<()> {
        let mut sales = self.list()?;
        sales.push(sale.clone());
        write_collection(self.kv.as_ref(), keys::SALES, &sales)?;

        info!(id = %sale.id, total = %sale.total(), items = sale.items.len(), "Sale appended");
        Ok(())
    }

    /// Replaces the entire history.
    ///
    /// Used by the ledger commit to publish a pre-built history in one
    /// write, and by bulk imports.
    pub fn save_all(&self, sales: &[Sale]) -> StoreResult<()> {
        debug!(count = sales.len(), "Saving sale history");
        write_collection(self.kv.as_ref(), keys::SALES, sales)
    }

    /// Counts committed sales.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
