//! # Report Aggregator
//!
//! Derives [`ReportSummary`] statistics from the full sale history.
//!
//! ## Recomputation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Report Derivation                                  │
//! │                                                                     │
//! │  Sale history (append-only)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  summarize(&sales)  ── full scan, O(total line count)               │
//! │       │                                                             │
//! │       ├── total_sales    = count                                    │
//! │       ├── total_revenue  = Σ sale.total                             │
//! │       ├── total_items    = Σ Σ item.quantity                        │
//! │       ├── top_client     = max cumulative amount per client         │
//! │       └── top_product    = max cumulative quantity per product      │
//! │                                                                     │
//! │  Recomputed in full after every commit and at startup. Never        │
//! │  incrementalized: the summary is always consistent with the         │
//! │  history, even after a bulk import or external correction.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tie-break
//! Top picks scan accumulation keys in first-encountered-in-history order
//! and only a strictly greater value displaces the current winner, so on a
//! tie the client/product that entered the history first wins. This is
//! deterministic for any given history.

use std::collections::HashMap;

use crate::types::{ReportSummary, Sale, TopClient, TopProduct};

/// Accumulates per-key totals while remembering first-encountered order.
///
/// `HashMap` iteration order is arbitrary, so winners are selected by
/// walking the recorded key order instead.
struct Tally {
    order: Vec<String>,
    totals: HashMap<String, i64>,
}

impl Tally {
    fn new() -> Self {
        Tally {
            order: Vec::new(),
            totals: HashMap::new(),
        }
    }

    fn add(&mut self, key: &str, amount: i64) {
        if !self.totals.contains_key(key) {
            self.order.push(key.to_string());
        }
        *self.totals.entry(key.to_string()).or_insert(0) += amount;
    }

    /// Key with the maximum total; first-encountered key wins ties.
    fn winner(&self) -> Option<(&str, i64)> {
        let mut best: Option<(&str, i64)> = None;
        for key in &self.order {
            let total = self.totals[key];
            if best.map_or(true, |(_, t)| total > t) {
                best = Some((key, total));
            }
        }
        best
    }
}

/// Computes the aggregate report over the full sale history.
///
/// Pure function: same history in, same summary out. An empty history
/// yields zero counts and absent top picks.
pub fn summarize(sales: &[Sale]) -> ReportSummary {
    let total_sales = sales.len();
    let total_revenue_cents = sales.iter().map(|s| s.total_cents).sum();
    let total_items = sales.iter().map(|s| s.item_quantity()).sum();

    // Per-client cumulative amounts; name snapshots resolve to the
    // latest-seen name so a renamed client displays its newest spelling.
    let mut by_client = Tally::new();
    let mut client_names: HashMap<String, String> = HashMap::new();
    for sale in sales {
        by_client.add(&sale.client_id, sale.total_cents);
        client_names.insert(sale.client_id.clone(), sale.client_name.clone());
    }

    let top_client = by_client.winner().map(|(id, amount_cents)| TopClient {
        name: client_names
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string()),
        amount_cents,
    });

    // Per-product cumulative quantities; the first-seen line name is kept.
    let mut by_product = Tally::new();
    let mut product_names: HashMap<String, String> = HashMap::new();
    for sale in sales {
        for item in &sale.items {
            by_product.add(&item.product_id, item.quantity);
            product_names
                .entry(item.product_id.clone())
                .or_insert_with(|| item.name.clone());
        }
    }

    let top_product = by_product.winner().map(|(id, quantity)| TopProduct {
        name: product_names
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string()),
        quantity,
    });

    ReportSummary {
        total_sales,
        total_revenue_cents,
        total_items,
        top_client,
        top_product,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SaleItem;
    use chrono::Utc;

    fn sale(id: &str, client_id: &str, client_name: &str, items: Vec<SaleItem>) -> Sale {
        let total_cents = items.iter().map(|i| i.subtotal_cents).sum();
        Sale {
            id: id.to_string(),
            date: Utc::now(),
            client_id: client_id.to_string(),
            client_name: client_name.to_string(),
            items,
            total_cents,
        }
    }

    #[test]
    fn test_empty_history() {
        let report = summarize(&[]);
        assert_eq!(report.total_sales, 0);
        assert_eq!(report.total_revenue_cents, 0);
        assert_eq!(report.total_items, 0);
        assert!(report.top_client.is_none());
        assert!(report.top_product.is_none());
    }

    #[test]
    fn test_totals_and_top_picks() {
        let sales = vec![
            sale(
                "s-1",
                "c-1",
                "Maria",
                vec![SaleItem::new("p-1", "Coca-Cola", 2, 5000)],
            ),
            sale(
                "s-2",
                "c-2",
                "Pedro",
                vec![SaleItem::new("p-1", "Coca-Cola", 5, 1000)],
            ),
        ];

        let report = summarize(&sales);
        assert_eq!(report.total_sales, 2);
        assert_eq!(report.total_revenue_cents, 15000);
        assert_eq!(report.total_items, 7);

        // c-1 spent 10000, c-2 spent 5000
        let top_client = report.top_client.unwrap();
        assert_eq!(top_client.name, "Maria");
        assert_eq!(top_client.amount_cents, 10000);

        // p-1 sold 2 + 5 = 7 units across both sales
        let top_product = report.top_product.unwrap();
        assert_eq!(top_product.name, "Coca-Cola");
        assert_eq!(top_product.quantity, 7);
    }

    #[test]
    fn test_tie_break_first_encountered_wins() {
        let sales = vec![
            sale(
                "s-1",
                "c-1",
                "Maria",
                vec![SaleItem::new("p-1", "Coca-Cola", 3, 1000)],
            ),
            sale(
                "s-2",
                "c-2",
                "Pedro",
                vec![SaleItem::new("p-2", "Pan dulce", 3, 1000)],
            ),
        ];

        let report = summarize(&sales);

        // Both clients at 3000, both products at qty 3: history order decides
        assert_eq!(report.top_client.unwrap().name, "Maria");
        assert_eq!(report.top_product.unwrap().name, "Coca-Cola");
    }

    #[test]
    fn test_client_name_is_latest_seen() {
        let sales = vec![
            sale(
                "s-1",
                "c-1",
                "Maria",
                vec![SaleItem::new("p-1", "Coca-Cola", 1, 1000)],
            ),
            sale(
                "s-2",
                "c-1",
                "Maria Lopez",
                vec![SaleItem::new("p-1", "Coca-Cola", 1, 1000)],
            ),
        ];

        let report = summarize(&sales);
        assert_eq!(report.top_client.unwrap().name, "Maria Lopez");
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let sales = vec![sale(
            "s-1",
            "c-1",
            "Maria",
            vec![
                SaleItem::new("p-1", "Coca-Cola", 2, 1000),
                SaleItem::new("p-2", "Pan dulce", 1, 300),
            ],
        )];

        let first = summarize(&sales);
        let second = summarize(&sales);
        assert_eq!(first, second);
    }
}
