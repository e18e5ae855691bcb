use tracing::debug;

use crate::models::metrics::{InventoryBucket, InventoryReport, InventoryStatus, RetailKpis};
use crate::models::reference::ProductSalesRecord;
use crate::services::percent::percent_of;

/// Classifies products by stock level and computes retail headline numbers.
pub struct InventoryService;

impl InventoryService {
    pub fn new() -> Self {
        Self
    }

    /// Two-way stock status: strictly below `low_stock_threshold` is Low Stock.
    #[must_use]
    pub fn classify(&self, product: &ProductSalesRecord, low_stock_threshold: u32) -> InventoryStatus {
        if product.stock < low_stock_threshold {
            InventoryStatus::LowStock
        } else {
            InventoryStatus::InStock
        }
    }

    /// Count products per stock bucket.
    ///
    /// Buckets appear in the order their first product appears; empty
    /// buckets are omitted. Percentages are rounded to whole numbers.
    pub fn compute_inventory_status(
        &self,
        products: &[ProductSalesRecord],
        low_stock_threshold: u32,
    ) -> InventoryReport {
        let mut buckets: Vec<InventoryBucket> = Vec::new();

        for product in products {
            let status = self.classify(product, low_stock_threshold);
            match buckets.iter_mut().find(|b| b.category == status) {
                Some(bucket) => bucket.count += 1,
                None => buckets.push(InventoryBucket {
                    category: status,
                    count: 1,
                    percentage: 0,
                }),
            }
        }

        let total = products.len() as f64;
        for bucket in &mut buckets {
            bucket.percentage = percent_of(bucket.count as f64, total).round() as u32;
        }

        debug!(
            products = products.len(),
            low_stock_threshold,
            buckets = buckets.len(),
            "Computed inventory status"
        );

        InventoryReport { buckets }
    }

    /// Total revenue, total units sold, and the number of low-stock products.
    pub fn retail_kpis(&self, products: &[ProductSalesRecord], low_stock_threshold: u32) -> RetailKpis {
        RetailKpis {
            total_revenue: products.iter().map(|p| p.revenue).sum(),
            total_units: products.iter().map(|p| u64::from(p.units_sold)).sum(),
            low_stock_items: products
                .iter()
                .filter(|p| self.classify(p, low_stock_threshold) == InventoryStatus::LowStock)
                .count(),
        }
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
