use crate::models::metrics::{ConversionTier, ProductConversion, RankBy};
use crate::models::reference::ProductSalesRecord;

/// Orders products for the retail comparison charts.
///
/// Every ranking is a fresh copy sorted with a stable sort, so products
/// with equal keys keep their table order.
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    pub fn rank_products(&self, products: &[ProductSalesRecord], by: RankBy) -> Vec<ProductSalesRecord> {
        let mut ranked = products.to_vec();
        match by {
            RankBy::Revenue => ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
            RankBy::Units => ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold)),
            RankBy::Conversion => {
                ranked.sort_by(|a, b| b.conversion_rate_pct.total_cmp(&a.conversion_rate_pct))
            }
            RankBy::Views => ranked.sort_by_key(|p| p.product_views),
        }
        ranked
    }

    /// Traffic vs sales rows, highest conversion first, with their tier.
    pub fn conversion_breakdown(&self, products: &[ProductSalesRecord]) -> Vec<ProductConversion> {
        self.rank_products(products, RankBy::Conversion)
            .into_iter()
            .map(|p| ProductConversion {
                tier: ConversionTier::from_rate(p.conversion_rate_pct),
                product: p.product,
                product_views: p.product_views,
                units_sold: p.units_sold,
                conversion_rate_pct: p.conversion_rate_pct,
            })
            .collect()
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::new()
    }
}
