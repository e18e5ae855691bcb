//! Built-in Reference Data Store.
//!
//! The tables are built once per process and handed out as `&'static`
//! references. There is no mutation API: overlays always produce new values.

use once_cell::sync::Lazy;

use crate::models::reference::{
    BudgetCategory, MonthlyFinanceRecord, ProductSalesRecord, ReferenceData,
    SpendingCategoryShare,
};

static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    finance: finance_history(),
    products: product_sales(),
    budget: budget_targets(),
    spending: spending_categories(),
});

/// The process-wide reference tables.
#[must_use]
pub fn builtin() -> &'static ReferenceData {
    &BUILTIN
}

fn finance_history() -> Vec<MonthlyFinanceRecord> {
    [
        ("Jan", 4875.0, 3800.0, 1075.0),
        ("Feb", 5234.0, 3900.0, 1334.0),
        ("Mar", 5123.0, 4200.0, 923.0),
        ("Apr", 5467.0, 3950.0, 1517.0),
        ("May", 5345.0, 4100.0, 1245.0),
        ("Jun", 4567.0, 4000.0, 567.0),
        ("Jul", 5689.0, 3900.0, 1789.0),
        ("Aug", 5523.0, 3950.0, 1573.0),
        ("Sep", 5745.0, 4000.0, 1745.0),
        ("Oct", 5834.0, 4100.0, 1734.0),
    ]
    .into_iter()
    .map(|(month, income, expenses, savings)| {
        MonthlyFinanceRecord::new(month, income, expenses, savings)
    })
    .collect()
}

fn product_sales() -> Vec<ProductSalesRecord> {
    // (product, revenue, units sold, stock, margin %, views, conversion %)
    [
        ("Classic SD", 18500.0, 125, 45, 28.0, 5000, 2.5),
        ("Alox Pioneer", 22100.0, 68, 12, 35.0, 3778, 1.8),
        ("Champ", 28900.0, 42, 8, 45.0, 1355, 3.1),
        ("Huntsman", 25600.0, 58, 15, 38.0, 2800, 2.1),
        ("Minichamp", 15200.0, 95, 32, 32.0, 5938, 1.6),
        ("SwissChamp", 32400.0, 28, 5, 48.0, 870, 3.2),
        ("Spartan", 19800.0, 78, 22, 33.0, 3000, 2.6),
        ("Climber", 23100.0, 62, 18, 36.0, 2583, 2.4),
    ]
    .into_iter()
    .map(
        |(product, revenue, units_sold, stock, margin_pct, product_views, conversion_rate_pct)| {
            ProductSalesRecord {
                product: product.to_string(),
                revenue,
                units_sold,
                stock,
                margin_pct,
                product_views,
                conversion_rate_pct,
            }
        },
    )
    .collect()
}

fn budget_targets() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new("Food", 1000.0, 1200.0),
        BudgetCategory::new("Transport", 600.0, 800.0),
        BudgetCategory::new("Entertainment", 400.0, 600.0),
        BudgetCategory::new("Utilities", 400.0, 500.0),
        BudgetCategory::new("Other", 600.0, 900.0),
    ]
}

fn spending_categories() -> Vec<SpendingCategoryShare> {
    vec![
        SpendingCategoryShare::new("Food", 1200.0, 30.0),
        SpendingCategoryShare::new("Transport", 800.0, 20.0),
        SpendingCategoryShare::new("Entertainment", 600.0, 15.0),
        SpendingCategoryShare::new("Utilities", 500.0, 12.5),
        SpendingCategoryShare::new("Other", 900.0, 22.5),
    ]
}
