use serde::{Deserialize, Serialize};

/// One month of the fixed finance history.
///
/// `savings == income - expenses` holds for the stored rows; it is not
/// re-enforced after transactions are overlaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinanceRecord {
    /// Short month label ("Jan", "Feb", ...)
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

impl MonthlyFinanceRecord {
    pub fn new(month: impl Into<String>, income: f64, expenses: f64, savings: f64) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
            savings,
        }
    }
}

/// Sales history of a single product.
///
/// `conversion_rate_pct` is stored as-is and never recomputed from
/// `units_sold / product_views`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSalesRecord {
    pub product: String,
    pub revenue: f64,
    pub units_sold: u32,
    pub stock: u32,
    pub margin_pct: f64,
    pub product_views: u32,
    pub conversion_rate_pct: f64,
}

/// Budget target and actual spend for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,
}

impl BudgetCategory {
    pub fn new(category: impl Into<String>, budgeted: f64, actual: f64) -> Self {
        Self {
            category: category.into(),
            budgeted,
            actual,
        }
    }

    /// Actual minus budgeted; positive means overspent.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.actual - self.budgeted
    }

    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.actual > self.budgeted
    }
}

/// A category's slice of total spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingCategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of total spending, 0..=100
    pub percentage: f64,
}

impl SpendingCategoryShare {
    pub fn new(category: impl Into<String>, amount: f64, percentage: f64) -> Self {
        Self {
            category: category.into(),
            amount,
            percentage,
        }
    }
}

/// The read-only tables every computation starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub finance: Vec<MonthlyFinanceRecord>,
    pub products: Vec<ProductSalesRecord>,
    pub budget: Vec<BudgetCategory>,
    pub spending: Vec<SpendingCategoryShare>,
}
