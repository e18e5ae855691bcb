use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::reference::{
    BudgetCategory, MonthlyFinanceRecord, ProductSalesRecord, SpendingCategoryShare,
};

// ── Net worth ───────────────────────────────────────────────────────

/// One month of the income/expense line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeriesPoint {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// Net worth KPI card plus the income/expense series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSummary {
    /// Sum of historical savings plus the signed transaction total
    pub total: f64,

    /// Baseline the change is measured against
    pub previous: f64,

    /// `total - previous`
    pub change: f64,

    /// `change / previous * 100`, one decimal; 0 when `previous` is 0
    pub change_percent: f64,

    /// Per-month series; only the last month carries transaction totals
    pub series: Vec<MonthlySeriesPoint>,
}

/// Which line of the income/expense chart a trend is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Income,
    Expenses,
}

// ── Budget ──────────────────────────────────────────────────────────

/// Budget table with transaction overlay applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverlay {
    pub rows: Vec<BudgetCategory>,

    /// Number of rows where `actual > budgeted`
    pub over_budget_count: usize,
}

// ── Savings goal ────────────────────────────────────────────────────

/// One bar pair of the savings-goal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySavings {
    pub month: String,
    pub goal: f64,

    /// Bar value, floored at zero
    pub actual: f64,

    /// Unfloored savings; used for the goal comparison
    pub raw_savings: f64,

    pub achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalReport {
    pub goal: f64,
    pub per_month: Vec<MonthlySavings>,

    /// Share of months meeting the goal, rounded to the nearest integer
    pub achievement_rate_percent: u32,
}

// ── Inventory & ranking ─────────────────────────────────────────────

/// Two-way stock classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryStatus::InStock => write!(f, "In Stock"),
            InventoryStatus::LowStock => write!(f, "Low Stock"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryBucket {
    pub category: InventoryStatus,
    pub count: usize,

    /// Rounded integer share of all products
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Buckets in order of first appearance in the product table
    pub buckets: Vec<InventoryBucket>,
}

impl InventoryReport {
    /// Number of products in the given bucket (0 if the bucket is absent).
    #[must_use]
    pub fn count(&self, status: InventoryStatus) -> usize {
        self.buckets
            .iter()
            .find(|b| b.category == status)
            .map_or(0, |b| b.count)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Ordering applied by `RankingService::rank_products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    /// Highest revenue first
    Revenue,
    /// Most units sold first
    Units,
    /// Highest conversion rate first
    Conversion,
    /// Fewest product views first (traffic scatter order)
    Views,
}

/// Conversion performance band used to colour the traffic charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionTier {
    High,
    Medium,
    Low,
}

impl ConversionTier {
    /// High at 3% and above, Medium at 2% and above, Low otherwise.
    #[must_use]
    pub fn from_rate(conversion_rate_pct: f64) -> Self {
        if conversion_rate_pct >= 3.0 {
            ConversionTier::High
        } else if conversion_rate_pct >= 2.0 {
            ConversionTier::Medium
        } else {
            ConversionTier::Low
        }
    }
}

/// A product row of the "traffic vs sales" chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConversion {
    pub product: String,
    pub product_views: u32,
    pub units_sold: u32,
    pub conversion_rate_pct: f64,
    pub tier: ConversionTier,
}

/// Headline numbers of the retail tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailKpis {
    pub total_revenue: f64,
    pub total_units: u64,
    pub low_stock_items: usize,
}

// ── Snapshots ───────────────────────────────────────────────────────

/// Everything the Financial Health tab renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub net_worth: NetWorthSummary,
    pub income_trend_percent: f64,
    pub expenses_trend_percent: f64,
    pub finance_table: Vec<MonthlyFinanceRecord>,
    pub budget: BudgetOverlay,
    pub spending: Vec<SpendingCategoryShare>,
    pub savings_goal: SavingsGoalReport,
    pub transaction_count: usize,
}

/// Everything the Retail Sales tab renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailSnapshot {
    pub kpis: RetailKpis,
    pub inventory: InventoryReport,
    pub by_revenue: Vec<ProductSalesRecord>,
    pub by_units: Vec<ProductSalesRecord>,
    pub by_views: Vec<ProductSalesRecord>,
    pub conversion: Vec<ProductConversion>,
}

impl FinancialSnapshot {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}

impl RetailSnapshot {
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}
