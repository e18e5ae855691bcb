pub mod errors;
pub mod models;
pub mod reference_data;
pub mod services;

use chrono::{Local, NaiveDateTime};
use models::{
    metrics::{
        BudgetOverlay, FinancialSnapshot, InventoryReport, NetWorthSummary, ProductConversion,
        RankBy, RetailKpis, RetailSnapshot, SavingsGoalReport, SeriesKind,
    },
    reference::{MonthlyFinanceRecord, ProductSalesRecord, ReferenceData, SpendingCategoryShare},
    settings::DashboardSettings,
    transaction::{Transaction, TransactionForm, TransactionLog},
};
use services::{
    budget_service::BudgetService, inventory_service::InventoryService,
    net_worth_service::NetWorthService, ranking_service::RankingService,
    savings_goal_service::SavingsGoalService,
};
use tracing::{debug, info, warn};

use errors::CoreError;

/// Main entry point for the dashboard metrics library.
///
/// Owns the session's transaction log and settings and borrows the reference
/// tables. Every getter recomputes its aggregate from scratch; nothing is
/// cached between calls.
#[must_use]
pub struct MetricsEngine<'r> {
    reference: &'r ReferenceData,
    settings: DashboardSettings,
    log: TransactionLog,
    net_worth_service: NetWorthService,
    budget_service: BudgetService,
    savings_goal_service: SavingsGoalService,
    inventory_service: InventoryService,
    ranking_service: RankingService,
}

impl std::fmt::Debug for MetricsEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsEngine")
            .field("transactions", &self.log.len())
            .field("settings", &self.settings)
            .field("months", &self.reference.finance.len())
            .field("products", &self.reference.products.len())
            .finish()
    }
}

impl MetricsEngine<'static> {
    /// Engine over the built-in tables with default settings.
    pub fn new() -> Self {
        Self::build(reference_data::builtin(), DashboardSettings::default())
    }

    /// Engine over the built-in tables with custom settings.
    pub fn with_settings(settings: DashboardSettings) -> Result<Self, CoreError> {
        Self::with_reference(reference_data::builtin(), settings)
    }
}

impl Default for MetricsEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> MetricsEngine<'r> {
    /// Engine over caller-supplied reference tables.
    pub fn with_reference(
        reference: &'r ReferenceData,
        settings: DashboardSettings,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(reference, settings))
    }

    fn build(reference: &'r ReferenceData, settings: DashboardSettings) -> Self {
        Self {
            reference,
            settings,
            log: TransactionLog::new(),
            net_worth_service: NetWorthService::new(),
            budget_service: BudgetService::new(),
            savings_goal_service: SavingsGoalService::new(),
            inventory_service: InventoryService::new(),
            ranking_service: RankingService::new(),
        }
    }

    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        self.reference
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Change the monthly savings target. Rejects negative or non-finite goals.
    pub fn set_savings_goal(&mut self, goal: f64) -> Result<(), CoreError> {
        let mut updated = self.settings.clone();
        updated.savings_goal = goal;
        updated.validate()?;
        self.settings = updated;
        Ok(())
    }

    // ── Transaction Log ─────────────────────────────────────────────

    /// Submit the transaction form, stamping the entry with the current time.
    /// An invalid form leaves the log unchanged.
    pub fn add_transaction(&mut self, form: TransactionForm) -> Result<&Transaction, CoreError> {
        self.add_transaction_at(form, Local::now().naive_local())
    }

    /// Submit the transaction form with an explicit timestamp.
    pub fn add_transaction_at(
        &mut self,
        form: TransactionForm,
        date: NaiveDateTime,
    ) -> Result<&Transaction, CoreError> {
        let transaction = match form.into_transaction(date) {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "Rejected transaction form");
                return Err(e);
            }
        };
        info!(
            id = %transaction.id,
            kind = %transaction.kind,
            category = %transaction.category,
            amount = transaction.amount,
            "Recorded transaction"
        );
        Ok(self.log.append(transaction))
    }

    /// All transactions in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        self.log.as_slice()
    }

    // ── Financial Health ────────────────────────────────────────────

    pub fn net_worth(&self) -> NetWorthSummary {
        self.net_worth_service
            .compute_net_worth(&self.reference.finance, self.log.as_slice())
    }

    /// The finance table with the current month overlaid by transactions.
    pub fn finance_table(&self) -> Vec<MonthlyFinanceRecord> {
        self.net_worth_service
            .finance_table_overlay(&self.reference.finance, self.log.as_slice())
    }

    pub fn budget_overlay(&self) -> BudgetOverlay {
        self.budget_service
            .compute_budget_overlay(&self.reference.budget, self.log.as_slice())
    }

    pub fn spending_shares(&self) -> Vec<SpendingCategoryShare> {
        self.budget_service
            .compute_spending_shares(&self.reference.spending, self.log.as_slice())
    }

    /// Savings report against the configured goal.
    pub fn savings_goal(&self) -> Result<SavingsGoalReport, CoreError> {
        self.savings_goal_for(self.settings.savings_goal)
    }

    /// Savings report against an ad-hoc goal, leaving settings untouched.
    pub fn savings_goal_for(&self, goal: f64) -> Result<SavingsGoalReport, CoreError> {
        self.savings_goal_service
            .compute_savings_goal(goal, &self.reference.finance, self.log.as_slice())
    }

    /// Every aggregate of the Financial Health tab in one bundle.
    pub fn financial_snapshot(&self) -> Result<FinancialSnapshot, CoreError> {
        let net_worth = self.net_worth();
        let income_trend_percent = self
            .net_worth_service
            .series_trend_percent(&net_worth.series, SeriesKind::Income);
        let expenses_trend_percent = self
            .net_worth_service
            .series_trend_percent(&net_worth.series, SeriesKind::Expenses);

        let snapshot = FinancialSnapshot {
            net_worth,
            income_trend_percent,
            expenses_trend_percent,
            finance_table: self.finance_table(),
            budget: self.budget_overlay(),
            spending: self.spending_shares(),
            savings_goal: self.savings_goal()?,
            transaction_count: self.log.len(),
        };
        debug!(transactions = snapshot.transaction_count, "Built financial snapshot");
        Ok(snapshot)
    }

    // ── Retail Sales ────────────────────────────────────────────────

    pub fn inventory_status(&self) -> InventoryReport {
        self.inventory_service
            .compute_inventory_status(&self.reference.products, self.settings.low_stock_threshold)
    }

    pub fn rank_products(&self, by: RankBy) -> Vec<ProductSalesRecord> {
        self.ranking_service.rank_products(&self.reference.products, by)
    }

    pub fn conversion_breakdown(&self) -> Vec<ProductConversion> {
        self.ranking_service
            .conversion_breakdown(&self.reference.products)
    }

    pub fn retail_kpis(&self) -> RetailKpis {
        self.inventory_service
            .retail_kpis(&self.reference.products, self.settings.low_stock_threshold)
    }

    /// Every aggregate of the Retail Sales tab in one bundle.
    pub fn retail_snapshot(&self) -> RetailSnapshot {
        let snapshot = RetailSnapshot {
            kpis: self.retail_kpis(),
            inventory: self.inventory_status(),
            by_revenue: self.rank_products(RankBy::Revenue),
            by_units: self.rank_products(RankBy::Units),
            by_views: self.rank_products(RankBy::Views),
            conversion: self.conversion_breakdown(),
        };
        debug!(products = self.reference.products.len(), "Built retail snapshot");
        snapshot
    }
}
