use tracing::debug;

use crate::models::metrics::BudgetOverlay;
use crate::models::reference::{BudgetCategory, SpendingCategoryShare};
use crate::models::transaction::Transaction;
use crate::services::percent::percent_of;

/// Overlays expense transactions on the budget and spending baselines.
///
/// Categories match by exact, case-sensitive string equality. Income
/// transactions never touch either table.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Add each expense to its budget row's `actual`.
    ///
    /// Expenses whose category has no budget row are dropped; the budget
    /// table never grows.
    pub fn compute_budget_overlay(
        &self,
        budget: &[BudgetCategory],
        transactions: &[Transaction],
    ) -> BudgetOverlay {
        let mut rows = budget.to_vec();

        for transaction in transactions.iter().filter(|t| t.is_expense()) {
            if let Some(row) = rows.iter_mut().find(|r| r.category == transaction.category) {
                row.actual += transaction.amount;
            }
        }

        let over_budget_count = rows.iter().filter(|r| r.is_over_budget()).count();
        debug!(rows = rows.len(), over_budget_count, "Computed budget overlay");

        BudgetOverlay {
            rows,
            over_budget_count,
        }
    }

    /// Add each expense to its spending row, appending a new row for an
    /// unseen category, then recompute every share.
    ///
    /// Shares sum to 100 when total spending is positive; when it is zero
    /// every share is 0.
    pub fn compute_spending_shares(
        &self,
        spending: &[SpendingCategoryShare],
        transactions: &[Transaction],
    ) -> Vec<SpendingCategoryShare> {
        let mut shares = spending.to_vec();

        for transaction in transactions.iter().filter(|t| t.is_expense()) {
            match shares.iter_mut().find(|s| s.category == transaction.category) {
                Some(share) => share.amount += transaction.amount,
                None => shares.push(SpendingCategoryShare::new(
                    transaction.category.clone(),
                    transaction.amount,
                    0.0,
                )),
            }
        }

        let total: f64 = shares.iter().map(|s| s.amount).sum();
        for share in &mut shares {
            share.percentage = percent_of(share.amount, total);
        }

        debug!(categories = shares.len(), total, "Computed spending shares");
        shares
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
