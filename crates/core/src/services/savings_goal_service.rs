use chrono::Datelike;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::metrics::{MonthlySavings, SavingsGoalReport};
use crate::models::reference::MonthlyFinanceRecord;
use crate::models::transaction::{Transaction, TransactionKind};

/// Approximate income of the first month; later months grow linearly.
const BASELINE_INCOME_START: f64 = 5000.0;
const BASELINE_INCOME_STEP: f64 = 100.0;

/// Evaluates monthly savings against a user-chosen goal.
///
/// Month `i` of the history window (0 = January) collects every transaction
/// whose timestamp falls in calendar month `i`, whatever the year. Since
/// transactions are stamped at creation, a live session fills one month only.
pub struct SavingsGoalService;

impl SavingsGoalService {
    pub fn new() -> Self {
        Self
    }

    /// Build the per-month goal report.
    ///
    /// Baselines: income `5000 + 100 × i`, expenses from the history row.
    /// The bar value is floored at zero but `achieved` compares the raw
    /// savings with the goal.
    pub fn compute_savings_goal(
        &self,
        goal: f64,
        history: &[MonthlyFinanceRecord],
        transactions: &[Transaction],
    ) -> Result<SavingsGoalReport, CoreError> {
        if !goal.is_finite() || goal < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Savings goal must be a non-negative number, got {goal}"
            )));
        }

        let per_month: Vec<MonthlySavings> = history
            .iter()
            .enumerate()
            .map(|(index, month)| {
                let (income, expenses) = Self::month_totals(transactions, index);
                let baseline_income = BASELINE_INCOME_START + index as f64 * BASELINE_INCOME_STEP;
                let raw_savings = (baseline_income + income) - (month.expenses + expenses);
                MonthlySavings {
                    month: month.month.clone(),
                    goal,
                    actual: raw_savings.max(0.0),
                    raw_savings,
                    achieved: raw_savings >= goal,
                }
            })
            .collect();

        let achieved = per_month.iter().filter(|m| m.achieved).count();
        let achievement_rate_percent = if per_month.is_empty() {
            0
        } else {
            (achieved as f64 / per_month.len() as f64 * 100.0).round() as u32
        };

        debug!(
            goal,
            months = per_month.len(),
            achieved,
            achievement_rate_percent,
            "Evaluated savings goal"
        );

        Ok(SavingsGoalReport {
            goal,
            per_month,
            achievement_rate_percent,
        })
    }

    /// Income and expense totals of transactions created in calendar month
    /// `month_index` (0-based).
    fn month_totals(transactions: &[Transaction], month_index: usize) -> (f64, f64) {
        transactions
            .iter()
            .filter(|t| t.date.month0() as usize == month_index)
            .fold((0.0, 0.0), |(income, expenses), t| match t.kind {
                TransactionKind::Income => (income + t.amount, expenses),
                TransactionKind::Expense => (income, expenses + t.amount),
            })
    }
}

impl Default for SavingsGoalService {
    fn default() -> Self {
        Self::new()
    }
}
