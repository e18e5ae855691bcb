use tracing::debug;

use crate::models::metrics::{MonthlySeriesPoint, NetWorthSummary, SeriesKind};
use crate::models::reference::MonthlyFinanceRecord;
use crate::models::transaction::{total_of_kind, Transaction, TransactionKind};
use crate::services::percent::{percent_change, round_to};

/// Folds the finance history and the transaction log into net worth figures.
///
/// Pure business logic with no I/O and no state. Only the last (current) month of
/// the history absorbs transactions; earlier months always render their
/// stored values.
pub struct NetWorthService;

impl NetWorthService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the net worth KPI and the income/expense series.
    ///
    /// - `total` = sum of historical savings + signed transaction sum
    /// - `previous` = sum of historical savings − savings of the second-to-last month
    /// - `change_percent` = `(total − previous) / previous × 100`, one decimal
    pub fn compute_net_worth(
        &self,
        history: &[MonthlyFinanceRecord],
        transactions: &[Transaction],
    ) -> NetWorthSummary {
        let base_savings: f64 = history.iter().map(|m| m.savings).sum();
        let transaction_impact: f64 = transactions.iter().map(Transaction::signed_amount).sum();
        let total = base_savings + transaction_impact;

        let prior_month_savings = history
            .len()
            .checked_sub(2)
            .map_or(0.0, |idx| history[idx].savings);
        let previous = base_savings - prior_month_savings;
        let change = total - previous;
        let change_percent = round_to(percent_change(total, previous), 1);

        debug!(
            months = history.len(),
            transactions = transactions.len(),
            total,
            change_percent,
            "Computed net worth"
        );

        NetWorthSummary {
            total,
            previous,
            change,
            change_percent,
            series: self.income_expense_series(history, transactions),
        }
    }

    /// Income/expense per month with transaction totals added to the last month.
    pub fn income_expense_series(
        &self,
        history: &[MonthlyFinanceRecord],
        transactions: &[Transaction],
    ) -> Vec<MonthlySeriesPoint> {
        self.finance_table_overlay(history, transactions)
            .into_iter()
            .map(|m| MonthlySeriesPoint {
                month: m.month,
                income: m.income,
                expenses: m.expenses,
            })
            .collect()
    }

    /// The raw finance table as the landing screen shows it: the current
    /// month's income, expenses and savings are recomputed from transactions.
    pub fn finance_table_overlay(
        &self,
        history: &[MonthlyFinanceRecord],
        transactions: &[Transaction],
    ) -> Vec<MonthlyFinanceRecord> {
        let mut table = history.to_vec();
        if let Some(current) = table.last_mut() {
            let income = total_of_kind(transactions, TransactionKind::Income);
            let expenses = total_of_kind(transactions, TransactionKind::Expense);
            if income != 0.0 || expenses != 0.0 {
                current.income += income;
                current.expenses += expenses;
                current.savings = current.income - current.expenses;
            }
        }
        table
    }

    /// First-to-last percent change of one line of the series, one decimal.
    /// Returns 0 for an empty series or a zero first value.
    pub fn series_trend_percent(&self, series: &[MonthlySeriesPoint], kind: SeriesKind) -> f64 {
        let pick = |p: &MonthlySeriesPoint| match kind {
            SeriesKind::Income => p.income,
            SeriesKind::Expenses => p.expenses,
        };
        match (series.first(), series.last()) {
            (Some(first), Some(last)) => round_to(percent_change(pick(last), pick(first)), 1),
            _ => 0.0,
        }
    }
}

impl Default for NetWorthService {
    fn default() -> Self {
        Self::new()
    }
}
