use chrono::{NaiveDate, NaiveDateTime};
use dashboard_metrics_core::errors::CoreError;
use dashboard_metrics_core::models::metrics::{ConversionTier, InventoryStatus, RankBy};
use dashboard_metrics_core::models::reference::BudgetCategory;
use dashboard_metrics_core::models::settings::{DashboardSettings, DEFAULT_FORM_CATEGORIES};
use dashboard_metrics_core::models::transaction::{
    total_of_kind, Transaction, TransactionForm, TransactionKind, TransactionLog,
};
use dashboard_metrics_core::reference_data;
use std::collections::HashSet;

fn dt(y: i32, m: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionKind
// ═══════════════════════════════════════════════════════════════════

mod transaction_kind {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        let back: TransactionKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(back, TransactionKind::Expense);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    fn at(amount: f64, kind: TransactionKind, category: &str) -> Result<Transaction, CoreError> {
        Transaction::at(amount, kind, category, dt(2025, 10, 1))
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = at(250.0, TransactionKind::Income, "Salary").unwrap();
        let expense = at(80.0, TransactionKind::Expense, "Food").unwrap();
        assert_eq!(income.signed_amount(), 250.0);
        assert_eq!(expense.signed_amount(), -80.0);
        assert!(expense.is_expense());
        assert!(!income.is_expense());
    }

    #[test]
    fn ids_are_unique_and_time_ordered() {
        let ids: Vec<_> = (0..1000)
            .map(|_| at(1.0, TransactionKind::Expense, "Food").unwrap().id)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn new_stamps_current_time() {
        let before = chrono::Local::now().naive_local();
        let t = Transaction::new(10.0, TransactionKind::Income, "Freelance").unwrap();
        let after = chrono::Local::now().naive_local();
        assert!(t.date >= before && t.date <= after);
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        for amount in [0.0, -0.0, -4000.0] {
            let err = at(amount, TransactionKind::Expense, "Food").unwrap_err();
            assert!(matches!(err, CoreError::InvalidInput(_)), "{amount} accepted");
        }
    }

    #[test]
    fn rejects_non_finite_amounts() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(at(amount, TransactionKind::Income, "Salary").is_err());
        }
        assert!(Transaction::new(f64::NAN, TransactionKind::Expense, "Food").is_err());
    }

    #[test]
    fn rejects_blank_category_and_trims() {
        let err = at(10.0, TransactionKind::Expense, " \t").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Category is required");
        assert_eq!(at(10.0, TransactionKind::Expense, " Food ").unwrap().category, "Food");
    }

    #[test]
    fn deserialization_checks_amount() {
        let t = at(12.5, TransactionKind::Expense, "Food").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        let negative = json.replace("12.5", "-12.5");
        assert!(serde_json::from_str::<Transaction>(&negative).is_err());
        let zero = json.replace("12.5", "0.0");
        let log = format!("{{\"entries\":[{zero}]}}");
        assert!(serde_json::from_str::<TransactionLog>(&log).is_err());
    }

    #[test]
    fn total_of_kind_sums_one_side() {
        let txns = vec![
            at(100.0, TransactionKind::Income, "Salary").unwrap(),
            at(40.0, TransactionKind::Expense, "Food").unwrap(),
            Transaction::at(60.0, TransactionKind::Expense, "Transport", dt(2025, 10, 2)).unwrap(),
        ];
        assert_eq!(total_of_kind(&txns, TransactionKind::Income), 100.0);
        assert_eq!(total_of_kind(&txns, TransactionKind::Expense), 100.0);
        assert_eq!(total_of_kind(&[], TransactionKind::Expense), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionForm
// ═══════════════════════════════════════════════════════════════════

mod transaction_form {
    use super::*;

    fn submit(amount: &str, category: &str) -> Result<Transaction, CoreError> {
        TransactionForm::new(amount, TransactionKind::Expense, category)
            .into_transaction(dt(2025, 10, 15))
    }

    #[test]
    fn valid_form_builds_transaction() {
        let t = submit("125.50", "Food").unwrap();
        assert_eq!(t.amount, 125.5);
        assert_eq!(t.kind, TransactionKind::Expense);
        assert_eq!(t.category, "Food");
        assert_eq!(t.date, dt(2025, 10, 15));
    }

    #[test]
    fn trims_whitespace() {
        let t = submit("  42 ", "  Transport ").unwrap();
        assert_eq!(t.amount, 42.0);
        assert_eq!(t.category, "Transport");
    }

    #[test]
    fn empty_amount_rejected() {
        assert!(matches!(submit("", "Food"), Err(CoreError::InvalidInput(_))));
        assert!(matches!(submit("   ", "Food"), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn non_numeric_amount_rejected() {
        let err = submit("abc", "Food").unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn non_positive_amount_rejected() {
        assert!(matches!(submit("0", "Food"), Err(CoreError::InvalidInput(_))));
        assert!(matches!(submit("-5", "Food"), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn non_finite_amount_rejected() {
        assert!(matches!(submit("NaN", "Food"), Err(CoreError::InvalidInput(_))));
        assert!(matches!(submit("inf", "Food"), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn blank_category_rejected() {
        let err = submit("10", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Category is required");
    }

    #[test]
    fn free_text_category_accepted() {
        let t = submit("10", "Pets").unwrap();
        assert_eq!(t.category, "Pets");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionLog
// ═══════════════════════════════════════════════════════════════════

mod transaction_log {
    use super::*;

    #[test]
    fn starts_empty() {
        let log = TransactionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.as_slice().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut log = TransactionLog::new();
        let first =
            Transaction::at(1.0, TransactionKind::Income, "Salary", dt(2025, 10, 3)).unwrap();
        let second =
            Transaction::at(2.0, TransactionKind::Expense, "Food", dt(2025, 10, 1)).unwrap();
        let stored = log.append(first.clone()).clone();
        log.append(second.clone());

        assert_eq!(stored, first);
        assert_eq!(log.len(), 2);
        let amounts: Vec<f64> = log.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0]);
        assert_eq!((&log).into_iter().count(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Reference models
// ═══════════════════════════════════════════════════════════════════

mod reference_models {
    use super::*;

    #[test]
    fn budget_variance_and_over_budget() {
        let over = BudgetCategory::new("Food", 1000.0, 1200.0);
        let exact = BudgetCategory::new("Transport", 600.0, 600.0);
        assert_eq!(over.variance(), 200.0);
        assert!(over.is_over_budget());
        assert_eq!(exact.variance(), 0.0);
        assert!(!exact.is_over_budget());
    }

    #[test]
    fn builtin_finance_rows_balance() {
        for m in &reference_data::builtin().finance {
            assert_eq!(m.savings, m.income - m.expenses, "month {}", m.month);
        }
    }

    #[test]
    fn builtin_tables_have_expected_sizes() {
        let data = reference_data::builtin();
        assert_eq!(data.finance.len(), 10);
        assert_eq!(data.finance.first().unwrap().month, "Jan");
        assert_eq!(data.finance.last().unwrap().month, "Oct");
        assert_eq!(data.products.len(), 8);
        assert_eq!(data.budget.len(), 5);
        assert_eq!(data.spending.len(), 5);
    }

    #[test]
    fn builtin_is_loaded_once() {
        assert!(std::ptr::eq(reference_data::builtin(), reference_data::builtin()));
    }

    #[test]
    fn builtin_conversion_rates_roughly_match_views() {
        for p in &reference_data::builtin().products {
            let derived = p.units_sold as f64 / p.product_views as f64 * 100.0;
            assert!((derived - p.conversion_rate_pct).abs() < 0.1, "{}", p.product);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Metric enums
// ═══════════════════════════════════════════════════════════════════

mod metric_enums {
    use super::*;

    #[test]
    fn inventory_status_labels() {
        assert_eq!(InventoryStatus::InStock.to_string(), "In Stock");
        assert_eq!(InventoryStatus::LowStock.to_string(), "Low Stock");
        assert_eq!(
            serde_json::to_string(&InventoryStatus::LowStock).unwrap(),
            "\"Low Stock\""
        );
    }

    #[test]
    fn conversion_tier_boundaries() {
        assert_eq!(ConversionTier::from_rate(3.2), ConversionTier::High);
        assert_eq!(ConversionTier::from_rate(3.0), ConversionTier::High);
        assert_eq!(ConversionTier::from_rate(2.99), ConversionTier::Medium);
        assert_eq!(ConversionTier::from_rate(2.0), ConversionTier::Medium);
        assert_eq!(ConversionTier::from_rate(1.99), ConversionTier::Low);
    }

    #[test]
    fn rank_by_parses_lowercase() {
        let by: RankBy = serde_json::from_str("\"conversion\"").unwrap();
        assert_eq!(by, RankBy::Conversion);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DashboardSettings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DashboardSettings::default();
        assert_eq!(s.currency_symbol, "₱");
        assert_eq!(s.savings_goal, 1500.0);
        assert_eq!(s.low_stock_threshold, 10);
        assert_eq!(s.form_categories.len(), DEFAULT_FORM_CATEGORIES.len());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s = DashboardSettings::from_json(r#"{ "savings_goal": 2000 }"#).unwrap();
        assert_eq!(s.savings_goal, 2000.0);
        assert_eq!(s.currency_symbol, "₱");
        assert_eq!(s.low_stock_threshold, 10);
    }

    #[test]
    fn json_roundtrip() {
        let s = DashboardSettings {
            currency_symbol: "$".into(),
            low_stock_threshold: 20,
            ..DashboardSettings::default()
        };
        let back = DashboardSettings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn negative_goal_rejected() {
        let err = DashboardSettings::from_json(r#"{ "savings_goal": -1 }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = DashboardSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn format_amount_groups_thousands() {
        let s = DashboardSettings::default();
        assert_eq!(s.format_amount(13502.0), "₱13,502");
        assert_eq!(s.format_amount(999.4), "₱999");
        assert_eq!(s.format_amount(1_000_000.0), "₱1,000,000");
        assert_eq!(s.format_amount(-1200.0), "-₱1,200");
        assert_eq!(s.format_amount(0.0), "₱0");
    }

    #[test]
    fn format_amount_keeps_digits_past_u64() {
        let s = DashboardSettings::default();
        assert_eq!(s.format_amount(1e20), "₱100,000,000,000,000,000,000");
        assert_eq!(s.format_amount(-3e19), "-₱30,000,000,000,000,000,000");
        assert_eq!(s.format_amount(-0.4), "₱0");
    }

    #[test]
    fn format_amount_non_finite() {
        let s = DashboardSettings::default();
        assert_eq!(s.format_amount(f64::NAN), "₱NaN");
        assert_eq!(s.format_amount(f64::INFINITY), "₱inf");
        assert_eq!(s.format_amount(f64::NEG_INFINITY), "-₱inf");
    }
}
