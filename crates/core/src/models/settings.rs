use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Categories offered by the transaction form.
pub const DEFAULT_FORM_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Salary",
    "Freelance",
    "Investment",
];

/// User-configurable dashboard settings.
///
/// Any field missing from a JSON document falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Symbol prefixed to every monetary value (e.g., "₱", "$").
    pub currency_symbol: String,

    /// Monthly savings target used by the savings-goal chart.
    pub savings_goal: f64,

    /// Products with stock strictly below this count are "Low Stock".
    pub low_stock_threshold: u32,

    /// Category choices shown in the transaction form.
    /// Suggestions only: transactions may carry any non-blank category.
    pub form_categories: Vec<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            savings_goal: 1500.0,
            low_stock_threshold: 10,
            form_categories: DEFAULT_FORM_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Check that the savings goal is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.savings_goal.is_finite() || self.savings_goal < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Savings goal must be a non-negative number, got {}",
                self.savings_goal
            )));
        }
        Ok(())
    }

    /// Format an amount with the configured currency symbol and no decimals.
    ///
    /// Every finite value keeps all of its integer digits. NaN and infinity
    /// are written as Rust prints them, e.g. `₱NaN` or `-₱inf`.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let magnitude = rounded.abs();
        let body = if magnitude.is_finite() {
            group_thousands(&format!("{magnitude:.0}"))
        } else {
            magnitude.to_string()
        };
        format!("{sign}{}{body}", self.currency_symbol)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
