use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Direction of a user-entered transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, freelance work, ...)
    Income,
    /// Money going out
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income/expense entry added through the transaction form.
///
/// Transactions are immutable once created. Categories are free text and are
/// matched against the reference tables by exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTransaction")]
pub struct Transaction {
    /// Unique identifier, time-ordered (UUID v7)
    pub id: Uuid,

    /// Amount (always positive; the sign comes from `kind`)
    pub amount: f64,

    /// Income or Expense
    pub kind: TransactionKind,

    /// Category label, e.g. "Food" or "Salary"
    pub category: String,

    /// Local wall-clock time the transaction was created
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction stamped with the current local time.
    pub fn new(
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Self::at(amount, kind, category, Local::now().naive_local())
    }

    /// Create a transaction with an explicit timestamp.
    ///
    /// Fails unless `amount` is finite and greater than zero and `category`
    /// is non-blank. The category is stored trimmed.
    pub fn at(
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDateTime,
    ) -> Result<Self, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Amount must be a positive number, got {amount}"
            )));
        }
        let category = category.into();
        let category = category.trim();
        if category.is_empty() {
            return Err(CoreError::InvalidInput("Category is required".into()));
        }

        Ok(Self {
            id: Uuid::now_v7(),
            amount,
            kind,
            category: category.to_string(),
            date,
        })
    }

    /// Amount with sign applied: income positive, expense negative.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Raw values of the "Add Transaction" form, exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
}

impl TransactionForm {
    pub fn new(amount: impl Into<String>, kind: TransactionKind, category: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            kind,
            category: category.into(),
        }
    }

    /// Validate the form and build a transaction stamped at `date`.
    ///
    /// Rules:
    /// - Amount must parse as a finite number greater than zero
    /// - Category must not be blank
    pub fn into_transaction(self, date: NaiveDateTime) -> Result<Transaction, CoreError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(CoreError::InvalidInput("Amount is required".into()));
        }
        let amount: f64 = raw
            .parse()
            .map_err(|_| CoreError::InvalidInput(format!("Amount '{raw}' is not a number")))?;

        Transaction::at(amount, self.kind, self.category, date)
    }
}

/// Wire shape of a transaction before its amount and category are checked.
#[derive(Deserialize)]
struct UncheckedTransaction {
    id: Uuid,
    amount: f64,
    kind: TransactionKind,
    category: String,
    date: NaiveDateTime,
}

impl TryFrom<UncheckedTransaction> for Transaction {
    type Error = CoreError;

    fn try_from(raw: UncheckedTransaction) -> Result<Self, Self::Error> {
        let checked = Transaction::at(raw.amount, raw.kind, raw.category, raw.date)?;
        Ok(Transaction { id: raw.id, ..checked })
    }
}

/// Append-only, in-session list of transactions.
///
/// There is no edit or delete; entries keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and return a reference to the stored entry.
    pub fn append(&mut self, transaction: Transaction) -> &Transaction {
        self.entries.push(transaction);
        &self.entries[self.entries.len() - 1]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Sum of amounts of the given kind.
#[must_use]
pub fn total_of_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}
