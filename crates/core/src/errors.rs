use thiserror::Error;

/// Unified error type for the entire dashboard-metrics-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Percentages never fail: a zero denominator yields `0.0` instead of an error.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ── Snapshot export / settings loading ──────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
