use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("category `{name}` is used by {transactions} transaction(s)")]
    CategoryInUse { name: String, transactions: usize },
    #[error("invalid month `{0}` (use YYYY-MM)")]
    InvalidMonth(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}
