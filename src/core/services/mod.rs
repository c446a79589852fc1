pub mod budget_service;
pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use summary_service::{SummaryService, RECENT_TRANSACTION_LIMIT};
pub use transaction_service::{
    SortDirection, SortKey, TransactionQuery, TransactionService, TypeFilter,
};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
