//! Ledger domain models, the in-memory entity store, and month helpers.

pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod month;
pub mod notification;
pub mod selection;
pub mod summary;
pub mod transaction;

pub use budget::{Budget, BudgetPeriod, NewBudget};
pub use category::{Category, NewCategory, FALLBACK_CATEGORY_COLOR};
pub use ledger::Ledger;
pub use month::{shift_month, MonthKey, MonthWindow};
pub use notification::{Notification, NotificationKind};
pub use selection::SelectionState;
pub use summary::{
    BudgetProgress, BudgetStatus, CategoryShare, CategoryTotal, FinanceSummary, MonthlyTotals,
    MonthlyTrend,
};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
