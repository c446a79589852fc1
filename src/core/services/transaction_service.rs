//! Filtering, searching, and ordering for the transaction list.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::ledger::{NewTransaction, Transaction, TransactionKind};

use super::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn admits(&self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "all" => Some(TypeFilter::All),
            other => TransactionKind::parse(other).map(TypeFilter::from),
        }
    }
}

impl From<TransactionKind> for TypeFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => TypeFilter::Income,
            TransactionKind::Expense => TypeFilter::Expense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl SortKey {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "date" => Some(SortKey::Date),
            "amount" => Some(SortKey::Amount),
            "category" => Some(SortKey::Category),
            "description" | "desc" => Some(SortKey::Description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Criteria for [`TransactionService::query`]. The default lists every
/// transaction newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub filter: TypeFilter,
    pub search: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl TransactionQuery {
    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    pub fn sorted_by(mut self, sort: SortKey, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Returns the matching transactions in the requested order.
    ///
    /// The sort is stable, so records with equal keys keep their store order.
    pub fn query<'a>(
        transactions: &'a [Transaction],
        query: &TransactionQuery,
    ) -> Vec<&'a Transaction> {
        let needle = query.search.as_deref().map(|term| term.trim().to_lowercase());
        let mut matches: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| query.filter.admits(txn.kind))
            .filter(|txn| match &needle {
                Some(term) => Self::matches_search(txn, term),
                None => true,
            })
            .collect();

        matches.sort_by(|a, b| {
            let ordering = Self::compare(a, b, query.sort);
            match query.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        matches
    }

    /// Form-level checks applied before a draft reaches the store.
    pub fn validate(draft: &NewTransaction) -> ServiceResult<()> {
        if draft.amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid("Please enter a valid amount".into()));
        }
        if draft.category.trim().is_empty() {
            return Err(ServiceError::Invalid("Please select a category".into()));
        }
        if draft.description.trim().is_empty() {
            return Err(ServiceError::Invalid("Please enter a description".into()));
        }
        Ok(())
    }

    fn matches_search(txn: &Transaction, term: &str) -> bool {
        txn.description.to_lowercase().contains(term)
            || txn.category.to_lowercase().contains(term)
            || txn.amount.normalize().to_string().contains(term)
    }

    fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
        match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase()),
        }
    }
}
