use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    budget::{Budget, NewBudget},
    category::{Category, NewCategory},
    notification::Notification,
    transaction::{NewTransaction, Transaction, TransactionKind},
};

/// In-memory entity store holding transactions, categories, and budgets.
///
/// Mutations never validate their input; callers are trusted. Each
/// successful mutation queues a [`Notification`] that the caller drains
/// with [`Ledger::take_notifications`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    notifications: Vec<Notification>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            budgets: Vec::new(),
            created_at: now,
            updated_at: now,
            notifications: Vec::new(),
        }
    }

    /// Builds a store from existing collections without emitting notifications.
    pub fn from_parts(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        budgets: Vec<Budget>,
    ) -> Self {
        Self {
            transactions,
            categories,
            budgets,
            ..Self::new()
        }
    }

    // Transactions

    pub fn add_transaction(&mut self, data: NewTransaction) -> Uuid {
        let id = Uuid::new_v4();
        let message = format!(
            "{} of ${:.2} added successfully.",
            data.kind.label(),
            data.amount
        );
        self.transactions.push(data.into_transaction(id));
        info!(%id, "transaction added");
        self.notify(Notification::info("Transaction added", message));
        id
    }

    /// Replaces the transaction with the same id. Returns `false` when no record matched.
    pub fn update_transaction(&mut self, transaction: Transaction) -> bool {
        let id = transaction.id;
        match self.transactions.iter_mut().find(|txn| txn.id == id) {
            Some(slot) => {
                *slot = transaction;
                info!(%id, "transaction updated");
                self.notify(Notification::info(
                    "Transaction updated",
                    "Transaction updated successfully.",
                ));
                true
            }
            None => {
                debug!(%id, "update skipped: transaction not found");
                false
            }
        }
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() == before {
            debug!(%id, "delete skipped: transaction not found");
            return false;
        }
        info!(%id, "transaction deleted");
        self.notify(Notification::info(
            "Transaction deleted",
            "Transaction removed successfully.",
        ));
        true
    }

    // Categories

    pub fn add_category(&mut self, data: NewCategory) -> Uuid {
        let id = Uuid::new_v4();
        let message = format!("Category \"{}\" added successfully.", data.name);
        self.categories.push(data.into_category(id));
        info!(%id, "category added");
        self.notify(Notification::info("Category added", message));
        id
    }

    /// Replaces the category with the same id.
    ///
    /// Transactions and budgets reference categories by name and keep the
    /// name they were recorded with.
    pub fn update_category(&mut self, category: Category) -> bool {
        let id = category.id;
        let Some(slot) = self.categories.iter_mut().find(|cat| cat.id == id) else {
            debug!(%id, "update skipped: category not found");
            return false;
        };
        let message = format!("Category \"{}\" updated successfully.", category.name);
        let previous_name = std::mem::replace(slot, category).name;
        info!(%id, previous = %previous_name, "category updated");
        self.notify(Notification::info("Category updated", message));
        true
    }

    /// Removes a category unless a transaction still references its name.
    ///
    /// Returns `Ok(false)` for an unknown id. A referenced category is left in
    /// place, an error notification is queued, and
    /// [`LedgerError::CategoryInUse`] is returned.
    pub fn delete_category(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        let Some(category) = self.category(id) else {
            debug!(%id, "delete skipped: category not found");
            return Ok(false);
        };
        let name = category.name.clone();
        let in_use = self.transactions_in_category(&name);
        if in_use > 0 {
            warn!(%id, category = %name, transactions = in_use, "category delete rejected");
            self.notifications.push(Notification::error(
                "Cannot delete category",
                "This category is used in transactions. Please remove or change those transactions first.",
            ));
            return Err(LedgerError::CategoryInUse {
                name,
                transactions: in_use,
            });
        }
        self.categories.retain(|cat| cat.id != id);
        info!(%id, category = %name, "category deleted");
        self.notify(Notification::info(
            "Category deleted",
            "Category removed successfully.",
        ));
        Ok(true)
    }

    // Budgets

    pub fn add_budget(&mut self, data: NewBudget) -> Uuid {
        let id = Uuid::new_v4();
        let message = format!("Budget for {} added successfully.", data.category);
        self.budgets.push(data.into_budget(id));
        info!(%id, "budget added");
        self.notify(Notification::info("Budget added", message));
        id
    }

    pub fn update_budget(&mut self, budget: Budget) -> bool {
        let id = budget.id;
        match self.budgets.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                let message = format!("Budget for {} updated successfully.", budget.category);
                *slot = budget;
                info!(%id, "budget updated");
                self.notify(Notification::info("Budget updated", message));
                true
            }
            None => {
                debug!(%id, "update skipped: budget not found");
                false
            }
        }
    }

    pub fn delete_budget(&mut self, id: Uuid) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|budget| budget.id != id);
        if self.budgets.len() == before {
            debug!(%id, "delete skipped: budget not found");
            return false;
        }
        info!(%id, "budget deleted");
        self.notify(Notification::info(
            "Budget deleted",
            "Budget removed successfully.",
        ));
        true
    }

    // Lookups

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }

    pub fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.name == name)
    }

    pub fn categories_of_kind(&self, kind: TransactionKind) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |cat| cat.kind == kind)
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn transactions_in_category(&self, name: &str) -> usize {
        self.transactions
            .iter()
            .filter(|txn| txn.category == name)
            .count()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    // Notifications

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn notify(&mut self, notification: Notification) {
        self.touch();
        self.notifications.push(notification);
    }
}
