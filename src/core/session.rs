use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{
    Budget, BudgetProgress, Category, FinanceSummary, Ledger, NewBudget, NewCategory,
    NewTransaction, Notification, SelectionState, Transaction,
};

use super::sample_data::{self, SampleDataConfig};
use super::services::{BudgetService, SummaryService};

/// One logical session: the entity store plus the month being viewed.
///
/// The summary is never cached. Callers pull a fresh one with
/// [`FinanceSession::summary`] after whatever mutations they applied.
#[derive(Debug, Clone, Default)]
pub struct FinanceSession {
    ledger: Ledger,
    selection: SelectionState,
}

impl FinanceSession {
    pub fn new(ledger: Ledger, selection: SelectionState) -> Self {
        Self { ledger, selection }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds the store from the demo generator and selects the month of `today`.
    pub fn with_sample_data(config: &SampleDataConfig, today: NaiveDate) -> Self {
        Self::new(
            sample_data::generate(config, today),
            SelectionState::new(today),
        )
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.ledger.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.ledger.budgets
    }

    pub fn summary(&self) -> FinanceSummary {
        SummaryService::for_ledger(&self.ledger, &self.selection)
    }

    pub fn budget_progress(&self) -> Vec<BudgetProgress> {
        BudgetService::progress(&self.ledger, self.selection.selected_month())
    }

    pub fn set_selected_month(&mut self, date: NaiveDate) {
        self.selection.set_selected_month(date);
    }

    pub fn add_transaction(&mut self, data: NewTransaction) -> Uuid {
        self.ledger.add_transaction(data)
    }

    pub fn update_transaction(&mut self, transaction: Transaction) -> bool {
        self.ledger.update_transaction(transaction)
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        self.ledger.delete_transaction(id)
    }

    pub fn add_category(&mut self, data: NewCategory) -> Uuid {
        self.ledger.add_category(data)
    }

    pub fn update_category(&mut self, category: Category) -> bool {
        self.ledger.update_category(category)
    }

    pub fn delete_category(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        self.ledger.delete_category(id)
    }

    pub fn add_budget(&mut self, data: NewBudget) -> Uuid {
        self.ledger.add_budget(data)
    }

    pub fn update_budget(&mut self, budget: Budget) -> bool {
        self.ledger.update_budget(budget)
    }

    pub fn delete_budget(&mut self, id: Uuid) -> bool {
        self.ledger.delete_budget(id)
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.ledger.take_notifications()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use rust_decimal::Decimal;

    #[test]
    fn summary_follows_mutations_and_selection() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut session = FinanceSession::new(Ledger::new(), SelectionState::new(jan));
        session.add_transaction(NewTransaction::new(
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            Decimal::new(1000, 0),
            "Salary",
            "pay",
        ));
        assert_eq!(session.summary().total_income, Decimal::new(1000, 0));

        session.set_selected_month(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        let february = session.summary();
        assert_eq!(february.total_income, Decimal::ZERO);
        assert_eq!(february.monthly_data.len(), 1);
        assert_eq!(session.take_notifications().len(), 1);
    }

    #[test]
    fn sample_session_selects_today() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        let session = FinanceSession::with_sample_data(&SampleDataConfig::default(), today);
        assert_eq!(session.selection().selected_month(), today);
        assert!(session.summary().total_income > Decimal::ZERO);
        assert_eq!(session.budget_progress().len(), 7);
    }
}
