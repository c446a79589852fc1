//! Budget progress for the selected month.

use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::ledger::{
    Budget, BudgetProgress, BudgetStatus, Ledger, MonthWindow, NewBudget, Transaction,
    TransactionKind,
};

use super::{ServiceError, ServiceResult};

pub struct BudgetService;

impl BudgetService {
    /// Measures each budget against the selected month's expenses, in store order.
    ///
    /// The budget's period is reported but never narrows the window.
    pub fn progress(ledger: &Ledger, selected_month: NaiveDate) -> Vec<BudgetProgress> {
        let window = MonthWindow::containing(selected_month);
        ledger
            .budgets
            .iter()
            .map(|budget| Self::measure(budget, &ledger.transactions, window))
            .collect()
    }

    pub fn spent(budget: &Budget, transactions: &[Transaction], window: MonthWindow) -> Decimal {
        transactions
            .iter()
            .filter(|txn| {
                txn.kind == TransactionKind::Expense
                    && txn.category == budget.category
                    && window.contains(txn.date)
            })
            .fold(Decimal::ZERO, |acc, txn| acc.saturating_add(txn.amount))
    }

    /// Whole percent of `amount` used, capped at 100.
    pub fn percent_used(spent: Decimal, amount: Decimal) -> u32 {
        if amount <= Decimal::ZERO {
            return if spent > Decimal::ZERO { 100 } else { 0 };
        }
        // Overflow only happens far past 100%.
        let Some(ratio) = spent
            .checked_div(amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        else {
            return 100;
        };
        ratio
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .min(Decimal::ONE_HUNDRED)
            .to_u32()
            .unwrap_or(0)
    }

    pub fn validate(budget: &NewBudget) -> ServiceResult<()> {
        if budget.category.trim().is_empty() {
            return Err(ServiceError::Invalid("Please select a category".into()));
        }
        if budget.amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid(
                "Please enter a valid budget amount".into(),
            ));
        }
        Ok(())
    }

    fn measure(budget: &Budget, transactions: &[Transaction], window: MonthWindow) -> BudgetProgress {
        let spent = Self::spent(budget, transactions, window);
        let percent_used = Self::percent_used(spent, budget.amount);
        BudgetProgress {
            budget_id: budget.id,
            category: budget.category.clone(),
            period: budget.period,
            amount: budget.amount,
            spent,
            remaining: budget.amount.saturating_sub(spent).max(Decimal::ZERO),
            percent_used,
            status: BudgetStatus::from_percent(percent_used),
        }
    }
}
