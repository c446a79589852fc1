use rust_decimal::Decimal;

use super::{date, dollars};
use crate::core::services::{BudgetService, ServiceError};
use crate::ledger::{
    BudgetPeriod, BudgetStatus, Ledger, NewBudget, NewTransaction, TransactionKind,
};

fn spend(ledger: &mut Ledger, amount: i64, category: &str, day: u32, month: u32) {
    ledger.add_transaction(NewTransaction::new(
        TransactionKind::Expense,
        date(2024, month, day),
        dollars(amount),
        category,
        "spend",
    ));
}

#[test]
fn progress_counts_only_matching_expenses_in_month() {
    let mut ledger = Ledger::new();
    ledger.add_budget(NewBudget::new("Food", dollars(600), BudgetPeriod::Monthly));
    spend(&mut ledger, 300, "Food", 3, 3);
    spend(&mut ledger, 150, "Food", 31, 3);
    spend(&mut ledger, 500, "Food", 1, 4);
    spend(&mut ledger, 70, "Shopping", 9, 3);
    ledger.add_transaction(NewTransaction::new(
        TransactionKind::Income,
        date(2024, 3, 5),
        dollars(40),
        "Food",
        "refund",
    ));

    let progress = BudgetService::progress(&ledger, date(2024, 3, 10));
    assert_eq!(progress.len(), 1);
    let food = &progress[0];
    assert_eq!(food.spent, dollars(450));
    assert_eq!(food.remaining, dollars(150));
    assert_eq!(food.percent_used, 75);
    assert_eq!(food.status, BudgetStatus::Warning);
}

#[test]
fn period_does_not_narrow_the_window() {
    let mut ledger = Ledger::new();
    ledger.add_budget(NewBudget::new("Food", dollars(100), BudgetPeriod::Weekly));
    spend(&mut ledger, 45, "Food", 2, 5);
    spend(&mut ledger, 45, "Food", 28, 5);

    let progress = BudgetService::progress(&ledger, date(2024, 5, 1));
    assert_eq!(progress[0].spent, dollars(90));
    assert_eq!(progress[0].period, BudgetPeriod::Weekly);
    assert_eq!(progress[0].status, BudgetStatus::NearLimit);
}

#[test]
fn overspending_caps_percent_and_floors_remaining() {
    let mut ledger = Ledger::new();
    ledger.add_budget(NewBudget::new("Shopping", dollars(200), BudgetPeriod::Monthly));
    spend(&mut ledger, 260, "Shopping", 12, 7);

    let progress = BudgetService::progress(&ledger, date(2024, 7, 1));
    assert_eq!(progress[0].percent_used, 100);
    assert_eq!(progress[0].remaining, Decimal::ZERO);
    assert_eq!(progress[0].status, BudgetStatus::OverBudget);
    assert_eq!(progress[0].status.alert(), Some("Budget exceeded!"));
}

#[test]
fn status_thresholds() {
    assert_eq!(BudgetStatus::from_percent(70), BudgetStatus::OnTrack);
    assert_eq!(BudgetStatus::from_percent(71), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::from_percent(85), BudgetStatus::NearLimit);
    assert_eq!(BudgetStatus::from_percent(100), BudgetStatus::OverBudget);
}

#[test]
fn validate_rejects_non_positive_amounts() {
    let draft = NewBudget::new("Food", Decimal::ZERO, BudgetPeriod::Monthly);
    assert!(matches!(
        BudgetService::validate(&draft),
        Err(ServiceError::Invalid(_))
    ));
    let draft = NewBudget::new("", dollars(10), BudgetPeriod::Monthly);
    assert!(BudgetService::validate(&draft).is_err());
    let draft = NewBudget::new("Food", dollars(10), BudgetPeriod::Monthly);
    assert!(BudgetService::validate(&draft).is_ok());
}

#[test]
fn tiny_budget_with_real_spending_stays_measurable() {
    let mut ledger = Ledger::new();
    ledger.add_budget(NewBudget::new(
        "Food",
        Decimal::from_i128_with_scale(1, 25),
        BudgetPeriod::Monthly,
    ));
    spend(&mut ledger, 80, "Food", 4, 6);

    let progress = BudgetService::progress(&ledger, date(2024, 6, 1));
    assert_eq!(progress[0].percent_used, 100);
    assert_eq!(progress[0].status, BudgetStatus::OverBudget);
    assert_eq!(progress[0].remaining, Decimal::ZERO);
}
