use chrono::NaiveDate;
use finance_core::{
    core::{services::SummaryService, FinanceSession},
    errors::LedgerError,
    ledger::{
        BudgetPeriod, Ledger, NewBudget, NewCategory, NewTransaction, NotificationKind,
        SelectionState, TransactionKind,
    },
};
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn prepared_session() -> FinanceSession {
    let mut session = FinanceSession::new(Ledger::new(), SelectionState::new(date(2025, 1, 20)));
    session.add_category(NewCategory::new("Salary", TransactionKind::Income, "#10b981"));
    session.add_category(NewCategory::new("Food", TransactionKind::Expense, "#f59e0b"));
    session.add_category(NewCategory::new("Travel", TransactionKind::Expense, "#6366f1"));
    session.add_transaction(NewTransaction::new(
        TransactionKind::Income,
        date(2025, 1, 5),
        Decimal::new(1000, 0),
        "Salary",
        "January pay",
    ));
    session.add_transaction(NewTransaction::new(
        TransactionKind::Expense,
        date(2025, 1, 10),
        Decimal::new(300, 0),
        "Food",
        "Groceries",
    ));
    session.take_notifications();
    session
}

#[test]
fn january_summary_matches_hand_totals() {
    let session = prepared_session();
    let summary = session.summary();
    assert_eq!(summary.total_income, Decimal::new(1000, 0));
    assert_eq!(summary.total_expense, Decimal::new(300, 0));
    assert_eq!(summary.net_amount, Decimal::new(700, 0));
    assert_eq!(summary.expense_by_category.len(), 1);
    assert_eq!(summary.expense_by_category[0].category, "Food");
    assert_eq!(summary.expense_by_category[0].color, "#f59e0b");
}

#[test]
fn out_of_month_transaction_only_reaches_monthly_data() {
    let mut session = prepared_session();
    session.add_transaction(NewTransaction::new(
        TransactionKind::Expense,
        date(2025, 2, 2),
        Decimal::new(450, 0),
        "Travel",
        "Flights",
    ));
    let summary = session.summary();
    assert_eq!(summary.total_expense, Decimal::new(300, 0));
    assert!(summary
        .expense_by_category
        .iter()
        .all(|entry| entry.category != "Travel"));
    let keys: Vec<String> = summary
        .monthly_data
        .iter()
        .map(|bucket| bucket.month.to_string())
        .collect();
    assert_eq!(keys, vec!["2025-01", "2025-02"]);
    assert_eq!(summary.recent_transactions[0].description, "Flights");
}

#[test]
fn guarded_category_delete_keeps_store_intact() {
    let mut session = prepared_session();
    let food = session.ledger().category_named("Food").unwrap().id;
    let travel = session.ledger().category_named("Travel").unwrap().id;
    let before = session.categories().to_vec();

    let err = session.delete_category(food).unwrap_err();
    assert!(matches!(err, LedgerError::CategoryInUse { transactions: 1, .. }));
    assert_eq!(session.categories(), before.as_slice());
    let notes = session.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);

    assert!(session.delete_category(travel).unwrap());
    assert!(session.ledger().category(travel).is_none());
    assert_eq!(session.take_notifications()[0].title, "Category deleted");
}

#[test]
fn renamed_category_leaves_history_on_the_old_name() {
    let mut session = prepared_session();
    session.add_budget(NewBudget::new("Food", Decimal::new(600, 0), BudgetPeriod::Monthly));
    let mut food = session.ledger().category_named("Food").cloned().unwrap();
    food.name = "Groceries".into();
    assert!(session.update_category(food));

    assert!(session
        .transactions()
        .iter()
        .any(|txn| txn.category == "Food"));
    let summary = session.summary();
    assert_eq!(summary.total_expense, Decimal::new(300, 0));
    assert_eq!(summary.expense_by_category[0].category, "Food");
    assert_eq!(summary.expense_by_category[0].color, "#64748b");
    assert_eq!(session.budgets()[0].category, "Food");
    assert_eq!(session.budget_progress()[0].spent, Decimal::new(300, 0));
}

#[test]
fn updating_a_transaction_moves_it_between_months() {
    let mut session = prepared_session();
    let mut groceries = session
        .transactions()
        .iter()
        .find(|txn| txn.description == "Groceries")
        .cloned()
        .unwrap();
    groceries.date = date(2024, 12, 30);
    assert!(session.update_transaction(groceries.clone()));
    assert_eq!(session.summary().total_expense, Decimal::ZERO);

    assert!(session.delete_transaction(groceries.id));
    assert!(!session.delete_transaction(groceries.id));
    assert_eq!(session.transactions().len(), 1);
}

#[test]
fn summary_is_stable_across_recomputation() {
    let session = prepared_session();
    let first = SummaryService::summarize(
        session.transactions(),
        session.categories(),
        session.selection().selected_month(),
    );
    assert_eq!(first, session.summary());
    assert_eq!(first, session.summary());
}
