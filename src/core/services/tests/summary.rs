use rust_decimal::Decimal;

use super::{date, dollars, expense, income, palette};
use crate::core::services::{SummaryService, RECENT_TRANSACTION_LIMIT};
use crate::ledger::{
    CategoryTotal, FinanceSummary, MonthKey, Transaction, FALLBACK_CATEGORY_COLOR,
};

fn mixed_history() -> Vec<Transaction> {
    vec![
        income(3500, "Salary", date(2024, 1, 1)),
        expense(120, "Food", date(2024, 1, 31)),
        expense(40, "Shopping", date(2023, 12, 31)),
        income(200, "Freelance", date(2024, 2, 1)),
        expense(75, "Food", date(2024, 2, 14)),
        expense(1200, "Housing", date(2023, 11, 3)),
        expense(15, "Food", date(2024, 1, 1)),
    ]
}

#[test]
fn january_scenario() {
    let txns = vec![
        income(1000, "Salary", date(2025, 1, 5)),
        expense(300, "Food", date(2025, 1, 10)),
    ];
    let summary = SummaryService::summarize(&txns, &palette(), date(2025, 1, 20));

    assert_eq!(summary.total_income, dollars(1000));
    assert_eq!(summary.total_expense, dollars(300));
    assert_eq!(summary.net_amount, dollars(700));
    assert_eq!(
        summary.expense_by_category,
        vec![CategoryTotal {
            category: "Food".into(),
            amount: dollars(300),
            color: "#f59e0b".into(),
        }]
    );
}

#[test]
fn empty_store_yields_zeroed_summary() {
    let summary = SummaryService::summarize(&[], &[], date(2024, 6, 1));
    assert_eq!(summary, FinanceSummary::default());
}

#[test]
fn net_matches_totals_exactly() {
    let txns = vec![
        Transaction::new(
            crate::ledger::TransactionKind::Income,
            date(2024, 3, 2),
            Decimal::new(10, 2),
            "Salary",
            "a",
        ),
        Transaction::new(
            crate::ledger::TransactionKind::Expense,
            date(2024, 3, 3),
            Decimal::new(20, 2),
            "Food",
            "b",
        ),
        Transaction::new(
            crate::ledger::TransactionKind::Income,
            date(2024, 3, 4),
            Decimal::new(30, 2),
            "Salary",
            "c",
        ),
    ];
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 3, 15));
    assert_eq!(summary.total_income - summary.total_expense, summary.net_amount);
    assert_eq!(summary.net_amount, Decimal::new(20, 2));
}

#[test]
fn monthly_buckets_cover_every_transaction_in_order() {
    let txns = mixed_history();
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 1, 15));

    let keys: Vec<String> = summary.monthly_data.iter().map(|m| m.month.to_string()).collect();
    assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);

    let bucketed: Decimal = summary
        .monthly_data
        .iter()
        .map(|m| m.income + m.expense)
        .sum();
    let total: Decimal = txns.iter().map(|t| t.amount).sum();
    assert_eq!(bucketed, total);
}

#[test]
fn window_is_inclusive_on_both_ends() {
    let txns = mixed_history();
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 1, 15));
    assert_eq!(summary.total_income, dollars(3500));
    assert_eq!(summary.total_expense, dollars(135));
}

#[test]
fn other_month_shows_only_in_monthly_data() {
    let txns = vec![
        expense(50, "Food", date(2024, 4, 10)),
        expense(999, "Shopping", date(2024, 5, 2)),
    ];
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 4, 1));

    assert_eq!(summary.total_expense, dollars(50));
    assert!(summary
        .expense_by_category
        .iter()
        .all(|entry| entry.category != "Shopping"));
    let may = summary
        .monthly_data
        .iter()
        .find(|m| m.month == MonthKey::new(2024, 5).unwrap())
        .unwrap();
    assert_eq!(may.expense, dollars(999));
}

#[test]
fn tied_categories_keep_encounter_order() {
    let txns = vec![
        expense(10, "Shopping", date(2024, 1, 3)),
        expense(25, "Housing", date(2024, 1, 4)),
        expense(10, "Food", date(2024, 1, 5)),
    ];
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 1, 1));
    let names: Vec<&str> = summary
        .expense_by_category
        .iter()
        .map(|entry| entry.category.as_str())
        .collect();
    assert_eq!(names, vec!["Housing", "Shopping", "Food"]);
}

#[test]
fn unknown_category_gets_fallback_color_but_counts() {
    let txns = vec![expense(80, "Pets", date(2024, 1, 9))];
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 1, 1));
    assert_eq!(summary.total_expense, dollars(80));
    assert_eq!(summary.expense_by_category[0].color, FALLBACK_CATEGORY_COLOR);
}

#[test]
fn recent_transactions_are_newest_first_and_capped() {
    let txns = mixed_history();
    let summary = SummaryService::summarize(&txns, &palette(), date(2020, 1, 1));

    assert_eq!(summary.recent_transactions.len(), RECENT_TRANSACTION_LIMIT);
    assert!(summary
        .recent_transactions
        .windows(2)
        .all(|pair| pair[0].date >= pair[1].date));
    assert_eq!(summary.recent_transactions[0].date, date(2024, 2, 14));

    let few = &txns[..2];
    let summary = SummaryService::summarize(few, &palette(), date(2024, 1, 1));
    assert_eq!(summary.recent_transactions.len(), 2);
}

#[test]
fn recent_ties_keep_store_order() {
    let first = expense(1, "Food", date(2024, 1, 9));
    let second = expense(2, "Food", date(2024, 1, 9));
    let txns = vec![first.clone(), second.clone()];
    let recent = SummaryService::recent(&txns, 5);
    assert_eq!(recent[0].id, first.id);
    assert_eq!(recent[1].id, second.id);
}

#[test]
fn recomputation_is_identical() {
    let txns = mixed_history();
    let categories = palette();
    let a = SummaryService::summarize(&txns, &categories, date(2024, 1, 15));
    let b = SummaryService::summarize(&txns, &categories, date(2024, 1, 15));
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn shares_and_trends_follow_totals() {
    let txns = mixed_history();
    let summary = SummaryService::summarize(&txns, &palette(), date(2024, 1, 15));
    let shares = SummaryService::category_shares(&summary.expense_by_category);
    let total: f64 = shares.iter().map(|share| share.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(SummaryService::category_shares(&[]).is_empty());

    let trends = SummaryService::monthly_trends(&summary.monthly_data);
    let november = &trends[0];
    assert_eq!(november.label, "Nov");
    assert_eq!(november.net, dollars(-1200));
    assert_eq!(november.savings, Decimal::ZERO);
    let january = &trends[2];
    assert_eq!(january.savings, dollars(3500 - 135));
}

#[test]
fn huge_amounts_saturate_instead_of_overflowing() {
    let on = date(2025, 1, 5);
    let mut txns = vec![
        income(0, "Salary", on),
        income(0, "Salary", on),
        expense(0, "Food", on),
        expense(0, "Food", on),
    ];
    for txn in &mut txns {
        txn.amount = Decimal::MAX;
    }
    let summary = SummaryService::summarize(&txns, &palette(), on);

    assert_eq!(summary.total_income, Decimal::MAX);
    assert_eq!(summary.total_expense, Decimal::MAX);
    assert_eq!(summary.net_amount, Decimal::ZERO);
    assert_eq!(summary.income_by_category[0].amount, Decimal::MAX);
    assert_eq!(summary.monthly_data[0].expense, Decimal::MAX);

    let shares = SummaryService::category_shares(&summary.expense_by_category);
    assert_eq!(shares[0].percentage, 100.0);
}
