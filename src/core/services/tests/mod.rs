mod budget_progress;
mod summary;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{Category, Transaction, TransactionKind};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(super) fn dollars(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

pub(super) fn income(amount: i64, category: &str, on: NaiveDate) -> Transaction {
    Transaction::new(TransactionKind::Income, on, dollars(amount), category, "income")
}

pub(super) fn expense(amount: i64, category: &str, on: NaiveDate) -> Transaction {
    Transaction::new(TransactionKind::Expense, on, dollars(amount), category, "expense")
}

pub(super) fn palette() -> Vec<Category> {
    vec![
        Category::new("Salary", TransactionKind::Income, "#22c55e"),
        Category::new("Food", TransactionKind::Expense, "#f59e0b"),
        Category::new("Shopping", TransactionKind::Expense, "#ec4899"),
    ]
}
