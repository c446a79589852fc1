use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::MonthKey;

/// Direction of money flow, shared by transactions and categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Some(TransactionKind::Income),
            "expense" | "out" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// A single income or expense entry.
///
/// `category` holds the category *name*, not its id: aggregation and the
/// deletion guard both join on names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        NewTransaction::new(kind, date, amount, category, description)
            .into_transaction(Uuid::new_v4())
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Transaction contents before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
            kind: self.kind,
        }
    }
}

impl From<Transaction> for NewTransaction {
    fn from(txn: Transaction) -> Self {
        Self {
            date: txn.date,
            amount: txn.amount,
            category: txn.category,
            description: txn.description,
            kind: txn.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase_under_type_key() {
        let txn = Transaction::new(
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Decimal::new(1000, 0),
            "Salary",
            "Monthly salary",
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["category"], "Salary");
    }

    #[test]
    fn parse_accepts_short_aliases() {
        assert_eq!(TransactionKind::parse("IN"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }
}
