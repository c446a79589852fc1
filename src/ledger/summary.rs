//! Derived read models produced by the summary and budget services.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{budget::BudgetPeriod, month::MonthKey, transaction::Transaction};

/// Income and expense accumulated for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: MonthKey,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Sum of one category's transactions within the selected month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub color: String,
}

/// Everything the dashboard renders, recomputed from scratch on request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_amount: Decimal,
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub monthly_data: Vec<MonthlyTotals>,
    pub recent_transactions: Vec<Transaction>,
}

/// A breakdown entry with its share of the breakdown total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub color: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyTrend {
    pub month: MonthKey,
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub savings: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    NearLimit,
    OverBudget,
}

impl BudgetStatus {
    pub fn from_percent(percent_used: u32) -> Self {
        if percent_used >= 100 {
            BudgetStatus::OverBudget
        } else if percent_used >= 85 {
            BudgetStatus::NearLimit
        } else if percent_used > 70 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }

    pub fn alert(&self) -> Option<&'static str> {
        match self {
            BudgetStatus::OverBudget => Some("Budget exceeded!"),
            BudgetStatus::NearLimit => Some("Approaching budget limit!"),
            _ => None,
        }
    }
}

/// Spending measured against one budget for the selected month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetProgress {
    pub budget_id: Uuid,
    pub category: String,
    pub period: BudgetPeriod,
    pub amount: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percent_used: u32,
    pub status: BudgetStatus,
}
