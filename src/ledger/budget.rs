use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending guardrail for a category, referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: Decimal, period: BudgetPeriod) -> Self {
        NewBudget::new(category, amount, period).into_budget(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, amount: Decimal, period: BudgetPeriod) -> Self {
        Self {
            category: category.into(),
            amount,
            period,
        }
    }

    pub fn into_budget(self, id: Uuid) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            period: self.period,
        }
    }
}

/// Declared budgeting period.
///
/// Stored for display only: spending is always measured against the
/// selected calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

impl BudgetPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Yearly => "Yearly",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Some(BudgetPeriod::Monthly),
            "weekly" | "week" => Some(BudgetPeriod::Weekly),
            "yearly" | "year" | "annual" => Some(BudgetPeriod::Yearly),
            _ => None,
        }
    }
}
