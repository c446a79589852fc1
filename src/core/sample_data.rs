//! Seeded demo data used to populate a fresh session.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ledger::{
    shift_month, Budget, BudgetPeriod, Category, Ledger, MonthKey, Transaction, TransactionKind,
};

const DEFAULT_SEED: u64 = 0x5eed_f1a7_2024;
const DEFAULT_MONTHS: u32 = 6;
const VARIABLE_EXPENSES_PER_MONTH: usize = 10;

const CATEGORIES: &[(&str, TransactionKind, &str)] = &[
    ("Salary", TransactionKind::Income, "#10b981"),
    ("Freelance", TransactionKind::Income, "#3b82f6"),
    ("Investments", TransactionKind::Income, "#8b5cf6"),
    ("Other Income", TransactionKind::Income, "#06b6d4"),
    ("Housing", TransactionKind::Expense, "#ef4444"),
    ("Food", TransactionKind::Expense, "#f59e0b"),
    ("Transportation", TransactionKind::Expense, "#6366f1"),
    ("Utilities", TransactionKind::Expense, "#64748b"),
    ("Entertainment", TransactionKind::Expense, "#ec4899"),
    ("Healthcare", TransactionKind::Expense, "#14b8a6"),
    ("Shopping", TransactionKind::Expense, "#f97316"),
    ("Education", TransactionKind::Expense, "#8b5cf6"),
];

const BUDGETS: &[(&str, i64)] = &[
    ("Housing", 1500),
    ("Food", 600),
    ("Transportation", 200),
    ("Entertainment", 300),
    ("Utilities", 250),
    ("Shopping", 400),
    ("Healthcare", 200),
];

/// Variable expense categories with their (minimum, spread) in cents.
const VARIABLE_EXPENSES: &[(&str, u64, u64)] = &[
    ("Food", 1_000, 9_000),
    ("Transportation", 2_000, 5_000),
    ("Entertainment", 3_000, 7_000),
    ("Shopping", 5_000, 20_000),
    ("Healthcare", 10_000, 30_000),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleDataConfig {
    pub seed: u64,
    /// Number of calendar months to generate, ending with the month of `today`.
    pub months: u32,
}

impl Default for SampleDataConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            months: DEFAULT_MONTHS,
        }
    }
}

/// SplitMix64; enough to make demo data reproducible from a seed.
struct SeededRng(u64);

impl SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else {
            self.next_u64() % bound
        }
    }

    fn cents(&mut self, minimum: u64, spread: u64) -> Decimal {
        Decimal::new((minimum + self.below(spread)) as i64, 2)
    }
}

pub fn default_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(name, kind, color)| Category::new(*name, *kind, *color))
        .collect()
}

pub fn default_budgets() -> Vec<Budget> {
    BUDGETS
        .iter()
        .map(|(category, amount)| {
            Budget::new(*category, Decimal::new(*amount, 0), BudgetPeriod::Monthly)
        })
        .collect()
}

/// Builds a populated store whose last generated month contains `today`.
///
/// Transactions are returned newest first. The same config and `today`
/// always produce the same amounts, dates, and categories.
pub fn generate(config: &SampleDataConfig, today: NaiveDate) -> Ledger {
    let mut rng = SeededRng(config.seed);
    let mut transactions = Vec::new();
    let span = config.months.max(1) as i32;

    for offset in (0..span).rev() {
        let anchor = shift_month(today, -offset);
        generate_month(&mut rng, anchor, &mut transactions);
    }
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    info!(
        seed = config.seed,
        months = span,
        transactions = transactions.len(),
        "sample data generated"
    );
    Ledger::from_parts(transactions, default_categories(), default_budgets())
}

fn generate_month(rng: &mut SeededRng, anchor: NaiveDate, out: &mut Vec<Transaction>) {
    out.push(Transaction::new(
        TransactionKind::Income,
        anchor,
        rng.cents(350_000, 50_000),
        "Salary",
        "Monthly salary",
    ));

    if rng.next_f64() > 0.6 {
        out.push(Transaction::new(
            TransactionKind::Income,
            anchor + Duration::days(3),
            rng.cents(20_000, 80_000),
            "Freelance",
            "Freelance project",
        ));
    }

    out.push(Transaction::new(
        TransactionKind::Expense,
        anchor + Duration::days(2),
        rng.cents(120_000, 10_000),
        "Housing",
        "Monthly rent",
    ));
    out.push(Transaction::new(
        TransactionKind::Expense,
        anchor + Duration::days(5),
        rng.cents(20_000, 5_000),
        "Utilities",
        "Electricity and water",
    ));

    let month = MonthKey::from_date(anchor);
    for _ in 0..VARIABLE_EXPENSES_PER_MONTH {
        let day = rng.below(28) as u32 + 1;
        let date = anchor.with_day(day).unwrap_or_else(|| month.first_day());
        let (category, minimum, spread) =
            VARIABLE_EXPENSES[rng.below(VARIABLE_EXPENSES.len() as u64) as usize];
        out.push(Transaction::new(
            TransactionKind::Expense,
            date,
            rng.cents(minimum, spread),
            category,
            format!("{} expense", category),
        ));
    }
}
