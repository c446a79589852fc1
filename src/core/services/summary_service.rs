//! Derives the dashboard summary from the store's current state.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use tracing::debug;

use crate::ledger::{
    Category, CategoryShare, CategoryTotal, FinanceSummary, Ledger, MonthKey, MonthWindow,
    MonthlyTotals, MonthlyTrend, SelectionState, Transaction, TransactionKind,
    FALLBACK_CATEGORY_COLOR,
};

/// Number of entries kept in [`FinanceSummary::recent_transactions`].
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Stateless aggregation over transaction and category snapshots.
pub struct SummaryService;

impl SummaryService {
    /// Recomputes the whole summary for the month containing `selected_month`.
    ///
    /// Pure: identical inputs always yield an identical summary. Sums saturate
    /// at the `Decimal` bounds.
    pub fn summarize(
        transactions: &[Transaction],
        categories: &[Category],
        selected_month: NaiveDate,
    ) -> FinanceSummary {
        let monthly_data = Self::monthly_totals(transactions);

        let window = MonthWindow::containing(selected_month);
        let current: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| window.contains(txn.date))
            .collect();

        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        for txn in &current {
            match txn.kind {
                TransactionKind::Income => {
                    total_income = total_income.saturating_add(txn.amount)
                }
                TransactionKind::Expense => {
                    total_expense = total_expense.saturating_add(txn.amount)
                }
            }
        }

        let income_by_category = Self::by_category(&current, categories, TransactionKind::Income);
        let expense_by_category =
            Self::by_category(&current, categories, TransactionKind::Expense);

        debug!(
            month = %MonthKey::from_date(selected_month),
            in_window = current.len(),
            total = transactions.len(),
            "summary recomputed"
        );

        FinanceSummary {
            total_income,
            total_expense,
            net_amount: total_income.saturating_sub(total_expense),
            income_by_category,
            expense_by_category,
            monthly_data,
            recent_transactions: Self::recent(transactions, RECENT_TRANSACTION_LIMIT),
        }
    }

    pub fn for_ledger(ledger: &Ledger, selection: &SelectionState) -> FinanceSummary {
        Self::summarize(
            &ledger.transactions,
            &ledger.categories,
            selection.selected_month(),
        )
    }

    /// Per-month income and expense over every transaction, oldest month first.
    pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
        let mut buckets: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();
        for txn in transactions {
            let entry = buckets
                .entry(txn.month_key())
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            match txn.kind {
                TransactionKind::Income => entry.0 = entry.0.saturating_add(txn.amount),
                TransactionKind::Expense => entry.1 = entry.1.saturating_add(txn.amount),
            }
        }
        buckets
            .into_iter()
            .map(|(month, (income, expense))| MonthlyTotals {
                month,
                income,
                expense,
            })
            .collect()
    }

    /// Most recent transactions first; equal dates keep their stored order.
    pub fn recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.into_iter().take(limit).cloned().collect()
    }

    /// Groups by category name, largest first. Ties keep first-encounter order.
    fn by_category(
        transactions: &[&Transaction],
        categories: &[Category],
        kind: TransactionKind,
    ) -> Vec<CategoryTotal> {
        let mut order: Vec<(&str, Decimal)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for txn in transactions.iter().filter(|txn| txn.kind == kind) {
            match index.get(txn.category.as_str()) {
                Some(&slot) => order[slot].1 = order[slot].1.saturating_add(txn.amount),
                None => {
                    index.insert(txn.category.as_str(), order.len());
                    order.push((txn.category.as_str(), txn.amount));
                }
            }
        }

        let mut totals: Vec<CategoryTotal> = order
            .into_iter()
            .map(|(name, amount)| CategoryTotal {
                category: name.to_string(),
                amount,
                color: categories
                    .iter()
                    .find(|category| category.name == name)
                    .map(|category| category.color.clone())
                    .unwrap_or_else(|| FALLBACK_CATEGORY_COLOR.to_string()),
            })
            .collect();
        totals.sort_by(|a, b| b.amount.cmp(&a.amount));
        totals
    }

    /// Attaches each entry's share of the list total, in percent.
    pub fn category_shares(totals: &[CategoryTotal]) -> Vec<CategoryShare> {
        let sum = totals
            .iter()
            .fold(Decimal::ZERO, |acc, entry| acc.saturating_add(entry.amount));
        totals
            .iter()
            .map(|entry| CategoryShare {
                category: entry.category.clone(),
                amount: entry.amount,
                color: entry.color.clone(),
                percentage: entry
                    .amount
                    .checked_div(sum)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    .and_then(|percent| percent.to_f64())
                    .unwrap_or(0.0),
            })
            .collect()
    }

    pub fn monthly_trends(monthly: &[MonthlyTotals]) -> Vec<MonthlyTrend> {
        monthly
            .iter()
            .map(|totals| {
                let net = totals.income.saturating_sub(totals.expense);
                MonthlyTrend {
                    month: totals.month,
                    label: totals.month.label().to_string(),
                    income: totals.income,
                    expense: totals.expense,
                    net,
                    savings: net.max(Decimal::ZERO),
                }
            })
            .collect()
    }
}
