use crate::cli::core::{short_id, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::SummaryService;
use crate::currency::{format_month_heading, format_percent};
use crate::ledger::{CategoryTotal, FinanceSummary};

/// Breakdown rows shown per kind on the dashboard.
const TOP_CATEGORIES: usize = 5;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Overview of the selected month",
            "dashboard",
            cmd_dashboard,
        )
        .aliases(&["dash", "overview"]),
        CommandEntry::new(
            "summary",
            "Print the computed summary",
            "summary [--json]",
            cmd_summary,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    let heading = format_month_heading(context.session.selection().selected_month());

    output::section(format!("Dashboard: {}", heading));
    print_totals(context, &summary);

    print_breakdown(context, "Top expenses", &summary.expense_by_category);
    print_breakdown(context, "Income sources", &summary.income_by_category);

    output::section("Recent transactions");
    if summary.recent_transactions.is_empty() {
        output::info("No transactions yet.");
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("ID"),
            TableColumn::left("Date"),
            TableColumn::left("Description").max(28),
            TableColumn::left("Category").max(16),
            TableColumn::right("Amount"),
        ]);
        for txn in &summary.recent_transactions {
            let amount = context.format_amount(txn.amount);
            let amount = if txn.is_income() {
                format!("+{}", amount)
            } else {
                format!("-{}", amount)
            };
            table.push(vec![
                short_id(txn.id),
                context.format_date(txn.date),
                txn.description.clone(),
                txn.category.clone(),
                output::signed(&amount, !txn.is_income()),
            ]);
        }
        output::info(table.render());
    }

    let alerts: Vec<_> = context
        .session
        .budget_progress()
        .into_iter()
        .filter_map(|entry| entry.status.alert().map(|alert| (entry.category, alert)))
        .collect();
    if !alerts.is_empty() {
        output::section("Budget alerts");
        for (category, alert) in alerts {
            output::warning(format!("{}: {}", category, alert));
        }
    }
    Ok(())
}

fn print_totals(context: &ShellContext, summary: &FinanceSummary) {
    output::info(format!(
        "  Income   {}",
        context.format_amount(summary.total_income)
    ));
    output::info(format!(
        "  Expenses {}",
        context.format_amount(summary.total_expense)
    ));
    let net = context.format_amount(summary.net_amount);
    output::info(format!(
        "  Net      {}",
        output::signed(&net, summary.net_amount.is_sign_negative())
    ));
}

fn print_breakdown(context: &ShellContext, title: &str, totals: &[CategoryTotal]) {
    output::section(title);
    if totals.is_empty() {
        output::info("Nothing recorded this month.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::right("Share"),
    ]);
    for share in SummaryService::category_shares(totals)
        .into_iter()
        .take(TOP_CATEGORIES)
    {
        table.push(vec![
            share.category,
            context.format_amount(share.amount),
            format_percent(share.percentage),
        ]);
    }
    output::info(table.render());
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    if args.contains(&"--json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    output::section(format!(
        "Summary for {}",
        context.session.selection().month_key()
    ));
    print_totals(context, &summary);
    output::info(format!(
        "  Months with activity: {}",
        summary.monthly_data.len()
    ));
    Ok(())
}
