use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::SummaryService;
use crate::currency::{format_month_heading, format_percent};
use crate::ledger::CategoryTotal;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "report",
        "Category shares for the selected month and monthly trends",
        "report",
        cmd_report,
    )]
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    let heading = format_month_heading(context.session.selection().selected_month());

    output::section(format!("Expense distribution: {}", heading));
    print_shares(context, &summary.expense_by_category);
    output::section(format!("Income distribution: {}", heading));
    print_shares(context, &summary.income_by_category);

    output::section("Monthly trends");
    let trends = SummaryService::monthly_trends(&summary.monthly_data);
    if trends.is_empty() {
        output::info("No transactions yet.");
        return Ok(());
    }
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Income"),
        TableColumn::right("Expenses"),
        TableColumn::right("Net"),
        TableColumn::right("Savings"),
    ]);
    for trend in &trends {
        let net = context.format_amount(trend.net);
        table.push(vec![
            format!("{} {}", trend.label, trend.month.year),
            context.format_amount(trend.income),
            context.format_amount(trend.expense),
            output::signed(&net, trend.net.is_sign_negative()),
            context.format_amount(trend.savings),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn print_shares(context: &ShellContext, totals: &[CategoryTotal]) {
    let shares = SummaryService::category_shares(totals);
    if shares.is_empty() {
        output::info("Nothing recorded this month.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::left("Color"),
        TableColumn::right("Amount"),
        TableColumn::right("Share"),
    ]);
    for share in shares {
        table.push(vec![
            share.category,
            share.color,
            context.format_amount(share.amount),
            format_percent(share.percentage),
        ]);
    }
    output::info(table.render());
}
