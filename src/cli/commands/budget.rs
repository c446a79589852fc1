use crate::cli::commands::usage;
use crate::cli::core::{parse_amount, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::BudgetService;
use crate::currency::format_month_heading;
use crate::ledger::{Budget, BudgetPeriod, BudgetStatus, NewBudget, TransactionKind};

const USAGE: &str = "budget <list|add|set|rm> ...";
const ADD_USAGE: &str = "budget add <category> <amount> [monthly|weekly|yearly]";
const SET_USAGE: &str = "budget set <category> <amount>";
const RM_USAGE: &str = "budget rm <category>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Track spending against category budgets",
        "budget list\n         \
         budget add <category> <amount> [monthly|weekly|yearly]\n         \
         budget set <category> <amount>\n         \
         budget rm <category>",
        cmd_budget,
    )
    .aliases(&["budgets"])
    .subcommands(&["list", "add", "set", "rm"])]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return list(context);
    };
    match subcommand.to_ascii_lowercase().as_str() {
        "list" | "ls" => list(context),
        "add" => add(context, rest),
        "set" | "edit" => set(context, rest),
        "rm" | "remove" | "delete" => remove(context, rest),
        _ => Err(usage(USAGE)),
    }
}

fn find_budget(context: &ShellContext, category: &str) -> Result<Budget, CommandError> {
    context
        .session
        .budgets()
        .iter()
        .find(|budget| budget.category == category)
        .cloned()
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!("no budget for category `{}`", category))
        })
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "on track",
        BudgetStatus::Warning => "warning",
        BudgetStatus::NearLimit => "near limit",
        BudgetStatus::OverBudget => "over budget",
    }
}

fn list(context: &mut ShellContext) -> CommandResult {
    let progress = context.session.budget_progress();
    output::section(format!(
        "Budgets for {}",
        format_month_heading(context.session.selection().selected_month())
    ));
    if progress.is_empty() {
        output::info("No budgets yet. Add one with `budget add <category> <amount>`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::left("Period"),
        TableColumn::right("Budget"),
        TableColumn::right("Spent"),
        TableColumn::right("Remaining"),
        TableColumn::right("Used"),
        TableColumn::left("Status"),
    ]);
    for entry in &progress {
        table.push(vec![
            entry.category.clone(),
            entry.period.label().to_string(),
            context.format_amount(entry.amount),
            context.format_amount(entry.spent),
            context.format_amount(entry.remaining),
            format!("{}%", entry.percent_used),
            status_label(entry.status).to_string(),
        ]);
    }
    output::info(table.render());

    for entry in &progress {
        if let Some(alert) = entry.status.alert() {
            output::warning(format!("{}: {}", entry.category, alert));
        }
    }
    Ok(())
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, amount, period) = match args {
        [category, amount] => (*category, *amount, BudgetPeriod::default()),
        [category, amount, period] => (
            *category,
            *amount,
            BudgetPeriod::parse(period).ok_or_else(|| usage(ADD_USAGE))?,
        ),
        _ => return Err(usage(ADD_USAGE)),
    };
    let draft = NewBudget::new(category, parse_amount(amount)?, period);
    BudgetService::validate(&draft)?;

    let is_expense_category = context
        .session
        .ledger()
        .categories_of_kind(TransactionKind::Expense)
        .any(|existing| existing.name == draft.category);
    if !is_expense_category {
        return Err(CommandError::InvalidArguments(format!(
            "unknown expense category `{}`",
            draft.category
        )));
    }
    if find_budget(context, &draft.category).is_ok() {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` already has a budget; use `budget set`",
            draft.category
        )));
    }
    context.session.add_budget(draft);
    Ok(())
}

fn set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, amount] = args else {
        return Err(usage(SET_USAGE));
    };
    let mut budget = find_budget(context, category)?;
    budget.amount = parse_amount(amount)?;
    BudgetService::validate(&NewBudget::new(
        budget.category.clone(),
        budget.amount,
        budget.period,
    ))?;
    context.session.update_budget(budget);
    Ok(())
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category] = args else {
        return Err(usage(RM_USAGE));
    };
    let budget = find_budget(context, category)?;
    context.session.delete_budget(budget.id);
    Ok(())
}
