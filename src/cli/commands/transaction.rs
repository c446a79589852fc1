use crate::cli::commands::usage;
use crate::cli::core::{
    parse_amount, parse_date, short_id, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::{
    SortDirection, SortKey, TransactionQuery, TransactionService, TypeFilter,
};
use crate::ledger::{NewTransaction, TransactionKind};

const USAGE: &str = "tx <list|add|edit|rm> ...";
const LIST_USAGE: &str = "tx list [all|income|expense] [--search TEXT] [--sort KEY[:asc|desc]]";
const ADD_USAGE: &str = "tx add <income|expense> <amount> <category> <YYYY-MM-DD> <description>";
const EDIT_USAGE: &str = "tx edit <id> <date|amount|category|description|type> <value>";
const RM_USAGE: &str = "tx rm <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "tx",
        "List, add, edit, or remove transactions",
        "tx list [all|income|expense] [--search TEXT] [--sort KEY[:asc|desc]]\n         \
         tx add <income|expense> <amount> <category> <YYYY-MM-DD> <description>\n         \
         tx edit <id> <field> <value>\n         \
         tx rm <id>",
        cmd_transaction,
    )
    .aliases(&["transactions", "txn"])
    .subcommands(&["list", "add", "edit", "rm"])]
}

fn cmd_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(usage(USAGE));
    };
    match subcommand.to_ascii_lowercase().as_str() {
        "list" | "ls" => list(context, rest),
        "add" => add(context, rest),
        "edit" => edit(context, rest),
        "rm" | "remove" | "delete" => remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown tx subcommand `{}`",
            other
        ))),
    }
}

fn parse_query(args: &[&str]) -> Result<TransactionQuery, CommandError> {
    let mut query = TransactionQuery::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--search" | "-s" => {
                let term = iter.next().ok_or_else(|| usage(LIST_USAGE))?;
                query = query.with_search(*term);
            }
            "--sort" => {
                let raw_sort = iter.next().ok_or_else(|| usage(LIST_USAGE))?;
                let (key, direction) = match raw_sort.split_once(':') {
                    Some((key, direction)) => (key, Some(direction)),
                    None => (*raw_sort, None),
                };
                let key = SortKey::parse(key).ok_or_else(|| {
                    CommandError::InvalidArguments(format!("unknown sort key `{}`", key))
                })?;
                let direction = match direction {
                    Some(raw) => SortDirection::parse(raw).ok_or_else(|| {
                        CommandError::InvalidArguments(format!("unknown sort direction `{}`", raw))
                    })?,
                    None => SortDirection::default(),
                };
                query = query.sorted_by(key, direction);
            }
            other => {
                let filter = TypeFilter::parse(other).ok_or_else(|| usage(LIST_USAGE))?;
                query = query.with_filter(filter);
            }
        }
    }
    Ok(query)
}

fn list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = parse_query(args)?;
    let rows = TransactionService::query(context.session.transactions(), &query);

    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Type"),
        TableColumn::left("Category").max(16),
        TableColumn::left("Description").max(28),
        TableColumn::right("Amount"),
    ]);
    for txn in &rows {
        let amount = context.format_amount(txn.amount);
        table.push(vec![
            short_id(txn.id),
            context.format_date(txn.date),
            txn.kind.label().to_string(),
            txn.category.clone(),
            txn.description.clone(),
            output::signed(&amount, !txn.is_income()),
        ]);
    }

    output::section("Transactions");
    if rows.is_empty() {
        output::info("No transactions found.");
        return Ok(());
    }
    output::info(table.render());
    output::info(format!("{} transaction(s)", rows.len()));
    Ok(())
}

fn parse_kind(raw: &str) -> Result<TransactionKind, CommandError> {
    TransactionKind::parse(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "invalid type `{}` (use income or expense)",
            raw
        ))
    })
}

/// The category must already exist for the transaction's kind.
fn ensure_category(
    context: &ShellContext,
    name: &str,
    kind: TransactionKind,
) -> Result<(), CommandError> {
    let known = context
        .session
        .ledger()
        .categories_of_kind(kind)
        .any(|category| category.name == name);
    if known {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "unknown {} category `{}`",
            kind.label().to_lowercase(),
            name
        )))
    }
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, amount, category, date, description @ ..] = args else {
        return Err(usage(ADD_USAGE));
    };
    let draft = NewTransaction::new(
        parse_kind(kind)?,
        parse_date(date)?,
        parse_amount(amount)?,
        *category,
        description.join(" "),
    );
    TransactionService::validate(&draft)?;
    ensure_category(context, &draft.category, draft.kind)?;

    let id = context.session.add_transaction(draft);
    output::info(format!("id: {}", short_id(id)));
    Ok(())
}

fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id, field, value @ ..] = args else {
        return Err(usage(EDIT_USAGE));
    };
    if value.is_empty() {
        return Err(usage(EDIT_USAGE));
    }
    let value = value.join(" ");
    let mut txn = context.find_transaction(id)?;
    match field.to_ascii_lowercase().as_str() {
        "date" => txn.date = parse_date(&value)?,
        "amount" => txn.amount = parse_amount(&value)?,
        "category" => txn.category = value,
        "description" | "desc" => txn.description = value,
        "type" | "kind" => txn.kind = parse_kind(&value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown field `{}`",
                other
            )))
        }
    }
    TransactionService::validate(&txn.clone().into())?;
    ensure_category(context, &txn.category, txn.kind)?;

    context.session.update_transaction(txn);
    Ok(())
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(usage(RM_USAGE));
    };
    let txn = context.find_transaction(id)?;
    context.session.delete_transaction(txn.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_flags_parse() {
        let query = parse_query(&["expense", "--search", "rent", "--sort", "amount:asc"]).unwrap();
        assert_eq!(query.filter, TypeFilter::Expense);
        assert_eq!(query.search.as_deref(), Some("rent"));
        assert_eq!(query.sort, SortKey::Amount);
        assert_eq!(query.direction, SortDirection::Ascending);

        let query = parse_query(&["--sort", "category"]).unwrap();
        assert_eq!(query.direction, SortDirection::Descending);
        assert!(parse_query(&["--sort", "colour"]).is_err());
        assert!(parse_query(&["--search"]).is_err());
    }
}
