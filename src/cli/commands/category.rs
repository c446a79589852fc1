use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};
use crate::core::services::CategoryService;
use crate::errors::LedgerError;
use crate::ledger::{Category, NewCategory, TransactionKind, FALLBACK_CATEGORY_COLOR};

const LIST_USAGE: &str = "category list [income|expense]";
const ADD_USAGE: &str = "category add <name> <income|expense> [rrggbb]";
const RENAME_USAGE: &str = "category rename <name> <new-name>";
const RM_USAGE: &str = "category rm <name>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List, add, rename, or remove categories",
        "category list [income|expense]\n         \
         category add <name> <income|expense> [rrggbb]\n         \
         category rename <name> <new-name>\n         \
         category rm <name>",
        cmd_category,
    )
    .aliases(&["categories", "cat"])
    .subcommands(&["list", "add", "rename", "rm"])]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return list(context, &[]);
    };
    match subcommand.to_ascii_lowercase().as_str() {
        "list" | "ls" => list(context, rest),
        "add" => add(context, rest),
        "rename" | "edit" => rename(context, rest),
        "rm" | "remove" | "delete" => remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`",
            other
        ))),
    }
}

fn find_by_name(context: &ShellContext, name: &str) -> Result<Category, CommandError> {
    context
        .session
        .ledger()
        .category_named(name)
        .cloned()
        .ok_or_else(|| CommandError::InvalidArguments(format!("unknown category `{}`", name)))
}

fn list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = match args.first() {
        Some(raw) => Some(TransactionKind::parse(raw).ok_or_else(|| usage(LIST_USAGE))?),
        None => None,
    };
    let ledger = context.session.ledger();

    let mut table = Table::new(vec![
        TableColumn::left("Name"),
        TableColumn::left("Type"),
        TableColumn::left("Color"),
        TableColumn::right("Transactions"),
    ]);
    for category in ledger
        .categories
        .iter()
        .filter(|category| kind.map_or(true, |kind| category.kind == kind))
    {
        table.push(vec![
            category.name.clone(),
            category.kind.label().to_string(),
            category.color.clone(),
            ledger.transactions_in_category(&category.name).to_string(),
        ]);
    }

    output::section("Categories");
    if table.rows.is_empty() {
        output::info("No categories yet.");
    } else {
        output::info(table.render());
    }
    Ok(())
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, kind, color) = match args {
        [name, kind] => (*name, *kind, FALLBACK_CATEGORY_COLOR),
        [name, kind, color] => (*name, *kind, color.trim_start_matches('#')),
        _ => return Err(usage(ADD_USAGE)),
    };
    let kind = TransactionKind::parse(kind).ok_or_else(|| usage(ADD_USAGE))?;
    let draft = NewCategory::new(name, kind, format!("#{}", color));
    CategoryService::validate(&draft)?;
    CategoryService::ensure_unique(context.session.ledger(), &draft.name)?;
    context.session.add_category(draft);
    Ok(())
}

fn rename(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, new_name] = args else {
        return Err(usage(RENAME_USAGE));
    };
    let mut category = find_by_name(context, name)?;
    if category.name == *new_name {
        return Ok(());
    }
    let draft = NewCategory::new(*new_name, category.kind, category.color.clone());
    CategoryService::validate(&draft)?;
    CategoryService::ensure_unique(context.session.ledger(), new_name)?;
    let previous = std::mem::replace(&mut category.name, draft.name);
    context.session.update_category(category);

    let left_behind = context.session.ledger().transactions_in_category(&previous);
    if left_behind > 0 {
        output::hint(format!(
            "{} transaction(s) still use `{}`; use `tx edit <id> category <name>` to move them.",
            left_behind, previous
        ));
    }
    Ok(())
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(usage(RM_USAGE));
    };
    let category = find_by_name(context, name)?;
    match context.session.delete_category(category.id) {
        Ok(_) => Ok(()),
        // The store already queued an error notification for this case.
        Err(LedgerError::CategoryInUse { transactions, .. }) => {
            output::hint(format!(
                "{} transaction(s) still use `{}`; edit or remove them first.",
                transactions, category.name
            ));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
