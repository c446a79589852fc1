use std::str::FromStr;

use crate::cli::commands::usage;
use crate::cli::core::{parse_date, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_month_heading;
use crate::ledger::MonthKey;

const USAGE: &str = "month [prev|next|YYYY-MM|YYYY-MM-DD]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "month",
        "Show or change the selected month",
        USAGE,
        cmd_month,
    )
    .subcommands(&["prev", "next"])]
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        ["prev" | "previous" | "<"] => {
            context.session.selection_mut().previous_month();
        }
        ["next" | ">"] => {
            context.session.selection_mut().next_month();
        }
        [value] if value.len() == 7 => {
            let key = MonthKey::from_str(value)?;
            context.session.set_selected_month(key.first_day());
        }
        [value] => {
            let date = parse_date(value)?;
            context.session.set_selected_month(date);
        }
        _ => return Err(usage(USAGE)),
    }
    output::info(format!(
        "Selected month: {}",
        format_month_heading(context.session.selection().selected_month())
    ));
    Ok(())
}
