pub mod budget;
pub mod category;
pub mod dashboard;
pub mod month;
pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(dashboard::definitions());
    commands.extend(month::definitions());
    commands.extend(transaction::definitions());
    commands.extend(category::definitions());
    commands.extend(budget::definitions());
    commands.extend(report::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", text))
}
