use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.entries() {
        output::info(format!("  {:<10} {}", entry.name, entry.summary));
    }
    output::info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.summary));
    output::info(format!("  Usage: {}", entry.usage));
    if !entry.aliases.is_empty() {
        output::info(format!("  Aliases: {}", entry.aliases.join(", ")));
    }
}
