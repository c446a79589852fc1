use crate::cli::commands::usage;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

const CONFIG_USAGE: &str = "config [show | set <locale|currency|seed|months> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change saved preferences",
            CONFIG_USAGE,
            cmd_config,
        )
        .subcommands(&["show", "set"]),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit).aliases(&["quit"]),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Finance Core {}", meta.version));
    output::info(format!(
        "  Build hash : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::info(format!("  Built at   : {}", meta.timestamp));
    output::info(format!("  Target     : {}", meta.target));
    output::info(format!("  Profile    : {}", meta.profile));
    output::info(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            let config = &context.config;
            output::section("Configuration");
            output::info(format!("  Locale       : {}", config.locale));
            output::info(format!("  Currency     : {}", config.currency));
            output::info(format!("  Sample seed  : {}", config.sample_seed));
            output::info(format!("  Sample months: {}", config.sample_months));
            output::info(format!("  File         : {}", context.config_path()));
            Ok(())
        }
        ["set", key, value] => {
            let value = value.trim().to_string();
            let invalid = |what: &str| {
                CommandError::InvalidArguments(format!("invalid {} `{}`", what, value))
            };
            match key.to_ascii_lowercase().as_str() {
                "locale" => context.update_config(|config| config.locale = value.clone())?,
                "currency" => {
                    if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                        return Err(invalid("currency code"));
                    }
                    context.update_config(|config| config.currency = value.to_uppercase())?
                }
                "seed" => {
                    let seed: u64 = value.parse().map_err(|_| invalid("seed"))?;
                    context.update_config(|config| config.sample_seed = seed)?
                }
                "months" => {
                    let months: u32 = value
                        .parse()
                        .ok()
                        .filter(|months| *months > 0)
                        .ok_or_else(|| invalid("month count"))?;
                    context.update_config(|config| config.sample_months = months)?
                }
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown config key `{}`",
                        other
                    )))
                }
            }
            output::success(format!("Saved {} = {}.", key, value));
            if matches!(key.to_ascii_lowercase().as_str(), "seed" | "months") {
                output::hint("Sample data settings apply from the next session.");
            }
            Ok(())
        }
        _ => Err(usage(CONFIG_USAGE)),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }
    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
