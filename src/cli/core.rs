//! Shell context, dispatch, and the shared helpers command handlers lean on.

use std::{env, io, path::PathBuf};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use strsim::levenshtein;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    config::{Config, ConfigManager},
    core::{services::ServiceError, FinanceSession},
    currency::{format_currency, format_date, CurrencyCode, LocaleConfig},
    errors::LedgerError,
    ledger::{Ledger, NotificationKind, SelectionState, Transaction},
};

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

/// Runs commands from stdin instead of an interactive prompt.
pub const SCRIPT_ENV: &str = "FINANCE_CORE_CLI_SCRIPT";
/// Starts with an empty store instead of sample data.
pub const EMPTY_ENV: &str = "FINANCE_CORE_EMPTY";
/// Pins "today" (YYYY-MM-DD) for reproducible sample data and selection.
pub const TODAY_ENV: &str = "FINANCE_CORE_TODAY";

const HISTORY_FILE: &str = "history.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: FinanceSession,
    pub config: Config,
    config_manager: ConfigManager,
    currency: CurrencyCode,
    locale: LocaleConfig,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let today = today_from_env();

        let session = if env_flag(EMPTY_ENV) {
            FinanceSession::new(Ledger::new(), SelectionState::new(today))
        } else {
            FinanceSession::with_sample_data(&config.sample_data(), today)
        };
        debug!(
            transactions = session.transactions().len(),
            %today,
            "session ready"
        );
        Ok(Self::with_session(mode, session, config, config_manager))
    }

    pub fn with_session(
        mode: CliMode,
        session: FinanceSession,
        config: Config,
        config_manager: ConfigManager,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        for entry in commands::all_definitions() {
            registry.register(entry);
        }
        Self {
            mode,
            registry,
            session,
            currency: config.currency_code(),
            locale: config.locale_config(),
            config,
            config_manager,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("finance[{}]> ", self.session.selection().month_key())
    }

    /// Command words paired with the subcommands each offers.
    pub(crate) fn completions(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.registry
            .entries()
            .flat_map(|entry| {
                std::iter::once(entry.name)
                    .chain(entry.aliases.iter().copied())
                    .map(move |word| (word, entry.subcommands))
            })
            .collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.resolve(name)
    }

    /// Readline history lives next to the config file.
    pub(crate) fn history_path(&self) -> PathBuf {
        self.config_manager.path().with_file_name(HISTORY_FILE)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let result = match self.registry.resolve(command).map(|entry| entry.handler) {
            Some(handler) => match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        };
        self.flush_notifications();
        result
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::tokenize(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .words()
            .map(|name| (levenshtein(name, &lowered), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    /// Prints and clears the notifications queued by the store.
    pub(crate) fn flush_notifications(&mut self) {
        for note in self.session.take_notifications() {
            match note.kind {
                NotificationKind::Info => output::success(format!("{}: {}", note.title, note.message)),
                NotificationKind::Error => output::error(format!("{}: {}", note.title, note.message)),
            }
        }
    }

    pub(crate) fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, &self.currency, &self.locale)
    }

    pub(crate) fn format_date(&self, date: NaiveDate) -> String {
        format_date(&self.locale, date)
    }

    pub(crate) fn update_config<F>(&mut self, apply: F) -> CommandResult
    where
        F: FnOnce(&mut Config),
    {
        let mut updated = self.config.clone();
        apply(&mut updated);
        self.config_manager.save(&updated)?;
        self.config = updated;
        self.currency = self.config.currency_code();
        self.locale = self.config.locale_config();
        Ok(())
    }

    pub(crate) fn config_path(&self) -> String {
        self.config_manager.path().display().to_string()
    }

    /// Resolves a transaction from a (possibly shortened) id.
    pub(crate) fn find_transaction(&self, prefix: &str) -> Result<Transaction, CommandError> {
        let needle: String = prefix
            .chars()
            .filter(|ch| *ch != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        if needle.is_empty() {
            return Err(CommandError::InvalidArguments(
                "transaction id must not be empty".into(),
            ));
        }
        let mut matches = self
            .session
            .transactions()
            .iter()
            .filter(|txn| txn.id.simple().to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn.clone()),
            (None, _) => Err(CommandError::InvalidArguments(format!(
                "no transaction matches `{}`",
                prefix
            ))),
            (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
                "`{}` matches several transactions; use more characters",
                prefix
            ))),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn today_from_env() -> NaiveDate {
    let fallback = Local::now().date_naive();
    match env::var(TODAY_ENV) {
        Ok(raw) => parse_date(&raw).unwrap_or_else(|_| {
            warn!(value = %raw, "ignoring invalid {}", TODAY_ENV);
            fallback
        }),
        Err(_) => fallback,
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_amount(input: &str) -> Result<Decimal, CommandError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    cleaned
        .parse::<Decimal>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

pub(crate) fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Ledger(err) => CommandError::Ledger(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

/// Errors that end the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn test_context(ledger: Ledger, today: NaiveDate) -> (ShellContext, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
    let session = FinanceSession::new(ledger, SelectionState::new(today));
    (
        ShellContext::with_session(CliMode::Script, session, Config::default(), manager),
        dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{NewCategory, NewTransaction, TransactionKind};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn id_prefix_resolution() {
        let mut ledger = Ledger::new();
        let id = ledger.add_transaction(NewTransaction::new(
            TransactionKind::Expense,
            day(3),
            Decimal::TEN,
            "Food",
            "Lunch",
        ));
        let (context, _dir) = test_context(ledger, day(10));
        let found = context.find_transaction(&short_id(id)).unwrap();
        assert_eq!(found.id, id);
        assert!(context.find_transaction("zzzz").is_err());
        assert!(context.find_transaction("").is_err());
    }

    #[test]
    fn mutations_flush_notifications_after_dispatch() {
        let mut ledger = Ledger::new();
        ledger.add_category(NewCategory::new("Food", TransactionKind::Expense, "#f59e0b"));
        ledger.take_notifications();
        let (mut context, _dir) = test_context(ledger, day(10));

        context
            .process_line("tx add expense 12.50 Food 2025-01-04 \"Corner shop\"")
            .unwrap();
        assert_eq!(context.session.transactions().len(), 1);
        assert!(context.session.ledger().notifications().is_empty());
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _dir) = test_context(Ledger::new(), day(1));
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert_eq!(context.process_line("   ").unwrap(), LoopControl::Continue);
    }

    #[test]
    fn failed_config_save_keeps_previous_settings() {
        let (mut context, _dir) = test_context(Ledger::new(), day(1));
        std::fs::create_dir(context.config_manager.path()).unwrap();

        let result = context.update_config(|config| config.currency = "EUR".into());
        assert!(result.is_err());
        assert_eq!(context.config, Config::default());
        assert_eq!(context.format_amount(Decimal::TEN), "$10.00");
    }

    #[test]
    fn amounts_accept_symbols_and_grouping() {
        assert_eq!(parse_amount("$1,234.50").unwrap(), Decimal::new(123450, 2));
        assert!(parse_amount("twelve").is_err());
    }
}
