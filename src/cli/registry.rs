use std::collections::HashMap;

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command: its help text, alternate spellings, and the
/// subcommands offered for completion.
pub struct CommandEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub aliases: &'static [&'static str],
    pub subcommands: &'static [&'static str],
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub fn new(
        name: &'static str,
        summary: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            summary,
            usage,
            aliases: &[],
            subcommands: &[],
            handler,
        }
    }

    pub fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    pub fn subcommands(self, subcommands: &'static [&'static str]) -> Self {
        Self {
            subcommands,
            ..self
        }
    }
}

/// Commands in registration order, addressable by name or alias.
///
/// Lookups are case-insensitive. A word claimed by an earlier command is
/// never taken over by a later alias.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    words: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let slot = self.entries.len();
        for word in std::iter::once(entry.name).chain(entry.aliases.iter().copied()) {
            self.words.entry(word).or_insert(slot);
        }
        self.entries.push(entry);
    }

    pub fn resolve(&self, word: &str) -> Option<&CommandEntry> {
        self.words
            .get(word.to_ascii_lowercase().as_str())
            .map(|&slot| &self.entries[slot])
    }

    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter()
    }

    /// Every word the shell accepts as a command, aliases included.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.name).chain(entry.aliases.iter().copied()))
    }
}
