//! Line sources for the shell: a readline prompt or piped stdin.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use tracing::{debug, warn};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext, SCRIPT_ENV};
use crate::cli::output;

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };
    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            drive(&mut context, |_| lines.next().transpose().map_err(CliError::from))
        }
    }
}

/// Feeds lines to the context until the source runs dry or `exit` is seen.
fn drive<F>(context: &mut ShellContext, mut next_line: F) -> Result<(), CliError>
where
    F: FnMut(&ShellContext) -> Result<Option<String>, CliError>,
{
    while context.running {
        let Some(line) = next_line(context)? else {
            break;
        };
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => context.running = false,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(ShellHelper::new(context.completions())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    let history = context.history_path();
    if let Err(err) = editor.load_history(&history) {
        debug!(path = %history.display(), error = %err, "no shell history loaded");
    }
    output::info("Type `help` for commands, `dashboard` for this month's overview.");

    drive(context, |context| match editor.readline(&context.prompt()) {
        Ok(line) => {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                editor.add_history_entry(trimmed).ok();
            }
            Ok(Some(line))
        }
        // Ctrl-C abandons the current line only.
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Eof) => {
            output::info("Exiting shell.");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    })?;

    if let Err(err) = editor.save_history(&history) {
        warn!(path = %history.display(), error = %err, "failed to save shell history");
    }
    Ok(())
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}

/// Completes the command word, then the subcommand word of known commands.
struct ShellHelper {
    commands: Vec<(&'static str, &'static [&'static str])>,
}

impl ShellHelper {
    fn new(mut commands: Vec<(&'static str, &'static [&'static str])>) -> Self {
        commands.sort_by_key(|(word, _)| *word);
        commands.dedup_by_key(|(word, _)| *word);
        Self { commands }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<&'static str>) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let typing_new_word = line.is_empty() || line.ends_with(char::is_whitespace);
        let start = if typing_new_word {
            line.len()
        } else {
            line.trim_end().rfind(char::is_whitespace).map_or(0, |idx| idx + 1)
        };
        let needle = if typing_new_word {
            String::new()
        } else {
            line[start..].to_ascii_lowercase()
        };

        let pool: Vec<&'static str> = match (words.len(), typing_new_word) {
            (0, _) | (1, false) => self.commands.iter().map(|(word, _)| *word).collect(),
            (1, true) | (2, false) => {
                let command = words[0].to_ascii_lowercase();
                self.commands
                    .iter()
                    .find(|(word, _)| *word == command)
                    .map(|(_, subcommands)| subcommands.to_vec())
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        };
        let matches = pool
            .into_iter()
            .filter(|word| word.starts_with(&needle))
            .collect();
        (start, matches)
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}
