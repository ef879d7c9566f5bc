//! Readline wrapper with completion over the shell's command names.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

pub struct CommandHelper {
    commands: Vec<String>,
    hinter: HistoryHinter,
}

impl CommandHelper {
    pub fn new(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            hinter: HistoryHinter::default(),
        }
    }
}

impl Helper for CommandHelper {}
impl Validator for CommandHelper {}
impl Highlighter for CommandHelper {}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    /// Complete the command token only. Arguments are free-form (symbols,
    /// numbers), so nothing useful can be proposed past the first word.
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        if before.chars().any(|c| c.is_whitespace()) {
            return Ok((pos, Vec::new()));
        }

        let has_leading_slash = before.starts_with('/');
        let prefix = before.trim_start_matches('/').to_lowercase();

        let matches = self
            .commands
            .iter()
            .filter(|command| command.starts_with(&prefix))
            .map(|command| {
                let replacement = if has_leading_slash {
                    format!("/{} ", command)
                } else {
                    format!("{} ", command)
                };
                Pair {
                    display: replacement.clone(),
                    replacement,
                }
            })
            .collect();

        // The command token always starts the line
        Ok((0, matches))
    }
}

/// Thin wrapper over `rustyline::Editor` with preset commands and
/// history path.
pub struct Readline {
    editor: Editor<CommandHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Readline {
    pub fn new(commands: &[&str], history_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .build();
        let helper = CommandHelper::new(commands);
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        let history_path = history_path.unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".gbce/.history")
        });

        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
        })
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
            let _ = self.editor.append_history(&self.history_path);
        }
        Ok(line)
    }

    /// Utility for tests to inspect completions without terminal input.
    pub fn completions(&self, line: &str) -> Vec<String> {
        if let Some(helper) = self.editor.helper() {
            let pos = line.len();
            let history = self.editor.history();
            if let Ok((_, pairs)) = helper.complete(line, pos, &Context::new(history)) {
                return pairs.into_iter().map(|p| p.replacement).collect();
            }
        }
        Vec::new()
    }
}
