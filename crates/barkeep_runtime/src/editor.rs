//! Line editor abstraction for the input loop.
//!
//! This module provides a trait-based abstraction over line editing, so the
//! loop can read from rustyline at a terminal or from a fixed script in tests
//! and batch runs.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use barkeep_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF), or the script ran out.
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt. This is the only place the loop blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Replace the commands offered for tab completion.
    fn set_candidates(&mut self, candidates: Vec<String>);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct BarkeepHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for BarkeepHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;33m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes whole commands from the current candidate set.
#[derive(Default)]
struct CommandCompleter {
    commands: Vec<String>,
}

impl CommandCompleter {
    fn matching(&self, typed: &str) -> Vec<Pair> {
        let typed = typed.to_lowercase();
        self.commands
            .iter()
            .filter(|command| command.starts_with(&typed))
            .map(|command| Pair {
                display: command.clone(),
                replacement: command.clone(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Commands can span several words, so complete from the first
        // non-blank character rather than the current word.
        let before = &line[..pos];
        let typed = before.trim_start();
        let start = before.len() - typed.len();
        Ok((start, self.matching(typed)))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<BarkeepHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::editor(e.to_string()))?
            .build();

        let helper = BarkeepHelper {
            completer: CommandCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_candidates(&mut self, candidates: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.commands = candidates;
        }
    }
}

/// A line editor that replays a fixed sequence of reads.
///
/// Once the script is exhausted every read returns [`ReadResult::Eof`].
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    script: VecDeque<ReadResult>,
    prompts: Vec<String>,
    history: Vec<String>,
    candidates: Vec<String>,
    echo: bool,
}

impl ScriptedEditor {
    /// Creates an editor that returns each line in turn.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|l| ReadResult::Line(l.into())).collect(),
            ..Self::default()
        }
    }

    /// Reads a script file, one input line per line of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        Ok(Self::new(source.lines()))
    }

    /// Appends a simulated Ctrl+C.
    #[must_use]
    pub fn with_interrupt(mut self) -> Self {
        self.script.push_back(ReadResult::Interrupted);
        self
    }

    /// Appends a line.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.script.push_back(ReadResult::Line(line.into()));
        self
    }

    /// Prints each prompt and line to stdout as it is read, like a terminal would.
    #[must_use]
    pub const fn with_echo(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines added to history.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent completion candidates.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Reads not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        let next = self.script.pop_front().unwrap_or(ReadResult::Eof);
        if self.echo {
            if let ReadResult::Line(line) = &next {
                println!("{prompt}{line}");
            }
        }
        Ok(next)
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }
}
