//! The interactive input loop.
//!
//! Every screen asks for a command the same way: prompt, resolve the line
//! against the screen's candidates, run the command's checker, and repeat
//! until a selection is accepted.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            v                              │ feedback / help / reject
//!      Prompting ──line──> Resolving ──resolved──> Checking ──accept──> Done
//!            │                  │
//!            └──eof/stop──>     └──quit──> Done(Quit)
//! ```
//!
//! `help` and `quit` are merged into every candidate set. `quit` ends the loop
//! with [`Selection::Quit`]; `help` prints the listing and re-prompts unless
//! the caller registered a checker for it.

use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use barkeep_foundation::Result;
use barkeep_resolver::config::{HELP, QUIT};
use barkeep_resolver::{CandidateSet, Resolver};
use tracing::{debug, info, trace, warn};

use crate::checker::{CheckOutcome, CheckerRegistry};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Loop behavior that is independent of any particular screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoopConfig {
    /// Require every input word to be a literal prefix.
    pub force_beginning: bool,
    /// Lines arriving within this long of the previous one are dropped.
    /// Zero disables debouncing.
    pub debounce: Duration,
    /// Give up with [`Selection::Quit`] after this many prompts.
    pub max_iterations: Option<usize>,
}

impl LoopConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets prefix-only matching.
    #[must_use]
    pub const fn with_force_beginning(mut self, force: bool) -> Self {
        self.force_beginning = force;
        self
    }

    /// Sets the debounce window.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Caps the number of prompts per loop.
    #[must_use]
    pub const fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }
}

/// What the loop returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// An accepted command.
    Command {
        /// The resolved command.
        command: String,
        /// Its arguments.
        args: Vec<String>,
    },
    /// The player asked to leave, or input ended.
    Quit,
}

impl Selection {
    /// The selected command, or `None` for [`Selection::Quit`].
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Command { command, .. } => Some(command),
            Self::Quit => None,
        }
    }

    /// The arguments of the selected command.
    #[must_use]
    pub fn args(&self) -> &[String] {
        match self {
            Self::Command { args, .. } => args,
            Self::Quit => &[],
        }
    }
}

/// States of the input loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for a line.
    Prompting,
    /// Resolving a line against the candidates.
    Resolving(String),
    /// Running the checker for a resolved command.
    Checking {
        /// The resolved command.
        command: String,
        /// Its arguments.
        args: Vec<String>,
    },
    /// Finished.
    Done(Selection),
}

/// Shared flag that makes a running loop finish at its next prompt.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Creates a cleared flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the loop to stop.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns true once a stop was requested.
    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clears the flag.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Runs input loops over a line editor and an output sink.
pub struct Prompter<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// Source of input lines.
    editor: E,

    /// Where feedback goes.
    out: W,

    resolver: Resolver,
    config: LoopConfig,
    stop: StopFlag,

    /// When the last line arrived, for debouncing.
    last_entry: Option<Instant>,
}

impl Prompter<RustylineEditor, Stdout> {
    /// Creates a prompter on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(resolver: Resolver, config: LoopConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_io(editor, io::stdout(), resolver, config))
    }
}

impl<E: LineEditor, W: Write> Prompter<E, W> {
    /// Creates a prompter over the given editor and output.
    pub fn with_io(editor: E, out: W, resolver: Resolver, config: LoopConfig) -> Self {
        Self {
            editor,
            out,
            resolver,
            config,
            stop: StopFlag::new(),
            last_entry: None,
        }
    }

    /// Returns the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Returns the loop configuration.
    #[must_use]
    pub const fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Returns a handle that stops the loop at its next prompt.
    #[must_use]
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the prompter, returning its editor and output.
    pub fn into_parts(self) -> (E, W) {
        (self.editor, self.out)
    }

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Prompts until a command from `candidates` is selected and accepted by
    /// its checker, or the player quits.
    ///
    /// Commands listed in `arg_taking` may be followed by one argument
    /// (`buy 3`). Checkers receive `context` along with the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing feedback fails.
    pub fn input_loop<C, S: AsRef<str>>(
        &mut self,
        prompt: &str,
        candidates: &CandidateSet,
        arg_taking: &[S],
        checkers: &CheckerRegistry<C>,
        context: &C,
    ) -> Result<Selection> {
        let merged = candidates.with_always_available(&self.resolver.config().always_available);
        self.editor.set_candidates(merged.sorted());

        let mut prompts = 0_usize;
        let mut state = LoopState::Prompting;
        loop {
            trace!(?state, "input loop");
            state = match state {
                LoopState::Prompting => {
                    if self.stop.is_stop_requested() {
                        debug!("stop requested");
                        LoopState::Done(Selection::Quit)
                    } else if self.config.max_iterations.is_some_and(|max| prompts >= max) {
                        warn!(prompts, "prompt limit reached, giving up");
                        LoopState::Done(Selection::Quit)
                    } else {
                        prompts += 1;
                        self.read(prompt)?
                    }
                }
                LoopState::Resolving(line) => self.resolve(&line, &merged, arg_taking, checkers)?,
                LoopState::Checking { command, args } => {
                    match checkers.check(&command, &args, context) {
                        CheckOutcome::Accept => LoopState::Done(Selection::Command { command, args }),
                        CheckOutcome::Reject(message) => {
                            debug!(%command, ?args, "checker rejected selection");
                            self.say(message)?;
                            LoopState::Prompting
                        }
                    }
                }
                LoopState::Done(selection) => {
                    info!(?selection, prompts, "selection made");
                    return Ok(selection);
                }
            };
        }
    }

    fn read(&mut self, prompt: &str) -> Result<LoopState> {
        match self.editor.read_line(prompt)? {
            ReadResult::Line(line) => {
                if self.debounced() {
                    trace!(%line, "dropping line inside debounce window");
                    return Ok(LoopState::Prompting);
                }
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history(trimmed);
                }
                Ok(LoopState::Resolving(line))
            }
            ReadResult::Interrupted => {
                self.say("")?;
                Ok(LoopState::Prompting)
            }
            ReadResult::Eof => Ok(LoopState::Done(Selection::Quit)),
        }
    }

    /// Records the arrival of a line; true if it came too soon after the last.
    fn debounced(&mut self) -> bool {
        let now = Instant::now();
        let previous = self.last_entry.replace(now);
        !self.config.debounce.is_zero()
            && previous.is_some_and(|last| now.duration_since(last) < self.config.debounce)
    }

    fn resolve<C, S: AsRef<str>>(
        &mut self,
        line: &str,
        merged: &CandidateSet,
        arg_taking: &[S],
        checkers: &CheckerRegistry<C>,
    ) -> Result<LoopState> {
        let outcome =
            self.resolver
                .resolve_with_args(line, merged, arg_taking, self.config.force_beginning);

        if let Some(feedback) = outcome.feedback() {
            self.say(feedback)?;
            return Ok(LoopState::Prompting);
        }
        let Some((command, args)) = outcome.into_resolution() else {
            return Ok(LoopState::Prompting);
        };

        match command.as_str() {
            QUIT => Ok(LoopState::Done(Selection::Quit)),
            HELP if !checkers.contains(HELP) => {
                self.say(format_args!("Commands: {merged}"))?;
                Ok(LoopState::Prompting)
            }
            _ => Ok(LoopState::Checking { command, args }),
        }
    }
}
