//! Resolver entry points.
//!
//! Input preparation decides which tokens form the primary command:
//!
//! - Input without quotes is wrapped in quotes as a whole, so "crown royal
//!   black" is matched as one multi-word command.
//! - Input with quotes is taken as typed: the first token is the primary
//!   command and the rest are arguments (`"pale ale" 2`).
//!
//! [`Resolver::resolve_with_args`] adds a first attempt that treats the first
//! word as an argument-taking command and the rest as its argument.

use tracing::debug;

use crate::candidates::CandidateSet;
use crate::config::ResolverConfig;
use crate::matcher::Matcher;
use crate::normalize::{fold_case, to_command};
use crate::outcome::MatchOutcome;
use crate::tokenizer::InputTokenizer;

/// A primary command split into words plus its trailing argument tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PreparedInput {
    words: Vec<String>,
    args: Vec<String>,
}

impl PreparedInput {
    /// Returns `None` if there is no primary command.
    fn from_line(line: &str) -> Option<Self> {
        let mut tokens = InputTokenizer::tokenize(line).into_iter();
        let primary = tokens.next()?;
        let words: Vec<String> = to_command(&primary)
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            args: tokens.collect(),
        })
    }

    /// Folds case and auto-quotes unquoted input.
    fn auto_quoted(raw: &str) -> Option<Self> {
        let lowered = fold_case(raw);
        if lowered.contains('"') {
            Self::from_line(&lowered)
        } else {
            Self::from_line(&format!("\"{}\"", lowered.trim()))
        }
    }

    /// First word as the command, the remainder quoted as a single argument.
    fn with_trailing_argument(raw: &str) -> Option<Self> {
        let folded = fold_case(raw);
        if folded.contains('"') {
            return None;
        }
        let (head, rest) = folded.trim().split_once(char::is_whitespace)?;
        Self::from_line(&format!("{head} \"{}\"", rest.trim()))
    }
}

/// The command resolver.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves raw input against `candidates`.
    ///
    /// The always-available vocabulary is not merged here; pass a set that
    /// already contains it when it should be matchable.
    #[must_use]
    pub fn resolve(
        &self,
        raw_input: &str,
        candidates: &CandidateSet,
        force_beginning: bool,
    ) -> MatchOutcome {
        match PreparedInput::auto_quoted(raw_input) {
            Some(prepared) => self.classify(prepared, raw_input, candidates, force_beginning),
            None => MatchOutcome::EmptyInput,
        }
    }

    /// Resolves raw input, first trying to read it as `<command> <argument>`
    /// for one of the `arg_taking` commands.
    ///
    /// If the first word resolves to an argument-taking command, the rest of
    /// the line becomes its single argument. Otherwise the whole line is
    /// resolved as with [`resolve`](Self::resolve), so multi-word names that
    /// start with a command-like word still work.
    #[must_use]
    pub fn resolve_with_args<S: AsRef<str>>(
        &self,
        raw_input: &str,
        candidates: &CandidateSet,
        arg_taking: &[S],
        force_beginning: bool,
    ) -> MatchOutcome {
        if !arg_taking.is_empty() {
            if let Some(tentative) = PreparedInput::with_trailing_argument(raw_input) {
                let outcome = self.classify(tentative, raw_input, candidates, force_beginning);
                let accepted = outcome
                    .command()
                    .is_some_and(|command| {
                        arg_taking.iter().any(|a| to_command(a.as_ref()) == command)
                    });
                if accepted {
                    debug!(args = ?outcome.args(), "resolved argument-taking command");
                    return outcome;
                }
                debug!(tentative = %outcome, "argument split rejected, resolving whole input");
            }
        }

        self.resolve(raw_input, candidates, force_beginning)
    }

    fn classify(
        &self,
        prepared: PreparedInput,
        raw_input: &str,
        candidates: &CandidateSet,
        force_beginning: bool,
    ) -> MatchOutcome {
        let matcher = Matcher::new(&self.config, force_beginning);
        let matches = matcher.find(&prepared.words, candidates);
        let outcome = MatchOutcome::classify(
            &matches,
            prepared.args,
            raw_input,
            candidates,
            self.config.listing_limit,
        );
        debug!(
            input = raw_input,
            words = ?prepared.words,
            pass = ?matches.pass,
            outcome = %outcome,
            "resolved input"
        );
        outcome
    }
}

/// Resolves raw input with the default configuration.
#[must_use]
pub fn resolve(raw_input: &str, candidates: &CandidateSet, force_beginning: bool) -> MatchOutcome {
    Resolver::default().resolve(raw_input, candidates, force_beginning)
}
