//! Per-command argument checkers.
//!
//! A checker sees the arguments of a resolved command together with some
//! caller state and either accepts the selection or rejects it with a message.
//! Commands without a registered checker are always accepted.

use std::collections::BTreeMap;
use std::fmt;

/// Verdict of a checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The selection is valid.
    Accept,
    /// The selection is invalid; the message is shown before re-prompting.
    Reject(String),
}

impl CheckOutcome {
    /// Creates a rejection.
    pub fn reject(message: impl Into<String>) -> Self {
        Self::Reject(message.into())
    }

    /// Returns true for [`CheckOutcome::Accept`].
    #[must_use]
    pub const fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

type CheckFn<C> = dyn Fn(&[String], &C) -> CheckOutcome;

/// Checkers keyed by command.
pub struct CheckerRegistry<C> {
    checkers: BTreeMap<String, Box<CheckFn<C>>>,
}

impl<C> Default for CheckerRegistry<C> {
    fn default() -> Self {
        Self {
            checkers: BTreeMap::new(),
        }
    }
}

impl<C> CheckerRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a checker, replacing any previous one for the command.
    pub fn register<F>(&mut self, command: impl Into<String>, checker: F)
    where
        F: Fn(&[String], &C) -> CheckOutcome + 'static,
    {
        self.checkers
            .insert(command.into().to_lowercase(), Box::new(checker));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, command: impl Into<String>, checker: F) -> Self
    where
        F: Fn(&[String], &C) -> CheckOutcome + 'static,
    {
        self.register(command, checker);
        self
    }

    /// Returns true if a checker is registered for `command`.
    #[must_use]
    pub fn contains(&self, command: &str) -> bool {
        self.checkers.contains_key(command)
    }

    /// Runs the checker for `command`, accepting if there is none.
    #[must_use]
    pub fn check(&self, command: &str, args: &[String], context: &C) -> CheckOutcome {
        match self.checkers.get(command) {
            Some(checker) => checker(args, context),
            None => CheckOutcome::Accept,
        }
    }

    /// Commands with a registered checker.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.checkers.keys().map(String::as_str)
    }

    /// Number of registered checkers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Returns true if no checkers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl<C> fmt::Debug for CheckerRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.commands()).finish()
    }
}
