//! The candidate set: commands valid in the current context.

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;

use barkeep_foundation::Result;
use tracing::warn;

use crate::config::{BACK, HELP, QUIT};
use crate::normalize::{Number, derive_command, to_command};

/// Sort rank: help first, back and quit last, everything else in between.
fn rank(command: &str) -> u8 {
    match command {
        HELP => 0,
        BACK => 2,
        QUIT => 3,
        _ => 1,
    }
}

/// A deduplicated set of lowercase commands with a fixed display order.
///
/// Iteration is lexicographic with "help" forced first and "back" then "quit"
/// forced last. The empty string is never stored: it could not match
/// non-empty input anyway.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    commands: BTreeSet<(u8, String)>,
}

impl CandidateSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this set with the given vocabulary merged in.
    #[must_use]
    pub fn with_always_available<S: AsRef<str>>(&self, vocabulary: &[S]) -> Self {
        let mut merged = self.clone();
        merged.extend(vocabulary.iter().map(AsRef::as_ref));
        merged
    }

    /// Inserts a literal command, normalized with [`to_command`].
    ///
    /// Returns false if it was empty or already present.
    pub fn insert(&mut self, command: impl AsRef<str>) -> bool {
        let command = to_command(command.as_ref());
        if command.is_empty() {
            return false;
        }
        self.commands.insert((rank(&command), command))
    }

    /// Derives and inserts the command for a domain object.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCandidateKind` if `T` is not a supported source.
    pub fn insert_derived<T: Any>(&mut self, item: &T, number: Number) -> Result<bool> {
        let command = derive_command(item, number)?;
        Ok(self.insert(command))
    }

    /// Derives and inserts the commands for every item.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCandidateKind` on the first unsupported item; items
    /// before it have already been inserted.
    pub fn try_extend_derived<'a, T: Any>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
        number: Number,
    ) -> Result<()> {
        for item in items {
            self.insert_derived(item, number)?;
        }
        Ok(())
    }

    /// Derives and inserts the commands for every item, logging and skipping
    /// unsupported ones. Returns how many were skipped.
    pub fn extend_derived_lossy<'a, T: Any>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
        number: Number,
    ) -> usize {
        let mut skipped = 0;
        for item in items {
            if let Err(err) = self.insert_derived(item, number) {
                warn!(error = %err, "skipping candidate");
                skipped += 1;
            }
        }
        skipped
    }

    /// Returns true if the exact command is present (case-insensitive).
    #[must_use]
    pub fn contains(&self, command: &str) -> bool {
        let command = to_command(command);
        self.commands.contains(&(rank(&command), command))
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates commands in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|(_, c)| c.as_str())
    }

    /// Commands in display order, owned.
    #[must_use]
    pub fn sorted(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for CandidateSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for command in iter {
            self.insert(command);
        }
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sorted().join(", "))
    }
}
