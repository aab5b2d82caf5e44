//! Match outcomes.
//!
//! The resolver only classifies; callers decide what to print. Feedback text
//! for the failure outcomes is available through [`MatchOutcome::feedback`].

use std::fmt;

use tracing::debug;

use crate::candidates::CandidateSet;
use crate::matcher::MatchSet;
use crate::normalize::fold_case;

/// Result of resolving one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Exactly one command matched.
    Resolved {
        /// The matched command.
        command: String,
        /// Tokens that followed the primary command.
        args: Vec<String>,
    },
    /// Several commands matched, but the shortest is contained in all the others.
    ResolvedBase {
        /// The base command.
        command: String,
        /// Tokens that followed the primary command.
        args: Vec<String>,
    },
    /// Several commands matched and none is contained in all the others.
    Ambiguous(Vec<String>),
    /// Nothing matched.
    NoMatch {
        /// The input, case-folded and trimmed.
        input: String,
        /// Every valid command, when the set is small enough to be worth showing.
        listing: Option<Vec<String>>,
    },
    /// Blank input.
    EmptyInput,
}

impl MatchOutcome {
    /// Classifies a match set.
    ///
    /// - no matches: `NoMatch`, listing the candidates if there are at most
    ///   `listing_limit` of them
    /// - one match: `Resolved`
    /// - several: `ResolvedBase` if the shortest match is a substring of every
    ///   other match, otherwise `Ambiguous`
    #[must_use]
    pub fn classify(
        matches: &MatchSet<'_>,
        args: Vec<String>,
        input: &str,
        candidates: &CandidateSet,
        listing_limit: usize,
    ) -> Self {
        match matches.matches.as_slice() {
            [] => {
                let listing = (candidates.len() <= listing_limit).then(|| candidates.sorted());
                Self::NoMatch {
                    input: fold_case(input).trim().to_string(),
                    listing,
                }
            }
            [only] => Self::Resolved {
                command: (*only).to_string(),
                args,
            },
            several => match base_command(several) {
                Some(base) => {
                    debug!(base, matches = ?several, "resolved to base command");
                    Self::ResolvedBase {
                        command: base.to_string(),
                        args,
                    }
                }
                None => Self::Ambiguous(several.iter().map(|m| (*m).to_string()).collect()),
            },
        }
    }

    /// The resolved command, if any.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Resolved { command, .. } | Self::ResolvedBase { command, .. } => Some(command),
            _ => None,
        }
    }

    /// The arguments of a resolved command; empty otherwise.
    #[must_use]
    pub fn args(&self) -> &[String] {
        match self {
            Self::Resolved { args, .. } | Self::ResolvedBase { args, .. } => args,
            _ => &[],
        }
    }

    /// Returns true for `Resolved` and `ResolvedBase`.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.command().is_some()
    }

    /// Consumes a resolved outcome into its command and arguments.
    #[must_use]
    pub fn into_resolution(self) -> Option<(String, Vec<String>)> {
        match self {
            Self::Resolved { command, args } | Self::ResolvedBase { command, args } => {
                Some((command, args))
            }
            _ => None,
        }
    }

    /// The line to show the player, for outcomes that need re-prompting.
    ///
    /// Blank input gets no feedback; the prompt simply comes back.
    #[must_use]
    pub fn feedback(&self) -> Option<String> {
        match self {
            Self::NoMatch {
                listing: Some(listing),
                ..
            } => Some(format!("Valid commands: {}", listing.join(", "))),
            Self::NoMatch {
                input,
                listing: None,
            } => Some(format!("No match for `{input}`.")),
            Self::Ambiguous(matches) => Some(format!(
                "Ambiguous command. Did you mean: {}?",
                matches.join(", ")
            )),
            Self::Resolved { .. } | Self::ResolvedBase { .. } | Self::EmptyInput => None,
        }
    }
}

/// The shortest match, if every other match contains it literally.
fn base_command<'m>(matches: &[&'m str]) -> Option<&'m str> {
    let shortest = matches.iter().min_by_key(|m| m.chars().count())?;
    matches
        .iter()
        .all(|m| m.contains(shortest))
        .then_some(*shortest)
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved { command, args } | Self::ResolvedBase { command, args } => {
                write!(f, "{command}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
            Self::EmptyInput => f.write_str("(empty input)"),
            other => f.write_str(&other.feedback().unwrap_or_default()),
        }
    }
}
