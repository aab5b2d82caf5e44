//! Resolver configuration.
//!
//! The numeric thresholds were tuned by hand against real play sessions. They
//! are exposed so screens can adjust them; nothing else in the crate assumes
//! their particular values.

use barkeep_foundation::{Error, Result};

/// Input words at least this long must be a literal prefix in pass 1.
pub const PASS1_PREFIX_MIN_LEN: usize = 4;

/// Input words at least this long may match anywhere in a word in pass 2.
pub const PASS2_SUBSEQUENCE_MIN_LEN: usize = 3;

/// Candidate sets up to this size are listed in full on a failed match.
pub const LISTING_LIMIT: usize = 15;

/// The pseudo-command that prints the current candidate listing.
pub const HELP: &str = "help";

/// The pseudo-command that leaves the game.
pub const QUIT: &str = "quit";

/// The conventional "previous screen" command, sorted after everything but quit.
pub const BACK: &str = "back";

/// Configuration for the command resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Pass 1: words of this length or longer need a literal prefix match;
    /// shorter words may match as a sparse subsequence.
    pub pass1_prefix_min_len: usize,

    /// Pass 2: words of this length or longer may match as a subsequence of
    /// any candidate word; shorter words need a literal prefix.
    pub pass2_subsequence_min_len: usize,

    /// Maximum candidate set size for which a failed match lists every command.
    pub listing_limit: usize,

    /// Commands merged into every interactive candidate set.
    pub always_available: Vec<String>,

    /// Whether an unsupported candidate source is an error (true) or is
    /// logged and skipped (false).
    pub strict_candidates: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            pass1_prefix_min_len: PASS1_PREFIX_MIN_LEN,
            pass2_subsequence_min_len: PASS2_SUBSEQUENCE_MIN_LEN,
            listing_limit: LISTING_LIMIT,
            always_available: vec![HELP.to_string(), QUIT.to_string()],
            strict_candidates: true,
        }
    }
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pass 1 literal-prefix threshold.
    #[must_use]
    pub const fn with_pass1_prefix_min_len(mut self, len: usize) -> Self {
        self.pass1_prefix_min_len = len;
        self
    }

    /// Sets the pass 2 subsequence threshold.
    #[must_use]
    pub const fn with_pass2_subsequence_min_len(mut self, len: usize) -> Self {
        self.pass2_subsequence_min_len = len;
        self
    }

    /// Sets the full-listing limit.
    #[must_use]
    pub const fn with_listing_limit(mut self, limit: usize) -> Self {
        self.listing_limit = limit;
        self
    }

    /// Adds a command to the always-available vocabulary.
    #[must_use]
    pub fn with_always_available(mut self, command: impl Into<String>) -> Self {
        let command = command.into().to_lowercase();
        if !self.always_available.contains(&command) {
            self.always_available.push(command);
        }
        self
    }

    /// Makes unsupported candidate sources log-and-skip instead of failing.
    #[must_use]
    pub const fn lenient(mut self) -> Self {
        self.strict_candidates = false;
        self
    }

    /// Checks that the configuration can drive a resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is zero or `help`/`quit` are missing
    /// from the always-available vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.pass1_prefix_min_len == 0 {
            return Err(Error::invalid_config(
                "pass1_prefix_min_len must be at least 1",
            ));
        }
        if self.pass2_subsequence_min_len == 0 {
            return Err(Error::invalid_config(
                "pass2_subsequence_min_len must be at least 1",
            ));
        }
        for required in [HELP, QUIT] {
            if !self.always_available.iter().any(|c| c == required) {
                return Err(Error::invalid_config(format!(
                    "always_available must contain \"{required}\""
                )));
            }
        }
        Ok(())
    }
}
