//! The two-pass matcher.
//!
//! Pass 1 aligns input words with candidate words by position. Pass 2, tried
//! only when pass 1 finds nothing, lets each input word match any word of the
//! candidate. Running them in that order is what makes "pal al" pick
//! "pale ale" over a candidate that merely contains the same letters
//! somewhere.

use tracing::trace;

use crate::candidates::CandidateSet;
use crate::config::ResolverConfig;

/// Which pass produced a match set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// Positional alignment.
    Positional,
    /// Any-position alignment.
    AnyPosition,
}

/// The candidates that matched, in candidate display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet<'c> {
    /// The pass that produced the matches; `None` if nothing matched.
    pub pass: Option<Pass>,
    /// Matching commands.
    pub matches: Vec<&'c str>,
}

impl MatchSet<'_> {
    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Returns true if the characters of `needle` appear in `haystack` in order,
/// with arbitrary gaps.
#[must_use]
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle
        .chars()
        .all(|wanted| remaining.by_ref().any(|c| c == wanted))
}

/// Matches input words against a candidate set.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    config: &'a ResolverConfig,
    force_beginning: bool,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher. With `force_beginning`, every word must be a
    /// literal prefix regardless of its length.
    #[must_use]
    pub const fn new(config: &'a ResolverConfig, force_beginning: bool) -> Self {
        Self {
            config,
            force_beginning,
        }
    }

    /// Runs pass 1, then pass 2 if pass 1 matched nothing.
    #[must_use]
    pub fn find<'c, S: AsRef<str>>(
        &self,
        words: &[S],
        candidates: &'c CandidateSet,
    ) -> MatchSet<'c> {
        if words.is_empty() {
            return MatchSet::default();
        }

        let positional: Vec<&str> = candidates
            .iter()
            .filter(|c| self.matches_positional(words, c))
            .collect();
        trace!(matches = ?positional, "pass 1");
        if !positional.is_empty() {
            return MatchSet {
                pass: Some(Pass::Positional),
                matches: positional,
            };
        }

        let anywhere: Vec<&str> = candidates
            .iter()
            .filter(|c| self.matches_any_position(words, c))
            .collect();
        trace!(matches = ?anywhere, "pass 2");
        if anywhere.is_empty() {
            MatchSet::default()
        } else {
            MatchSet {
                pass: Some(Pass::AnyPosition),
                matches: anywhere,
            }
        }
    }

    /// Pass 1: input word `i` must match candidate word `i`.
    ///
    /// Words shorter than `pass1_prefix_min_len` may match sparsely; longer
    /// ones must be a literal prefix.
    #[must_use]
    pub fn matches_positional<S: AsRef<str>>(&self, words: &[S], candidate: &str) -> bool {
        let candidate_words: Vec<&str> = candidate.split(' ').collect();
        if candidate_words.len() < words.len() {
            return false;
        }

        words.iter().zip(&candidate_words).all(|(word, target)| {
            let word = word.as_ref();
            let literal = self.force_beginning
                || word.chars().count() >= self.config.pass1_prefix_min_len;
            if literal {
                target.starts_with(word)
            } else {
                is_subsequence(word, target)
            }
        })
    }

    /// Pass 2: every input word must match some word of the candidate.
    ///
    /// Words shorter than `pass2_subsequence_min_len` must be a literal
    /// prefix; longer ones may match sparsely anywhere in the word.
    #[must_use]
    pub fn matches_any_position<S: AsRef<str>>(&self, words: &[S], candidate: &str) -> bool {
        let candidate_words: Vec<&str> = candidate.split(' ').collect();

        words.iter().all(|word| {
            let word = word.as_ref();
            let literal = self.force_beginning
                || word.chars().count() < self.config.pass2_subsequence_min_len;
            candidate_words.iter().any(|target| {
                if literal {
                    target.starts_with(word)
                } else {
                    is_subsequence(word, target)
                }
            })
        })
    }
}
