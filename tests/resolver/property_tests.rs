//! Property-based tests for resolution laws.

use barkeep::resolver::{
    CandidateSet, MatchOutcome, join_with_quotes, resolve, tokenize_with_quotes,
};
use proptest::prelude::*;

/// Input with balanced quotes: bare words and quoted phrases separated by spaces.
fn balanced_input() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        "[a-z0-9]{1,6}".prop_map(String::from),
        "[a-z ]{0,10}".prop_map(|phrase| format!("\"{phrase}\"")),
    ];
    prop::collection::vec(part, 0..8).prop_map(|parts| parts.join(" "))
}

fn candidate_set() -> impl Strategy<Value = CandidateSet> {
    prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,2}", 0..20)
        .prop_map(|commands| commands.into_iter().collect())
}

/// A word and one of its prefixes shorter than four characters.
fn word_and_short_prefix() -> impl Strategy<Value = (String, String)> {
    "[a-z]{1,10}"
        .prop_flat_map(|word| {
            let max = word.len().min(3);
            (Just(word), 1..=max)
        })
        .prop_map(|(word, len)| {
            let prefix = word[..len].to_string();
            (word, prefix)
        })
}

/// A word and an in-order selection of at least four of its characters.
fn word_and_subsequence() -> impl Strategy<Value = (String, String)> {
    "[a-z]{4,12}".prop_flat_map(|word| {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        (
            Just(word),
            prop::sample::subsequence(chars, 4..=len)
                .prop_map(|picked| picked.into_iter().collect::<String>()),
        )
    })
}

proptest! {
    #[test]
    fn tokenizer_grouping_is_idempotent(input in balanced_input()) {
        let tokens = tokenize_with_quotes(&input);
        let rejoined = join_with_quotes(&tokens);
        prop_assert_eq!(tokenize_with_quotes(&rejoined), tokens);
    }

    #[test]
    fn resolution_ignores_case(
        input in "[a-zA-ZßäöüÄÖÜéÉñÑσςΣαΑ \"]{0,20}",
        candidates in candidate_set(),
    ) {
        prop_assert_eq!(
            resolve(&input, &candidates, false),
            resolve(&input.to_uppercase(), &candidates, false)
        );
    }

    #[test]
    fn short_prefix_resolves((word, prefix) in word_and_short_prefix()) {
        let candidates: CandidateSet = [word.as_str()].into_iter().collect();
        prop_assert_eq!(
            resolve(&prefix, &candidates, false),
            MatchOutcome::Resolved { command: word, args: vec![] }
        );
    }

    #[test]
    fn long_subsequence_resolves((word, fragment) in word_and_subsequence()) {
        let candidates: CandidateSet = [word.as_str()].into_iter().collect();
        prop_assert_eq!(
            resolve(&fragment, &candidates, false),
            MatchOutcome::Resolved { command: word, args: vec![] }
        );
    }

    #[test]
    fn resolved_commands_come_from_the_candidates(
        input in "[a-z ]{0,16}",
        candidates in candidate_set(),
    ) {
        if let Some(command) = resolve(&input, &candidates, false).command() {
            prop_assert!(candidates.contains(command));
        }
    }
}
