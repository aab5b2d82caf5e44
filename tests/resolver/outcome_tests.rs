//! Outcome classification and argument splitting tests.

use barkeep::resolver::{CandidateSet, MatchOutcome, Resolver, ResolverConfig, resolve};

fn set(commands: &[&str]) -> CandidateSet {
    commands.iter().collect()
}

#[test]
fn base_command_wins_when_contained_in_all_matches() {
    let candidates = set(&["crown royal black", "crown royal blackberry"]);
    assert_eq!(
        resolve("crown royal black", &candidates, false),
        MatchOutcome::ResolvedBase {
            command: "crown royal black".into(),
            args: vec![],
        }
    );
}

#[test]
fn irreducible_ambiguity() {
    let candidates = set(&["lemon", "lime"]);
    let outcome = resolve("l", &candidates, false);
    assert_eq!(
        outcome,
        MatchOutcome::Ambiguous(vec!["lemon".into(), "lime".into()])
    );
    assert_eq!(
        outcome.feedback().as_deref(),
        Some("Ambiguous command. Did you mean: lemon, lime?")
    );
}

#[test]
fn no_match_lists_small_sets() {
    let candidates: CandidateSet = (0..10).map(|i| format!("drink {i}")).collect();
    match resolve("zzz", &candidates, false) {
        MatchOutcome::NoMatch {
            listing: Some(listing),
            ..
        } => assert_eq!(listing, candidates.sorted()),
        other => panic!("expected a listing, got {other:?}"),
    }
}

#[test]
fn no_match_is_generic_for_large_sets() {
    let candidates: CandidateSet = (0..20).map(|i| format!("drink {i}")).collect();
    let outcome = resolve("ZZZ", &candidates, false);
    assert_eq!(
        outcome,
        MatchOutcome::NoMatch {
            input: "zzz".into(),
            listing: None,
        }
    );
    assert_eq!(outcome.feedback().as_deref(), Some("No match for `zzz`."));
}

#[test]
fn listing_limit_is_configurable() {
    let resolver = Resolver::new(ResolverConfig::default().with_listing_limit(3));
    let candidates = set(&["ale", "gin", "rum", "stout"]);
    assert!(matches!(
        resolver.resolve("zzz", &candidates, false),
        MatchOutcome::NoMatch { listing: None, .. }
    ));
}

#[test]
fn blank_input_is_empty() {
    let candidates = set(&["ale"]);
    assert_eq!(resolve("", &candidates, false), MatchOutcome::EmptyInput);
    assert_eq!(resolve("  \"\" ", &candidates, false), MatchOutcome::EmptyInput);
    assert!(MatchOutcome::EmptyInput.feedback().is_none());
}

#[test]
fn quoted_primary_keeps_trailing_args() {
    let candidates = set(&["pale ale", "porter"]);
    assert_eq!(
        resolve("\"pal al\" 2 cases", &candidates, false),
        MatchOutcome::Resolved {
            command: "pale ale".into(),
            args: vec!["2".into(), "cases".into()],
        }
    );
}

#[test]
fn argument_taking_command_gets_the_rest_of_the_line() {
    let candidates = set(&["buy", "back"]);
    let outcome = Resolver::default().resolve_with_args("buy 12", &candidates, &["buy"], false);
    assert_eq!(
        outcome,
        MatchOutcome::Resolved {
            command: "buy".into(),
            args: vec!["12".into()],
        }
    );
}

#[test]
fn multi_word_names_survive_the_argument_attempt() {
    // "crown" is tried as an argument-taking command first; it resolves to
    // "crown royal", which is not "buy", so the whole line is matched.
    let candidates = set(&["buy", "crown royal", "crown royal black"]);
    let outcome = Resolver::default().resolve_with_args(
        "crown royal black",
        &candidates,
        &["buy"],
        false,
    );
    assert_eq!(outcome.command(), Some("crown royal black"));
    assert!(outcome.args().is_empty());
}
