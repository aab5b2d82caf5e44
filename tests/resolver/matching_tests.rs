//! Two-pass matching tests.

use barkeep::resolver::{CandidateSet, MatchOutcome, Resolver, ResolverConfig, resolve};

fn set(commands: &[&str]) -> CandidateSet {
    commands.iter().collect()
}

fn resolved(command: &str) -> MatchOutcome {
    MatchOutcome::Resolved {
        command: command.to_string(),
        args: vec![],
    }
}

#[test]
fn positional_match_end_to_end() {
    let candidates = set(&["pale ale", "pale lager", "porter"]);
    assert_eq!(resolve("pal al", &candidates, false), resolved("pale ale"));
}

#[test]
fn short_fragment_matches_sparsely() {
    let candidates = set(&["lemonade", "tonic water"]);
    assert_eq!(resolve("lmd", &candidates, false), resolved("lemonade"));
}

#[test]
fn long_fragment_needs_prefix_in_first_pass() {
    // "onade" is not a prefix of "lemonade", so pass 1 misses and pass 2 finds
    // it mid-word.
    let candidates = set(&["lemonade", "orange juice"]);
    assert_eq!(resolve("onade", &candidates, false), resolved("lemonade"));
}

#[test]
fn first_pass_wins_over_second() {
    // Pass 1 matches "royal" positionally; pass 2 would also have accepted
    // "crown royal", but it never runs.
    let candidates = set(&["royal stout", "crown royal"]);
    assert_eq!(resolve("royal", &candidates, false), resolved("royal stout"));
}

#[test]
fn second_pass_matches_any_word() {
    let candidates = set(&["crown royal", "buffalo trace"]);
    assert_eq!(resolve("trace", &candidates, false), resolved("buffalo trace"));
}

#[test]
fn second_pass_short_words_need_prefix() {
    let candidates = set(&["crown royal"]);
    assert!(matches!(
        resolve("z ow", &candidates, false),
        MatchOutcome::NoMatch { .. }
    ));
    assert_eq!(resolve("royal cr", &candidates, false), resolved("crown royal"));
}

#[test]
fn candidate_with_fewer_words_cannot_match_positionally() {
    let candidates = set(&["gin"]);
    assert!(!resolve("gin tonic", &candidates, false).is_resolved());
}

#[test]
fn force_beginning_requires_prefixes() {
    let candidates = set(&["lemonade", "lime"]);
    assert!(!resolve("lmd", &candidates, true).is_resolved());
    assert_eq!(resolve("lem", &candidates, true), resolved("lemonade"));
}

#[test]
fn accents_in_names_match_plain_input() {
    let candidates = set(&["Früh Kölsch", "Guinness"]);
    assert_eq!(resolve("fruh kol", &candidates, false), resolved("fruh kolsch"));
    assert_eq!(resolve("Früh", &candidates, false), resolved("fruh kolsch"));
}

#[test]
fn help_and_quit_are_not_merged_by_resolve() {
    let candidates = set(&["stout"]);
    assert!(!resolve("help", &candidates, false).is_resolved());
    let merged = candidates.with_always_available(&ResolverConfig::default().always_available);
    assert_eq!(resolve("help", &merged, false), resolved("help"));
}

#[test]
fn custom_thresholds() {
    // With a higher pass 1 threshold, four-letter fragments may match sparsely.
    let resolver = Resolver::new(ResolverConfig::default().with_pass1_prefix_min_len(6));
    let candidates = set(&["lemonade", "orange"]);
    assert_eq!(
        resolver.resolve("lmnd", &candidates, false),
        resolved("lemonade")
    );
}
