//! Tokenizer tests.
//!
//! Tests for splitting raw input into quote-aware tokens.

use barkeep::resolver::{join_with_quotes, tokenize_with_quotes};

#[test]
fn tokenize_simple_command() {
    assert_eq!(tokenize_with_quotes("buy 3"), vec!["buy", "3"]);
}

#[test]
fn tokenize_collapses_whitespace() {
    assert_eq!(
        tokenize_with_quotes("  crown \t royal  "),
        vec!["crown", "royal"]
    );
}

#[test]
fn tokenize_quoted_group() {
    assert_eq!(
        tokenize_with_quotes("\"pale ale\" 2"),
        vec!["pale ale", "2"]
    );
}

#[test]
fn tokenize_empty_quotes_is_a_token() {
    assert_eq!(tokenize_with_quotes("\"\" x"), vec!["", "x"]);
}

#[test]
fn tokenize_blank_input() {
    assert!(tokenize_with_quotes("").is_empty());
    assert!(tokenize_with_quotes("   ").is_empty());
}

#[test]
fn tokenize_unbalanced_quote() {
    assert_eq!(
        tokenize_with_quotes("buy \"crown royal"),
        vec!["buy", "crown royal"]
    );
}

#[test]
fn tokenize_text_before_quote_joins() {
    assert_eq!(tokenize_with_quotes("ab\"c d\""), vec!["abc d"]);
}

#[test]
fn join_requotes_grouped_tokens() {
    let tokens = vec!["buy".to_string(), "crown royal".to_string(), String::new()];
    let joined = join_with_quotes(&tokens);
    assert_eq!(joined, "buy \"crown royal\" \"\"");
    assert_eq!(tokenize_with_quotes(&joined), tokens);
}
