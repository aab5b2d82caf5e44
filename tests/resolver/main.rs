//! Integration tests for the barkeep_resolver crate.
//!
//! Tests for the command resolution pipeline:
//! - Tokenization
//! - Two-pass matching
//! - Outcome classification and argument splitting
//! - Algebraic properties of resolution

mod matching_tests;
mod outcome_tests;
mod property_tests;
mod tokenizer_tests;
