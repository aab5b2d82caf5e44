//! Integration tests for the barkeep_runtime crate.
//!
//! Tests for the interactive layer:
//! - The input loop state machine, driven by a scripted editor
//! - Checker registration and verdicts
//! - Bar purchases

mod input_loop_tests;
