//! barkeep - run a bar from the command line
//!
//! This crate re-exports all layers of barkeep for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: barkeep_runtime    - Line editor, input loop, bar session, screens, CLI
//! Layer 1: barkeep_resolver   - Tokenizer, candidates, two-pass matcher, outcomes
//! Layer 0: barkeep_foundation - Core types (Error, Category, Ingredient, Recipe)
//! ```

pub use barkeep_foundation as foundation;
pub use barkeep_resolver as resolver;
pub use barkeep_runtime as runtime;
