//! Fuzzy command resolution for free-form player input.
//!
//! This crate turns whatever the player typed ("pal al", "crown royal black",
//! "buy 3") into exactly one command from the set of commands valid on the
//! current screen, or explains why it could not.
//!
//! # Architecture
//!
//! ```text
//! "Pal Al"
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ PREPARE         │  → lowercase, auto-quote → "\"pal al\""
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ TOKENIZER       │  → primary: "pal al", args: []
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ PASS 1          │  → word i against candidate word i
//! │ PASS 2          │  → (only if pass 1 is empty) any word position
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ CLASSIFY        │  → Resolved("pale ale", []) / ResolvedBase / Ambiguous /
//! │                 │    NoMatch / EmptyInput
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Quote-aware input splitting
//! - [`normalize`] - Command derivation from domain objects
//! - [`candidates`] - The ordered candidate set
//! - [`matcher`] - The two-pass matcher
//! - [`outcome`] - Match outcomes and feedback text
//! - [`resolver`] - Input preparation, argument splitting, and the entry points
//! - [`config`] - Tunable thresholds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod candidates;
pub mod config;
pub mod matcher;
pub mod normalize;
pub mod outcome;
pub mod resolver;
pub mod tokenizer;


pub use candidates::CandidateSet;
pub use config::ResolverConfig;
pub use matcher::{MatchSet, Matcher, Pass};
pub use normalize::{CommandLookup, Number, derive_command, fold_case, pluralize, singularize, to_command};
pub use outcome::MatchOutcome;
pub use resolver::{Resolver, resolve};
pub use tokenizer::{join_with_quotes, tokenize_with_quotes};
