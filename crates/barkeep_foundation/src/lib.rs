//! Core types for barkeep.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Category`] - The closed ingredient taxonomy with its capability table
//! - [`Ingredient`] and [`Recipe`] - Named instances the player works with

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod error;
pub mod ingredient;

pub use category::{Capabilities, Category, Portion};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ingredient::{Ingredient, Recipe, RecipePart};
