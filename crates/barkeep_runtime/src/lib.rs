//! Interactive input loop, bar session, and CLI for barkeep.
//!
//! This crate provides:
//! - [`LineEditor`] - Line editing over rustyline, or a scripted source for tests
//! - [`CheckerRegistry`] - Per-command argument validation
//! - [`Prompter`] - The prompt/resolve/check loop every screen runs on
//! - [`Bar`] - The player's bar: funds, shelf, supplier catalog, and menu
//! - [`Game`] - The screens (main, shop, menu, inventory)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bar;
pub mod checker;
pub mod editor;
pub mod input_loop;
pub mod screens;

pub use bar::{Bar, Money, PurchaseError};
pub use checker::{CheckOutcome, CheckerRegistry};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use input_loop::{LoopConfig, LoopState, Prompter, Selection, StopFlag};
pub use screens::{Flow, Game};
