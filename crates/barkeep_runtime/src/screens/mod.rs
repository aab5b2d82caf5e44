//! Game screens.
//!
//! Each screen builds its candidate set from the live bar state, runs the
//! input loop, and dispatches on the selection. Screens nest: the main screen
//! opens the shop and the menu, and every screen returns a [`Flow`] saying
//! whether its parent should keep going or the player has quit.

mod menu;
mod shop;

use std::any::Any;
use std::io::{Stdout, Write};

use barkeep_foundation::{Error, ErrorContext, Result};
use barkeep_resolver::{CandidateSet, Number};

use crate::bar::Bar;
use crate::checker::CheckerRegistry;
use crate::editor::{LineEditor, RustylineEditor};
use crate::input_loop::Prompter;

pub use shop::{parse_quantity, servings};

const NO_ARGS: [&str; 0] = [];

const MENU: &str = "menu";
const SHOP: &str = "shop";
const INVENTORY: &str = "inventory";

/// What a screen tells its parent when it finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Return to the parent screen.
    Back,
    /// The player quit; unwind every screen.
    Quit,
}

/// A game session: the bar plus the prompter that drives it.
pub struct Game<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    prompter: Prompter<E, W>,
    bar: Bar,
    show_banner: bool,
}

impl<E: LineEditor, W: Write> Game<E, W> {
    /// Creates a game.
    pub const fn new(prompter: Prompter<E, W>, bar: Bar) -> Self {
        Self {
            prompter,
            bar,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the bar.
    #[must_use]
    pub const fn bar(&self) -> &Bar {
        &self.bar
    }

    /// Returns the prompter.
    #[must_use]
    pub const fn prompter(&self) -> &Prompter<E, W> {
        &self.prompter
    }

    /// Consumes the game, returning its prompter and bar.
    pub fn into_parts(self) -> (Prompter<E, W>, Bar) {
        (self.prompter, self.bar)
    }

    /// Runs the main screen until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or a screen's state is
    /// inconsistent with what it offered the player.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }
        self.main_screen().map_err(in_screen("main"))?;
        self.prompter.say("Last call. Goodbye!")
    }

    fn print_banner(&mut self) -> Result<()> {
        self.prompter.say("barkeep - run a bar one command at a time")?;
        self.prompter
            .say("Type part of a command (\"sh\" for shop); \"help\" lists commands, \"quit\" leaves.")?;
        self.prompter.say("")
    }

    fn main_screen(&mut self) -> Result<()> {
        let candidates: CandidateSet = [MENU, SHOP, INVENTORY].into_iter().collect();
        loop {
            self.prompter.say(format_args!(
                "{} in the till. Where to? ({candidates})",
                self.bar.funds()
            ))?;
            let selection = self.prompter.input_loop(
                "bar> ",
                &candidates,
                &NO_ARGS,
                &CheckerRegistry::new(),
                &self.bar,
            )?;

            let flow = match selection.command() {
                None => Flow::Quit,
                Some(MENU) => self.menu_screen().map_err(in_screen(MENU))?,
                Some(SHOP) => self.shop_screen().map_err(in_screen(SHOP))?,
                Some(INVENTORY) => {
                    self.show_inventory()?;
                    Flow::Back
                }
                Some(other) => return Err(Error::unknown_command(other)),
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn show_inventory(&mut self) -> Result<()> {
        if self.bar.shelf().is_empty() {
            self.prompter.say("The shelf is empty.")?;
        }
        for item in self.bar.shelf() {
            self.prompter
                .say(format_args!("  {:<24} {:>4}", item.name, item.stock))?;
        }
        Ok(())
    }

    /// Adds derived commands for `items`, honoring the resolver's
    /// strictness setting.
    fn add_derived<'a, T: Any>(
        &self,
        candidates: &mut CandidateSet,
        items: impl IntoIterator<Item = &'a T>,
        number: Number,
    ) -> Result<()> {
        if self.prompter.resolver().config().strict_candidates {
            candidates.try_extend_derived(items, number)
        } else {
            candidates.extend_derived_lossy(items, number);
            Ok(())
        }
    }
}

/// Records the screen an error passed through.
fn in_screen(screen: &'static str) -> impl FnOnce(Error) -> Error {
    move |mut err| {
        let context = match err.context.take() {
            Some(context) => context.with_frame(screen),
            None => ErrorContext::new().with_screen(screen),
        };
        err.with_context(context)
    }
}
