//! The drink menu.

use std::io::Write;

use barkeep_foundation::{Recipe, Result};
use barkeep_resolver::config::BACK;
use barkeep_resolver::{CandidateSet, CommandLookup, Number};

use super::{Flow, Game, NO_ARGS};
use crate::bar::Money;
use crate::checker::CheckerRegistry;
use crate::editor::LineEditor;

impl<E: LineEditor, W: Write> Game<E, W> {
    pub(super) fn menu_screen(&mut self) -> Result<Flow> {
        loop {
            let recipes = self.bar.menu().to_vec();
            if recipes.is_empty() {
                self.prompter.say("Nothing on the menu yet.")?;
                return Ok(Flow::Back);
            }

            let mut candidates = CandidateSet::new();
            self.add_derived(&mut candidates, &recipes, Number::Singular)?;
            candidates.insert(BACK);

            self.prompter.say("On the menu:")?;
            for recipe in &recipes {
                self.prompter.say(format_args!(
                    "  {:<24} {:>8}",
                    recipe.name,
                    Money(u64::from(recipe.price))
                ))?;
            }

            let selection = self.prompter.input_loop(
                "menu> ",
                &candidates,
                &NO_ARGS,
                &CheckerRegistry::new(),
                &self.bar,
            )?;
            let command = match selection.command() {
                None => return Ok(Flow::Quit),
                Some(BACK) => return Ok(Flow::Back),
                Some(command) => command,
            };

            let recipe = CommandLookup::build(&recipes, Number::Singular)?
                .require(command)?
                .clone();
            self.show_recipe(&recipe)?;
        }
    }

    fn show_recipe(&mut self, recipe: &Recipe) -> Result<()> {
        self.prompter.say(format_args!(
            "{}, {}:",
            recipe.name,
            Money(u64::from(recipe.price))
        ))?;
        for part in &recipe.parts {
            let stock = self.bar.stock_of(&part.ingredient);
            self.prompter.say(format_args!(
                "  {:>5} oz {:<20} ({stock} on the shelf)",
                part.ounces, part.ingredient
            ))?;
        }
        Ok(())
    }
}
