//! The supplier: browse by category, pick an item, buy it.

use std::io::Write;

use barkeep_foundation::{Category, Error, Ingredient, Result};
use barkeep_resolver::config::BACK;
use barkeep_resolver::normalize::category_command;
use barkeep_resolver::{CandidateSet, CommandLookup, Number};

use super::{Flow, Game, NO_ARGS};
use crate::bar::{Bar, Money};
use crate::checker::{CheckOutcome, CheckerRegistry};
use crate::editor::LineEditor;

const BUY: &str = "buy";

/// Reads the quantity argument of `buy`.
///
/// # Errors
///
/// Returns the message to show the player when the argument is missing or
/// not a whole number.
pub fn parse_quantity(args: &[String]) -> std::result::Result<u32, String> {
    match args {
        [] => Err("How many? Try `buy 3`.".to_string()),
        [arg] => arg
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("`{arg}` is not a quantity.")),
        _ => Err("Give one quantity, like `buy 3`.".to_string()),
    }
}

/// Describes how a category is served, or `None` if it is not poured.
#[must_use]
pub fn servings(category: Category) -> Option<String> {
    let capabilities = category.capabilities();
    if !capabilities.pourable || capabilities.portions.is_empty() {
        return None;
    }
    let sizes: Vec<String> = capabilities
        .portions
        .iter()
        .map(|portion| format!("{} ({} oz)", portion.name, portion.ounces))
        .collect();
    Some(format!("Poured by the {}.", sizes.join(" or ")))
}

impl<E: LineEditor, W: Write> Game<E, W> {
    pub(super) fn shop_screen(&mut self) -> Result<Flow> {
        loop {
            let categories = self.bar.categories();
            let catalog = self.bar.catalog().to_vec();

            let mut candidates = CandidateSet::new();
            self.add_derived(&mut candidates, &categories, Number::Plural)?;
            self.add_derived(&mut candidates, &catalog, Number::Singular)?;
            candidates.insert(BACK);

            let sections: Vec<String> = categories
                .iter()
                .filter(|c| c.parent().is_some())
                .map(|c| category_command(*c, Number::Plural))
                .collect();
            self.prompter.say(format_args!(
                "The supplier carries {}. Name a kind or an item.",
                sections.join(", ")
            ))?;

            let selection = self.prompter.input_loop(
                "shop> ",
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

            let by_category = CommandLookup::build(&categories, Number::Plural)?;
            let flow = if let Some(category) = by_category.get(command) {
                self.category_screen(*category)?
            } else {
                let by_name = CommandLookup::build(&catalog, Number::Singular)?;
                let item = by_name.require(command)?.clone();
                self.item_screen(&item)?
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn category_screen(&mut self, category: Category) -> Result<Flow> {
        let prompt = format!("{}> ", category_command(category, Number::Plural));
        loop {
            let items: Vec<Ingredient> = self.bar.items_in(category).cloned().collect();

            let mut candidates = CandidateSet::new();
            self.add_derived(&mut candidates, &items, Number::Singular)?;
            candidates.insert(BACK);

            self.prompter
                .say(format_args!("{} from the supplier:", category.display_name()))?;
            let kinds: Vec<String> = self
                .bar
                .subcategories(category)
                .into_iter()
                .map(|kind| category_command(kind, Number::Plural))
                .collect();
            if !kinds.is_empty() {
                self.prompter.say(format_args!("  Kinds: {}.", kinds.join(", ")))?;
            }
            for item in &items {
                self.prompter.say(format_args!(
                    "  {:<24} {:>8}",
                    item.name,
                    Money(u64::from(item.unit_cost))
                ))?;
            }

            let selection = self.prompter.input_loop(
                &prompt,
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

            let item = CommandLookup::build(&items, Number::Singular)?
                .require(command)?
                .clone();
            if self.item_screen(&item)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn item_screen(&mut self, item: &Ingredient) -> Result<Flow> {
        let candidates: CandidateSet = [BUY, BACK].into_iter().collect();
        let name = item.name.clone();
        let checkers = CheckerRegistry::new().with(BUY, move |args: &[String], bar: &Bar| {
            match parse_quantity(args) {
                Ok(quantity) => match bar.quote(&name, quantity) {
                    Ok(_) => CheckOutcome::Accept,
                    Err(err) => CheckOutcome::reject(err.to_string()),
                },
                Err(message) => CheckOutcome::Reject(message),
            }
        });

        loop {
            let abv = item.abv.map(|abv| format!(", {abv}% ABV")).unwrap_or_default();
            self.prompter.say(format_args!(
                "{} ({}{abv}): {} each, {} on the shelf.",
                item.name,
                item.category.display_name(),
                Money(u64::from(item.unit_cost)),
                self.bar.stock_of(&item.name)
            ))?;
            if let Some(line) = servings(item.category) {
                self.prompter.say(line)?;
            }

            let selection =
                self.prompter
                    .input_loop("buy> ", &candidates, &[BUY], &checkers, &self.bar)?;
            match selection.command() {
                None => return Ok(Flow::Quit),
                Some(BACK) => return Ok(Flow::Back),
                Some(_) => {
                    let quantity = parse_quantity(selection.args()).map_err(Error::internal)?;
                    let cost = self
                        .bar
                        .purchase(&item.name, quantity)
                        .map_err(|e| Error::internal(e.to_string()))?;
                    self.prompter.say(format_args!(
                        "Bought {quantity} x {} for {cost}. {} left.",
                        item.name,
                        self.bar.funds()
                    ))?;
                }
            }
        }
    }
}
