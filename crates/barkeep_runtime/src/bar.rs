//! The player's bar: money, stock, the supplier catalog, and the drink menu.

use std::fmt;

use barkeep_foundation::{Category, Ingredient, Recipe};
use barkeep_resolver::to_command;
use thiserror::Error;
use tracing::info;

/// An amount of money in cents, displayed as dollars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub u64);

impl Money {
    /// The largest whole-dollar amount that converts without saturating.
    pub const MAX_DOLLARS: u64 = u64::MAX / 100;

    /// Converts whole dollars, saturating at the largest representable amount.
    #[must_use]
    pub const fn dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Why a purchase cannot go through. The message is shown to the player.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    /// Nothing in the catalog has that name.
    #[error("The supplier doesn't carry `{0}`.")]
    UnknownItem(String),
    /// A purchase of nothing.
    #[error("Buy at least one.")]
    ZeroQuantity,
    /// The order costs more than the bar has.
    #[error("That costs {cost}, but you only have {funds}.")]
    InsufficientFunds {
        /// Total price of the order.
        cost: Money,
        /// Money on hand.
        funds: Money,
    },
}

/// The bar and everything in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    funds: Money,
    shelf: Vec<Ingredient>,
    catalog: Vec<Ingredient>,
    menu: Vec<Recipe>,
}

impl Bar {
    /// An empty bar with no catalog and no menu.
    #[must_use]
    pub const fn new(funds: Money) -> Self {
        Self {
            funds,
            shelf: Vec::new(),
            catalog: Vec::new(),
            menu: Vec::new(),
        }
    }

    /// A bar with the standard supplier catalog and house menu.
    #[must_use]
    pub fn starter(funds: Money) -> Self {
        let catalog = [
            Ingredient::new("Sierra Nevada Pale Ale", Category::Ale)
                .with_abv(5.6)
                .with_cost(180),
            Ingredient::new("Pilsner Urquell", Category::Lager)
                .with_abv(4.4)
                .with_cost(170),
            Ingredient::new("Guinness", Category::Stout)
                .with_abv(4.2)
                .with_cost(200),
            Ingredient::new("Anchor Porter", Category::Porter)
                .with_abv(5.6)
                .with_cost(210),
            Ingredient::new("Früh Kölsch", Category::Kolsch)
                .with_abv(4.8)
                .with_cost(230),
            Ingredient::new("Crown Royal", Category::Whiskey)
                .with_abv(40.0)
                .with_cost(2800),
            Ingredient::new("Crown Royal Black", Category::Whiskey)
                .with_abv(45.0)
                .with_cost(3400),
            Ingredient::new("Buffalo Trace", Category::Whiskey)
                .with_abv(45.0)
                .with_cost(2600),
            Ingredient::new("Tito's Vodka", Category::Vodka)
                .with_abv(40.0)
                .with_cost(2100),
            Ingredient::new("Hendrick's Gin", Category::Gin)
                .with_abv(41.4)
                .with_cost(3300),
            Ingredient::new("José Cuervo", Category::Tequila)
                .with_abv(38.0)
                .with_cost(2000),
            Ingredient::new("Cointreau", Category::Liqueur)
                .with_abv(40.0)
                .with_cost(3500),
            Ingredient::new("Lime Juice", Category::Juice).with_cost(400),
            Ingredient::new("Lemonade", Category::Soda).with_cost(300),
            Ingredient::new("Tonic Water", Category::Soda).with_cost(250),
            Ingredient::new("Lime", Category::Garnish).with_cost(30),
        ];
        let menu = [
            Recipe::new("Gin and Tonic", 900)
                .with_part("Hendrick's Gin", 2.0)
                .with_part("Tonic Water", 4.0)
                .with_part("Lime", 0.25),
            Recipe::new("Margarita", 1100)
                .with_part("José Cuervo", 2.0)
                .with_part("Cointreau", 1.0)
                .with_part("Lime Juice", 1.0),
            Recipe::new("Vodka Lemonade", 800)
                .with_part("Tito's Vodka", 1.5)
                .with_part("Lemonade", 4.0),
            Recipe::new("Pint of Guinness", 700).with_part("Guinness", 16.0),
        ];

        catalog
            .into_iter()
            .fold(Self::new(funds), Self::with_catalog_item)
            .with_recipes(menu)
    }

    /// Adds an item to the supplier catalog.
    #[must_use]
    pub fn with_catalog_item(mut self, item: Ingredient) -> Self {
        self.catalog.push(item);
        self
    }

    /// Adds recipes to the menu.
    #[must_use]
    pub fn with_recipes(mut self, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        self.menu.extend(recipes);
        self
    }

    /// Money on hand.
    #[must_use]
    pub const fn funds(&self) -> Money {
        self.funds
    }

    /// Ingredients the bar owns.
    #[must_use]
    pub fn shelf(&self) -> &[Ingredient] {
        &self.shelf
    }

    /// Ingredients the supplier sells.
    #[must_use]
    pub fn catalog(&self) -> &[Ingredient] {
        &self.catalog
    }

    /// Drinks the bar serves.
    #[must_use]
    pub fn menu(&self) -> &[Recipe] {
        &self.menu
    }

    /// Looks up a catalog item by name, ignoring case and accents.
    #[must_use]
    pub fn catalog_item(&self, name: &str) -> Option<&Ingredient> {
        find_by_name(&self.catalog, name)
    }

    /// Categories with at least one catalog item in or below them, in
    /// taxonomy order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.catalog.iter().any(|i| i.category.is_a(*category)))
            .collect()
    }

    /// Direct subcategories of `category` that the catalog carries.
    #[must_use]
    pub fn subcategories(&self, category: Category) -> Vec<Category> {
        category
            .children()
            .filter(|child| self.items_in(*child).next().is_some())
            .collect()
    }

    /// Catalog items in or below `category`.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &Ingredient> {
        self.catalog
            .iter()
            .filter(move |item| item.category.is_a(category))
    }

    /// Units of `name` on the shelf.
    #[must_use]
    pub fn stock_of(&self, name: &str) -> u32 {
        find_by_name(&self.shelf, name).map_or(0, |item| item.stock)
    }

    /// Prices an order without placing it.
    ///
    /// # Errors
    ///
    /// Returns a [`PurchaseError`] if the order cannot be placed.
    pub fn quote(&self, name: &str, quantity: u32) -> Result<Money, PurchaseError> {
        let item = self
            .catalog_item(name)
            .ok_or_else(|| PurchaseError::UnknownItem(name.to_string()))?;
        if quantity == 0 {
            return Err(PurchaseError::ZeroQuantity);
        }
        let cost = Money(u64::from(item.unit_cost) * u64::from(quantity));
        if cost > self.funds {
            return Err(PurchaseError::InsufficientFunds {
                cost,
                funds: self.funds,
            });
        }
        Ok(cost)
    }

    /// Buys `quantity` units of a catalog item onto the shelf.
    ///
    /// # Errors
    ///
    /// Returns a [`PurchaseError`] if the order cannot be placed; nothing
    /// changes in that case.
    pub fn purchase(&mut self, name: &str, quantity: u32) -> Result<Money, PurchaseError> {
        let cost = self.quote(name, quantity)?;
        let key = to_command(name);

        if let Some(owned) = self.shelf.iter_mut().find(|i| to_command(&i.name) == key) {
            owned.stock = owned.stock.saturating_add(quantity);
        } else if let Some(item) = self.catalog_item(name) {
            let stocked = item.clone().with_stock(quantity);
            self.shelf.push(stocked);
        }
        self.funds = Money(self.funds.0 - cost.0);

        info!(item = name, quantity, cost = %cost, funds = %self.funds, "purchase");
        Ok(cost)
    }
}

fn find_by_name<'a>(items: &'a [Ingredient], name: &str) -> Option<&'a Ingredient> {
    let key = to_command(name);
    items.iter().find(|item| to_command(&item.name) == key)
}
