//! Named instances: ingredients on the shelf and recipes on the menu.

use crate::category::Category;

/// A stockable ingredient.
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    /// Display name ("Crown Royal Black", "Früh Kölsch").
    pub name: String,
    /// Taxonomy category.
    pub category: Category,
    /// Alcohol by volume, percent. `None` for categories without ABV.
    pub abv: Option<f64>,
    /// Supplier price per unit, in cents.
    pub unit_cost: u32,
    /// Units on hand.
    pub stock: u32,
}

impl Ingredient {
    /// Creates an ingredient with no stock and no cost.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            abv: None,
            unit_cost: 0,
            stock: 0,
        }
    }

    /// Sets the alcohol percentage. Ignored for categories without ABV.
    #[must_use]
    pub fn with_abv(mut self, abv: f64) -> Self {
        if self.category.capabilities().has_abv {
            self.abv = Some(abv);
        }
        self
    }

    /// Sets the supplier price per unit, in cents.
    #[must_use]
    pub fn with_cost(mut self, cents: u32) -> Self {
        self.unit_cost = cents;
        self
    }

    /// Sets the units on hand.
    #[must_use]
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }
}

/// One line of a recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipePart {
    /// Ingredient name, as it appears on the shelf.
    pub ingredient: String,
    /// Amount poured, in fluid ounces.
    pub ounces: f64,
}

/// A drink on the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    /// Display name.
    pub name: String,
    /// Ingredients and amounts.
    pub parts: Vec<RecipePart>,
    /// Sale price, in cents.
    pub price: u32,
}

impl Recipe {
    /// Creates an empty recipe.
    #[must_use]
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
            price,
        }
    }

    /// Adds an ingredient line.
    #[must_use]
    pub fn with_part(mut self, ingredient: impl Into<String>, ounces: f64) -> Self {
        self.parts.push(RecipePart {
            ingredient: ingredient.into(),
            ounces,
        });
        self
    }

    /// Returns true if the recipe calls for the named ingredient.
    #[must_use]
    pub fn uses(&self, ingredient: &str) -> bool {
        self.parts
            .iter()
            .any(|p| p.ingredient.eq_ignore_ascii_case(ingredient))
    }
}
