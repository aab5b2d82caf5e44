//! Command derivation.
//!
//! Every screen builds its candidate set from live objects: categories shown
//! by their (singular or plural) type name, ingredients and recipes by their
//! own name, and plain keywords. When the player picks a command the screen
//! has to map it back to the object it came from. Both directions go through
//! [`derive_command`], so a command can always be found again.

use std::any::{Any, type_name};
use std::collections::HashMap;

use barkeep_foundation::{Category, Error, Ingredient, Recipe, Result};
use deunicode::deunicode;

/// Grammatical number for a category's type name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Number {
    /// "stout", "whiskey"
    #[default]
    Singular,
    /// "stouts", "whiskeys"
    Plural,
}

/// Transliterates to ASCII and lowercases, keeping spacing and quotes.
///
/// Raw player input goes through this before tokenizing, so input and its
/// uppercase form always resolve the same way ("STRASSE" and "straße").
#[must_use]
pub fn fold_case(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// Normalizes display text into command form.
///
/// Transliterates to ASCII ("Kölsch" → "Kolsch"), lowercases, and collapses
/// runs of whitespace to a single space.
#[must_use]
pub fn to_command(text: &str) -> String {
    fold_case(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Pluralizes the last word of an English phrase.
///
/// Covers the endings that occur in drink names: sibilants take "es",
/// consonant + "y" becomes "ies", everything else takes "s".
#[must_use]
pub fn pluralize(phrase: &str) -> String {
    let (head, word) = match phrase.rsplit_once(' ') {
        Some((head, word)) => (Some(head), word),
        None => (None, phrase),
    };

    let plural = if word.is_empty() {
        String::new()
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        format!("{word}es")
    } else if let Some(stem) = word.strip_suffix('y') {
        match stem.chars().last() {
            Some(c) if !is_vowel(c) => format!("{stem}ies"),
            _ => format!("{word}s"),
        }
    } else {
        format!("{word}s")
    };

    match head {
        Some(head) => format!("{head} {plural}"),
        None => plural,
    }
}

/// Reverses [`pluralize`] on the last word of a phrase.
#[must_use]
pub fn singularize(phrase: &str) -> String {
    let (head, word) = match phrase.rsplit_once(' ') {
        Some((head, word)) => (Some(head), word),
        None => (None, phrase),
    };

    let singular = if let Some(stem) = word.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = ["ches", "shes", "sses", "xes", "zes"]
        .iter()
        .find(|suffix| word.ends_with(*suffix))
        .and_then(|_| word.strip_suffix("es"))
    {
        stem.to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    };

    match head {
        Some(head) => format!("{head} {singular}"),
        None => singular,
    }
}

/// The command for a category in the requested number.
#[must_use]
pub fn category_command(category: Category, number: Number) -> String {
    let singular = to_command(category.display_name());
    match number {
        Number::Singular => singular,
        Number::Plural => pluralize(&singular),
    }
}

/// Derives the command string for a domain object.
///
/// Supported sources:
/// - [`Category`]: its type name in the requested `number`
/// - [`Ingredient`] and [`Recipe`]: their name
/// - `String` and `&'static str`: the literal, lowercased
///
/// All forms go through [`to_command`], so non-ASCII keywords stay reachable
/// from plain ASCII input.
///
/// `number` only affects categories.
///
/// # Errors
///
/// Returns `UnsupportedCandidateKind` for any other type.
pub fn derive_command<T: Any>(item: &T, number: Number) -> Result<String> {
    let item = item as &dyn Any;

    if let Some(category) = item.downcast_ref::<Category>() {
        return Ok(category_command(*category, number));
    }
    if let Some(ingredient) = item.downcast_ref::<Ingredient>() {
        return Ok(to_command(&ingredient.name));
    }
    if let Some(recipe) = item.downcast_ref::<Recipe>() {
        return Ok(to_command(&recipe.name));
    }
    if let Some(literal) = item.downcast_ref::<String>() {
        return Ok(to_command(literal));
    }
    if let Some(literal) = item.downcast_ref::<&'static str>() {
        return Ok(to_command(literal));
    }

    Err(Error::unsupported_candidate(type_name::<T>()))
}

/// Maps resolved command strings back to the objects they were derived from.
#[derive(Debug)]
pub struct CommandLookup<'a, T> {
    number: Number,
    by_command: HashMap<String, &'a T>,
}

impl<'a, T: Any> CommandLookup<'a, T> {
    /// Builds the lookup for `items`, deriving each command in `number`.
    ///
    /// When two items derive the same command the first one wins.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCandidateKind` if `T` is not a supported source.
    pub fn build(items: impl IntoIterator<Item = &'a T>, number: Number) -> Result<Self> {
        let mut by_command = HashMap::new();
        for item in items {
            by_command
                .entry(derive_command(item, number)?)
                .or_insert(item);
        }
        Ok(Self { number, by_command })
    }

    /// The number commands were derived in.
    #[must_use]
    pub const fn number(&self) -> Number {
        self.number
    }

    /// Finds the object a command came from.
    #[must_use]
    pub fn get(&self, command: &str) -> Option<&'a T> {
        self.by_command.get(&to_command(command)).copied()
    }

    /// Like [`get`](Self::get), but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` if no object derives `command`.
    pub fn require(&self, command: &str) -> Result<&'a T> {
        self.get(command)
            .ok_or_else(|| Error::unknown_command(command))
    }

    /// All derived commands, in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.by_command.keys().map(String::as_str)
    }

    /// Number of distinct commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_command.len()
    }

    /// Returns true if there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_command.is_empty()
    }
}
