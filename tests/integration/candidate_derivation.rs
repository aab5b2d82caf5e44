//! Candidate sets derived from domain objects, and the reverse lookup.

use barkeep::foundation::{Category, ErrorKind, Ingredient, Recipe};
use barkeep::resolver::{CandidateSet, CommandLookup, Number, resolve};

#[test]
fn resolved_plural_maps_back_to_its_category() {
    let categories = [Category::Stout, Category::Kolsch, Category::RedWine];
    let mut candidates = CandidateSet::new();
    candidates
        .try_extend_derived(&categories, Number::Plural)
        .unwrap();

    let outcome = resolve("kols", &candidates, false);
    let lookup = CommandLookup::build(&categories, Number::Plural).unwrap();
    let command = outcome.command().unwrap();
    assert_eq!(lookup.get(command), Some(&Category::Kolsch));

    let outcome = resolve("red", &candidates, false);
    assert_eq!(
        lookup.require(outcome.command().unwrap()).unwrap(),
        &Category::RedWine
    );
}

#[test]
fn resolved_name_maps_back_to_its_ingredient() {
    let shelf = vec![
        Ingredient::new("Crown Royal", Category::Whiskey),
        Ingredient::new("Crown Royal Black", Category::Whiskey),
        Ingredient::new("Früh Kölsch", Category::Kolsch),
    ];
    let mut candidates = CandidateSet::new();
    candidates.try_extend_derived(&shelf, Number::Singular).unwrap();
    let lookup = CommandLookup::build(&shelf, Number::Singular).unwrap();

    let outcome = resolve("crown royal bla", &candidates, false);
    let ingredient = lookup.require(outcome.command().unwrap()).unwrap();
    assert_eq!(ingredient.name, "Crown Royal Black");

    let outcome = resolve("fru", &candidates, false);
    let ingredient = lookup.require(outcome.command().unwrap()).unwrap();
    assert_eq!(ingredient.name, "Früh Kölsch");
}

#[test]
fn recipes_and_literals_mix_in_one_set() {
    let menu = [Recipe::new("Margarita", 1100)];
    let mut candidates: CandidateSet = ["back"].into_iter().collect();
    candidates.try_extend_derived(&menu, Number::Singular).unwrap();
    assert_eq!(candidates.sorted(), vec!["margarita", "back"]);
}

#[test]
fn unsupported_sources_fail_loudly() {
    let mut candidates = CandidateSet::new();
    let err = candidates
        .try_extend_derived(&[2.5_f64], Number::Singular)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnsupportedCandidateKind { ref type_name } if type_name == "f64"
    ));
}

#[test]
fn lookup_miss_is_unknown_command() {
    let categories = [Category::Gin];
    let lookup = CommandLookup::build(&categories, Number::Plural).unwrap();
    let err = lookup.require("rums").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(ref c) if c == "rums"));
}
