//! Input loop tests.

use barkeep::resolver::{CandidateSet, Resolver};
use barkeep::runtime::{
    CheckOutcome, CheckerRegistry, LoopConfig, Prompter, ScriptedEditor, Selection,
};
use proptest::prelude::*;

const NO_ARGS: [&str; 0] = [];

fn prompter<I, S>(lines: I) -> Prompter<ScriptedEditor, Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Prompter::with_io(
        ScriptedEditor::new(lines),
        Vec::new(),
        Resolver::default(),
        LoopConfig::new(),
    )
}

fn drinks() -> CandidateSet {
    ["stout", "lager"].into_iter().collect()
}

fn run(p: &mut Prompter<ScriptedEditor, Vec<u8>>) -> Selection {
    p.input_loop("> ", &drinks(), &NO_ARGS, &CheckerRegistry::new(), &())
        .unwrap()
}

#[test]
fn keeps_prompting_through_many_bad_lines() {
    let lines = std::iter::repeat_n("xyz", 1000).chain(std::iter::once("lag"));
    let mut p = prompter(lines);
    assert_eq!(
        run(&mut p),
        Selection::Command {
            command: "lager".into(),
            args: vec![],
        }
    );
    assert_eq!(p.editor().prompts().len(), 1001);
}

#[test]
fn only_eof_ends_a_stream_of_bad_lines() {
    let mut p = prompter(std::iter::repeat_n("xyz", 50));
    assert_eq!(run(&mut p), Selection::Quit);
    assert_eq!(p.editor().prompts().len(), 51);
}

#[test]
fn prompt_is_shown_each_time() {
    let mut p = prompter(["", "stout"]);
    let _ = p
        .input_loop("bar> ", &drinks(), &NO_ARGS, &CheckerRegistry::new(), &())
        .unwrap();
    assert_eq!(p.editor().prompts(), ["bar> ", "bar> "]);
}

#[test]
fn checker_receives_context() {
    let set: CandidateSet = ["pour", "back"].into_iter().collect();
    let checkers = CheckerRegistry::new().with("pour", |args: &[String], open: &bool| {
        if !*open {
            CheckOutcome::reject("The bar is closed.")
        } else if args.is_empty() {
            CheckOutcome::reject("Pour what?")
        } else {
            CheckOutcome::Accept
        }
    });

    let mut closed = prompter(["pour stout"]);
    let selection = closed
        .input_loop("> ", &set, &["pour"], &checkers, &false)
        .unwrap();
    assert_eq!(selection, Selection::Quit);
    let (_, out) = closed.into_parts();
    assert_eq!(String::from_utf8(out).unwrap(), "The bar is closed.\n");

    let mut open = prompter(["pour", "pour stout"]);
    let selection = open.input_loop("> ", &set, &["pour"], &checkers, &true).unwrap();
    assert_eq!(selection.command(), Some("pour"));
    assert_eq!(selection.args(), ["stout".to_string()]);
}

#[test]
fn resolved_base_is_accepted() {
    let set: CandidateSet = ["crown royal black", "crown royal blackberry"]
        .into_iter()
        .collect();
    let mut p = prompter(["crown royal black"]);
    let selection = p
        .input_loop("> ", &set, &NO_ARGS, &CheckerRegistry::new(), &())
        .unwrap();
    assert_eq!(selection.command(), Some("crown royal black"));
}

#[test]
fn force_beginning_applies_to_every_line() {
    let mut p = Prompter::with_io(
        ScriptedEditor::new(["sut", "sto"]),
        Vec::new(),
        Resolver::default(),
        LoopConfig::new().with_force_beginning(true),
    );
    assert_eq!(run(&mut p).command(), Some("stout"));
    let (_, out) = p.into_parts();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Valid commands: help, lager, stout, quit\n"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_run_of_bad_lines_is_survived(bad in prop::collection::vec("[x-z]{1,5}", 0..40)) {
        let count = bad.len();
        let mut p = prompter(bad.into_iter().chain(std::iter::once("stout".to_string())));
        let selection = run(&mut p);
        prop_assert_eq!(selection.command(), Some("stout"));
        prop_assert_eq!(p.editor().prompts().len(), count + 1);
    }
}
