//! Scripted game sessions, from the main screen down to a purchase.

use barkeep::resolver::{Resolver, ResolverConfig};
use barkeep::runtime::{Bar, Game, LoopConfig, Money, Prompter, ScriptedEditor};

struct Transcript {
    bar: Bar,
    text: String,
    unread: usize,
}

fn play_with(lines: &[&str], funds: Money, config: ResolverConfig) -> Transcript {
    let prompter = Prompter::with_io(
        ScriptedEditor::new(lines.iter().copied()),
        Vec::new(),
        Resolver::new(config),
        LoopConfig::new(),
    );
    let mut game = Game::new(prompter, Bar::starter(funds));
    game.run().unwrap();

    let (prompter, bar) = game.into_parts();
    let (editor, out) = prompter.into_parts();
    Transcript {
        bar,
        text: String::from_utf8(out).unwrap(),
        unread: editor.remaining(),
    }
}

fn play(lines: &[&str], funds: Money) -> Transcript {
    play_with(lines, funds, ResolverConfig::default())
}

#[test]
fn browse_buy_and_read_the_menu() {
    let session = play(
        &[
            "sh",
            "whisk",
            "crown royal black",
            "buy 2",
            "back",
            "back",
            "back",
            "inv",
            "menu",
            "gin",
            "quit",
        ],
        Money::dollars(100),
    );

    assert_eq!(session.unread, 0);
    assert_eq!(session.bar.stock_of("Crown Royal Black"), 2);
    assert_eq!(session.bar.funds(), Money::dollars(32));
    assert!(session.text.starts_with("barkeep"));
    assert!(
        session
            .text
            .contains("Bought 2 x Crown Royal Black for $68.00. $32.00 left.")
    );
    assert!(session.text.contains("Gin and Tonic, $9.00:"));
    assert!(session.text.ends_with("Last call. Goodbye!\n"));
}

#[test]
fn help_lists_the_screen_commands() {
    let session = play(&["help", "quit"], Money::dollars(10));
    assert!(
        session
            .text
            .contains("Commands: help, inventory, menu, shop, quit")
    );
}

#[test]
fn base_command_picks_the_shorter_name() {
    let session = play(&["shop", "crown", "buy 1"], Money::dollars(100));
    assert_eq!(session.bar.stock_of("Crown Royal"), 1);
    assert_eq!(session.bar.stock_of("Crown Royal Black"), 0);
}

#[test]
fn apostrophes_and_accents_are_typeable() {
    let session = play(
        &["shop", "tito", "buy 1", "back", "fruh", "buy 1"],
        Money::dollars(100),
    );
    assert_eq!(session.bar.stock_of("Tito's Vodka"), 1);
    assert_eq!(session.bar.stock_of("Früh Kölsch"), 1);
}

#[test]
fn bad_input_never_leaves_the_screen() {
    let session = play(&["xyzzy", "shop", "qqqq", "stouts", "quit"], Money::dollars(10));
    assert!(session.text.contains("Valid commands: help, inventory, menu, shop, quit"));
    assert!(session.text.contains("No match for `qqqq`."));
    assert_eq!(session.unread, 0);
}

#[test]
fn lenient_candidates_play_the_same() {
    let session = play_with(
        &["shop", "guin", "buy 1"],
        Money::dollars(10),
        ResolverConfig::default().lenient(),
    );
    assert_eq!(session.bar.stock_of("Guinness"), 1);
}
