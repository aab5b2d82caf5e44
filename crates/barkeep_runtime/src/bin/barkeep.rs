//! barkeep CLI entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use barkeep_foundation::Result;
use barkeep_resolver::{Resolver, ResolverConfig};
use barkeep_runtime::{Bar, Game, LineEditor, LoopConfig, Money, Prompter, ScriptedEditor};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "barkeep")]
#[command(about = "Run a bar from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Starting funds, in dollars
    #[arg(
        long,
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(..=Money::MAX_DOLLARS)
    )]
    funds: u64,

    /// Only match input words as literal prefixes
    #[arg(long)]
    force_beginning: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "barkeep_resolver=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Read input lines from a file instead of the terminal
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Ignore lines entered within this many milliseconds of the previous one
    #[arg(long, default_value_t = 0)]
    debounce_ms: u64,

    /// Give up on a prompt after this many attempts
    #[arg(long)]
    max_attempts: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?cli, "starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, context = ?e.context, "fatal");
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ResolverConfig::default();
    config.validate()?;
    let resolver = Resolver::new(config);

    let mut loop_config = LoopConfig::new()
        .with_force_beginning(cli.force_beginning)
        .with_debounce(Duration::from_millis(cli.debounce_ms));
    if let Some(max) = cli.max_attempts {
        loop_config = loop_config.with_max_iterations(max);
    }

    let bar = Bar::starter(Money::dollars(cli.funds));

    match &cli.script {
        Some(path) => {
            let editor = ScriptedEditor::from_file(path)?.with_echo();
            play(Prompter::with_io(editor, io::stdout(), resolver, loop_config), bar, cli)
        }
        None => play(Prompter::new(resolver, loop_config)?, bar, cli),
    }
}

fn play<E: LineEditor>(prompter: Prompter<E, io::Stdout>, bar: Bar, cli: &Cli) -> Result<()> {
    let mut game = Game::new(prompter, bar);
    if cli.no_banner {
        game = game.without_banner();
    }
    game.run()
}
