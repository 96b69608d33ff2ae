//! German Vocabulary Hangman - CLI
//!
//! Hangman over German Christmas-present vocabulary, with a TUI, a line mode,
//! a word list printer and a simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_de::{
    commands::{Guesser, run_simple, run_simulation},
    output::{print_simulation_result, print_word_list},
    store::{WordStore, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_de",
    about = "Hangman - Deutsche Weihnachtsgeschenke Wörter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: JSON file with word/gender/translation/plural/hint records (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for word and letter selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file (RUST_LOG sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Print the word list
    Words,

    /// Play many rounds automatically and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// How the simulated player picks letters
        #[arg(short, long, value_enum, default_value_t = Guesser::Frequency)]
        guesser: Guesser,
    },
}

/// Set up `env_logger`
///
/// The TUI owns the terminal, so without a log file its output is discarded.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if tui {
        builder.target(env_logger::Target::Pipe(Box::new(io::sink())));
    }

    builder.try_init()?;
    Ok(())
}

/// Load the word store based on the -w flag
fn load_store(path: Option<&Path>) -> Result<WordStore> {
    let store = match path {
        Some(path) => load_from_file(path)?,
        None => WordStore::embedded().context("Built-in word list is invalid")?,
    };
    log::info!("word store ready with {} entries", store.len());
    Ok(store)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;
    let store = load_store(cli.words.as_deref())?;

    match command {
        Commands::Play => run_play_command(&store, cli.seed),
        Commands::Simple => {
            let mut rng = make_rng(cli.seed);
            run_simple(&store, &mut rng)?;
            Ok(())
        }
        Commands::Words => {
            print_word_list(&store)?;
            Ok(())
        }
        Commands::Simulate { rounds, guesser } => {
            run_simulate_command(&store, rounds, guesser, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(store: &WordStore, seed: Option<u64>) -> Result<()> {
    use hangman_de::interactive::{App, run_tui};

    let app = App::new(store, make_rng(seed));
    run_tui(app)
}

fn run_simulate_command(store: &WordStore, rounds: usize, guesser: Guesser, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(|| rand::random());
    println!(
        "Simulating {rounds} rounds over {} words (guesser: {guesser:?}, seed: {seed})...",
        store.len()
    );

    let result = run_simulation(store, rounds, guesser, seed, true);
    print_simulation_result(&result);
}
