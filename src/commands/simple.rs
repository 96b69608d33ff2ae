//! Simple line-based game mode
//!
//! Plays rounds on stdin/stdout without the full-screen interface. Every
//! character typed on a line counts as one key press.

use crate::core::{GameState, GuessOutcome, Letter, RandomSource, Status};
use crate::output::display::write_word_list;
use crate::output::formatters::{gallows, hint_message, spaced_mask, status_message};
use crate::store::WordStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Line that ends the session
pub const QUIT_COMMAND: &str = "/ende";

/// Line that shows the word list
pub const LIST_COMMAND: &str = "/liste";

/// Run the simple mode on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: RandomSource + ?Sized>(store: &WordStore, rng: &mut R) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play(store, rng, &mut input, &mut output)
}

/// Play rounds until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R, I, O>(store: &WordStore, rng: &mut R, input: &mut I, output: &mut O) -> io::Result<()>
where
    R: RandomSource + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║       Hangman - Deutsche Weihnachtsgeschenke Wörter          ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Tippe Buchstaben und drücke Enter.")?;
    writeln!(output, "Befehle: '{LIST_COMMAND}' zeigt die Wortliste, '{QUIT_COMMAND}' beendet.\n")?;

    'rounds: loop {
        let mut state = GameState::start(store, rng);

        while state.accepts_input() {
            render(&state, output)?;

            let Some(line) = read_line(input, output, "Buchstabe")? else {
                return Ok(());
            };

            match line.as_str() {
                QUIT_COMMAND => return Ok(()),
                LIST_COMMAND => {
                    // Leaving the game view ends the round
                    writeln!(output)?;
                    write_word_list(store, output)?;
                    writeln!(output, "\n{}\n", "Neues Spiel!".bright_cyan())?;
                    continue 'rounds;
                }
                text => apply_keys(&mut state, text, output)?,
            }
        }

        render(&state, output)?;
        log::info!(
            "round finished: {:?} with {} wrong guesses",
            state.status(),
            state.wrong_count()
        );

        match read_line(input, output, "Noch einmal spielen! (j/n)")? {
            Some(answer) if answer.starts_with(['j', 'J', 'y', 'Y']) => {
                writeln!(output, "\n{}\n", "Neues Spiel!".bright_cyan())?;
            }
            _ => {
                writeln!(output, "\nAuf Wiedersehen!\n")?;
                return Ok(());
            }
        }
    }
}

/// Feed each character of a line to the round as a key press
fn apply_keys<O: Write>(state: &mut GameState, text: &str, output: &mut O) -> io::Result<()> {
    for letter in text.chars().filter_map(Letter::from_char) {
        if !state.accepts_input() {
            break;
        }
        if state.apply_guess(letter) == GuessOutcome::Repeated {
            writeln!(output, "Der Buchstabe '{letter}' wurde schon geraten.")?;
        }
    }
    Ok(())
}

fn render<O: Write>(state: &GameState, output: &mut O) -> io::Result<()> {
    writeln!(output)?;
    for line in gallows(state.wrong_count()) {
        writeln!(output, "  {line}")?;
    }
    writeln!(output)?;
    writeln!(output, "  Wort:    {}", spaced_mask(state).bright_white().bold())?;

    let guessed: Vec<String> = state.guessed().map(|l| l.to_string()).collect();
    writeln!(output, "  Geraten: {}", guessed.join(" ").bright_black())?;

    let message = status_message(state);
    let message = match state.status() {
        Status::Playing => message.normal(),
        Status::Won => message.green().bold(),
        Status::Lost => message.red().bold(),
    };
    writeln!(output, "\n  {message}")?;

    if let Some(hint) = hint_message(state) {
        writeln!(output, "  {}", hint.yellow())?;
    }
    writeln!(output)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
