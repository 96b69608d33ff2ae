//! TUI application state and logic

use super::terminal::TerminalSession;
use crate::core::{ALPHABET, GameState, GuessOutcome, Letter, RandomSource};
use crate::store::WordStore;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;

/// Application state
///
/// Exactly one view is mounted at a time. The game view owns the round; it is
/// dropped when the player navigates to the word list and a new one is
/// mounted on return.
pub struct App<'a, R: RandomSource> {
    store: &'a WordStore,
    rng: R,
    pub view: View,
    pub should_quit: bool,
}

pub enum View {
    Game(GameView),
    Words(WordListView),
}

/// The puzzle screen and its round
#[derive(Debug, Clone)]
pub struct GameView {
    pub state: GameState,
    /// Index of the focused letter button
    pub selected: usize,
}

/// The vocabulary table
#[derive(Debug, Clone, Default)]
pub struct WordListView {
    pub offset: usize,
}

enum Transition {
    Stay,
    Quit,
    ShowWords,
    ShowGame,
}

impl GameView {
    /// Mount the view with a fresh round
    pub fn mount<R: RandomSource + ?Sized>(store: &WordStore, rng: &mut R) -> Self {
        Self {
            state: GameState::start(store, rng),
            selected: 0,
        }
    }

    /// Guess a letter if the round still takes input
    pub fn guess(&mut self, letter: Letter) -> Option<GuessOutcome> {
        if !self.state.accepts_input() {
            return None;
        }

        let outcome = self.state.apply_guess(letter);
        if self.state.is_finished() {
            log::info!(
                "round finished: {:?} with {} wrong guesses",
                self.state.status(),
                self.state.wrong_count()
            );
        }
        Some(outcome)
    }

    /// A button is enabled until its letter is guessed or the round ends
    #[must_use]
    pub fn button_enabled(&self, letter: Letter) -> bool {
        self.state.accepts_input() && !self.state.is_guessed(letter)
    }

    #[must_use]
    pub fn selected_letter(&self) -> Option<Letter> {
        Letter::at(self.selected)
    }

    /// Activate the focused button; disabled buttons do nothing
    pub fn press_selected(&mut self) -> Option<GuessOutcome> {
        let letter = self.selected_letter()?;
        if !self.button_enabled(letter) {
            return None;
        }
        self.guess(letter)
    }

    /// Move button focus, wrapping at both ends
    pub fn move_selection(&mut self, forward: bool) {
        let len = ALPHABET.len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    /// The reset control only exists once the round is over
    #[must_use]
    pub fn reset_visible(&self) -> bool {
        self.state.is_finished()
    }

    /// Start a new round if the reset control is visible
    pub fn reset<R: RandomSource + ?Sized>(&mut self, store: &WordStore, rng: &mut R) -> bool {
        if !self.reset_visible() {
            return false;
        }
        self.state.reset(store, rng);
        self.selected = 0;
        true
    }
}

impl WordListView {
    /// Scroll by `delta` rows, staying within `len` entries
    pub fn scroll(&mut self, delta: isize, len: usize) {
        let max = len.saturating_sub(1);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }
}

impl<'a, R: RandomSource> App<'a, R> {
    #[must_use]
    pub fn new(store: &'a WordStore, mut rng: R) -> Self {
        let view = View::Game(GameView::mount(store, &mut rng));
        Self {
            store,
            rng,
            view,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn store(&self) -> &WordStore {
        self.store
    }

    /// The mounted game view, if any
    #[must_use]
    pub fn game(&self) -> Option<&GameView> {
        match &self.view {
            View::Game(game) => Some(game),
            View::Words(_) => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let transition = if key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            Transition::Quit
        } else {
            match &mut self.view {
                View::Game(game) => handle_game_key(game, self.store, &mut self.rng, key),
                View::Words(words) => handle_words_key(words, self.store.len(), key),
            }
        };

        match transition {
            Transition::Stay => {}
            Transition::Quit => self.should_quit = true,
            Transition::ShowWords => self.show_words(),
            Transition::ShowGame => self.show_game(),
        }
    }

    /// Navigate to the word list, discarding the current round
    pub fn show_words(&mut self) {
        log::debug!("showing word list");
        self.view = View::Words(WordListView::default());
    }

    /// Navigate back to the game, mounting a new round
    pub fn show_game(&mut self) {
        log::debug!("showing game");
        self.view = View::Game(GameView::mount(self.store, &mut self.rng));
    }
}

fn handle_game_key<R: RandomSource + ?Sized>(
    game: &mut GameView,
    store: &WordStore,
    rng: &mut R,
    key: KeyEvent,
) -> Transition {
    match key.code {
        KeyCode::Esc => return Transition::Quit,
        KeyCode::Tab => return Transition::ShowWords,
        KeyCode::Left => game.move_selection(false),
        KeyCode::Right => game.move_selection(true),
        KeyCode::Char(' ') => {
            game.press_selected();
        }
        KeyCode::Enter => {
            game.reset(store, rng);
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if let Some(letter) = Letter::from_char(c) {
                game.guess(letter);
            }
        }
        _ => {}
    }
    Transition::Stay
}

fn handle_words_key(words: &mut WordListView, len: usize, key: KeyEvent) -> Transition {
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::Backspace => return Transition::ShowGame,
        KeyCode::Up => words.scroll(-1, len),
        KeyCode::Down => words.scroll(1, len),
        KeyCode::PageUp => words.scroll(-10, len),
        KeyCode::PageDown => words.scroll(10, len),
        KeyCode::Home => words.offset = 0,
        KeyCode::End => words.scroll(isize::MAX, len),
        _ => {}
    }
    Transition::Stay
}

/// Run the TUI application
///
/// The terminal is restored when this returns, also on error.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: RandomSource>(app: App<'_, R>) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    run_app(session.terminal_mut(), app)
}

fn run_app<B: ratatui::backend::Backend, R: RandomSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
