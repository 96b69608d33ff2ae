//! Round state and its transitions
//!
//! `GameState` is owned by whichever front end runs the round. Transitions are
//! total: gating guesses after the round has ended is the caller's job, see
//! [`GameState::accepts_input`].

use super::alphabet::Letter;
use super::entry::WordEntry;
use super::random::RandomSource;
use crate::store::WordStore;
use rustc_hash::FxHashSet;

/// Wrong guesses at which the round is lost
pub const MAX_WRONG_GUESSES: u8 = 7;

/// Wrong guesses at which the hint is shown
pub const HINT_THRESHOLD: u8 = 5;

/// Shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Result of applying a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the target word
    Hit,
    /// Letter does not occur; wrong count went up by one
    Miss,
    /// Letter was guessed before; nothing changed
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// State of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: WordEntry,
    guessed: FxHashSet<Letter>,
    wrong_count: u8,
}

impl GameState {
    /// Start a round on a fixed target with nothing guessed
    #[must_use]
    pub fn new(target: WordEntry) -> Self {
        Self {
            target,
            guessed: FxHashSet::default(),
            wrong_count: 0,
        }
    }

    /// Start a round on a fixed target with one of its letters pre-revealed
    pub fn seeded<R: RandomSource + ?Sized>(target: WordEntry, rng: &mut R) -> Self {
        let mut state = Self::new(target);
        let position = rng.pick_index(state.target.letter_count());
        if let Some(letter) = state.target.letter_at(position) {
            state.guessed.insert(letter);
        }
        state
    }

    /// Start a fresh round: random target, one letter pre-revealed
    ///
    /// # Examples
    /// ```
    /// use hangman_de::core::{GameState, ScriptedRandom, Status};
    /// use hangman_de::store::WordStore;
    ///
    /// let store = WordStore::embedded().unwrap();
    /// let state = GameState::start(&store, &mut ScriptedRandom::new([0, 0]));
    ///
    /// assert_eq!(state.target(), &store.entries()[0]);
    /// assert_eq!(state.guessed().count(), 1);
    /// assert_eq!(state.wrong_count(), 0);
    /// assert_eq!(state.status(), Status::Playing);
    /// ```
    pub fn start<R: RandomSource + ?Sized>(store: &WordStore, rng: &mut R) -> Self {
        let target = store.pick(rng).clone();
        log::debug!("new round, target has {} letters", target.letter_count());
        Self::seeded(target, rng)
    }

    /// Replace this round with a fresh one drawn from `store`
    pub fn reset<R: RandomSource + ?Sized>(&mut self, store: &WordStore, rng: &mut R) {
        *self = Self::start(store, rng);
    }

    /// Apply a guess
    ///
    /// Repeated letters are absorbed without changing anything. A new letter
    /// is recorded and counts as wrong when the target does not contain it.
    pub fn apply_guess(&mut self, letter: Letter) -> GuessOutcome {
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let outcome = if self.target.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.wrong_count = self.wrong_count.saturating_add(1);
            GuessOutcome::Miss
        };
        log::trace!("guess '{letter}': {outcome:?}, wrong count {}", self.wrong_count);
        outcome
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &WordEntry {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters in alphabet order
    pub fn guessed(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|letter| self.guessed.contains(letter))
    }

    /// Guessed letters that are not in the target, in alphabet order
    pub fn misses(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed().filter(|&letter| !self.target.contains(letter))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_count >= MAX_WRONG_GUESSES
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.target
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }

    /// Combined outcome
    ///
    /// Loss is checked first; once lost no further guesses are accepted so
    /// both cannot become true together.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_lost() {
            Status::Lost
        } else if self.is_won() {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Whether the front end should still take guesses
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.status() == Status::Playing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.accepts_input()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.wrong_count >= HINT_THRESHOLD && self.accepts_input()
    }

    /// The hint, only while it is visible
    #[must_use]
    pub fn visible_hint(&self) -> Option<&str> {
        self.hint_visible().then(|| self.target.hint())
    }

    /// Target word with unguessed characters replaced by [`PLACEHOLDER`]
    ///
    /// Revealed characters keep their original case.
    #[must_use]
    pub fn masked(&self) -> String {
        self.target
            .chars()
            .map(|(c, letter)| {
                if self.guessed.contains(&letter) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRandom;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, "der", "-", "-", "Tipp für {word}").unwrap()
    }

    fn guess_all(state: &mut GameState, letters: &str) -> Vec<GuessOutcome> {
        letters.chars().map(|c| state.apply_guess(letter(c))).collect()
    }

    fn store(words: &[&str]) -> WordStore {
        WordStore::new(words.iter().map(|w| entry(w)).collect()).unwrap()
    }

    #[test]
    fn missing_letter_increments_once() {
        let mut state = GameState::new(entry("Stern"));

        assert_eq!(state.apply_guess(letter('x')), GuessOutcome::Miss);
        assert_eq!(state.wrong_count(), 1);

        let before = state.clone();
        assert_eq!(state.apply_guess(letter('x')), GuessOutcome::Repeated);
        assert_eq!(state, before);
    }

    #[test]
    fn present_letter_never_counts_as_wrong() {
        let mut state = GameState::new(entry("Stern"));

        assert_eq!(state.apply_guess(letter('S')), GuessOutcome::Hit);
        assert_eq!(state.apply_guess(letter('n')), GuessOutcome::Hit);
        assert_eq!(state.apply_guess(letter('s')), GuessOutcome::Repeated);
        assert_eq!(state.wrong_count(), 0);
    }

    #[test]
    fn wrong_count_matches_misses() {
        let mut state = GameState::new(entry("Kerze"));
        guess_all(&mut state, "kabxeyz");

        assert_eq!(state.wrong_count() as usize, state.misses().count());
        let misses: String = state.misses().map(Letter::as_char).collect();
        assert_eq!(misses, "abxy");
    }

    #[test]
    fn stern_scenario() {
        let mut state = GameState::new(entry("Stern"));

        let outcomes = guess_all(&mut state, "txyern");
        assert_eq!(
            outcomes,
            vec![
                GuessOutcome::Hit,
                GuessOutcome::Miss,
                GuessOutcome::Miss,
                GuessOutcome::Hit,
                GuessOutcome::Hit,
                GuessOutcome::Hit,
            ]
        );
        assert_eq!(state.wrong_count(), 2);
        assert_eq!(state.masked(), "_tern");
        assert!(!state.is_won());

        state.apply_guess(letter('s'));
        assert_eq!(state.masked(), "Stern");
        assert!(state.is_won());
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn masked_progression() {
        let mut state = GameState::new(entry("Stern"));
        assert_eq!(state.masked(), "_____");

        state.apply_guess(letter('t'));
        assert_eq!(state.masked(), "_t___");

        state.apply_guess(letter('e'));
        assert_eq!(state.masked(), "_te__");
    }

    #[test]
    fn masked_handles_umlauts_and_eszett() {
        let mut state = GameState::new(entry("Fußbälle"));
        guess_all(&mut state, "ßä");
        assert_eq!(state.masked(), "__ß_ä___");

        guess_all(&mut state, "fublle");
        assert_eq!(state.masked(), "Fußbälle");
        assert!(state.is_won());
    }

    #[test]
    fn won_needs_every_distinct_letter() {
        let mut state = GameState::new(entry("Puppe"));
        guess_all(&mut state, "pu");
        assert!(!state.is_won());

        state.apply_guess(letter('e'));
        assert!(state.is_won());
    }

    #[test]
    fn seven_misses_lose() {
        let mut state = GameState::new(entry("Uhr"));
        guess_all(&mut state, "abcdef");
        assert!(!state.is_lost());
        assert!(state.accepts_input());

        state.apply_guess(letter('g'));
        assert_eq!(state.wrong_count(), MAX_WRONG_GUESSES);
        assert!(state.is_lost());
        assert_eq!(state.status(), Status::Lost);
        assert!(!state.accepts_input());
        assert!(!state.is_won());
    }

    #[test]
    fn hint_visible_from_threshold_while_playing() {
        let mut state = GameState::new(entry("Uhr"));
        guess_all(&mut state, "abcd");
        assert!(!state.hint_visible());
        assert_eq!(state.visible_hint(), None);

        state.apply_guess(letter('f'));
        assert!(state.hint_visible());
        assert_eq!(state.visible_hint(), Some("Tipp für {word}"));

        state.apply_guess(letter('g'));
        assert!(state.hint_visible());

        state.apply_guess(letter('i'));
        assert!(state.is_lost());
        assert!(!state.hint_visible());
    }

    #[test]
    fn hint_hidden_once_won() {
        let mut state = GameState::new(entry("Uhr"));
        guess_all(&mut state, "abcdf");
        assert!(state.hint_visible());

        guess_all(&mut state, "uhr");
        assert!(state.is_won());
        assert!(!state.hint_visible());
    }

    #[test]
    fn seeded_reveals_exactly_one_letter_of_target() {
        let target = entry("Stern");
        let state = GameState::seeded(target, &mut ScriptedRandom::new([0]));

        let guessed: Vec<_> = state.guessed().collect();
        assert_eq!(guessed, vec![letter('s')]);
        assert_eq!(state.wrong_count(), 0);
        assert_eq!(state.masked(), "S____");
    }

    #[test]
    fn start_picks_word_then_letter() {
        let store = store(&["Uhr", "Kerze", "Ring"]);
        let state = GameState::start(&store, &mut ScriptedRandom::new([1, 4]));

        assert_eq!(state.target().word(), "Kerze");
        assert_eq!(state.guessed().collect::<Vec<_>>(), vec![letter('e')]);
        assert_eq!(state.masked(), "_e__e");
    }

    #[test]
    fn reset_after_loss_draws_new_round() {
        let store = store(&["Uhr", "Kerze", "Ring"]);
        let mut rng = ScriptedRandom::new([0, 0, 2, 3]);
        let mut state = GameState::start(&store, &mut rng);
        guess_all(&mut state, "abcdefg");
        assert!(state.is_lost());

        state.reset(&store, &mut rng);
        assert_eq!(state.target().word(), "Ring");
        assert_eq!(state.wrong_count(), 0);

        let guessed: Vec<_> = state.guessed().collect();
        assert_eq!(guessed.len(), 1);
        assert!(state.target().contains(guessed[0]));
        assert!(state.accepts_input());
    }

    #[test]
    fn reset_seeds_folded_letter() {
        // Picking the capital first letter still reveals it
        let store = store(&["Ärmel"]);
        let state = GameState::start(&store, &mut ScriptedRandom::new([0, 0]));
        assert!(state.is_guessed(letter('ä')));
        assert_eq!(state.masked(), "Ä____");
    }
}
