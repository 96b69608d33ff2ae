//! Simulation command
//!
//! Plays many rounds automatically to measure how hard the word store is.
//! Each round runs on its own seeded generator, so a fixed base seed gives the
//! same results regardless of how rayon schedules the rounds.

use crate::core::{GameState, Letter, MAX_WRONG_GUESSES, RandomSource, Status};
use crate::store::WordStore;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// German letters ordered by how often they occur in running text
pub const FREQUENCY_ORDER: &str = "enisratdhulcgmobwfkzpvüäößjyxq";

/// How the simulated player picks its next letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Guesser {
    /// Most frequent unguessed letter first
    Frequency,
    /// Uniformly random unguessed letter
    Random,
}

impl Guesser {
    /// Next letter to try, or `None` if every letter has been guessed
    pub fn next_letter<R: RandomSource + ?Sized>(
        self,
        state: &GameState,
        rng: &mut R,
    ) -> Option<Letter> {
        match self {
            Self::Frequency => FREQUENCY_ORDER
                .chars()
                .filter_map(Letter::from_char)
                .find(|&letter| !state.is_guessed(letter)),
            Self::Random => {
                let open: Vec<Letter> = Letter::all().filter(|&l| !state.is_guessed(l)).collect();
                if open.is_empty() {
                    None
                } else {
                    open.get(rng.pick_index(open.len())).copied()
                }
            }
        }
    }
}

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub status: Status,
    pub wrong_count: u8,
    pub guesses: usize,
    pub hint_shown: bool,
}

/// Aggregated simulation statistics
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_wrong: f64,
    pub hint_rounds: usize,
    /// Rounds per final wrong count, index 0 through [`MAX_WRONG_GUESSES`]
    pub wrong_distribution: [usize; MAX_WRONG_GUESSES as usize + 1],
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn hint_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.hint_rounds as f64 / self.rounds as f64
        }
    }
}

/// Play a single round to the end with the given guesser
#[must_use]
pub fn play_round(store: &WordStore, guesser: Guesser, seed: u64) -> RoundResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::start(store, &mut rng);
    let mut guesses = 0;
    let mut hint_shown = false;

    while state.accepts_input() {
        let Some(letter) = guesser.next_letter(&state, &mut rng) else {
            break;
        };
        state.apply_guess(letter);
        guesses += 1;
        hint_shown |= state.hint_visible();
    }

    RoundResult {
        status: state.status(),
        wrong_count: state.wrong_count(),
        guesses,
        hint_shown,
    }
}

/// Play `rounds` rounds in parallel
///
/// Round `i` is seeded with `seed + i`.
#[must_use]
pub fn run_simulation(
    store: &WordStore,
    rounds: usize,
    guesser: Guesser,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(rounds as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(format!("{guesser:?}"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<RoundResult> = (0..rounds)
        .into_par_iter()
        .map(|i| {
            let result = play_round(store, guesser, seed.wrapping_add(i as u64));
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&results, duration)
}

fn summarize(results: &[RoundResult], duration: Duration) -> SimulationResult {
    let rounds = results.len();
    let mut wrong_distribution = [0; MAX_WRONG_GUESSES as usize + 1];
    let mut won = 0;
    let mut lost = 0;
    let mut hint_rounds = 0;
    let mut total_wrong = 0usize;

    for result in results {
        match result.status {
            Status::Won => won += 1,
            Status::Lost => lost += 1,
            Status::Playing => {}
        }
        if result.hint_shown {
            hint_rounds += 1;
        }
        let wrong = usize::from(result.wrong_count).min(wrong_distribution.len() - 1);
        wrong_distribution[wrong] += 1;
        total_wrong += usize::from(result.wrong_count);
    }

    let per_round = |value: f64| if rounds == 0 { 0.0 } else { value / rounds as f64 };

    SimulationResult {
        rounds,
        won,
        lost,
        win_rate: per_round(won as f64),
        average_wrong: per_round(total_wrong as f64),
        hint_rounds,
        wrong_distribution,
        duration,
        rounds_per_second: if duration.as_secs_f64() > 0.0 {
            rounds as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALPHABET, ScriptedRandom, WordEntry};

    fn store(words: &[&str]) -> WordStore {
        WordStore::new(
            words
                .iter()
                .map(|w| WordEntry::new(*w, "der", "-", "-", "Tipp").unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn frequency_order_is_a_permutation_of_alphabet() {
        let mut ordered: Vec<char> = FREQUENCY_ORDER.chars().collect();
        let mut alphabet = ALPHABET.to_vec();
        ordered.sort_unstable();
        alphabet.sort_unstable();
        assert_eq!(ordered, alphabet);
    }

    #[test]
    fn frequency_guesser_skips_guessed_letters() {
        let entry = WordEntry::new("Stern", "der", "-", "-", "").unwrap();
        let mut state = GameState::new(entry);
        let mut rng = ScriptedRandom::new([0]);

        assert_eq!(
            Guesser::Frequency.next_letter(&state, &mut rng),
            Letter::from_char('e')
        );
        state.apply_guess(Letter::from_char('e').unwrap());
        assert_eq!(
            Guesser::Frequency.next_letter(&state, &mut rng),
            Letter::from_char('n')
        );
    }

    #[test]
    fn random_guesser_picks_unguessed() {
        let entry = WordEntry::new("Uhr", "die", "-", "-", "").unwrap();
        let mut state = GameState::new(entry);
        state.apply_guess(Letter::from_char('a').unwrap());

        // Index 0 among open letters is 'b' now that 'a' is taken
        let mut rng = ScriptedRandom::new([0]);
        assert_eq!(
            Guesser::Random.next_letter(&state, &mut rng),
            Letter::from_char('b')
        );
    }

    #[test]
    fn frequency_guesser_wins_on_frequent_letters() {
        // "Stern" only uses letters from the head of the frequency order
        let result = play_round(&store(&["Stern"]), Guesser::Frequency, 3);
        assert_eq!(result.status, Status::Won);
        assert!(result.wrong_count <= 2);
        assert!(!result.hint_shown);
    }

    #[test]
    fn frequency_guesser_loses_on_rare_letters() {
        let result = play_round(&store(&["Quiz"]), Guesser::Frequency, 0);
        assert_eq!(result.status, Status::Lost);
        assert_eq!(result.wrong_count, MAX_WRONG_GUESSES);
        assert!(result.hint_shown);
    }

    #[test]
    fn rounds_always_finish() {
        let store = WordStore::embedded().unwrap();
        for seed in 0..50 {
            for guesser in [Guesser::Frequency, Guesser::Random] {
                let result = play_round(&store, guesser, seed);
                assert_ne!(result.status, Status::Playing);
                assert!(result.wrong_count <= MAX_WRONG_GUESSES);
            }
        }
    }

    #[test]
    fn simulation_is_reproducible() {
        let store = WordStore::embedded().unwrap();
        let a = run_simulation(&store, 64, Guesser::Random, 99, false);
        let b = run_simulation(&store, 64, Guesser::Random, 99, false);

        assert_eq!(a.won, b.won);
        assert_eq!(a.wrong_distribution, b.wrong_distribution);
        assert_eq!(a.hint_rounds, b.hint_rounds);
    }

    #[test]
    fn simulation_totals_add_up() {
        let store = WordStore::embedded().unwrap();
        let result = run_simulation(&store, 100, Guesser::Frequency, 7, false);

        assert_eq!(result.rounds, 100);
        assert_eq!(result.won + result.lost, 100);
        assert_eq!(result.wrong_distribution.iter().sum::<usize>(), 100);
        assert_eq!(result.wrong_distribution[MAX_WRONG_GUESSES as usize], result.lost);
        assert!((0.0..=1.0).contains(&result.win_rate));
        assert!(result.average_wrong <= f64::from(MAX_WRONG_GUESSES));
    }

    #[test]
    fn simulation_with_zero_rounds() {
        let store = WordStore::embedded().unwrap();
        let result = run_simulation(&store, 0, Guesser::Frequency, 0, false);

        assert_eq!(result.rounds, 0);
        assert_eq!(result.win_rate, 0.0);
        assert_eq!(result.hint_rate(), 0.0);
    }
}
