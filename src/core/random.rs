//! Random source abstraction
//!
//! Word and letter selection draw indices through [`RandomSource`] so rounds
//! can be replayed from a seed or a fixed script.

use rand::Rng;
use rand::rngs::StdRng;

/// Uniform index selection
pub trait RandomSource {
    /// Return an index in `0..len`
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index called with empty range");
        self.random_range(0..len)
    }
}

/// Deterministic source that replays a fixed list of indices
///
/// Values are reduced modulo `len` and the script repeats once exhausted.
///
/// # Examples
/// ```
/// use hangman_de::core::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([2, 7]);
/// assert_eq!(rng.pick_index(5), 2);
/// assert_eq!(rng.pick_index(5), 2); // 7 % 5
/// assert_eq!(rng.pick_index(10), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() || len == 0 {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
