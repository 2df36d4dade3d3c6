//! Injectable randomness for shuffles, starter colors and opponent ties.
//!
//! ## Key Features
//!
//! - **Injectable**: every engine function takes a `&mut dyn RandomSource`
//! - **Deterministic**: `GameRng` replays the same sequence for the same seed
//! - **Scriptable**: `SequenceRng` replays a fixed list of indices in tests
//! - **Serializable**: `GameRngState` captures a `GameRng` position in O(1)
//!
//! ## Usage
//!
//! ```
//! use rust_uno::core::{rng, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! rng::shuffle(&mut rng, &mut cards);
//!
//! let mut sorted = cards.clone();
//! sorted.sort();
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an integer uniformly distributed in `0..bound`.
    ///
    /// Callers never pass a zero `bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Shuffle a slice in place (Fisher–Yates).
///
/// Walks from the last index down to 1, swapping `i` with a uniformly
/// chosen `j` in `0..=i`, so every permutation is equally likely.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Choose a uniformly random element from a slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.next_index(items.len());
    items.get(idx)
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for checkpointing alongside a `GameState`.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed script of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound. An empty
/// script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    script: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    /// Create a source that replays `script`.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            pos: 0,
        }
    }

    /// A source that always picks index 0.
    ///
    /// Shuffling with it rotates the first element to the back.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.pos % self.script.len()]
        };
        self.pos += 1;
        value % bound
    }
}
