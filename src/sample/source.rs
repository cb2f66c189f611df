//! Randomness sources for sample generation
//!
//! Generation never touches a global RNG. Callers pass a [`RandomSource`],
//! either a real generator wrapped in [`RngSource`] or a [`ScriptedSource`]
//! that replays a fixed decision sequence.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Coin;

/// The three random decisions the generator makes
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Fair coin flip
    fn flip(&mut self) -> Coin;

    /// Uniform permutation in place
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Adapter over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn flip(&mut self) -> Coin {
        if self.rng.gen::<bool>() {
            Coin::Heads
        } else {
            Coin::Tails
        }
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Replays queued coins and picks; shuffling is a no-op.
///
/// Once a queue runs out, `flip` yields [`Coin::Tails`] and `pick` yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    coins: VecDeque<Coin>,
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(coins: impl IntoIterator<Item = Coin>, picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            coins: coins.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }

    /// Source that only scripts the coin; every pick is index 0
    pub fn with_coins(coins: impl IntoIterator<Item = Coin>) -> Self {
        Self::new(coins, std::iter::empty())
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |i| i % len.max(1))
    }

    fn flip(&mut self) -> Coin {
        self.coins.pop_front().unwrap_or(Coin::Tails)
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
