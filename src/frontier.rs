//! A "next-best" container whose ordering is randomized per insertion.
//!
//! After each push the pending entries are either stably sorted by key
//! (lowest first) or fully shuffled. Popping always takes the front, so a
//! shuffle temporarily turns the best-first search into a random walk.

use std::collections::VecDeque;

use rand::prelude::*;

/// How the frontier reorders itself after an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierMode {
    /// Stable sort by key, ascending.
    Sorted,
    /// Uniform random permutation of every pending entry.
    Shuffled,
}

impl FrontierMode {
    /// Pick `Shuffled` with probability `randomness`.
    pub fn pick<R: Rng + ?Sized>(randomness: f64, rng: &mut R) -> Self {
        if rng.gen::<f64>() < randomness {
            FrontierMode::Shuffled
        } else {
            FrontierMode::Sorted
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frontier<T> {
    entries: VecDeque<(u32, T)>,
    randomness: f64,
}

impl<T> Frontier<T> {
    pub fn new(randomness: f64) -> Self {
        Self {
            entries: VecDeque::new(),
            randomness,
        }
    }

    /// Insert `item` with priority `key` and reorder the whole frontier.
    pub fn push<R: Rng + ?Sized>(&mut self, key: u32, item: T, rng: &mut R) -> FrontierMode {
        self.entries.push_back((key, item));
        let mode = FrontierMode::pick(self.randomness, rng);
        self.reorder(mode, rng);
        mode
    }

    fn reorder<R: Rng + ?Sized>(&mut self, mode: FrontierMode, rng: &mut R) {
        let pending = self.entries.make_contiguous();
        match mode {
            FrontierMode::Sorted => pending.sort_by_key(|(key, _)| *key),
            FrontierMode::Shuffled => pending.shuffle(rng),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_front().map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
