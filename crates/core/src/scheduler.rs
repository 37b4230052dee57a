//! Word scheduler - bag-style word selection without repeats.
//!
//! Works like a shuffle bag: the index permutation is shuffled, served in order,
//! and reshuffled only once every entry has been handed out. Every word appears
//! exactly once per pass.

use crate::rng::SimpleRng;
use crate::text::TextBuffer;
use crate::words::WordBank;

#[derive(Debug, Clone)]
pub struct WordScheduler {
    /// Permutation of bank indices for the current pass
    order: Vec<usize>,
    /// Next position in `order`; equal to `order.len()` means the pass is spent
    cursor: usize,
    rng: SimpleRng,
    passes: u32,
}

impl WordScheduler {
    /// Scheduler over `len` words. The first shuffle happens on the first draw.
    pub fn new(len: usize, seed: u32) -> Self {
        Self {
            order: (0..len).collect(),
            cursor: len,
            rng: SimpleRng::new(seed),
            passes: 0,
        }
    }

    /// Index of the next word, reshuffling when the pass is exhausted.
    ///
    /// `None` only for an empty bank.
    pub fn next_index(&mut self) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }

        if self.cursor >= self.order.len() {
            self.rng.shuffle(&mut self.order);
            self.cursor = 0;
            self.passes += 1;
        }

        let index = self.order[self.cursor];
        self.cursor += 1;
        Some(index)
    }

    /// Draw the next word from `bank`.
    ///
    /// `bank` must be the bank this scheduler was sized for.
    pub fn next<'b>(&mut self, bank: &'b WordBank) -> Option<&'b TextBuffer> {
        debug_assert_eq!(bank.len(), self.order.len());
        self.next_index().and_then(|i| bank.get(i))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Words left before the next reshuffle
    pub fn remaining_in_pass(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Number of shuffles performed so far
    pub fn passes(&self) -> u32 {
        self.passes
    }
}
