//! Guess tracker - the set of letters tried this round, as a 26-bit mask.

use arrayvec::ArrayVec;

use crate::types::{Letter, LETTER_COUNT};

/// Bit `i` set means letter `i` (0 = A) has been guessed.
///
/// Bits are only ever set. A new round starts from [`GuessTracker::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GuessTracker {
    bits: u32,
}

impl GuessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_guessed(&self, letter: Letter) -> bool {
        self.bits & (1u32 << letter.index()) != 0
    }

    pub fn mark_guessed(&mut self, letter: Letter) {
        self.bits |= 1u32 << letter.index();
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Guessed letters in alphabetical order.
    ///
    /// Stack-only; does not allocate.
    pub fn letters(&self) -> ArrayVec<Letter, LETTER_COUNT> {
        Letter::all().filter(|&l| self.was_guessed(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn starts_empty() {
        let t = GuessTracker::new();
        assert!(t.is_empty());
        assert!(Letter::all().all(|l| !t.was_guessed(l)));
    }

    #[test]
    fn mark_sets_only_that_bit() {
        let mut t = GuessTracker::new();
        t.mark_guessed(letter('C'));
        assert!(t.was_guessed(letter('c')));
        assert!(!t.was_guessed(letter('B')));
        assert!(!t.was_guessed(letter('D')));
        assert_eq!(t.bits(), 1 << 2);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut t = GuessTracker::new();
        t.mark_guessed(letter('Z'));
        let before = t;
        t.mark_guessed(letter('Z'));
        assert_eq!(t, before);
        assert_eq!(t.count(), 1);
    }

    #[test]
    fn full_alphabet_fits_in_26_bits() {
        let mut t = GuessTracker::new();
        for l in Letter::all() {
            t.mark_guessed(l);
        }
        assert_eq!(t.count(), LETTER_COUNT);
        assert_eq!(t.bits(), (1 << 26) - 1);
    }

    #[test]
    fn letters_are_sorted() {
        let mut t = GuessTracker::new();
        for ch in ['Q', 'A', 'M'] {
            t.mark_guessed(letter(ch));
        }
        let s: String = t.letters().iter().map(|l| l.to_char()).collect();
        assert_eq!(s, "AMQ");
    }
}
