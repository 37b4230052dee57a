//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Letter Domain
//!
//! Guesses are restricted to the 26 letters of the English alphabet:
//!
//! - **Index**: 0 for `A` through 25 for `Z`
//! - **Case**: input of either case maps to the same [`Letter`]
//! - **Digits and punctuation**: not guessable
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LETTER_COUNT` | 26 | Size of the guess domain |
//! | `HIDDEN_CHAR` | `_` | Placeholder for unrevealed positions |
//! | `ALPHABET_ROW_LEN` | 9 | Letters per row in the alphabet display |
//! | `DEFAULT_WORDS_PATH` | `./data/words.txt` | Word bank file |
//! | `DEFAULT_IMAGES_PATH` | `./data/images.txt` | Gallows image file |
//!
//! # Examples
//!
//! ```
//! use tui_hangman_types::{Letter, RoundStatus, LETTER_COUNT};
//!
//! // Case-insensitive
//! let a = Letter::from_char('a').unwrap();
//! assert_eq!(a, Letter::from_char('A').unwrap());
//! assert_eq!(a.index(), 0);
//!
//! // Digits are not letters
//! assert!(Letter::from_char('7').is_none());
//!
//! assert_eq!(Letter::all().count(), LETTER_COUNT);
//! assert!(!RoundStatus::InProgress.is_over());
//! ```

use std::fmt;

/// Number of guessable letters (A-Z)
pub const LETTER_COUNT: usize = 26;

/// Placeholder byte for positions not yet revealed
pub const HIDDEN_CHAR: u8 = b'_';

/// Letters per row when displaying the alphabet
pub const ALPHABET_ROW_LEN: usize = 9;

/// Default word bank path, relative to the working directory
pub const DEFAULT_WORDS_PATH: &str = "./data/words.txt";

/// Default image gallery path, relative to the working directory
pub const DEFAULT_IMAGES_PATH: &str = "./data/images.txt";

/// A guessable letter, stored as its alphabet index (0 = A, 25 = Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Map an ASCII letter of either case to its index.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase ASCII byte for this letter
    pub fn to_byte(self) -> u8 {
        b'A' + self.0
    }

    pub fn to_char(self) -> char {
        self.to_byte() as char
    }

    /// Iterate A through Z in order
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..LETTER_COUNT as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One normalized character from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChar {
    /// A character folded to ASCII uppercase. A bare line ending is `'\n'`.
    Char(char),
    /// The input stream closed (or the player asked to quit).
    EndOfInput,
}

impl InputChar {
    pub fn is_end(self) -> bool {
        matches!(self, InputChar::EndOfInput)
    }
}

/// Classification of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// The letter was already tried this round; nothing changed.
    AlreadyGuessed,
    /// The letter is not in the secret word.
    Miss,
    /// The letter appears at least once in the secret word.
    Hit,
}

/// Lifecycle of a round. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}
