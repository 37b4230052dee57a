//! Terminal input module.
//!
//! Produces one normalized character at a time for the game loop:
//!
//! - letters are folded to ASCII uppercase, so guesses and the yes/no prompt
//!   are case-insensitive
//! - a bare line ending (`\n` or `\r\n`) is reported as `'\n'`
//! - end of input is a distinct [`InputChar::EndOfInput`]
//!
//! Two sources implement [`CharSource`]: [`LineReader`] reads one line per
//! answer from any `BufRead` (stdin by default), [`KeyReader`] reads single
//! keystrokes through crossterm with the terminal in raw mode.

pub mod keys;
pub mod line;
pub mod map;

pub use tui_hangman_types as types;

pub use keys::KeyReader;
pub use line::LineReader;
pub use map::{classify_guess, map_key_event, GuessInput};

use anyhow::Result;

use crate::types::InputChar;

/// A blocking source of normalized characters.
pub trait CharSource {
    fn read_char(&mut self) -> Result<InputChar>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> Result<InputChar> {
        (**self).read_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read_char(&mut self) -> Result<InputChar> {
        (**self).read_char()
    }
}
