//! Round view: encodes the gallows panel, the revealed word, and the alphabet.
//!
//! This module is pure (no I/O). It queues crossterm commands into a byte
//! buffer so the output can be inspected in tests.
//!
//! Every line ends in `\r\n`, which renders the same in cooked and raw mode.

use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{GuessTracker, Reveal, TextBuffer};
use crate::types::{Letter, ALPHABET_ROW_LEN};

/// Colour used for letters already guessed.
pub const GUESSED_COLOR: Color = Color::DarkGrey;

pub const LINE_END: &str = "\r\n";

/// Encode a full round frame: panel, blank line, word, blank line, alphabet,
/// then the guessed-letters line once anything has been guessed.
pub fn encode_round_into(
    panel: &TextBuffer,
    revealed: &Reveal,
    guesses: GuessTracker,
    out: &mut Vec<u8>,
) -> Result<()> {
    encode_panel_into(panel, out)?;
    out.queue(Print(LINE_END))?;

    out.queue(Print("Word: "))?;
    encode_reveal_into(revealed, out)?;
    out.queue(Print(LINE_END))?;
    out.queue(Print(LINE_END))?;

    encode_alphabet_into(guesses, out)?;
    encode_guessed_into(guesses, out)
}

/// Panel text with line endings normalised to `\r\n`.
pub fn encode_panel_into(panel: &TextBuffer, out: &mut Vec<u8>) -> Result<()> {
    for line in panel.as_bytes().split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        out.queue(Print(String::from_utf8_lossy(line)))?;
        out.queue(Print(LINE_END))?;
    }
    Ok(())
}

/// Revealed letters separated by single spaces, e.g. `A _ T`.
pub fn encode_reveal_into(revealed: &Reveal, out: &mut Vec<u8>) -> Result<()> {
    let bytes = revealed.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        out.queue(Print(b as char))?;
        if i + 1 < bytes.len() {
            out.queue(Print(' '))?;
        }
    }
    Ok(())
}

/// The alphabet in rows of nine, guessed letters greyed out.
pub fn encode_alphabet_into(guesses: GuessTracker, out: &mut Vec<u8>) -> Result<()> {
    for letter in Letter::all() {
        if guesses.was_guessed(letter) {
            out.queue(SetForegroundColor(GUESSED_COLOR))?;
            out.queue(Print(letter.to_char()))?;
            out.queue(ResetColor)?;
        } else {
            out.queue(Print(letter.to_char()))?;
        }

        if (letter.index() + 1) % ALPHABET_ROW_LEN == 0 {
            out.queue(Print(LINE_END))?;
        } else {
            out.queue(Print(' '))?;
        }
    }
    out.queue(Print(LINE_END))?;
    Ok(())
}

/// `Guessed: A E Z` in alphabetical order. Nothing when no guess has been made.
pub fn encode_guessed_into(guesses: GuessTracker, out: &mut Vec<u8>) -> Result<()> {
    let letters = guesses.letters();
    if letters.is_empty() {
        return Ok(());
    }

    out.queue(Print("Guessed:"))?;
    for letter in letters {
        out.queue(Print(' '))?;
        out.queue(Print(letter.to_char()))?;
    }
    out.queue(Print(LINE_END))?;
    Ok(())
}
