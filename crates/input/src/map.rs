//! Key mapping from terminal events to normalized characters, and guess classification.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{InputChar, Letter};

/// Map a key press to a normalized character.
///
/// `Esc`, `Ctrl-C` and `Ctrl-D` end input. Release/repeat events and keys
/// with no character meaning map to `None`.
pub fn map_key_event(key: KeyEvent) -> Option<InputChar> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(InputChar::EndOfInput)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(InputChar::EndOfInput),
        KeyCode::Enter => Some(InputChar::Char('\n')),
        KeyCode::Char(c) => Some(InputChar::Char(c.to_ascii_uppercase())),
        _ => None,
    }
}

/// A character read at the guess prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Letter(Letter),
    /// Anything that is not A-Z (digits, punctuation, blank lines)
    Invalid(char),
}

pub fn classify_guess(ch: char) -> GuessInput {
    match Letter::from_char(ch) {
        Some(letter) => GuessInput::Letter(letter),
        None => GuessInput::Invalid(ch),
    }
}
