//! Single-keystroke input via crossterm.
//!
//! The terminal must already be in raw mode (see the term crate's renderer),
//! otherwise key events only arrive after Enter.

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::map_key_event;
use crate::types::InputChar;
use crate::CharSource;

#[derive(Debug, Default)]
pub struct KeyReader {
    _private: (),
}

impl KeyReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharSource for KeyReader {
    fn read_char(&mut self) -> Result<InputChar> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(ch) = map_key_event(key) {
                    return Ok(ch);
                }
            }
        }
    }
}
