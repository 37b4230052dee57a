//! TerminalRenderer: writes round frames and messages to a terminal.
//!
//! Output is built in an internal buffer and flushed once per call. The sink
//! is generic so tests can render into a `Vec<u8>`.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::Round;
use crate::core::{GuessTracker, Reveal, TextBuffer};
use crate::types::InputChar;
use crate::view::{encode_round_into, LINE_END};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    clear: bool,
    raw: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(clear: bool) -> Self {
        Self::new(io::stdout(), clear)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            clear,
            raw: false,
        }
    }

    /// Switch the terminal to raw mode for single-keystroke input.
    pub fn enter_raw(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call when raw mode was never entered.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    /// Clear (when enabled) and draw the panel, revealed word, and alphabet.
    pub fn render(&mut self, panel: &TextBuffer, revealed: &Reveal, guesses: GuessTracker) -> Result<()> {
        self.buf.clear();
        if self.clear {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.buf.queue(cursor::MoveTo(0, 0))?;
        }
        encode_round_into(panel, revealed, guesses, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn render_round(&mut self, round: &Round<'_>) -> Result<()> {
        self.render(round.active_panel(), round.revealed(), round.guesses())
    }

    /// Print a full line of text.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print(LINE_END))?;
        self.flush_buf()
    }

    /// Print text without a line ending and flush, ready for input.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    /// In raw mode nothing echoes typed keys, so echo the accepted character.
    pub fn echo(&mut self, input: InputChar) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.buf.clear();
        if let InputChar::Char(ch) = input {
            if ch != '\n' {
                self.buf.queue(Print(ch))?;
            }
        }
        self.buf.queue(Print(LINE_END))?;
        self.flush_buf()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
