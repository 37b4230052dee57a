//! Line-buffered input: one answer per line.

use std::io::{self, BufRead, StdinLock};

use anyhow::Result;

use crate::types::InputChar;
use crate::CharSource;

/// Reads a whole line and keeps its first character.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line: Vec<u8>,
}

impl LineReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(64),
        }
    }
}

impl<R: BufRead> CharSource for LineReader<R> {
    fn read_char(&mut self) -> Result<InputChar> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(InputChar::EndOfInput);
        }

        let ch = match self.line[0] {
            b'\n' | b'\r' => '\n',
            _ => String::from_utf8_lossy(&self.line)
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('\n'),
        };
        Ok(InputChar::Char(ch))
    }
}
