//! Word bank - newline-delimited word list parsing.

use std::ops::Index;

use crate::text::TextBuffer;

/// Ordered, uppercased words loaded from a newline-delimited buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<TextBuffer>,
}

impl WordBank {
    /// Split `raw` on line boundaries (`\n`, with an optional preceding `\r`),
    /// skipping blank or whitespace-only lines.
    ///
    /// An empty input gives an empty bank; rejecting that is the caller's job.
    pub fn parse(raw: &[u8]) -> Self {
        let words = raw
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
            .map(|line| TextBuffer::from_bytes(line).to_ascii_uppercase())
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextBuffer> {
        self.words.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextBuffer> {
        self.words.iter()
    }
}

impl Index<usize> for WordBank {
    type Output = TextBuffer;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}
