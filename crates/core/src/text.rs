//! Text buffers - owned byte strings for words and image panels.
//!
//! [`TextBuffer`] is immutable once built. [`Reveal`] is the one mutable
//! buffer in a round: the player's view of the secret word.

use std::fmt;

use crate::types::{Letter, HIDDEN_CHAR};

/// Immutable sized byte sequence.
///
/// Equality is byte-wise. Content is usually ASCII but nothing here requires it;
/// `Display` falls back to lossy UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextBuffer {
    bytes: Box<[u8]>,
}

impl TextBuffer {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Case-fold to ASCII uppercase, returning a new buffer.
    pub fn to_ascii_uppercase(&self) -> Self {
        Self {
            bytes: self.bytes.to_ascii_uppercase().into_boxed_slice(),
        }
    }

    /// True when every byte is an ASCII letter, i.e. the word can be fully revealed.
    pub fn is_guessable(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_alphabetic)
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

/// The partially revealed secret word.
///
/// Same length as the secret; every position starts as `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    bytes: Vec<u8>,
}

impl Reveal {
    /// All-hidden reveal of the given length.
    pub fn hidden(len: usize) -> Self {
        Self {
            bytes: vec![HIDDEN_CHAR; len],
        }
    }

    /// Write `letter` into every position where `secret` holds it.
    ///
    /// Returns how many positions matched.
    pub fn fill(&mut self, letter: Letter, secret: &TextBuffer) -> usize {
        let target = letter.to_byte();
        let mut filled = 0;
        for (slot, &b) in self.bytes.iter_mut().zip(secret.as_bytes()) {
            if b == target {
                *slot = target;
                filled += 1;
            }
        }
        filled
    }

    /// Byte-for-byte comparison with the secret.
    pub fn matches(&self, secret: &TextBuffer) -> bool {
        self.bytes == secret.as_bytes()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn hidden_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b == HIDDEN_CHAR).count()
    }
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn text_buffer_equality_is_bytewise() {
        assert_eq!(TextBuffer::from("ANT"), TextBuffer::from_bytes(b"ANT"));
        assert_ne!(TextBuffer::from("ANT"), TextBuffer::from("ant"));
        assert_ne!(TextBuffer::from("ANT"), TextBuffer::from("ANTS"));
    }

    #[test]
    fn text_buffer_uppercase() {
        let word = TextBuffer::from("Hello-42");
        assert_eq!(word.to_ascii_uppercase(), TextBuffer::from("HELLO-42"));
        assert_eq!(word.len(), 8);
    }

    #[test]
    fn guessable_only_for_pure_letters() {
        assert!(TextBuffer::from("WOLF").is_guessable());
        assert!(!TextBuffer::from("R2D2").is_guessable());
        assert!(!TextBuffer::from("ICE CREAM").is_guessable());
    }

    #[test]
    fn reveal_starts_hidden() {
        let r = Reveal::hidden(4);
        assert_eq!(r.as_bytes(), b"____");
        assert_eq!(r.hidden_count(), 4);
    }

    #[test]
    fn reveal_fill_writes_every_match() {
        let secret = TextBuffer::from("BANANA");
        let mut r = Reveal::hidden(secret.len());

        assert_eq!(r.fill(letter('A'), &secret), 3);
        assert_eq!(r.to_string(), "_A_A_A");

        assert_eq!(r.fill(letter('Z'), &secret), 0);
        assert_eq!(r.to_string(), "_A_A_A");

        r.fill(letter('B'), &secret);
        r.fill(letter('N'), &secret);
        assert!(r.matches(&secret));
        assert_eq!(r.hidden_count(), 0);
    }
}
