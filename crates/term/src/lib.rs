//! Terminal rendering module.
//!
//! Draws a hangman round as plain scrolling text: the current gallows panel,
//! the partially revealed word, and the alphabet with guessed letters greyed
//! out. No widgets or layout engine; crossterm commands are queued into a
//! byte buffer and flushed once per call.

pub mod renderer;
pub mod view;

pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

pub use renderer::TerminalRenderer;
pub use view::{
    encode_alphabet_into, encode_guessed_into, encode_panel_into, encode_reveal_into,
    encode_round_into, GUESSED_COLOR,
};
