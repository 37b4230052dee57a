//! TUI Hangman (workspace facade crate).
//!
//! Re-exports the member crates as `tui_hangman::{core, input, term, types}`
//! and hosts the pieces that tie them together: environment [`config`] and the
//! interactive [`session`] loop.

pub use tui_hangman_core as core;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;

pub mod config;
pub mod session;
