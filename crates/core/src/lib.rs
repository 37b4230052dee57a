//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the hangman rules and state. It has **no dependencies**
//! on terminal output, input devices, or the filesystem: callers hand it raw
//! file contents and letters, and read state back for rendering.
//!
//! # Module Structure
//!
//! - [`text`]: immutable [`TextBuffer`] and the mutable [`Reveal`] word
//! - [`words`]: newline-delimited [`WordBank`] parsing
//! - [`gallery`]: comma-delimited [`ImageGallery`] parsing and the panel cursor
//! - [`rng`]: small seeded LCG with Fisher-Yates shuffle
//! - [`scheduler`]: no-repeat word selection, reshuffled every pass
//! - [`guesses`]: 26-bit [`GuessTracker`]
//! - [`round`]: the per-word state machine
//! - [`game`]: validated bank + gallery + scheduler, opens rounds
//!
//! # Game Rules
//!
//! - A gallery of M panels allows M - 1 misses; the M-th miss loses.
//! - Each miss shows the next panel. Hits never move the panel.
//! - Guessing a letter twice is reported and ignored.
//! - The round is won once every position of the word is revealed.
//! - Every word is served once per pass before any word repeats.
//!
//! # Example
//!
//! ```
//! use tui_hangman_core::{Game, ImageGallery, WordBank};
//! use tui_hangman_types::{GuessOutcome, Letter, RoundStatus};
//!
//! let bank = WordBank::parse(b"ant\n");
//! let gallery = ImageGallery::parse(b"head,\nbody,\nnoose,\n");
//! let mut game = Game::new(bank, gallery, 12345).unwrap();
//!
//! let mut round = game.start_round().unwrap();
//! let miss = round.apply_guess(Letter::from_char('z').unwrap()).unwrap();
//! assert_eq!(miss.outcome, GuessOutcome::Miss);
//! assert_eq!(round.active_panel().to_string(), "body");
//!
//! for ch in ['a', 'n', 't'] {
//!     round.apply_guess(Letter::from_char(ch).unwrap()).unwrap();
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

pub mod error;
pub mod gallery;
pub mod game;
pub mod guesses;
pub mod rng;
pub mod round;
pub mod scheduler;
pub mod text;
pub mod words;

pub use tui_hangman_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use gallery::ImageGallery;
pub use game::Game;
pub use guesses::GuessTracker;
pub use rng::{seed_from_time, SimpleRng};
pub use round::{GuessReport, Round};
pub use scheduler::WordScheduler;
pub use text::{Reveal, TextBuffer};
pub use words::WordBank;
