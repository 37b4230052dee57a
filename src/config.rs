//! Runtime configuration read from environment variables.
//!
//! - `HANGMAN_WORDS`: word bank path (default `./data/words.txt`)
//! - `HANGMAN_IMAGES`: image gallery path (default `./data/images.txt`)
//! - `HANGMAN_SEED`: fixed shuffle seed; unset means seed from the clock
//! - `HANGMAN_INPUT`: `line` (default) or `keys` for single-keystroke input
//! - `HANGMAN_LOG_PATH`: write log events to this file; unset disables logging
//! - `HANGMAN_LOG`: log filter directive (default `info`)
//! - `TERM=dumb`: disables clearing the screen between frames

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::types::{DEFAULT_IMAGES_PATH, DEFAULT_WORDS_PATH};

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One answer per line, read from stdin
    #[default]
    Line,
    /// One keystroke per answer, terminal in raw mode
    Keys,
}

impl FromStr for InputMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "lines" => Ok(InputMode::Line),
            "key" | "keys" | "raw" => Ok(InputMode::Keys),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub words_path: PathBuf,
    pub images_path: PathBuf,
    pub seed: Option<u32>,
    pub input: InputMode,
    pub clear_screen: bool,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            images_path: PathBuf::from(DEFAULT_IMAGES_PATH),
            seed: None,
            input: InputMode::Line,
            clear_screen: true,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();

        Self {
            words_path: non_empty("HANGMAN_WORDS")
                .map(PathBuf::from)
                .unwrap_or(defaults.words_path),
            images_path: non_empty("HANGMAN_IMAGES")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_path),
            seed: non_empty("HANGMAN_SEED").and_then(|s| s.parse().ok()),
            input: non_empty("HANGMAN_INPUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            clear_screen: lookup("TERM").map(|t| t != "dumb").unwrap_or(true),
            log_path: non_empty("HANGMAN_LOG_PATH").map(PathBuf::from),
            log_filter: non_empty("HANGMAN_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
