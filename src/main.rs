//! Terminal hangman runner (default binary).
//!
//! Loads the word bank and gallows images, then plays rounds on stdin/stdout.
//! See [`tui_hangman::config`] for the environment variables it reads.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_hangman::config::{Config, InputMode, DEFAULT_LOG_FILTER};
use tui_hangman::input::{KeyReader, LineReader};
use tui_hangman::session;
use tui_hangman::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let mut game = session::load_game(&config)?;
    let mut term = TerminalRenderer::stdout(config.clear_screen);

    let result = match config.input {
        InputMode::Line => session::run(&mut game, &mut LineReader::stdin(), &mut term),
        InputMode::Keys => term
            .enter_raw()
            .and_then(|_| session::run(&mut game, &mut KeyReader::new(), &mut term)),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result.map(|_| ())
}

/// Log to a file when `HANGMAN_LOG_PATH` is set; stdout belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
