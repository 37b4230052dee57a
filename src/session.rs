//! Interactive play loop: loads the data files, runs rounds until the player
//! declines another or input ends.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::core::{seed_from_time, Game, ImageGallery, Round, WordBank};
use crate::input::{classify_guess, CharSource, GuessInput};
use crate::term::TerminalRenderer;
use crate::types::{GuessOutcome, InputChar, RoundStatus};

/// Counts of rounds played to a result in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Read both data files and build a validated game.
pub fn load_game(config: &Config) -> Result<Game> {
    let raw_images = fs::read(&config.images_path)
        .with_context(|| format!("failed to read images from {}", config.images_path.display()))?;
    let raw_words = fs::read(&config.words_path)
        .with_context(|| format!("failed to read words from {}", config.words_path.display()))?;

    let gallery = ImageGallery::parse(&raw_images);
    let bank = WordBank::parse(&raw_words);
    let seed = config.seed.unwrap_or_else(seed_from_time);

    tracing::info!(
        words = bank.len(),
        panels = gallery.len(),
        seed,
        words_path = %config.words_path.display(),
        images_path = %config.images_path.display(),
        "data loaded"
    );

    Game::new(bank, gallery, seed).context("data files are unusable")
}

/// Play rounds until the player answers `n` or input ends.
pub fn run<S, W>(
    game: &mut Game,
    input: &mut S,
    term: &mut TerminalRenderer<W>,
) -> Result<SessionSummary>
where
    S: CharSource + ?Sized,
    W: Write,
{
    let mut summary = SessionSummary::default();

    loop {
        let mut round = game.start_round()?;
        term.render_round(&round)?;

        let Some(status) = play_round(&mut round, input, term)? else {
            break;
        };

        summary.rounds += 1;
        match status {
            RoundStatus::Won => summary.wins += 1,
            RoundStatus::Lost => summary.losses += 1,
            RoundStatus::InProgress => {}
        }
        tracing::info!(
            ?status,
            word = %round.secret(),
            misses = round.misses(),
            guessed = round.guesses().count(),
            "round over"
        );

        term.line(&format!("The word was: {}", round.secret()))?;
        term.line("")?;
        term.prompt("Play again? (Y/n): ")?;

        let answer = input.read_char()?;
        term.echo(answer)?;
        if matches!(answer, InputChar::EndOfInput | InputChar::Char('N')) {
            break;
        }
    }

    tracing::info!(
        rounds = summary.rounds,
        wins = summary.wins,
        losses = summary.losses,
        "session ended"
    );
    Ok(summary)
}

/// Guess loop for one round. `None` means input ended mid-round.
fn play_round<S, W>(
    round: &mut Round<'_>,
    input: &mut S,
    term: &mut TerminalRenderer<W>,
) -> Result<Option<RoundStatus>>
where
    S: CharSource + ?Sized,
    W: Write,
{
    loop {
        term.line("")?;
        term.prompt("Enter a guess: ")?;

        let ch = match input.read_char()? {
            InputChar::EndOfInput => return Ok(None),
            InputChar::Char(ch) => ch,
        };
        term.echo(InputChar::Char(ch))?;

        let letter = match classify_guess(ch) {
            GuessInput::Letter(letter) => letter,
            GuessInput::Invalid(_) => {
                term.render_round(round)?;
                term.line("")?;
                term.line("Invalid character!")?;
                continue;
            }
        };

        let report = round.apply_guess(letter)?;
        match report.outcome {
            GuessOutcome::AlreadyGuessed => {
                term.line(&format!("'{}' was already guessed!", letter))?;
                continue;
            }
            GuessOutcome::Miss => {
                term.render_round(round)?;
                term.line("")?;
                term.line("Guess was incorrect!")?;
            }
            GuessOutcome::Hit => {
                term.render_round(round)?;
                term.line("")?;
                term.line("Guess was correct!")?;
            }
        }

        match report.status {
            RoundStatus::Won => {
                term.line("You won!")?;
                return Ok(Some(RoundStatus::Won));
            }
            RoundStatus::Lost => {
                term.line("You lost!")?;
                return Ok(Some(RoundStatus::Lost));
            }
            RoundStatus::InProgress => {}
        }
    }
}
