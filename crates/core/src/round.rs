//! Round state machine - one secret word from first guess to win or loss.
//!
//! ```text
//! InProgress --(reveal complete)--> Won
//! InProgress --(miss on last panel)--> Lost
//! ```
//!
//! A miss advances the gallery cursor by one panel. The loss check happens
//! before the advance, so the cursor never leaves the gallery.

use crate::error::CoreError;
use crate::gallery::ImageGallery;
use crate::guesses::GuessTracker;
use crate::text::{Reveal, TextBuffer};
use crate::types::{GuessOutcome, Letter, RoundStatus};

/// Result of applying one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    /// Round status after the guess
    pub status: RoundStatus,
    /// Positions revealed by this guess (0 unless `outcome` is `Hit`)
    pub filled: usize,
}

#[derive(Debug)]
pub struct Round<'a> {
    secret: &'a TextBuffer,
    revealed: Reveal,
    guesses: GuessTracker,
    gallery: &'a mut ImageGallery,
    status: RoundStatus,
    misses: usize,
}

impl<'a> Round<'a> {
    /// Open a round on `secret`, rewinding the gallery to its first panel.
    pub fn new(secret: &'a TextBuffer, gallery: &'a mut ImageGallery) -> Result<Self, CoreError> {
        if gallery.is_empty() {
            return Err(CoreError::EmptyGallery);
        }
        gallery.reset();

        Ok(Self {
            secret,
            revealed: Reveal::hidden(secret.len()),
            guesses: GuessTracker::new(),
            gallery,
            status: RoundStatus::InProgress,
            misses: 0,
        })
    }

    /// Apply one letter guess.
    ///
    /// Repeated letters report `AlreadyGuessed` and change nothing. Guessing after
    /// the round has ended is an error.
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessReport, CoreError> {
        if self.status.is_over() {
            return Err(CoreError::RoundOver(self.status));
        }

        if self.guesses.was_guessed(letter) {
            return Ok(GuessReport {
                outcome: GuessOutcome::AlreadyGuessed,
                status: self.status,
                filled: 0,
            });
        }
        self.guesses.mark_guessed(letter);

        let filled = self.revealed.fill(letter, self.secret);
        let outcome = if filled == 0 {
            self.misses += 1;
            if self.gallery.is_last() {
                self.status = RoundStatus::Lost;
            } else {
                self.gallery.advance();
            }
            GuessOutcome::Miss
        } else {
            if self.revealed.matches(self.secret) {
                self.status = RoundStatus::Won;
            }
            GuessOutcome::Hit
        };

        tracing::trace!(%letter, ?outcome, filled, status = ?self.status, "guess applied");

        Ok(GuessReport {
            outcome,
            status: self.status,
            filled,
        })
    }

    pub fn secret(&self) -> &TextBuffer {
        self.secret
    }

    pub fn revealed(&self) -> &Reveal {
        &self.revealed
    }

    pub fn guesses(&self) -> GuessTracker {
        self.guesses
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// The gallery panel for the current miss count.
    pub fn active_panel(&self) -> &TextBuffer {
        &self.gallery.panels()[self.gallery.active_index()]
    }

    pub fn panel_index(&self) -> usize {
        self.gallery.active_index()
    }

    /// Misses the player can still absorb; the one after these loses the round.
    pub fn misses_remaining(&self) -> usize {
        if self.status.is_over() {
            return 0;
        }
        self.gallery.len() - 1 - self.gallery.active_index()
    }
}
