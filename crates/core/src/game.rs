//! Game - owns the word bank, the gallery, and the word scheduler, and opens rounds.

use crate::error::CoreError;
use crate::gallery::ImageGallery;
use crate::round::Round;
use crate::scheduler::WordScheduler;
use crate::words::WordBank;

#[derive(Debug, Clone)]
pub struct Game {
    bank: WordBank,
    gallery: ImageGallery,
    scheduler: WordScheduler,
    rounds_started: u32,
}

impl Game {
    /// Validate the loaded data and build a game seeded with `seed`.
    pub fn new(bank: WordBank, gallery: ImageGallery, seed: u32) -> Result<Self, CoreError> {
        if bank.is_empty() {
            return Err(CoreError::EmptyWordBank);
        }
        if gallery.is_empty() {
            return Err(CoreError::EmptyGallery);
        }

        for word in bank.iter().filter(|w| !w.is_guessable()) {
            tracing::warn!(%word, "word contains non-letter characters and cannot be fully revealed");
        }

        Ok(Self {
            scheduler: WordScheduler::new(bank.len(), seed),
            bank,
            gallery,
            rounds_started: 0,
        })
    }

    /// Draw the next scheduled word and open a fresh round on it.
    pub fn start_round(&mut self) -> Result<Round<'_>, CoreError> {
        let secret = self
            .scheduler
            .next(&self.bank)
            .ok_or(CoreError::EmptyWordBank)?;
        self.rounds_started += 1;

        tracing::debug!(
            round = self.rounds_started,
            pass = self.scheduler.passes(),
            word = %secret,
            "next word"
        );

        Round::new(secret, &mut self.gallery)
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn gallery(&self) -> &ImageGallery {
        &self.gallery
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Letter, RoundStatus};
    use std::collections::HashSet;

    fn game(words: &str, seed: u32) -> Game {
        Game::new(
            WordBank::parse(words.as_bytes()),
            ImageGallery::parse(b"a,\nb,\nc,\n"),
            seed,
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_bank() {
        let err = Game::new(WordBank::default(), ImageGallery::parse(b"a,"), 1).unwrap_err();
        assert_eq!(err, CoreError::EmptyWordBank);
    }

    #[test]
    fn rejects_empty_gallery() {
        let err = Game::new(WordBank::parse(b"ant\n"), ImageGallery::parse(b"no commas"), 1)
            .unwrap_err();
        assert_eq!(err, CoreError::EmptyGallery);
    }

    #[test]
    fn rounds_cycle_through_the_bank() {
        let mut g = game("ant\nbear\nwolf\n", 11);
        let mut seen = HashSet::new();
        for _ in 0..3 {
            let round = g.start_round().unwrap();
            seen.insert(round.secret().to_string());
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(g.rounds_started(), 3);
    }

    #[test]
    fn new_round_resets_after_loss() {
        let mut g = game("ant\n", 1);
        {
            let mut round = g.start_round().unwrap();
            for ch in ['X', 'Y', 'Z'] {
                round.apply_guess(Letter::from_char(ch).unwrap()).unwrap();
            }
            assert_eq!(round.status(), RoundStatus::Lost);
            assert_eq!(round.panel_index(), 2);
        }

        let round = g.start_round().unwrap();
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.revealed().to_string(), "___");
        assert!(round.guesses().is_empty());
        assert_eq!(round.panel_index(), 0);
        assert_eq!(g.gallery().active_index(), 0);
    }
}
