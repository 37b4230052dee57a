//! Integration tests for the round state machine through the facade crate.

use tui_hangman::core::{CoreError, Game, ImageGallery, Round, TextBuffer, WordBank};
use tui_hangman::types::{GuessOutcome, Letter, RoundStatus};

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

fn three_panels() -> ImageGallery {
    ImageGallery::parse(b"head,\nbody,\nnoose,\n")
}

#[test]
fn ant_example_wins_after_two_misses() {
    let secret = TextBuffer::from("ANT");
    let mut gallery = three_panels();
    let mut round = Round::new(&secret, &mut gallery).unwrap();

    let outcomes: Vec<GuessOutcome> = ['A', 'Z', 'N', 'Q', 'T']
        .into_iter()
        .map(|ch| round.apply_guess(letter(ch)).unwrap().outcome)
        .collect();

    assert_eq!(
        outcomes,
        vec![
            GuessOutcome::Hit,
            GuessOutcome::Miss,
            GuessOutcome::Hit,
            GuessOutcome::Miss,
            GuessOutcome::Hit,
        ]
    );
    assert_eq!(round.status(), RoundStatus::Won);
    assert!(round.revealed().matches(&secret));
    assert_eq!(round.misses(), 2);
    // Two misses on a three-panel gallery: one more would have lost.
    assert_eq!(round.active_panel().to_string(), "noose");
}

#[test]
fn second_guess_of_same_letter_is_a_no_op() {
    for ch in ['A', 'X'] {
        let secret = TextBuffer::from("ANT");
        let mut gallery = three_panels();
        let mut round = Round::new(&secret, &mut gallery).unwrap();

        let first = round.apply_guess(letter(ch)).unwrap();
        assert_ne!(first.outcome, GuessOutcome::AlreadyGuessed);

        let revealed = round.revealed().clone();
        let guesses = round.guesses();
        let panel = round.panel_index();

        let second = round.apply_guess(letter(ch)).unwrap();
        assert_eq!(second.outcome, GuessOutcome::AlreadyGuessed);
        assert_eq!(round.revealed(), &revealed);
        assert_eq!(round.guesses(), guesses);
        assert_eq!(round.panel_index(), panel);
    }
}

#[test]
fn repeated_letters_fill_in_one_hit() {
    let secret = TextBuffer::from("MISSISSIPPI");
    let mut gallery = three_panels();
    let mut round = Round::new(&secret, &mut gallery).unwrap();

    let report = round.apply_guess(letter('S')).unwrap();
    assert_eq!(report.outcome, GuessOutcome::Hit);
    assert_eq!(report.filled, 4);
    assert_eq!(round.revealed().to_string(), "__SS_SS____");
    assert_eq!(round.panel_index(), 0);
}

#[test]
fn loss_leaves_cursor_on_final_panel() {
    let secret = TextBuffer::from("ANT");
    let mut gallery = three_panels();
    let mut round = Round::new(&secret, &mut gallery).unwrap();

    for ch in ['B', 'C'] {
        assert_eq!(
            round.apply_guess(letter(ch)).unwrap().status,
            RoundStatus::InProgress
        );
    }
    let report = round.apply_guess(letter('D')).unwrap();
    assert_eq!(report.status, RoundStatus::Lost);
    assert_eq!(round.active_panel().to_string(), "noose");
    assert!(matches!(
        round.apply_guess(letter('A')),
        Err(CoreError::RoundOver(RoundStatus::Lost))
    ));
}

#[test]
fn next_round_starts_clean_after_a_win() {
    let mut game = Game::new(WordBank::parse(b"ox\nyak\n"), three_panels(), 3).unwrap();

    {
        let mut round = game.start_round().unwrap();
        let word = round.secret().to_string();
        round.apply_guess(letter('Q')).unwrap();
        for ch in word.chars() {
            round.apply_guess(letter(ch)).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Won);
    }

    let round = game.start_round().unwrap();
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert!(round.guesses().is_empty());
    assert_eq!(round.panel_index(), 0);
    assert_eq!(round.revealed().hidden_count(), round.secret().len());
}
