//! Game session state machine
//!
//! Owns the secret word, the reveal buffer, the missed letters, and the guess
//! budget. The session is driven one guess at a time by the play loop and
//! reports its outcome after each round.

use crate::core::{RevealState, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Incorrect guesses allowed before the game is lost
pub const MAX_GUESSES: u32 = 9;

/// Session state: one non-terminal state and four terminal ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game still running
    InProgress,
    /// Every letter of the secret word has been revealed
    Won,
    /// Guess budget exhausted
    Lost,
    /// Player sent the quit signal
    Quit,
    /// Input source ran out of tokens
    EndOfInput,
}

impl Outcome {
    /// True for every state except `InProgress`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Error type for session construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    EmptyWordList,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "cannot pick a secret word from an empty list"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What applying one letter did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter occurs in the secret word; holds the number of positions uncovered
    Revealed(usize),
    /// The letter does not occur; budget was decremented
    Missed,
}

/// A single hangman game from first guess to terminal outcome
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    reveal: RevealState,
    missed: Vec<u8>,
    guesses_left: u32,
    outcome: Outcome,
}

impl GameSession {
    /// Start a session with a known secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let reveal = RevealState::new(secret.len());
        Self {
            secret,
            reveal,
            missed: Vec::new(),
            guesses_left: MAX_GUESSES,
            outcome: Outcome::InProgress,
        }
    }

    /// Start a session with a secret word picked uniformly from `words`
    ///
    /// The caller owns the RNG, so a seeded generator gives a reproducible
    /// pick.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordList` if `words` is empty.
    pub fn random<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Self, SessionError> {
        let secret = words.choose(rng).ok_or(SessionError::EmptyWordList)?;
        Ok(Self::new(secret.clone()))
    }

    /// Check if a letter was guessed before, correctly or not
    #[must_use]
    pub fn already_tried(&self, letter: u8) -> bool {
        self.missed.contains(&letter) || self.reveal.contains(letter)
    }

    /// Apply one letter guess
    ///
    /// Reveals every matching position for a correct letter; records a miss
    /// and decrements the budget otherwise. Returns `None` without touching
    /// any state when the session is already terminal.
    pub fn apply_guess(&mut self, letter: u8) -> Option<GuessResult> {
        if self.outcome.is_terminal() {
            return None;
        }

        let positions = self.secret.positions_of(letter);
        if positions.is_empty() {
            self.missed.push(letter);
            self.guesses_left = self.guesses_left.saturating_sub(1);
            Some(GuessResult::Missed)
        } else {
            for &position in positions {
                self.reveal.reveal(position, letter);
            }
            Some(GuessResult::Revealed(positions.len()))
        }
    }

    /// Evaluate win/loss after a round
    ///
    /// A fully revealed word wins; an exhausted budget loses. Quit and
    /// end-of-input are set by the read step and short-circuit both checks.
    pub fn check_termination(&mut self) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        if self.reveal.is_complete() {
            self.outcome = Outcome::Won;
        } else if self.guesses_left == 0 {
            self.outcome = Outcome::Lost;
        }

        self.outcome
    }

    /// Record the player's quit signal
    pub fn quit(&mut self) {
        if !self.outcome.is_terminal() {
            self.outcome = Outcome::Quit;
        }
    }

    /// Record that the input source ran dry
    pub fn end_of_input(&mut self) {
        if !self.outcome.is_terminal() {
            self.outcome = Outcome::EndOfInput;
        }
    }

    /// Current session state
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The per-position reveal buffer
    #[inline]
    #[must_use]
    pub const fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// Incorrect guesses so far, in the order they were made
    #[inline]
    #[must_use]
    pub fn missed(&self) -> &[u8] {
        &self.missed
    }

    /// Incorrect guesses still allowed
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }
}
