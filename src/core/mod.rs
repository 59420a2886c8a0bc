//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero I/O dependencies.
//! All types here are pure, testable, and have clear validation rules.

mod guess;
mod reveal;
mod word;

pub use guess::{GuessError, GuessToken};
pub use reveal::{PLACEHOLDER, RevealState};
pub use word::{Word, WordError};
