//! Game session state machine and input plumbing

mod session;
mod source;

pub use session::{GameSession, GuessResult, MAX_GUESSES, Outcome, SessionError};
pub use source::{ScriptedSource, StdinSource, TokenSource};
