//! Interactive game loop
//!
//! Drives one `GameSession` against a `TokenSource`: read a valid guess, apply
//! it, render progress, evaluate termination. The read step loops locally
//! until it gets a usable token, so invalid input never reaches the session.

use crate::core::GuessToken;
use crate::game::{GameSession, Outcome, TokenSource};
use crate::output::display;

/// What the read step resolved to for one round
enum ReadOutcome {
    /// A valid, not-yet-tried letter
    Letter(u8),
    /// The player sent the quit signal
    Quit,
    /// The source ran out of tokens
    EndOfInput,
}

/// Run one game session to completion
///
/// Renders the initial state, then loops rounds until the session reaches a
/// terminal outcome, which is printed and returned.
pub fn run_play<S: TokenSource>(session: &mut GameSession, source: &mut S) -> Outcome {
    display::print_intro();
    display::print_progress(session);

    loop {
        match read_guess(session, source) {
            ReadOutcome::Letter(letter) => {
                session.apply_guess(letter);
            }
            ReadOutcome::Quit => session.quit(),
            ReadOutcome::EndOfInput => session.end_of_input(),
        }

        // The round's progress always lands before the outcome banner
        display::print_progress(session);

        let outcome = session.check_termination();
        if outcome.is_terminal() {
            display::print_outcome(session);
            return outcome;
        }
    }
}

/// Read tokens until one resolves to a fresh letter or a control signal
///
/// Rejections (wrong length, not a letter, already tried) each print one
/// error line and re-prompt.
fn read_guess<S: TokenSource>(session: &GameSession, source: &mut S) -> ReadOutcome {
    loop {
        display::print_prompt();

        let Some(token) = source.next_token() else {
            return ReadOutcome::EndOfInput;
        };

        match GuessToken::parse(&token) {
            Ok(GuessToken::Quit) => return ReadOutcome::Quit,
            Ok(GuessToken::Letter(letter)) => {
                if session.already_tried(letter) {
                    display::print_already_tried();
                } else {
                    return ReadOutcome::Letter(letter);
                }
            }
            Err(error) => display::print_guess_error(&error),
        }
    }
}
