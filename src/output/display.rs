//! Display functions for the game loop

use super::formatters::{guesses_left_line, missed_letters_line};
use crate::core::GuessError;
use crate::game::{GameSession, Outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print the one-time intro line
pub fn print_intro() {
    println!(
        "Type {} whenever you want to stop the game.",
        "\"quit\"".bright_yellow()
    );
}

/// Print the per-round status block: budget, misses, revealed word
pub fn print_progress(session: &GameSession) {
    println!("{}", guesses_left_line(session.guesses_left()).cyan());
    println!("{}", missed_letters_line(session.missed()).red());
    println!("{}", session.reveal().to_string().bright_white().bold());
}

/// Prompt for the next guess, flushing so it lands before the blocking read
pub fn print_prompt() {
    print!("Guess a letter: ");
    let _ = io::stdout().flush();
}

/// Print one validation error line for an invalid token
pub fn print_guess_error(error: &GuessError) {
    let line = match error {
        GuessError::NotSingleLetter(_) => {
            "Wrong input, you need to choose exactly one letter. Try again."
        }
        GuessError::NotALetter(_) => "The given input is not a letter. Try again.",
    };
    println!("{}", line.yellow());
}

/// Print the rejection line for a letter guessed earlier in the session
pub fn print_already_tried() {
    println!(
        "{}",
        "The given input has already been tried. Try another letter.".yellow()
    );
}

/// Print the banner for a finished session
pub fn print_outcome(session: &GameSession) {
    match session.outcome() {
        Outcome::Won => {
            println!(
                "{}",
                "Congratulations, you have won the game!".green().bold()
            );
        }
        Outcome::Lost => {
            println!(
                "{}",
                format!(
                    "You have lost the game. The correct answer was \"{}\".",
                    session.secret()
                )
                .red()
                .bold()
            );
        }
        Outcome::Quit => {
            println!("{}", "The game was stopped early.".yellow());
        }
        Outcome::EndOfInput => {
            println!(
                "{}",
                format!(
                    "No more input to read. The correct answer was \"{}\".",
                    session.secret()
                )
                .yellow()
            );
        }
        Outcome::InProgress => {}
    }
}
