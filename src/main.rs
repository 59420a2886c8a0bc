//! Hangman - CLI
//!
//! Classic hangman in the terminal: the program picks a secret word and the
//! player guesses it one letter at a time, with nine misses allowed.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    commands::run_play,
    game::{GameSession, StdinSource},
    wordlists::{WORDS, words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Classic hangman word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    /// Seed for deterministic word selection (OS entropy if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let words = words_from_slice(WORDS);
    let mut session =
        GameSession::random(&words, &mut rng).context("failed to pick a secret word")?;

    let mut source = StdinSource::new();
    run_play(&mut session, &mut source);

    Ok(())
}
