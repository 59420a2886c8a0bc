//! Pluggable guess input sources
//!
//! The play loop consumes whitespace-delimited tokens one at a time. Where the
//! tokens come from is a capability behind `TokenSource`, so the interactive
//! game reads stdin while tests feed a fixed script.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Yields the next guess token, or `None` once the stream is exhausted
pub trait TokenSource {
    /// Consume and return one token; `None` means end of input
    fn next_token(&mut self) -> Option<String>;
}

/// Blocking token source over standard input
///
/// Reads a line at a time and hands out one whitespace-delimited token per
/// call. A read failure is treated as end of stream.
#[derive(Debug, Default)]
pub struct StdinSource {
    pending: VecDeque<String>,
}

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenSource for StdinSource {
    fn next_token(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {
                    self.pending
                        .extend(line.split_whitespace().map(str::to_owned));
                }
            }
        }
    }
}

/// Fixed token sequence, for tests and scripted runs
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    tokens: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl TokenSource for ScriptedSource {
    fn next_token(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }
}
