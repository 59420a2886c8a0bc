//! Player input token classification
//!
//! Each round consumes one whitespace-delimited token from the player. A token
//! is either the quit signal or a single letter; anything else is a validation
//! error reported back to the player.

use std::fmt;

/// A validated input token: one letter to try, or the quit signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessToken {
    /// A single lowercase ASCII letter
    Letter(u8),
    /// The player asked to stop the game
    Quit,
}

/// Error type for invalid guess tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Token was not exactly one character (holds the character count)
    NotSingleLetter(usize),
    /// Token was a single character but not an ASCII letter
    NotALetter(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSingleLetter(count) => {
                write!(f, "expected exactly one letter, got {count} characters")
            }
            Self::NotALetter(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for GuessError {}

impl GuessToken {
    /// Classify one input token
    ///
    /// `"quit"` in any casing is the quit signal. A single ASCII letter is a
    /// guess, normalized to lowercase. Everything else is an error.
    ///
    /// # Errors
    /// Returns `GuessError::NotSingleLetter` for empty or multi-character
    /// tokens, `GuessError::NotALetter` for a single non-letter character.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessToken;
    ///
    /// assert_eq!(GuessToken::parse("G").unwrap(), GuessToken::Letter(b'g'));
    /// assert_eq!(GuessToken::parse("QUIT").unwrap(), GuessToken::Quit);
    /// assert!(GuessToken::parse("ab").is_err());
    /// assert!(GuessToken::parse("7").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, GuessError> {
        if token.eq_ignore_ascii_case("quit") {
            return Ok(Self::Quit);
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                if ch.is_ascii_alphabetic() {
                    Ok(Self::Letter(ch.to_ascii_lowercase() as u8))
                } else {
                    Err(GuessError::NotALetter(ch))
                }
            }
            _ => Err(GuessError::NotSingleLetter(token.chars().count())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter() {
        assert_eq!(GuessToken::parse("a").unwrap(), GuessToken::Letter(b'a'));
        assert_eq!(GuessToken::parse("z").unwrap(), GuessToken::Letter(b'z'));
    }

    #[test]
    fn parse_uppercase_normalized() {
        assert_eq!(GuessToken::parse("A").unwrap(), GuessToken::Letter(b'a'));
        assert_eq!(GuessToken::parse("Q").unwrap(), GuessToken::Letter(b'q'));
    }

    #[test]
    fn parse_quit_any_case() {
        assert_eq!(GuessToken::parse("quit").unwrap(), GuessToken::Quit);
        assert_eq!(GuessToken::parse("Quit").unwrap(), GuessToken::Quit);
        assert_eq!(GuessToken::parse("QUIT").unwrap(), GuessToken::Quit);
        assert_eq!(GuessToken::parse("qUiT").unwrap(), GuessToken::Quit);
    }

    #[test]
    fn parse_multi_character_rejected() {
        assert_eq!(
            GuessToken::parse("ab"),
            Err(GuessError::NotSingleLetter(2))
        );
        assert_eq!(
            GuessToken::parse("quitting"),
            Err(GuessError::NotSingleLetter(8))
        );
    }

    #[test]
    fn parse_empty_rejected() {
        assert_eq!(GuessToken::parse(""), Err(GuessError::NotSingleLetter(0)));
    }

    #[test]
    fn parse_non_letter_rejected() {
        assert_eq!(GuessToken::parse("7"), Err(GuessError::NotALetter('7')));
        assert_eq!(GuessToken::parse("!"), Err(GuessError::NotALetter('!')));
        assert_eq!(GuessToken::parse("é"), Err(GuessError::NotALetter('é')));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = GuessToken::parse("ab").unwrap_err();
        assert!(err.to_string().contains("exactly one letter"));

        let err = GuessToken::parse("9").unwrap_err();
        assert!(err.to_string().contains("not a letter"));
    }
}
