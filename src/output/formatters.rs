//! Formatting utilities for terminal output

/// Guesses-left line, with singular phrasing once at most one guess remains
#[must_use]
pub fn guesses_left_line(guesses_left: u32) -> String {
    if guesses_left > 1 {
        format!("You have {guesses_left} guesses left.")
    } else {
        format!("You have {guesses_left} guess left.")
    }
}

/// Missed letters in the order they were guessed, e.g. `[z, x]`
#[must_use]
pub fn missed_letters_line(missed: &[u8]) -> String {
    let letters: Vec<String> = missed
        .iter()
        .map(|&letter| char::from(letter).to_string())
        .collect();
    format!("Missed letters: [{}]", letters.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_left_plural() {
        assert_eq!(guesses_left_line(9), "You have 9 guesses left.");
        assert_eq!(guesses_left_line(2), "You have 2 guesses left.");
    }

    #[test]
    fn guesses_left_singular_at_one() {
        assert_eq!(guesses_left_line(1), "You have 1 guess left.");
    }

    #[test]
    fn guesses_left_singular_at_zero() {
        assert_eq!(guesses_left_line(0), "You have 0 guess left.");
    }

    #[test]
    fn missed_letters_empty() {
        assert_eq!(missed_letters_line(&[]), "Missed letters: []");
    }

    #[test]
    fn missed_letters_in_guess_order() {
        assert_eq!(missed_letters_line(b"zx"), "Missed letters: [z, x]");
        assert_eq!(missed_letters_line(b"q"), "Missed letters: [q]");
    }
}
