//! Word list for the game
//!
//! Provides the embedded word list compiled into the binary for zero-cost access.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped rather than failing the whole list.
///
/// # Examples
/// ```
/// use hangman::wordlists::{WORDS, words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 17, "Expected the fixed 17-entry word list");
    }

    #[test]
    fn words_are_valid() {
        // All candidate words should be lowercase alphabetic
        for &word in WORDS {
            assert!(!word.is_empty(), "Empty entry in word list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_from_slice_converts_all_entries() {
        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
        assert!(words.iter().any(|w| w.text() == "golf"));
        assert!(words.iter().any(|w| w.text() == "elephant"));
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["golf", "not a word", "judo", ""];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "golf");
        assert_eq!(words[1].text(), "judo");
    }
}
