//! Per-position reveal buffer
//!
//! Tracks which letters of the secret word have been uncovered. One slot per
//! letter; a slot is either the revealed letter or a placeholder. The buffer
//! length never changes over a session.

use std::fmt;

/// Placeholder shown for letters not yet revealed
pub const PLACEHOLDER: char = '_';

/// Display buffer mixing placeholders and revealed letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    slots: Vec<Option<u8>>,
}

impl RevealState {
    /// Create a buffer of `len` placeholders
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots (always the secret word's length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the buffer has no slots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reveal `letter` at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of bounds.
    pub fn reveal(&mut self, position: usize, letter: u8) {
        self.slots[position] = Some(letter);
    }

    /// Check if a letter has been revealed anywhere in the buffer
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.slots.contains(&Some(letter))
    }

    /// True once every slot holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Iterate over the slots as display characters
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, char::from))
    }
}

impl fmt::Display for RevealState {
    /// Space-separated slots, placeholder for hidden letters
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.chars().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_all_placeholders() {
        let state = RevealState::new(4);
        assert_eq!(state.len(), 4);
        assert!(!state.is_complete());
        assert_eq!(format!("{state}"), "_ _ _ _");
    }

    #[test]
    fn reveal_sets_single_position() {
        let mut state = RevealState::new(4);
        state.reveal(0, b'g');
        assert!(state.contains(b'g'));
        assert_eq!(format!("{state}"), "g _ _ _");
    }

    #[test]
    fn reveal_repeated_letter_positions() {
        let mut state = RevealState::new(8);
        for &pos in &[0, 4] {
            state.reveal(pos, b'b');
        }
        assert_eq!(format!("{state}"), "b _ _ _ b _ _ _");
    }

    #[test]
    fn contains_only_revealed_letters() {
        let mut state = RevealState::new(4);
        assert!(!state.contains(b'o'));
        state.reveal(1, b'o');
        assert!(state.contains(b'o'));
        assert!(!state.contains(b'g'));
    }

    #[test]
    fn is_complete_when_all_revealed() {
        let mut state = RevealState::new(2);
        state.reveal(0, b'g');
        assert!(!state.is_complete());
        state.reveal(1, b'o');
        assert!(state.is_complete());
    }

    #[test]
    fn length_never_changes() {
        let mut state = RevealState::new(6);
        state.reveal(2, b'x');
        state.reveal(5, b'y');
        assert_eq!(state.len(), 6);
    }
}
