//! Terminal output formatting
//!
//! Display utilities for the game loop and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_already_tried, print_guess_error, print_intro, print_outcome, print_progress,
    print_prompt,
};
