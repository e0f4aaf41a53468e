//! Core domain types for the word chain
//!
//! Pure string helpers and the prefix-rule tiers. Everything here works on
//! characters rather than bytes, so Cyrillic words split correctly.

mod tier;
mod word;

pub use tier::MoveTier;
pub use word::{bigrams, last_two_letters, normalize, reversed};
