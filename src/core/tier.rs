//! Prefix-rule tiers
//!
//! A move must extend the previous word. Three rules are tried from the
//! strictest to the loosest and the first match decides the multiplier.

use super::word::reversed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which chaining rule a move satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveTier {
    /// Starts with the previous word's last two letters
    Normal,
    /// Starts with those two letters swapped
    Transposed,
    /// Starts with the previous word's final letter only
    LastLetter,
}

impl MoveTier {
    /// Score multiplier for this tier
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Transposed => 0.5,
            Self::LastLetter => 0.25,
        }
    }

    /// Classify `candidate` against the required prefix
    ///
    /// Returns `None` when no rule applies. The two-letter rules only apply
    /// when the prefix has exactly two characters.
    ///
    /// # Examples
    /// ```
    /// use word_chain::core::MoveTier;
    ///
    /// assert_eq!(MoveTier::classify("отвар", "от"), Some(MoveTier::Normal));
    /// assert_eq!(MoveTier::classify("торт", "от"), Some(MoveTier::Transposed));
    /// assert_eq!(MoveTier::classify("лес", "ол"), Some(MoveTier::LastLetter));
    /// assert_eq!(MoveTier::classify("дом", "ол"), None);
    /// ```
    #[must_use]
    pub fn classify(candidate: &str, required_prefix: &str) -> Option<Self> {
        let is_pair = required_prefix.chars().count() == 2;

        if is_pair && candidate.starts_with(required_prefix) {
            return Some(Self::Normal);
        }

        if is_pair && candidate.starts_with(reversed(required_prefix).as_str()) {
            return Some(Self::Transposed);
        }

        required_prefix
            .chars()
            .last()
            .filter(|&last| candidate.starts_with(last))
            .map(|_| Self::LastLetter)
    }
}

impl fmt::Display for MoveTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Transposed => write!(f, "transposed"),
            Self::LastLetter => write!(f, "last letter"),
        }
    }
}
