//! Built-in fallback word set
//!
//! Used when no word-list file is available. Every entry is at least two
//! letters long so prefix rules always have something to work with.

/// Words played when the external word list is missing
pub const FALLBACK_WORDS: &[&str] = &[
    "кот", "стол", "лес", "сон", "нос", "сок", "код", "дом", "море", "торт",
];

/// Number of words in `FALLBACK_WORDS`
pub const FALLBACK_WORDS_COUNT: usize = FALLBACK_WORDS.len();
