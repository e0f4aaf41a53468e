//! Lexicon: the word set and letter-pair frequency table
//!
//! Built once by the composition root and shared by reference. Nothing
//! mutates a lexicon after construction, so `&Lexicon` can be handed to any
//! number of threads.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK_WORDS, FALLBACK_WORDS_COUNT};
pub use loader::LexiconSource;

use crate::core::normalize;
use crate::error::LexiconError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Immutable set of playable words plus pair frequencies
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    // Sorted copy of `words`; seeded sampling must not depend on hash order
    pool: Vec<String>,
    pair_freq: FxHashMap<String, f64>,
}

impl Lexicon {
    /// Build a lexicon from raw entries and a frequency table
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped and
    /// duplicates collapse.
    ///
    /// # Errors
    /// Returns `LexiconError::InvalidFrequency` if any frequency is negative,
    /// NaN or infinite.
    pub fn new<I, S>(words: I, pair_freq: FxHashMap<String, f64>) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some((pair, &value)) = pair_freq
            .iter()
            .find(|&(_, &value)| !value.is_finite() || value < 0.0)
        {
            return Err(LexiconError::InvalidFrequency {
                pair: pair.clone(),
                value,
            });
        }

        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        let mut pool: Vec<String> = words.iter().cloned().collect();
        pool.sort_unstable();

        Ok(Self {
            words,
            pool,
            pair_freq,
        })
    }

    /// Lexicon made of the built-in fallback words and no frequencies
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// Lexicon with an empty frequency table (every pair maximally rare)
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // An empty table cannot hold an invalid frequency
        Self::new(words, FxHashMap::default()).unwrap_or_default()
    }

    /// Whether `word` is playable
    ///
    /// Input is expected to be normalized already.
    #[inline]
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Observed frequency of a letter pair, 0.0 when unseen
    #[inline]
    #[must_use]
    pub fn pair_frequency(&self, pair: &str) -> f64 {
        self.pair_freq.get(pair).copied().unwrap_or(0.0)
    }

    /// Draw a uniformly random opening word
    ///
    /// # Errors
    /// Returns `LexiconError::EmptyLexicon` if there are no words.
    pub fn sample_starting_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, LexiconError> {
        self.pool
            .choose(rng)
            .map(String::as_str)
            .ok_or(LexiconError::EmptyLexicon)
    }

    /// All words in sorted order
    #[must_use]
    pub fn word_slice(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Number of letter pairs with a recorded frequency
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_freq.len()
    }
}
