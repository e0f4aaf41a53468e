//! Lexicon ranking command
//!
//! Scores every lexicon word in parallel and keeps the rarest ones.

use crate::lexicon::Lexicon;
use crate::scoring::{RarityScorer, Scorer};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Configuration for ranking
pub struct RankConfig {
    pub limit: usize,
    /// Only rank words starting with this prefix
    pub prefix: Option<String>,
}

impl RankConfig {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            prefix: None,
        }
    }
}

/// Ranking output
pub struct RankResult {
    /// `(word, score)` by descending score, ties by word
    pub entries: Vec<(String, f64)>,
    pub considered: usize,
    pub duration: Duration,
}

/// Rank lexicon words by rarity score
#[must_use]
pub fn rank_words(lexicon: &Lexicon, config: &RankConfig) -> RankResult {
    let start = Instant::now();
    let scorer = RarityScorer::default();
    let prefix = config.prefix.as_deref().map(str::to_lowercase);

    let mut entries: Vec<(String, f64)> = lexicon
        .word_slice()
        .par_iter()
        .filter(|word| prefix.as_deref().is_none_or(|p| word.starts_with(p)))
        .map(|word| (word.clone(), scorer.score(word, lexicon)))
        .collect();

    let considered = entries.len();
    entries.par_sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries.truncate(config.limit);

    RankResult {
        entries,
        considered,
        duration: start.elapsed(),
    }
}
