//! Word scoring command
//!
//! Explains how a word's rarity score is built up pair by pair.

use crate::core::normalize;
use crate::lexicon::Lexicon;
use crate::scoring::{PairScore, RarityScorer, Scorer};

/// Scoring breakdown for one word
pub struct ScoreReport {
    pub word: String,
    pub in_lexicon: bool,
    pub pairs: Vec<PairScore>,
    pub total: f64,
}

/// Score `word` and collect the per-pair contributions
#[must_use]
pub fn score_report(word: &str, lexicon: &Lexicon) -> ScoreReport {
    let word = normalize(word);
    let scorer = RarityScorer::default();

    ScoreReport {
        in_lexicon: lexicon.is_valid_word(&word),
        pairs: scorer.breakdown(&word, lexicon),
        total: scorer.score(&word, lexicon),
        word,
    }
}
