//! Command implementations

pub mod play;
pub mod rank;
pub mod score;

pub use play::{PlayOutcome, run_play};
pub use rank::{RankConfig, RankResult, rank_words};
pub use score::{ScoreReport, score_report};
