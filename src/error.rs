//! Error types
//!
//! Move rejections are expected outcomes handed back to the caller, while
//! lexicon and session errors describe bad configuration or bad input data.

use std::path::PathBuf;
use thiserror::Error;

/// Why a candidate word was not accepted
///
/// Every variant is recoverable: the session is left untouched and the
/// caller may prompt again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// Nothing left after trimming
    #[error("enter a word")]
    EmptyInput,

    /// Word is not in the lexicon
    #[error("'{word}' is not in the dictionary")]
    NotInDictionary { word: String },

    /// Word was already played this game
    #[error("'{word}' has already been used")]
    AlreadyUsed { word: String },

    /// Word does not extend the previous one under any rule
    #[error(
        "'{word}' must start with \"{required_prefix}\" (or its reversal, or its last letter)"
    )]
    PrefixMismatch {
        word: String,
        required_prefix: String,
    },
}

/// Failures while building or sampling the lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// No words to draw an opening word from
    #[error("lexicon contains no words")]
    EmptyLexicon,

    /// A data file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pair-frequency table is not a JSON object of numbers
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A frequency is negative or not finite
    #[error("invalid frequency {value} for pair '{pair}'")]
    InvalidFrequency { pair: String, value: f64 },
}

/// A deserialized session that breaks the session invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("session has no words")]
    Empty,

    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("last word '{last_word}' is not the most recently used word")]
    LastWordMismatch { last_word: String },

    #[error("total score {0} is not a finite non-negative number")]
    InvalidScore(f64),
}
