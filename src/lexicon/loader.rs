//! Lexicon loading
//!
//! Reads the word list and pair-frequency table from disk. A missing file is
//! not an error: the word list falls back to the built-in set and the
//! frequency table to an empty map. Anything else that goes wrong is.

use super::{FALLBACK_WORDS, Lexicon};
use crate::error::LexiconError;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default location of the newline-delimited word list
pub const DEFAULT_WORDS_PATH: &str = "data/nouns.txt";

/// Default location of the JSON pair-frequency table
pub const DEFAULT_PAIR_FREQ_PATH: &str = "data/bigram_freq.json";

/// Where to find lexicon data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSource {
    pub words_path: PathBuf,
    pub pair_freq_path: PathBuf,
}

impl Default for LexiconSource {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            pair_freq_path: PathBuf::from(DEFAULT_PAIR_FREQ_PATH),
        }
    }
}

impl LexiconSource {
    #[must_use]
    pub fn new(words_path: impl Into<PathBuf>, pair_freq_path: impl Into<PathBuf>) -> Self {
        Self {
            words_path: words_path.into(),
            pair_freq_path: pair_freq_path.into(),
        }
    }

    /// Load both resources and build the lexicon
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read, if the frequency
    /// table is not valid JSON, or if it holds an invalid frequency.
    ///
    /// # Examples
    /// ```no_run
    /// use word_chain::lexicon::LexiconSource;
    ///
    /// let lexicon = LexiconSource::default().load().unwrap();
    /// println!("Loaded {} words", lexicon.len());
    /// ```
    pub fn load(&self) -> Result<Lexicon, LexiconError> {
        let pair_freq = load_pair_freq(&self.pair_freq_path)?;

        let lexicon = match load_words(&self.words_path)? {
            Some(words) => Lexicon::new(words, pair_freq)?,
            None => {
                warn!(
                    path = %self.words_path.display(),
                    "word list not found, using built-in fallback words"
                );
                Lexicon::new(FALLBACK_WORDS, pair_freq)?
            }
        };

        info!(
            words = lexicon.len(),
            pairs = lexicon.pair_count(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

/// Read a newline-delimited word list
///
/// Lines are trimmed and lowercased; blank lines are skipped. Returns
/// `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file exists but cannot be read.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, LexiconError> {
    let path = path.as_ref();
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(Some(words))
}

/// Read a JSON object mapping letter pairs to frequencies
///
/// A missing file yields an empty table.
///
/// # Errors
///
/// Returns `LexiconError::Io` on read failure and `LexiconError::Parse` if
/// the content is not a JSON object of numbers.
pub fn load_pair_freq<P: AsRef<Path>>(path: P) -> Result<FxHashMap<String, f64>, LexiconError> {
    let path = path.as_ref();
    let Some(content) = read_optional(path)? else {
        warn!(
            path = %path.display(),
            "pair-frequency table not found, every pair scores as unseen"
        );
        return Ok(FxHashMap::default());
    };

    serde_json::from_str(&content).map_err(|source| LexiconError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>, LexiconError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LexiconError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
