//! Per-player game session
//!
//! The session is a plain value: the caller stores it however it likes
//! (serialized with serde in a cookie, in memory for the CLI) and hands it
//! back to the engine for each move.

use crate::error::SessionError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Words played so far, the word to chain from, and the running score
///
/// `used_words` is never empty and `last_word` is always its last element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    used_words: Vec<String>,
    last_word: String,
    total_score: f64,
}

/// Unvalidated wire form
#[derive(Deserialize)]
struct RawSession {
    used_words: Vec<String>,
    last_word: String,
    total_score: f64,
}

impl TryFrom<RawSession> for GameSession {
    type Error = SessionError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let Some(last_used) = raw.used_words.last() else {
            return Err(SessionError::Empty);
        };

        if *last_used != raw.last_word {
            return Err(SessionError::LastWordMismatch {
                last_word: raw.last_word,
            });
        }

        let duplicate = {
            let mut seen = FxHashSet::default();
            raw.used_words
                .iter()
                .find(|w| !seen.insert(w.as_str()))
                .cloned()
        };
        if let Some(dup) = duplicate {
            return Err(SessionError::DuplicateWord(dup));
        }

        if !raw.total_score.is_finite() || raw.total_score < 0.0 {
            return Err(SessionError::InvalidScore(raw.total_score));
        }

        Ok(Self {
            used_words: raw.used_words,
            last_word: raw.last_word,
            total_score: raw.total_score,
        })
    }
}

impl GameSession {
    /// Fresh session opened with `opening_word`
    pub(crate) fn new(opening_word: impl Into<String>) -> Self {
        let opening_word = opening_word.into();
        Self {
            used_words: vec![opening_word.clone()],
            last_word: opening_word,
            total_score: 0.0,
        }
    }

    /// Words in play order, opening word first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// The word the next move must extend
    #[must_use]
    pub fn last_word(&self) -> &str {
        &self.last_word
    }

    #[must_use]
    pub const fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Number of accepted moves (the opening word is not a move)
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.used_words.len() - 1
    }

    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Record an accepted word
    pub(crate) fn push(&mut self, word: String, points: f64) {
        self.last_word.clone_from(&word);
        self.used_words.push(word);
        self.total_score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_invariants() {
        let session = GameSession::new("кот");
        assert_eq!(session.used_words(), ["кот"]);
        assert_eq!(session.last_word(), "кот");
        assert!(session.total_score().abs() < f64::EPSILON);
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn push_updates_all_fields() {
        let mut session = GameSession::new("кот");
        session.push("торт".to_string(), 1500.0);
        assert_eq!(session.used_words(), ["кот", "торт"]);
        assert_eq!(session.last_word(), "торт");
        assert!((session.total_score() - 1500.0).abs() < f64::EPSILON);
        assert!(session.is_used("кот"));
        assert!(!session.is_used("лес"));
    }

    #[test]
    fn json_round_trip_preserves_state() {
        let mut session = GameSession::new("стол");
        session.push("лес".to_string(), 500.0);

        let json = serde_json::to_string(&session).unwrap();
        let restored: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn deserialize_rejects_empty_session() {
        let json = r#"{"used_words": [], "last_word": "", "total_score": 0.0}"#;
        let err = serde_json::from_str::<GameSession>(json).unwrap_err();
        assert!(err.to_string().contains("no words"));
    }

    #[test]
    fn deserialize_rejects_mismatched_last_word() {
        let json = r#"{"used_words": ["кот", "торт"], "last_word": "кот", "total_score": 0.0}"#;
        assert!(serde_json::from_str::<GameSession>(json).is_err());
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let json =
            r#"{"used_words": ["кот", "торт", "кот"], "last_word": "кот", "total_score": 1.0}"#;
        let err = serde_json::from_str::<GameSession>(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn deserialize_rejects_negative_score() {
        let json = r#"{"used_words": ["кот"], "last_word": "кот", "total_score": -3.0}"#;
        assert!(serde_json::from_str::<GameSession>(json).is_err());
    }

    #[test]
    fn try_from_reports_typed_error() {
        let raw = RawSession {
            used_words: vec!["кот".to_string()],
            last_word: "дом".to_string(),
            total_score: 0.0,
        };
        assert_eq!(
            GameSession::try_from(raw),
            Err(SessionError::LastWordMismatch {
                last_word: "дом".to_string()
            })
        );
    }
}
