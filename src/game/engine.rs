//! Move validation and scoring

use super::session::GameSession;
use crate::core::{MoveTier, last_two_letters, normalize};
use crate::error::{LexiconError, MoveRejection};
use crate::lexicon::Lexicon;
use crate::scoring::{RarityScorer, Scorer, round2};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of an accepted move
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedMove {
    pub word: String,
    pub tier: MoveTier,
    pub base_score: f64,
    pub multiplier: f64,
    pub final_score: f64,
    /// Session total after this move
    pub total_score: f64,
}

/// Word-chain rules over a shared lexicon
///
/// The engine holds no per-game state; sessions are passed in on each call,
/// so one engine can serve any number of games.
pub struct GameEngine<'a, S: Scorer = RarityScorer> {
    lexicon: &'a Lexicon,
    scorer: S,
}

impl<'a> GameEngine<'a> {
    /// Engine using the standard rarity scorer
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_scorer(lexicon, RarityScorer::default())
    }
}

impl<'a, S: Scorer> GameEngine<'a, S> {
    #[must_use]
    pub const fn with_scorer(lexicon: &'a Lexicon, scorer: S) -> Self {
        Self { lexicon, scorer }
    }

    /// Open a new game with a random word from the lexicon
    ///
    /// # Errors
    /// Returns `LexiconError::EmptyLexicon` if there is nothing to draw from;
    /// no session is created in that case.
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameSession, LexiconError> {
        let opening = self.lexicon.sample_starting_word(rng)?;
        info!(opening, "game started");
        Ok(GameSession::new(opening))
    }

    /// Check a candidate against the session without changing it
    ///
    /// Returns the normalized word and the rule it satisfies.
    ///
    /// # Errors
    /// Returns the first `MoveRejection` that applies, checked in order:
    /// empty input, unknown word, repeated word, prefix mismatch.
    pub fn validate(
        &self,
        session: &GameSession,
        candidate: &str,
    ) -> Result<(String, MoveTier), MoveRejection> {
        let word = normalize(candidate);
        if word.is_empty() {
            return Err(MoveRejection::EmptyInput);
        }

        if !self.lexicon.is_valid_word(&word) {
            return Err(MoveRejection::NotInDictionary { word });
        }

        if session.is_used(&word) {
            return Err(MoveRejection::AlreadyUsed { word });
        }

        let required_prefix = last_two_letters(session.last_word());
        match MoveTier::classify(&word, &required_prefix) {
            Some(tier) => Ok((word, tier)),
            None => Err(MoveRejection::PrefixMismatch {
                word,
                required_prefix,
            }),
        }
    }

    /// Validate, score and apply a move
    ///
    /// On success the word is appended to the session and its final score
    /// added to the total. A rejected move leaves the session untouched.
    ///
    /// # Errors
    /// Returns a `MoveRejection` describing why the word cannot be played.
    pub fn attempt_move(
        &self,
        session: &mut GameSession,
        candidate: &str,
    ) -> Result<AcceptedMove, MoveRejection> {
        let (word, tier) = self.validate(session, candidate).inspect_err(|rejection| {
            debug!(candidate, %rejection, "move rejected");
        })?;

        let base_score = self.scorer.score(&word, self.lexicon);
        let multiplier = tier.multiplier();
        let final_score = round2(base_score * multiplier);

        session.push(word.clone(), final_score);
        debug!(
            word = %word,
            %tier,
            base_score,
            final_score,
            total = session.total_score(),
            "move accepted"
        );

        Ok(AcceptedMove {
            word,
            tier,
            base_score,
            multiplier,
            final_score,
            total_score: session.total_score(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashMap;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn fallback_session(opening: &str) -> (Lexicon, GameSession) {
        (Lexicon::fallback(), GameSession::new(opening))
    }

    #[test]
    fn start_opens_session_with_lexicon_word() {
        let lexicon = Lexicon::fallback();
        let engine = GameEngine::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(42);

        let session = engine.start(&mut rng).unwrap();
        assert_eq!(session.used_words().len(), 1);
        assert_eq!(session.used_words()[0], session.last_word());
        assert!(lexicon.is_valid_word(session.last_word()));
        assert_close(session.total_score(), 0.0);
    }

    #[test]
    fn start_is_deterministic_for_a_seed() {
        let lexicon = Lexicon::fallback();
        let engine = GameEngine::new(&lexicon);
        let a = engine.start(&mut StdRng::seed_from_u64(9)).unwrap();
        let b = engine.start(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn start_with_empty_lexicon_fails() {
        let lexicon = Lexicon::from_words(Vec::<&str>::new());
        let engine = GameEngine::new(&lexicon);
        let result = engine.start(&mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(LexiconError::EmptyLexicon)));
    }

    #[test]
    fn transposed_move_scores_half() {
        let lexicon = Lexicon::from_words(["кот", "торт"]);
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("кот");

        let result = engine.attempt_move(&mut session, "торт").unwrap();
        assert_eq!(result.word, "торт");
        assert_eq!(result.tier, MoveTier::Transposed);
        assert_close(result.base_score, 3000.0);
        assert_close(result.multiplier, 0.5);
        assert_close(result.final_score, 1500.0);
        assert_close(result.total_score, 1500.0);
        assert_eq!(session.last_word(), "торт");
        assert_eq!(session.used_words(), ["кот", "торт"]);
    }

    #[test]
    fn last_letter_move_scores_quarter() {
        let (lexicon, mut session) = fallback_session("стол");
        let engine = GameEngine::new(&lexicon);

        let result = engine.attempt_move(&mut session, "лес").unwrap();
        assert_eq!(result.tier, MoveTier::LastLetter);
        assert_close(result.multiplier, 0.25);
        assert_close(result.base_score, 2000.0);
        assert_close(result.final_score, 500.0);
    }

    #[test]
    fn normal_move_scores_full() {
        let lexicon = Lexicon::from_words(["сок", "ока"]);
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("сок");

        let result = engine.attempt_move(&mut session, "ока").unwrap();
        assert_eq!(result.tier, MoveTier::Normal);
        assert_close(result.final_score, result.base_score);
    }

    #[test]
    fn normal_beats_last_letter() {
        let lexicon = Lexicon::from_words(["атт", "ттак"]);
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("атт");

        let result = engine.attempt_move(&mut session, "ттак").unwrap();
        assert_eq!(result.tier, MoveTier::Normal);
        assert_close(result.multiplier, 1.0);
    }

    #[test]
    fn input_is_normalized() {
        let (lexicon, mut session) = fallback_session("стол");
        let engine = GameEngine::new(&lexicon);

        let result = engine.attempt_move(&mut session, "  ЛЕС\n").unwrap();
        assert_eq!(result.word, "лес");
    }

    #[test]
    fn empty_input_rejected() {
        let (lexicon, mut session) = fallback_session("кот");
        let engine = GameEngine::new(&lexicon);
        assert_eq!(
            engine.attempt_move(&mut session, "   "),
            Err(MoveRejection::EmptyInput)
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let (lexicon, mut session) = fallback_session("кот");
        let engine = GameEngine::new(&lexicon);
        assert_eq!(
            engine.attempt_move(&mut session, "тостер"),
            Err(MoveRejection::NotInDictionary {
                word: "тостер".to_string()
            })
        );
    }

    #[test]
    fn replaying_last_word_is_already_used() {
        let (lexicon, mut session) = fallback_session("кот");
        let engine = GameEngine::new(&lexicon);
        assert_eq!(
            engine.attempt_move(&mut session, "кот"),
            Err(MoveRejection::AlreadyUsed {
                word: "кот".to_string()
            })
        );
    }

    #[test]
    fn repeat_of_earlier_word_is_already_used() {
        let (lexicon, mut session) = fallback_session("сон");
        let engine = GameEngine::new(&lexicon);
        engine.attempt_move(&mut session, "нос").unwrap();
        engine.attempt_move(&mut session, "сон").unwrap_err();
        assert!(matches!(
            engine.attempt_move(&mut session, "сон"),
            Err(MoveRejection::AlreadyUsed { .. })
        ));
    }

    #[test]
    fn prefix_mismatch_carries_required_prefix() {
        let (lexicon, mut session) = fallback_session("стол");
        let engine = GameEngine::new(&lexicon);
        assert_eq!(
            engine.attempt_move(&mut session, "дом"),
            Err(MoveRejection::PrefixMismatch {
                word: "дом".to_string(),
                required_prefix: "ол".to_string(),
            })
        );
    }

    #[test]
    fn rejection_is_idempotent_and_leaves_session_unchanged() {
        let (lexicon, mut session) = fallback_session("стол");
        let engine = GameEngine::new(&lexicon);
        let before = session.clone();

        let first = engine.attempt_move(&mut session, "дом");
        let second = engine.attempt_move(&mut session, "дом");
        assert!(first.is_err());
        assert_eq!(first, second);
        assert_eq!(session, before);
    }

    #[test]
    fn validate_does_not_mutate() {
        let (lexicon, session) = fallback_session("стол");
        let engine = GameEngine::new(&lexicon);
        let (word, tier) = engine.validate(&session, "Лес").unwrap();
        assert_eq!(word, "лес");
        assert_eq!(tier, MoveTier::LastLetter);
        assert_eq!(session.used_words(), ["стол"]);
    }

    #[test]
    fn total_is_monotonic_and_words_unique() {
        // every step here is a transposed move
        let (lexicon, mut session) = fallback_session("сон");
        let engine = GameEngine::new(&lexicon);

        let mut previous = session.total_score();
        for word in ["нос", "сок", "код", "дом"] {
            let result = engine.attempt_move(&mut session, word).unwrap();
            assert!(result.total_score >= previous);
            assert_close(result.total_score, session.total_score());
            previous = result.total_score;
        }

        let unique: std::collections::HashSet<&String> = session.used_words().iter().collect();
        assert_eq!(unique.len(), session.used_words().len());
        assert_eq!(session.moves_played(), 4);
    }

    #[test]
    fn final_score_is_rounded() {
        let freq: FxHashMap<String, f64> = [("ле", 3.0), ("ес", 7.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let lexicon = Lexicon::new(["стол", "лес"], freq).unwrap();
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("стол");

        let result = engine.attempt_move(&mut session, "лес").unwrap();
        assert_close(result.final_score, round2(result.final_score));
        assert_close(result.base_score, round2(result.base_score));
    }

    fn lexicon_with(words: &[&str], entries: &[(&str, f64)]) -> Lexicon {
        let freq: FxHashMap<String, f64> =
            entries.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        Lexicon::new(words, freq).unwrap()
    }

    #[test]
    fn quartered_tie_rounds_to_even() {
        // 1 / (1.999 + 0.001) = 0.5, and 0.5 * 0.25 = 0.125
        let lexicon = lexicon_with(&["стол", "ля"], &[("ля", 1.999)]);
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("стол");

        let result = engine.attempt_move(&mut session, "ля").unwrap();
        assert_eq!(result.tier, MoveTier::LastLetter);
        assert_close(result.base_score, 0.5);
        assert_close(result.final_score, 0.12);
        assert_close(session.total_score(), 0.12);
    }

    #[test]
    fn quartered_tie_rounds_up_to_even() {
        // 0.5 + 1.0 = 1.5, and 1.5 * 0.25 = 0.375
        let lexicon = lexicon_with(&["стол", "лям"], &[("ля", 1.999), ("ям", 0.999)]);
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("стол");

        let result = engine.attempt_move(&mut session, "лям").unwrap();
        assert_close(result.base_score, 1.5);
        assert_close(result.final_score, 0.38);
    }

    #[test]
    fn halved_score_below_tie_rounds_down() {
        // base 0.03, halved to 0.015 which is stored just below the tie
        let lexicon = lexicon_with(&["стол", "ло"], &[("ло", 33.0)]);
        let engine = GameEngine::new(&lexicon);
        let mut session = GameSession::new("стол");

        let result = engine.attempt_move(&mut session, "ло").unwrap();
        assert_eq!(result.tier, MoveTier::Transposed);
        assert_close(result.base_score, 0.03);
        assert_close(result.final_score, 0.01);
    }

    #[test]
    fn custom_scorer_is_used() {
        struct Flat;
        impl Scorer for Flat {
            fn score(&self, _word: &str, _lexicon: &Lexicon) -> f64 {
                10.0
            }
        }

        let lexicon = Lexicon::from_words(["кот", "торт"]);
        let engine = GameEngine::with_scorer(&lexicon, Flat);
        let mut session = GameSession::new("кот");
        let result = engine.attempt_move(&mut session, "торт").unwrap();
        assert_close(result.final_score, 5.0);
    }
}
