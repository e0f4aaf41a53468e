//! Letter-pair rarity scoring
//!
//! A word earns `1 / (frequency + epsilon)` for every overlapping letter pair,
//! so rare pairs dominate the total. Scores are rounded to two decimals.

use crate::core::bigrams;
use crate::lexicon::Lexicon;

/// Added to every frequency so unseen pairs score high but finite
pub const EPSILON: f64 = 0.001;

/// Something that can score a word against a lexicon
pub trait Scorer {
    /// Score `word`; must be deterministic and non-negative
    fn score(&self, word: &str, lexicon: &Lexicon) -> f64;
}

/// Contribution of one letter pair to a word's score
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub pair: String,
    pub frequency: f64,
    pub contribution: f64,
}

/// The standard rarity scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityScorer {
    epsilon: f64,
}

impl Default for RarityScorer {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl RarityScorer {
    /// Scorer with a custom epsilon
    ///
    /// Returns `None` unless `epsilon` is finite and positive; anything else
    /// would let an unseen pair score infinity.
    #[must_use]
    pub fn with_epsilon(epsilon: f64) -> Option<Self> {
        (epsilon.is_finite() && epsilon > 0.0).then_some(Self { epsilon })
    }

    /// Per-pair contributions, in word order, before rounding
    #[must_use]
    pub fn breakdown(&self, word: &str, lexicon: &Lexicon) -> Vec<PairScore> {
        bigrams(word)
            .into_iter()
            .map(|pair| {
                let frequency = lexicon.pair_frequency(&pair);
                PairScore {
                    contribution: 1.0 / (frequency + self.epsilon),
                    pair,
                    frequency,
                }
            })
            .collect()
    }
}

impl Scorer for RarityScorer {
    fn score(&self, word: &str, lexicon: &Lexicon) -> f64 {
        let total: f64 = self
            .breakdown(word, lexicon)
            .iter()
            .map(|p| p.contribution)
            .sum();
        round2(total)
    }
}

/// Score a word with the default rarity scorer
///
/// # Examples
/// ```
/// use word_chain::lexicon::Lexicon;
/// use word_chain::scoring::score_word;
///
/// let lexicon = Lexicon::from_words(["торт"]);
/// assert_eq!(score_word("торт", &lexicon), 3000.0);
/// assert_eq!(score_word("я", &lexicon), 0.0);
/// ```
#[must_use]
pub fn score_word(word: &str, lexicon: &Lexicon) -> f64 {
    RarityScorer::default().score(word, lexicon)
}

/// Round to two decimal places
///
/// Rounds the exact binary value of `value`, not `value * 100.0`, and
/// breaks exact ties to the even hundredth: `0.125` becomes `0.12`, while
/// `0.015` (stored just below the tie) becomes `0.01`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    // Already an integer
    if exponent >= 0 {
        return value;
    }

    let shift = exponent.unsigned_abs();
    // mantissa * 100 < 2^60, so anything shifted by 64 or more is below 1/16
    let hundredths = if shift >= 64 {
        0
    } else {
        let scaled = u128::from(mantissa) * 100;
        let whole = scaled >> shift;
        let remainder = scaled - (whole << shift);
        let half = 1_u128 << (shift - 1);
        if remainder > half || (remainder == half && whole & 1 == 1) {
            whole + 1
        } else {
            whole
        }
    };

    (hundredths as f64 / 100.0).copysign(value)
}
