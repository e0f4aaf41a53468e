//! Word helpers
//!
//! Normalization, letter-pair decomposition and chain-prefix extraction.

/// Normalize raw player input: trim surrounding whitespace and lowercase.
///
/// # Examples
/// ```
/// use word_chain::core::normalize;
///
/// assert_eq!(normalize("  КОТ \n"), "кот");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a word into its overlapping two-character pairs
///
/// A word of `L` characters yields `L - 1` pairs; words shorter than two
/// characters yield none.
///
/// # Examples
/// ```
/// use word_chain::core::bigrams;
///
/// assert_eq!(bigrams("кот"), vec!["ко", "от"]);
/// assert!(bigrams("я").is_empty());
/// ```
#[must_use]
pub fn bigrams(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.windows(2).map(|pair| pair.iter().collect()).collect()
}

/// The letters a following word must build on
///
/// Last two characters when the word has at least two, the single character
/// for a one-letter word, and an empty string for an empty word.
#[must_use]
pub fn last_two_letters(word: &str) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(2)).collect()
}

/// Reverse a string character by character
#[inline]
#[must_use]
pub fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}
