// Linguistic filter: tokenize, drop stop words and non-alphanumeric tokens,
// lemmatize what remains.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use super::lemmatizer::{Lemmatizer, NounLemmatizer};
use super::normalize::clean_text;

/// Treebank-style splits for fused forms that survive punctuation removal.
const CONTRACTIONS: [(&str, [&str; 2]); 6] = [
    ("cannot", ["can", "not"]),
    ("gonna", ["gon", "na"]),
    ("gotta", ["got", "ta"]),
    ("wanna", ["wan", "na"]),
    ("gimme", ["gim", "me"]),
    ("lemme", ["lem", "me"]),
];

/// Split text into word tokens using Unicode word boundaries.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.unicode_words() {
        match CONTRACTIONS.iter().find(|(fused, _)| *fused == word) {
            Some((_, parts)) => tokens.extend(parts.iter().map(|p| p.to_string())),
            None => tokens.push(word.to_string()),
        }
    }
    tokens
}

/// True when the token is non-empty and every character is a letter or digit.
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Stop-word removal plus lemmatization, with the stop-word set loaded once.
pub struct LinguisticFilter {
    stop_words: HashSet<String>,
    lemmatizer: Box<dyn Lemmatizer + Send + Sync>,
}

impl Default for LinguisticFilter {
    fn default() -> Self {
        Self::new(Box::new(NounLemmatizer))
    }
}

impl LinguisticFilter {
    /// Build a filter with the English stop-word list from the stop-words crate.
    pub fn new(lemmatizer: Box<dyn Lemmatizer + Send + Sync>) -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self::with_stop_words(stop_words, lemmatizer)
    }

    pub fn with_stop_words<I, S>(
        stop_words: I,
        lemmatizer: Box<dyn Lemmatizer + Send + Sync>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            lemmatizer,
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Filter and lemmatize the tokens of already-cleaned text, returning the
    /// surviving lemmas joined by single spaces.
    ///
    /// Lemmas are checked against the stop-word set again: a content word can
    /// reduce to a stop word ("doings" -> "doing"), and those never reach the
    /// vectorizer.
    pub fn process(&self, cleaned: &str) -> String {
        tokenize(cleaned)
            .into_iter()
            .filter(|t| !self.is_stop_word(t) && is_alphanumeric(t))
            .map(|t| self.lemmatizer.lemmatize(&t))
            .filter(|lemma| !self.is_stop_word(lemma) && is_alphanumeric(lemma))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full text preparation for raw input: clean, then filter.
    /// Returns `(cleaned_text, processed_text)`.
    pub fn prepare(&self, raw: &str) -> (String, String) {
        let cleaned = clean_text(raw);
        let processed = self.process(&cleaned);
        (cleaned, processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_contractions() {
        assert_eq!(tokenize("you cannot win"), vec!["you", "can", "not", "win"]);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("film2"));
        assert!(!is_alphanumeric("snake_case"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn test_process_with_custom_stop_words() {
        let filter = LinguisticFilter::with_stop_words(
            ["the", "was", "doing"],
            Box::new(NounLemmatizer),
        );
        assert_eq!(filter.process("the movies was great"), "movie great");
        // "doings" lemmatizes to the stop word "doing" and is dropped
        assert_eq!(filter.process("strange doings"), "strange");
    }

    #[test]
    fn test_default_filter_drops_common_stop_words() {
        let filter = LinguisticFilter::default();
        let processed = filter.process("this is the best film of the year");
        for word in processed.split(' ') {
            assert!(!filter.is_stop_word(word), "stop word leaked: {word}");
        }
        assert!(!processed.split(' ').any(|w| w == "the" || w == "is"));
    }

    #[test]
    fn test_default_filter_keeps_sentiment_words() {
        let filter = LinguisticFilter::default();
        assert_eq!(
            filter.process("good great best better well film"),
            "good great best better well film"
        );
        assert_eq!(filter.process("unfortunately interesting"), "unfortunately interesting");
    }
}
