// Normalizer: turns raw text into a canonical token sequence.
//
// Pipeline per word: Unicode word segmentation, split on any in-word
// punctuation, lowercase, drop anything not purely alphabetic, drop stop
// words, lemmatize. Order and duplicates survive because term frequency
// depends on them.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::lemma::NounLemmatizer;
use super::stopwords::StopWords;
use super::traits::Lemmatizer;

/// Ordered, normalized tokens of one document.
///
/// Every token is lowercase, alphabetic-only, not a stop word, and in lemma
/// form. Displays as the space-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Split an already-normalized, whitespace-separated string.
    pub fn from_joined(joined: &str) -> Self {
        Self(joined.split_whitespace().map(str::to_string).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Text normalizer with injected linguistic resources.
///
/// Holds only immutable data once built, so one instance can be shared by
/// reference across threads.
pub struct Normalizer {
    stop_words: StopWords,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Normalizer {
    pub fn new(stop_words: StopWords, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Normalize raw text. Empty or token-free input gives an empty sequence.
    pub fn normalize(&self, raw: &str) -> TokenSequence {
        let tokens = raw
            .unicode_words()
            .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
            .filter(|piece| !piece.is_empty())
            .map(str::to_lowercase)
            .filter(|token| token.chars().all(char::is_alphabetic))
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect();
        TokenSequence(tokens)
    }
}

impl Default for Normalizer {
    /// NLTK English stop words with the bundled noun lemmatizer.
    fn default() -> Self {
        Self::new(StopWords::nltk_english(), Box::new(NounLemmatizer::default()))
    }
}
