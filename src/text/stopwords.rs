// Stop-word sets for the normalizer.
//
// The default is the NLTK English list, compiled into the binary so a given
// pair of texts scores the same on every machine. The larger ISO list from the
// `stop-words` crate and plain word-list files are available as alternatives.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// NLTK's English stop-word corpus (179 entries).
///
/// Entries with apostrophes never match a normalized token, since the
/// tokenizer splits on apostrophes, but are kept so the table stays a faithful
/// copy of the corpus.
const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// An immutable set of lowercase stop words.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The bundled NLTK English list.
    pub fn nltk_english() -> Self {
        Self::from_words(NLTK_ENGLISH.iter().copied())
    }

    /// The ISO English list shipped with the `stop-words` crate.
    pub fn iso_english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    /// Build a set from arbitrary words. Entries are trimmed and lowercased;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a word-list file body: one word per line, `#` starts a comment.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(
            contents
                .lines()
                .map(|line| line.split('#').next().unwrap_or_default()),
        )
    }

    /// Load a word-list file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop-word file {}", path.display()))?;
        let stop_words = Self::parse(&contents);
        info!(
            path = %path.display(),
            words = stop_words.len(),
            "Loaded stop words from file"
        );
        Ok(stop_words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nltk_list_size() {
        assert_eq!(StopWords::nltk_english().len(), 179);
    }

    #[test]
    fn test_nltk_contains_common_words() {
        let sw = StopWords::nltk_english();
        for word in ["the", "is", "and", "over", "a", "don", "t"] {
            assert!(sw.contains(word), "{word} should be a stop word");
        }
        for word in ["quick", "fox", "dog", "cat"] {
            assert!(!sw.contains(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn test_iso_list_is_not_empty() {
        let sw = StopWords::iso_english();
        assert!(!sw.is_empty());
        assert!(sw.contains("the"));
    }

    #[test]
    fn test_from_words_normalizes_case_and_blanks() {
        let sw = StopWords::from_words(["  The ", "", "AND"]);
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
    }

    #[test]
    fn test_parse_skips_comments() {
        let sw = StopWords::parse("# custom list\nfoo\n\nbar # trailing\n");
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("foo"));
        assert!(sw.contains("bar"));
    }
}
