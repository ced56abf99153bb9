use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::pipeline::checker::PlagiarismChecker;
use crate::similarity::tfidf::{TfIdfVectorizer, VectorizerConfig};
use crate::text::lemma::{LemmaTable, NounLemmatizer};
use crate::text::normalize::Normalizer;
use crate::text::stopwords::StopWords;

/// Which bundled stop-word list to use.
#[derive(Debug, Clone, PartialEq)]
pub enum StopWordList {
    /// NLTK English (default): the list the reference scores were produced with
    Nltk,
    /// ISO English from the `stop-words` crate: much larger
    Iso,
}

impl StopWordList {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nltk" => Ok(Self::Nltk),
            "iso" => Ok(Self::Iso),
            other => anyhow::bail!(
                "Unknown stop-word list {other:?} in PLAGCHECK_STOP_WORDS (expected \"nltk\" or \"iso\")"
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nltk => "nltk",
            Self::Iso => "iso",
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so an empty environment gives the bundled
/// English resources and the reference TF-IDF weighting. The .env file is
/// loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub stop_word_list: StopWordList,
    /// Replaces the bundled stop-word list entirely when set
    pub stop_words_file: Option<PathBuf>,
    /// Extra lemma entries merged over the bundled table
    pub lemma_file: Option<PathBuf>,
    pub vectorizer: VectorizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_word_list: StopWordList::Nltk,
            stop_words_file: None,
            lemma_file: None,
            vectorizer: VectorizerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = VectorizerConfig::default();

        let stop_word_list = match lookup("PLAGCHECK_STOP_WORDS") {
            Some(value) => StopWordList::parse(&value)?,
            None => StopWordList::Nltk,
        };

        let min_token_chars = match lookup("PLAGCHECK_MIN_TOKEN_CHARS") {
            Some(value) => value.trim().parse::<usize>().with_context(|| {
                format!("PLAGCHECK_MIN_TOKEN_CHARS must be a non-negative integer, got {value:?}")
            })?,
            None => defaults.min_token_chars,
        };

        Ok(Self {
            stop_word_list,
            stop_words_file: lookup("PLAGCHECK_STOP_WORDS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            lemma_file: lookup("PLAGCHECK_LEMMA_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            vectorizer: VectorizerConfig {
                min_token_chars,
                smooth_idf: parse_flag(&lookup, "PLAGCHECK_SMOOTH_IDF", defaults.smooth_idf)?,
                sublinear_tf: parse_flag(&lookup, "PLAGCHECK_SUBLINEAR_TF", defaults.sublinear_tf)?,
            },
        })
    }

    /// Resolve the stop-word set: a file wins over the named bundled list.
    pub fn stop_words(&self) -> Result<StopWords> {
        match &self.stop_words_file {
            Some(path) => StopWords::load(path),
            None => Ok(match self.stop_word_list {
                StopWordList::Nltk => StopWords::nltk_english(),
                StopWordList::Iso => StopWords::iso_english(),
            }),
        }
    }

    /// Resolve the lemma table: bundled English plus any file entries.
    pub fn lemma_table(&self) -> Result<LemmaTable> {
        let mut table = LemmaTable::english();
        if let Some(path) = &self.lemma_file {
            table.extend(LemmaTable::load(path)?);
        }
        Ok(table)
    }

    /// Load all resources and wire up a checker.
    pub fn build_checker(&self) -> Result<PlagiarismChecker> {
        let normalizer = Normalizer::new(
            self.stop_words()?,
            Box::new(NounLemmatizer::new(self.lemma_table()?)),
        );
        Ok(PlagiarismChecker::new(
            normalizer,
            TfIdfVectorizer::new(self.vectorizer.clone()),
        ))
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{key} must be true or false, got {value:?}"),
    }
}
