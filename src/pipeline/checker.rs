// Plagiarism checker: the single entry point that composes the pipeline.
//
// Each call builds its own vocabulary and vectors from scratch. The checker
// itself holds only read-only resources, so one instance can serve any number
// of threads without locking.

use std::sync::LazyLock;

use tracing::debug;

use crate::error::{InputSide, SimilarityError};
use crate::similarity::cosine::{contributions, cosine_similarity};
use crate::similarity::tfidf::TfIdfVectorizer;
use crate::text::normalize::Normalizer;

use super::report::{Comparison, SharedTerm};

/// Process-wide checker over the bundled English resources.
static DEFAULT_CHECKER: LazyLock<PlagiarismChecker> = LazyLock::new(PlagiarismChecker::default);

/// Compare two texts with the bundled English resources.
///
/// Returns the raw similarity in [0.0, 1.0]. Formatting (e.g. as a
/// percentage) is up to the caller.
pub fn compare(text1: &str, text2: &str) -> Result<f64, SimilarityError> {
    DEFAULT_CHECKER.compare(text1, text2)
}

/// Normalizer and vectorizer wired together for two-document comparison.
#[derive(Default)]
pub struct PlagiarismChecker {
    normalizer: Normalizer,
    vectorizer: TfIdfVectorizer,
}

impl PlagiarismChecker {
    pub fn new(normalizer: Normalizer, vectorizer: TfIdfVectorizer) -> Self {
        Self {
            normalizer,
            vectorizer,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Similarity of `text1` to `text2` in [0.0, 1.0].
    ///
    /// Fails with `EmptyInput` if either text is blank. Texts that simply
    /// have no surviving tokens score 0.0.
    pub fn compare(&self, text1: &str, text2: &str) -> Result<f64, SimilarityError> {
        Ok(self.analyze(text1, text2)?.score)
    }

    /// Like [`compare`](Self::compare), but also reports token counts and
    /// the shared terms behind the score.
    pub fn analyze(&self, text1: &str, text2: &str) -> Result<Comparison, SimilarityError> {
        if let Some(side) = InputSide::from_flags(text1.trim().is_empty(), text2.trim().is_empty())
        {
            return Err(SimilarityError::EmptyInput { side });
        }

        let sequences = [
            self.normalizer.normalize(text1),
            self.normalizer.normalize(text2),
        ];
        let fitted = self.vectorizer.fit(&sequences)?;
        let [a, b] = fitted.vectors() else {
            return Err(SimilarityError::InvalidInput {
                documents: fitted.vectors().len(),
            });
        };

        let score = cosine_similarity(a, b)?;

        let denom = a.norm() * b.norm();
        let mut shared_terms: Vec<SharedTerm> = if denom > 0.0 {
            contributions(a, b)
                .into_iter()
                .enumerate()
                .filter(|&(_, c)| c > 0.0)
                .filter_map(|(i, c)| {
                    fitted.vocabulary().term(i).map(|term| SharedTerm {
                        term: term.to_string(),
                        contribution: c / denom,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };
        shared_terms.sort_by(|x, y| {
            y.contribution
                .total_cmp(&x.contribution)
                .then_with(|| x.term.cmp(&y.term))
        });

        debug!(
            text_tokens = sequences[0].len(),
            reference_tokens = sequences[1].len(),
            vocabulary = fitted.vocabulary().len(),
            score,
            "Compared texts"
        );

        Ok(Comparison {
            score,
            text_tokens: sequences[0].len(),
            reference_tokens: sequences[1].len(),
            text_terms: indexed_terms(a.weights()),
            reference_terms: indexed_terms(b.weights()),
            vocabulary_size: fitted.vocabulary().len(),
            shared_terms,
        })
    }
}

fn indexed_terms(weights: &[f64]) -> usize {
    weights.iter().filter(|&&w| w != 0.0).count()
}
