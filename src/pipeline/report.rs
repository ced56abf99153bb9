// Comparison report: the score plus what produced it.

use serde::Serialize;

/// Outcome of comparing a text against a reference text.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Cosine similarity in [0.0, 1.0]
    pub score: f64,
    /// Surviving tokens in the first text after normalization
    pub text_tokens: usize,
    /// Surviving tokens in the reference text after normalization
    pub reference_tokens: usize,
    /// Vocabulary terms weighted in the first text's vector
    pub text_terms: usize,
    /// Vocabulary terms weighted in the reference text's vector
    pub reference_terms: usize,
    /// Distinct terms across both texts
    pub vocabulary_size: usize,
    /// Terms present in both texts, largest contribution first.
    /// Contributions sum to `score` (up to rounding and clamping).
    pub shared_terms: Vec<SharedTerm>,
}

/// One shared term and its share of the similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedTerm {
    pub term: String,
    pub contribution: f64,
}

impl Comparison {
    /// Score as a percentage (0.0 to 100.0).
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }

    /// Whether either side has no indexed terms, so the score is 0.0
    /// regardless of the other side.
    pub fn has_empty_side(&self) -> bool {
        self.text_terms == 0 || self.reference_terms == 0
    }
}
