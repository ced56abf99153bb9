// TF-IDF vectorization over a small, jointly fitted document set.
//
// The vocabulary is built fresh from exactly the documents passed in and is
// discarded with them. Terms are indexed in lexicographic order so two fits
// over the same input always produce the same columns.
//
// Weighting follows the classic smoothed scheme:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//   w(t,d) = tf(t,d) * idf(t), then each document vector is L2-normalized
//
// A term present in every document still weighs 1.0, and every IDF is
// finite and positive.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::SimilarityError;
use crate::text::normalize::TokenSequence;

/// Knobs for the vectorizer. Defaults reproduce the reference weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizerConfig {
    /// Tokens with fewer characters than this never enter the vocabulary.
    pub min_token_chars: usize,
    /// Add one to document counts when computing IDF.
    pub smooth_idf: bool,
    /// Replace raw term frequency with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 2,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Term → column index mapping shared by every vector of one fit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<String>) -> Self {
        let terms: Vec<String> = terms.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Dense weight vector indexed by vocabulary position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    weights: Vec<f64>,
}

impl FeatureVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    pub fn zeros(dim: usize) -> Self {
        Self {
            weights: vec![0.0; dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn get(&self, index: usize) -> f64 {
        self.weights.get(index).copied().unwrap_or(0.0)
    }

    /// Euclidean length, computed on weights rescaled by their largest
    /// magnitude so squaring neither overflows nor underflows.
    pub fn norm(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        scale * self.scaled_norm(scale)
    }

    /// Largest absolute weight, 0.0 for an empty vector.
    pub fn max_abs(&self) -> f64 {
        self.weights.iter().fold(0.0, |m, w| m.max(w.abs()))
    }

    /// Length of the vector divided by `scale`.
    pub(crate) fn scaled_norm(&self, scale: f64) -> f64 {
        self.weights
            .iter()
            .map(|w| {
                let x = w / scale;
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// Scale to unit length in place. A zero vector stays zero.
    fn normalize_l2(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for w in &mut self.weights {
                *w /= norm;
            }
        }
    }
}

/// Result of fitting the vectorizer: vocabulary, IDF per column, and one
/// normalized vector per input document (same order as the input).
#[derive(Debug, Clone)]
pub struct FittedTfIdf {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    vectors: Vec<FeatureVector>,
}

impl FittedTfIdf {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    pub fn into_vectors(self) -> Vec<FeatureVector> {
        self.vectors
    }
}

/// Joint TF-IDF vectorizer.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
}

impl TfIdfVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Fit a vocabulary over `sequences` and weight each one against it.
    ///
    /// Fails only when `sequences` is empty. Empty sequences are fine and
    /// come back as zero vectors.
    pub fn fit(&self, sequences: &[TokenSequence]) -> Result<FittedTfIdf, SimilarityError> {
        if sequences.is_empty() {
            return Err(SimilarityError::InvalidInput { documents: 0 });
        }

        // Per-document term counts, skipping tokens too short to index
        let counts: Vec<BTreeMap<&str, usize>> = sequences
            .iter()
            .map(|seq| {
                let mut tf: BTreeMap<&str, usize> = BTreeMap::new();
                for token in seq.iter() {
                    if token.chars().count() >= self.config.min_token_chars {
                        *tf.entry(token).or_insert(0) += 1;
                    }
                }
                tf
            })
            .collect();

        let terms: BTreeSet<String> = counts
            .iter()
            .flat_map(|tf| tf.keys().map(|t| t.to_string()))
            .collect();
        let vocabulary = Vocabulary::from_terms(terms);

        // Document frequency per column
        let mut df = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for term in tf.keys() {
                if let Some(i) = vocabulary.index_of(term) {
                    df[i] += 1;
                }
            }
        }

        let n = sequences.len();
        let idf: Vec<f64> = df.iter().map(|&d| self.idf(n, d)).collect();

        let vectors = counts
            .iter()
            .map(|tf| {
                let mut vector = FeatureVector::zeros(vocabulary.len());
                for (term, &count) in tf {
                    if let Some(i) = vocabulary.index_of(term) {
                        vector.weights[i] = self.term_weight(count) * idf[i];
                    }
                }
                vector.normalize_l2();
                vector
            })
            .collect();

        debug!(
            documents = n,
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vectors"
        );

        Ok(FittedTfIdf {
            vocabulary,
            idf,
            vectors,
        })
    }

    /// Fit and return only the vectors.
    pub fn vectorize(
        &self,
        sequences: &[TokenSequence],
    ) -> Result<Vec<FeatureVector>, SimilarityError> {
        Ok(self.fit(sequences)?.into_vectors())
    }

    fn term_weight(&self, count: usize) -> f64 {
        let tf = count as f64;
        if self.config.sublinear_tf {
            1.0 + tf.ln()
        } else {
            tf
        }
    }

    /// `df` is always at least 1 for a term that made it into the vocabulary.
    fn idf(&self, documents: usize, df: usize) -> f64 {
        let (n, df) = (documents as f64, df as f64);
        if self.config.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df.max(1.0)).ln() + 1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> TokenSequence {
        TokenSequence::from_joined(s)
    }

    #[test]
    fn test_no_documents_is_invalid() {
        let err = TfIdfVectorizer::default().fit(&[]).unwrap_err();
        assert_eq!(err, SimilarityError::InvalidInput { documents: 0 });
    }

    #[test]
    fn test_single_document_is_legal() {
        let fitted = TfIdfVectorizer::default().fit(&[seq("cat sat mat")]).unwrap();
        assert_eq!(fitted.vocabulary().len(), 3);
        assert_eq!(fitted.vectors().len(), 1);
        assert!((fitted.vectors()[0].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shared_vocabulary_dimensions() {
        let fitted = TfIdfVectorizer::default()
            .fit(&[seq("cat sat"), seq("dog ran far")])
            .unwrap();
        assert_eq!(fitted.vocabulary().len(), 5);
        for v in fitted.vectors() {
            assert_eq!(v.dim(), 5);
        }
    }

    #[test]
    fn test_idf_shared_term_weighs_less() {
        let fitted = TfIdfVectorizer::default()
            .fit(&[seq("cat dog"), seq("cat bird")])
            .unwrap();
        let vocab = fitted.vocabulary();
        let shared = fitted.idf()[vocab.index_of("cat").unwrap()];
        let unique = fitted.idf()[vocab.index_of("dog").unwrap()];
        assert!((shared - 1.0).abs() < 1e-12);
        assert!((unique - (1.5f64.ln() + 1.0)).abs() < 1e-12);
        assert!(unique > shared);
    }

    #[test]
    fn test_unsmoothed_idf() {
        let vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            smooth_idf: false,
            ..Default::default()
        });
        let fitted = vectorizer.fit(&[seq("cat dog"), seq("cat bird")]).unwrap();
        let vocab = fitted.vocabulary();
        assert!((fitted.idf()[vocab.index_of("cat").unwrap()] - 1.0).abs() < 1e-12);
        assert!(
            (fitted.idf()[vocab.index_of("dog").unwrap()] - (2.0f64.ln() + 1.0)).abs() < 1e-12
        );
    }

    #[test]
    fn test_term_frequency_counts_duplicates() {
        let fitted = TfIdfVectorizer::default().fit(&[seq("cat cat dog")]).unwrap();
        let v = &fitted.vectors()[0];
        let vocab = fitted.vocabulary();
        let cat = v.get(vocab.index_of("cat").unwrap());
        let dog = v.get(vocab.index_of("dog").unwrap());
        assert!((cat / dog - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sublinear_tf() {
        let vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            sublinear_tf: true,
            ..Default::default()
        });
        let fitted = vectorizer.fit(&[seq("cat cat dog")]).unwrap();
        let v = &fitted.vectors()[0];
        let vocab = fitted.vocabulary();
        let ratio = v.get(vocab.index_of("cat").unwrap()) / v.get(vocab.index_of("dog").unwrap());
        assert!((ratio - (1.0 + 2.0f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sequence_gives_zero_vector() {
        let vectors = TfIdfVectorizer::default()
            .vectorize(&[seq(""), seq("cat sat")])
            .unwrap();
        assert!(vectors[0].is_zero());
        assert_eq!(vectors[0].dim(), 2);
        assert!(!vectors[1].is_zero());
    }

    #[test]
    fn test_all_empty_gives_empty_vocabulary() {
        let fitted = TfIdfVectorizer::default().fit(&[seq(""), seq("")]).unwrap();
        assert!(fitted.vocabulary().is_empty());
        assert!(fitted.vectors().iter().all(|v| v.dim() == 0));
    }

    #[test]
    fn test_short_tokens_excluded() {
        let fitted = TfIdfVectorizer::default().fit(&[seq("x cat y")]).unwrap();
        assert_eq!(fitted.vocabulary().terms(), ["cat"]);
    }

    #[test]
    fn test_norm_of_extreme_magnitudes() {
        let big = FeatureVector::new(vec![3e200, 4e200]);
        assert!((big.norm() / 5e200 - 1.0).abs() < 1e-12);
        let tiny = FeatureVector::new(vec![3e-200, 4e-200]);
        assert!((tiny.norm() / 5e-200 - 1.0).abs() < 1e-12);
        assert_eq!(FeatureVector::zeros(3).norm(), 0.0);
    }

    #[test]
    fn test_vocabulary_is_lexicographic() {
        let fitted = TfIdfVectorizer::default()
            .fit(&[seq("zebra apple"), seq("mango")])
            .unwrap();
        assert_eq!(fitted.vocabulary().terms(), ["apple", "mango", "zebra"]);
        assert_eq!(fitted.vocabulary().term(1), Some("mango"));
    }
}
