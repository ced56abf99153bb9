// Unit tests for vectorization and scoring.
//
// Tests isolated pure functions: TfIdfVectorizer weighting invariants,
// cosine_similarity numerical edge cases, and the error taxonomy.

use plagcheck::similarity::cosine::cosine_similarity;
use plagcheck::similarity::tfidf::{FeatureVector, TfIdfVectorizer, VectorizerConfig};
use plagcheck::text::normalize::TokenSequence;
use plagcheck::SimilarityError;

fn seq(s: &str) -> TokenSequence {
    TokenSequence::from_joined(s)
}

// ============================================================
// TfIdfVectorizer: weighting invariants
// ============================================================

#[test]
fn vectors_are_unit_length() {
    let vectors = TfIdfVectorizer::default()
        .vectorize(&[seq("cat cat sat mat"), seq("dog sat log")])
        .unwrap();
    for v in &vectors {
        assert!((v.norm() - 1.0).abs() < 1e-12, "norm was {}", v.norm());
    }
}

#[test]
fn one_vector_per_input_in_order() {
    let fitted = TfIdfVectorizer::default()
        .fit(&[seq("alpha"), seq("beta"), seq("gamma")])
        .unwrap();
    assert_eq!(fitted.vectors().len(), 3);
    let vocab = fitted.vocabulary();
    for (doc, term) in ["alpha", "beta", "gamma"].iter().enumerate() {
        let col = vocab.index_of(term).unwrap();
        assert!((fitted.vectors()[doc].get(col) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn idf_is_finite_and_positive() {
    let fitted = TfIdfVectorizer::default()
        .fit(&[seq("shared only_a"), seq("shared only_b")])
        .unwrap();
    assert!(fitted.idf().iter().all(|&w| w.is_finite() && w > 0.0));
}

#[test]
fn unique_terms_outweigh_shared_terms() {
    let fitted = TfIdfVectorizer::default()
        .fit(&[seq("common rare"), seq("common other")])
        .unwrap();
    let v = &fitted.vectors()[0];
    let vocab = fitted.vocabulary();
    let common = v.get(vocab.index_of("common").unwrap());
    let rare = v.get(vocab.index_of("rare").unwrap());
    assert!(rare > common, "rare {rare} should outweigh common {common}");
}

#[test]
fn vocabulary_is_rebuilt_per_fit() {
    let vectorizer = TfIdfVectorizer::default();
    let first = vectorizer.fit(&[seq("cat"), seq("dog")]).unwrap();
    let second = vectorizer.fit(&[seq("fish"), seq("bird")]).unwrap();
    assert!(first.vocabulary().index_of("fish").is_none());
    assert!(second.vocabulary().index_of("cat").is_none());
}

#[test]
fn min_token_chars_is_configurable() {
    let vectorizer = TfIdfVectorizer::new(VectorizerConfig {
        min_token_chars: 4,
        ..Default::default()
    });
    let fitted = vectorizer.fit(&[seq("cat bird"), seq("owl fish")]).unwrap();
    assert_eq!(fitted.vocabulary().terms(), ["bird", "fish"]);
}

#[test]
fn empty_collection_is_invalid_input() {
    let err = TfIdfVectorizer::default().vectorize(&[]).unwrap_err();
    assert!(matches!(err, SimilarityError::InvalidInput { documents: 0 }));
}

// ============================================================
// cosine_similarity: edge cases
// ============================================================

#[test]
fn cosine_of_fitted_pair_equals_dot_product() {
    let vectors = TfIdfVectorizer::default()
        .vectorize(&[seq("cat sat mat"), seq("cat sat hat")])
        .unwrap();
    let dot: f64 = vectors[0]
        .weights()
        .iter()
        .zip(vectors[1].weights())
        .map(|(a, b)| a * b)
        .sum();
    let score = cosine_similarity(&vectors[0], &vectors[1]).unwrap();
    assert!((score - dot).abs() < 1e-12);
}

#[test]
fn cosine_zero_vector_scores_zero() {
    let vectors = TfIdfVectorizer::default()
        .vectorize(&[seq(""), seq("cat")])
        .unwrap();
    assert_eq!(cosine_similarity(&vectors[0], &vectors[1]).unwrap(), 0.0);
}

#[test]
fn cosine_both_zero_scores_zero() {
    let a = FeatureVector::zeros(4);
    assert_eq!(cosine_similarity(&a, &a).unwrap(), 0.0);
}

#[test]
fn cosine_across_fits_is_dimension_mismatch() {
    let vectorizer = TfIdfVectorizer::default();
    let first = vectorizer.vectorize(&[seq("cat dog")]).unwrap();
    let second = vectorizer.vectorize(&[seq("cat dog bird")]).unwrap();
    let err = cosine_similarity(&first[0], &second[0]).unwrap_err();
    assert_eq!(err, SimilarityError::DimensionMismatch { left: 2, right: 3 });
}

#[test]
fn cosine_stays_within_bounds_for_large_weights() {
    let a = FeatureVector::new(vec![1e150, 1e150]);
    let b = FeatureVector::new(vec![1e150, 1e150]);
    let score = cosine_similarity(&a, &b).unwrap();
    assert!((0.0..=1.0).contains(&score), "got {score}");
}

#[test]
fn identical_vectors_score_one_at_any_magnitude() {
    for magnitude in [1e200, 1e-200, 1e300, 1e-300] {
        let a = FeatureVector::new(vec![magnitude, magnitude]);
        let score = cosine_similarity(&a, &a.clone()).unwrap();
        assert!((score - 1.0).abs() < 1e-12, "{magnitude:e} got {score}");
    }
}

#[test]
fn proportional_vectors_across_magnitudes_score_one() {
    let a = FeatureVector::new(vec![2e200, 1e200]);
    let b = FeatureVector::new(vec![2e-200, 1e-200]);
    let ab = cosine_similarity(&a, &b).unwrap();
    let ba = cosine_similarity(&b, &a).unwrap();
    assert!((ab - 1.0).abs() < 1e-12, "got {ab}");
    assert_eq!(ab.to_bits(), ba.to_bits());
}
