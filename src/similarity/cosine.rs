// Cosine similarity between two feature vectors of one fit.
//
// Vectors from the vectorizer are already unit length, so the division is
// nearly a no-op, but the scorer does not rely on that: it accepts any pair
// of equal-length vectors and guards zero norms itself.

use crate::error::SimilarityError;

use super::tfidf::FeatureVector;

/// Cosine similarity of `a` and `b`, clamped to `[0.0, 1.0]`.
///
/// Returns 0.0 when either vector has zero length (a document with no
/// surviving tokens). Fails if the vectors have different dimensions.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> Result<f64, SimilarityError> {
    if a.dim() != b.dim() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    // Rescale each side by its largest weight before multiplying, so very
    // large or very small weights still give a finite, nonzero denominator.
    let (sa, sb) = (a.max_abs(), b.max_abs());
    if sa == 0.0 || sb == 0.0 {
        return Ok(0.0);
    }

    let denom = a.scaled_norm(sa) * b.scaled_norm(sb);
    if denom == 0.0 {
        return Ok(0.0);
    }

    let score = scaled_dot(a, sa, b, sb) / denom;
    if score.is_finite() {
        Ok(score.clamp(0.0, 1.0))
    } else {
        Ok(0.0)
    }
}

/// Per-column products of two equal-length vectors. Summed, these give the
/// dot product.
pub fn contributions(a: &FeatureVector, b: &FeatureVector) -> Vec<f64> {
    a.weights()
        .iter()
        .zip(b.weights())
        .map(|(x, y)| x * y)
        .collect()
}

fn scaled_dot(a: &FeatureVector, sa: f64, b: &FeatureVector, sb: f64) -> f64 {
    a.weights()
        .iter()
        .zip(b.weights())
        .map(|(x, y)| (x / sa) * (y / sb))
        .sum()
}
