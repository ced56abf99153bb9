// Similarity scoring: joint TF-IDF vectorization and cosine comparison.

pub mod cosine;
pub mod tfidf;
