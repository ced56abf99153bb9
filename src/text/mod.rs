// Text normalization: tokenization, stop-word removal and lemmatization.

pub mod lemma;
pub mod normalize;
pub mod stopwords;
pub mod traits;
