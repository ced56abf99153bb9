// Comparison pipeline: normalize both texts, fit TF-IDF jointly, score.

pub mod checker;
pub mod report;
