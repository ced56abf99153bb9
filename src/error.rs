// Error taxonomy for the similarity pipeline.
//
// All variants are local validation failures. None of them are transient, so
// callers surface them once and never retry.

use std::fmt;

use serde::Serialize;

/// Which of the two compared texts failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSide {
    First,
    Second,
    Both,
}

impl InputSide {
    /// Classify a pair of emptiness flags. Returns `None` when both texts are filled.
    pub fn from_flags(first_empty: bool, second_empty: bool) -> Option<Self> {
        match (first_empty, second_empty) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::First),
            (false, true) => Some(Self::Second),
            (false, false) => None,
        }
    }
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "the text is empty"),
            Self::Second => write!(f, "the reference text is empty"),
            Self::Both => write!(f, "both texts are empty"),
        }
    }
}

/// Errors produced by the normalize → vectorize → score pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimilarityError {
    #[error("both texts must be filled ({side})")]
    EmptyInput { side: InputSide },

    #[error("vectorization needs at least one document, got {documents}")]
    InvalidInput { documents: usize },

    #[error("feature vectors come from different vocabularies ({left} vs {right} dimensions)")]
    DimensionMismatch { left: usize, right: usize },
}
