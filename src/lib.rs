// plagcheck: lexical plagiarism detection between two documents.
//
// This is the library root. The pipeline runs text -> tokens -> TF-IDF
// vectors -> cosine score; each stage is its own module so callers and tests
// can drive them individually.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;

pub use error::{InputSide, SimilarityError};
pub use pipeline::checker::{compare, PlagiarismChecker};
pub use pipeline::report::{Comparison, SharedTerm};
