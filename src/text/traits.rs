// Lemmatizer trait: the swap-ready abstraction for base-form reduction.
//
// The normalizer never reaches for a global dictionary. Whatever lemmatizer
// it was built with is the one it uses, so tests can hand it a tiny table
// and get fully deterministic tokens.

/// Reduces an inflected word to its dictionary base form.
///
/// Input is always a lowercase, alphabetic-only token that already survived
/// stop-word removal.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Lemmatizer that returns every word unchanged.
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}
