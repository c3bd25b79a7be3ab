//! Spelling suggestion collaborator

/// A "did-you-mean" lookup for single words.
///
/// Returning `None` means "no suggestion, keep the word as-is". By policy
/// this trait is infallible: an implementation that fails internally must
/// absorb the failure and report no suggestion rather than error. Per-word
/// lookup failures are never fatal to a correction pass.
pub trait SpellSuggest: Send + Sync {
    /// Suggest a corrected spelling for `word`, or `None` to keep it
    fn suggest(&self, word: &str) -> Option<String>;
}

/// Pass-through suggester that never suggests anything.
///
/// Used when spell correction is disabled; correction becomes the identity
/// on every word.
pub struct NoSuggestions;

impl SpellSuggest for NoSuggestions {
    fn suggest(&self, _word: &str) -> Option<String> {
        None
    }
}
