//! Spelling correction
//!
//! A [`SpellCorrector`] maps each word token to a corrected spelling via a
//! [`SpellSuggest`] collaborator and passes every separator token through
//! verbatim. The transformation is a pure per-word substitution over a
//! fixed skeleton of separators: token count and the ordering of separators
//! relative to words are preserved exactly.

mod symspell_suggester;

pub use symspell_suggester::{SymSpellSuggester, SymSpellSuggesterConfig};

use std::sync::Arc;

use scribe_core::SpellSuggest;

use crate::segment::{segment, Token};

/// Token-preserving spell corrector
#[derive(Clone)]
pub struct SpellCorrector {
    suggester: Arc<dyn SpellSuggest>,
}

impl SpellCorrector {
    pub fn new(suggester: Arc<dyn SpellSuggest>) -> Self {
        Self { suggester }
    }

    /// Correct spelling while preserving the original text structure.
    ///
    /// Words with no suggestion are kept unchanged; a missing suggestion is
    /// never an error. Output length may differ from the input, but the
    /// separator skeleton is identical.
    pub fn correct_spelling(&self, text: &str) -> String {
        segment(text)
            .into_iter()
            .map(|token| match token {
                Token::Word(word) => self
                    .suggester
                    .suggest(word)
                    .unwrap_or_else(|| word.to_string()),
                Token::Separator(sep) => sep.to_string(),
            })
            .collect()
    }
}
