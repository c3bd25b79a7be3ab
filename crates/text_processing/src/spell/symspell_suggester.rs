//! SymSpell-backed spelling suggester
//!
//! Production [`SpellSuggest`] implementation: fuzzy lookup against a word
//! frequency dictionary with a bounded edit distance. The dictionary file
//! uses one `word,count` pair per line. A missing dictionary degrades to a
//! suggester that never suggests, so correction becomes the identity rather
//! than an error.

use std::io::BufRead;
use std::path::Path;

use symspell::{SymSpell, SymSpellBuilder, UnicodeStringStrategy, Verbosity};

use scribe_core::SpellSuggest;

/// Configuration for the SymSpell suggester
#[derive(Debug, Clone)]
pub struct SymSpellSuggesterConfig {
    /// Maximum edit distance for lookups
    pub max_edit_distance: i64,
    /// Minimum word length to attempt correction
    pub min_word_length: usize,
}

impl Default for SymSpellSuggesterConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            min_word_length: 2,
        }
    }
}

/// Dictionary-backed spelling suggester
pub struct SymSpellSuggester {
    symspell: SymSpell<UnicodeStringStrategy>,
    config: SymSpellSuggesterConfig,
}

impl SymSpellSuggester {
    fn build_symspell(max_edit_distance: i64) -> SymSpell<UnicodeStringStrategy> {
        SymSpellBuilder::default()
            .max_dictionary_edit_distance(max_edit_distance)
            .prefix_length(7)
            .build()
            .expect("SymSpell builder accepts these parameters")
    }

    /// Load the dictionary from a `word,count` file.
    ///
    /// A missing or unreadable file logs a warning and yields an empty
    /// dictionary (every lookup returns no suggestion).
    pub fn from_dictionary_file(
        path: impl AsRef<Path>,
        config: SymSpellSuggesterConfig,
    ) -> Self {
        let mut symspell = Self::build_symspell(config.max_edit_distance);

        match std::fs::File::open(path.as_ref()) {
            Ok(file) => {
                let mut loaded = 0usize;
                for line in std::io::BufReader::new(file).lines() {
                    let Ok(line) = line else { continue };
                    if symspell.load_dictionary_line(&line, 0, 1, ",") {
                        loaded += 1;
                    }
                }
                tracing::info!(
                    path = %path.as_ref().display(),
                    words = loaded,
                    "loaded spelling dictionary"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "spelling dictionary not found; spell correction will pass words through"
                );
            }
        }

        Self { symspell, config }
    }

    /// Build from an in-memory word/frequency list (tests, small domains)
    pub fn from_words<I>(words: I, config: SymSpellSuggesterConfig) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut symspell = Self::build_symspell(config.max_edit_distance);
        for (word, count) in words {
            let line = format!("{},{}", word.to_lowercase(), count);
            symspell.load_dictionary_line(&line, 0, 1, ",");
        }
        Self { symspell, config }
    }

    /// Restore a leading capital on the suggestion when the original word
    /// carried one. All-caps and interior mixed case are left to the
    /// lookup-miss policy.
    fn restore_case(original: &str, suggestion: &str) -> String {
        let mut original_chars = original.chars();
        match original_chars.next() {
            Some(first)
                if first.is_uppercase() && original_chars.all(|c| c.is_lowercase()) =>
            {
                let mut out = String::with_capacity(suggestion.len());
                let mut chars = suggestion.chars();
                if let Some(c) = chars.next() {
                    out.extend(c.to_uppercase());
                }
                out.extend(chars);
                out
            }
            _ => suggestion.to_string(),
        }
    }
}

impl SpellSuggest for SymSpellSuggester {
    fn suggest(&self, word: &str) -> Option<String> {
        if word.chars().count() < self.config.min_word_length {
            return None;
        }
        // Digit runs and other non-alphabetic word tokens are not
        // dictionary material
        if !word.chars().any(|c| c.is_alphabetic()) {
            return None;
        }

        let lowered = word.to_lowercase();
        let candidates =
            self.symspell
                .lookup(&lowered, Verbosity::Top, self.config.max_edit_distance);
        let best = candidates.first()?;

        // Distance 0 means the word is already in the dictionary
        if best.distance == 0 {
            return None;
        }

        let restored = Self::restore_case(word, &best.term);
        if restored == word {
            None
        } else {
            Some(restored)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester() -> SymSpellSuggester {
        SymSpellSuggester::from_words(
            [
                ("this".to_string(), 1_000_000),
                ("is".to_string(), 900_000),
                ("a".to_string(), 800_000),
                ("test".to_string(), 700_000),
                ("hello".to_string(), 600_000),
            ],
            SymSpellSuggesterConfig::default(),
        )
    }

    #[test]
    fn suggests_for_misspelled_word() {
        assert_eq!(suggester().suggest("tst"), Some("test".to_string()));
    }

    #[test]
    fn dictionary_words_get_no_suggestion() {
        assert_eq!(suggester().suggest("test"), None);
        assert_eq!(suggester().suggest("hello"), None);
    }

    #[test]
    fn leading_capital_is_restored() {
        assert_eq!(suggester().suggest("Ths"), Some("This".to_string()));
    }

    #[test]
    fn digit_runs_are_ignored() {
        assert_eq!(suggester().suggest("12345"), None);
    }

    #[test]
    fn short_words_are_ignored() {
        assert_eq!(suggester().suggest("x"), None);
    }

    #[test]
    fn empty_dictionary_never_suggests() {
        let empty = SymSpellSuggester::from_words(
            std::iter::empty(),
            SymSpellSuggesterConfig::default(),
        );
        assert_eq!(empty.suggest("tst"), None);
    }

    #[test]
    fn missing_dictionary_file_degrades_to_passthrough() {
        let suggester = SymSpellSuggester::from_dictionary_file(
            "/nonexistent/dictionary.csv",
            SymSpellSuggesterConfig::default(),
        );
        assert_eq!(suggester.suggest("tst"), None);
    }
}
