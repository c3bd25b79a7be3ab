//! Summarization types

use serde::{Deserialize, Serialize};

/// Decoding parameters passed to the summarization collaborator, one call
/// per chunk. Defaults match the production summarizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    /// Maximum summary length in tokens
    pub max_length: u32,
    /// Minimum summary length in tokens
    pub min_length: u32,
    /// Sampling toggle; false means deterministic decoding
    pub do_sample: bool,
    /// Forbid any n-gram of this size from recurring in one chunk's summary
    pub no_repeat_ngram_size: u32,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
            do_sample: false,
            no_repeat_ngram_size: 3,
        }
    }
}

/// Result of summarizing a document chunk-by-chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Per-chunk summaries joined with a single space, in chunk order
    pub summary: String,
    /// Number of chunks the input was split into (0 for empty input)
    pub chunks_processed: usize,
    /// len(summary) / len(input) as a one-decimal percentage, e.g. "42.3%".
    /// "0.0%" for empty input (the ratio is otherwise undefined).
    pub compression_ratio: String,
}
