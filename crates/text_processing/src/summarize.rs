//! Chunked summarization
//!
//! Long documents are split into fixed-size chunks (the summarization model
//! is length-limited), each chunk is summarized through the [`Summarize`]
//! collaborator, and the per-chunk summaries are joined with a single space
//! in chunk order. Summaries are never reordered or deduplicated, even if
//! two chunks produce identical output. Chunk processing is strictly
//! sequential; lengths are counted in characters.

use std::sync::Arc;

use scribe_core::{Result, Summarize, SummaryParams, SummaryResult};

use crate::segment::chunk;

/// Configuration for the chunked summarizer
#[derive(Debug, Clone)]
pub struct ChunkedSummarizerConfig {
    /// Chunk bound in characters
    pub chunk_size: usize,
    /// Decoding parameters passed per chunk
    pub params: SummaryParams,
}

impl Default for ChunkedSummarizerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            params: SummaryParams::default(),
        }
    }
}

/// Chunk-and-reassemble summarizer with compression accounting
pub struct ChunkedSummarizer {
    summarizer: Arc<dyn Summarize>,
    config: ChunkedSummarizerConfig,
}

impl ChunkedSummarizer {
    pub fn new(summarizer: Arc<dyn Summarize>, config: ChunkedSummarizerConfig) -> Self {
        Self { summarizer, config }
    }

    /// Summarize `text` chunk by chunk.
    ///
    /// Empty input never reaches the collaborator: the ratio would divide
    /// by zero, so it short-circuits to the sentinel result.
    pub async fn summarize(&self, text: &str) -> Result<SummaryResult> {
        let chunks = chunk(text, self.config.chunk_size);
        if chunks.is_empty() {
            return Ok(SummaryResult {
                summary: String::new(),
                chunks_processed: 0,
                compression_ratio: "0.0%".to_string(),
            });
        }

        let mut summaries = Vec::with_capacity(chunks.len());
        for (idx, piece) in chunks.iter().enumerate() {
            let summary = self.summarizer.summarize(piece, &self.config.params).await?;
            tracing::debug!(
                chunk = idx,
                chunk_chars = piece.chars().count(),
                summary_chars = summary.chars().count(),
                "chunk summarized"
            );
            summaries.push(summary);
        }

        let summary = summaries.join(" ");
        let compression_ratio =
            format_ratio(summary.chars().count(), text.chars().count());

        Ok(SummaryResult {
            summary,
            chunks_processed: chunks.len(),
            compression_ratio,
        })
    }
}

/// Format `summary_len / original_len` as a one-decimal percentage
fn format_ratio(summary_len: usize, original_len: usize) -> String {
    format!(
        "{:.1}%",
        summary_len as f64 / original_len as f64 * 100.0
    )
}
