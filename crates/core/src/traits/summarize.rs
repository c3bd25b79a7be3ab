//! Summarization collaborator

use async_trait::async_trait;

use crate::{Result, SummaryParams};

/// Length-limited summarization of a single chunk.
///
/// Called once per chunk; the caller owns splitting and reassembly. The
/// collaborator must honor the decoding parameters (length bounds,
/// deterministic decoding, repeated-n-gram constraint).
#[async_trait]
pub trait Summarize: Send + Sync {
    /// Summarize one chunk of text
    async fn summarize(&self, chunk: &str, params: &SummaryParams) -> Result<String>;
}
