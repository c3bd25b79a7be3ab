//! Inference collaborator clients
//!
//! Two transports back the collaborator traits from `scribe-core`:
//! - [`Seq2SeqClient`]: a local seq2seq model server (summarization,
//!   grammar rewrite, paraphrase, translation) behind a JSON HTTP API
//! - [`HostedLlmBackend`]: a hosted chat-completions API (text
//!   continuation, suggestion analysis)
//!
//! Retry with doubling backoff for transient failures lives here, in the
//! transport layer. Callers above these clients never retry.

pub mod hosted;
pub mod seq2seq;

pub use hosted::{HostedLlmBackend, HostedLlmClientConfig};
pub use seq2seq::{Seq2SeqClient, Seq2SeqClientConfig};

use thiserror::Error;

/// Inference transport errors
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        InferenceError::Network(err.to_string())
    }
}

impl From<InferenceError> for scribe_core::Error {
    fn from(err: InferenceError) -> Self {
        scribe_core::Error::Collaborator(err.to_string())
    }
}
