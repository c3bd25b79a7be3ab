//! Hosted-LLM collaborator (continuation and suggestion analysis)

use async_trait::async_trait;

use crate::{Generation, Result, Suggestion};

/// Hosted large-language-model capabilities consumed by the glue layer.
///
/// Suggestion content is owned by the model; consumers only normalize ids
/// and scores (see [`Suggestion::normalize`]).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Continue the given prompt as a writing assistant
    async fn generate(&self, prompt: &str) -> Result<Generation>;

    /// Analyze text and return improvement suggestions, already normalized
    async fn analyze(&self, text: &str) -> Result<Vec<Suggestion>>;
}
