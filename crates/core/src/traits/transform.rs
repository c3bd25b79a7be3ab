//! Paraphrase and translation collaborators

use async_trait::async_trait;

use crate::Result;

/// One-shot paraphrase of a span of text
#[async_trait]
pub trait Paraphrase: Send + Sync {
    async fn paraphrase(&self, text: &str) -> Result<String>;
}

/// One-shot translation of a span of text (language pair fixed by the
/// backing model)
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}
