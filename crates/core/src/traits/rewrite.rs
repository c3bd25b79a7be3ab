//! Grammar rewrite collaborator

use async_trait::async_trait;

use crate::Result;

/// One-shot grammar rewrite of an instruction-tagged string.
///
/// The input carries a fixed instruction prefix (e.g. `"grammar: ..."`);
/// the collaborator returns its single best rewrite. The transformation is
/// opaque and non-idempotent; callers must not feed the output back in.
#[async_trait]
pub trait RewriteGrammar: Send + Sync {
    /// Rewrite the tagged text, returning one corrected string
    async fn rewrite(&self, tagged: &str) -> Result<String>;
}
