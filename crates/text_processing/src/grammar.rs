//! Grammar correction
//!
//! Delegates an instruction-tagged string to the [`RewriteGrammar`]
//! collaborator and returns its single best rewrite, trimmed of any special
//! control markers the model may emit. The transformation itself is opaque
//! and non-idempotent; the only obligation here is the composition
//! contract: the input must be the spell-corrected text, never the raw
//! input, so spelling errors are not re-introduced by the rewrite.

use std::sync::Arc;

use scribe_core::{Result, RewriteGrammar};

/// Fixed instruction prefix understood by the rewrite model
pub const GRAMMAR_TAG: &str = "grammar: ";

/// Control markers seq2seq models emit around generated text
const CONTROL_MARKERS: [&str; 3] = ["<pad>", "</s>", "<s>"];

/// Model-backed grammar corrector
#[derive(Clone)]
pub struct GrammarCorrector {
    rewriter: Arc<dyn RewriteGrammar>,
}

impl GrammarCorrector {
    pub fn new(rewriter: Arc<dyn RewriteGrammar>) -> Self {
        Self { rewriter }
    }

    /// Rewrite `text` with the grammar instruction tag prefixed.
    ///
    /// Collaborator failures propagate to the caller; there is no retry
    /// here. Retry policy belongs to the collaborator's transport layer.
    pub async fn correct_grammar(&self, text: &str) -> Result<String> {
        let tagged = format!("{}{}", GRAMMAR_TAG, text);
        let rewritten = self.rewriter.rewrite(&tagged).await?;
        Ok(strip_control_markers(&rewritten))
    }
}

/// Strip leading/trailing control markers and whitespace from model output
fn strip_control_markers(text: &str) -> String {
    let mut out = text.trim();
    loop {
        let before = out;
        for marker in CONTROL_MARKERS {
            if let Some(stripped) = out.strip_prefix(marker) {
                out = stripped.trim();
            }
            if let Some(stripped) = out.strip_suffix(marker) {
                out = stripped.trim();
            }
        }
        if out == before {
            break;
        }
    }
    out.to_string()
}
