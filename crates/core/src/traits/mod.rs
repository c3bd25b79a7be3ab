//! Collaborator traits
//!
//! Each external inference capability is an opaque collaborator behind a
//! trait, so implementations can be swapped without code changes and tests
//! can substitute deterministic fakes:
//!
//! - [`SpellSuggest`]: word → suggested spelling (or none)
//! - [`RewriteGrammar`]: instruction-tagged text → one corrected rewrite
//! - [`Summarize`]: chunk → one summary per call
//! - [`TextGenerator`]: hosted-LLM continuation and suggestion analysis
//!
//! Collaborators are invoked once per unit of work (once per word, once per
//! correction call, once per chunk). Retry and batching belong to the
//! collaborator's own transport layer, never to callers of these traits.

mod generate;
mod rewrite;
mod spell;
mod summarize;
mod transform;

pub use generate::TextGenerator;
pub use rewrite::RewriteGrammar;
pub use spell::{NoSuggestions, SpellSuggest};
pub use summarize::Summarize;
pub use transform::{Paraphrase, Translate};
