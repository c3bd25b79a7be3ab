//! Text correction and chunked summarization for scribe
//!
//! This crate provides the core text-processing capabilities:
//! - **Segmentation**: lossless classification of text into word and
//!   separator tokens, and fixed-size chunking for length-limited models
//! - **Spell correction**: per-word substitution that preserves the
//!   separator skeleton exactly
//! - **Grammar correction**: single-shot rewrite through an external
//!   collaborator, always applied after spell correction
//! - **Correction pipeline**: spell → grammar with a structured change report
//! - **Chunked summarization**: per-chunk summarization with compression
//!   accounting
//!
//! # Example
//!
//! ```ignore
//! use scribe_text_processing::{CorrectionPipeline, SpellCorrector};
//!
//! let pipeline = CorrectionPipeline::new(Some(spell), Some(grammar));
//! let report = pipeline.correct("Ths is a tst.").await?;
//! println!("Corrected: {}", report.corrected_text);
//! ```

pub mod grammar;
pub mod pipeline;
pub mod segment;
pub mod spell;
pub mod summarize;

pub use grammar::{GrammarCorrector, GRAMMAR_TAG};
pub use pipeline::{coerce_text, CorrectionPipeline};
pub use segment::{chunk, segment, Token};
pub use spell::{SpellCorrector, SymSpellSuggester, SymSpellSuggesterConfig};
pub use summarize::{ChunkedSummarizer, ChunkedSummarizerConfig};
