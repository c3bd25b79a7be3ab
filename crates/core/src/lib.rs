//! Core traits and types for the scribe writing assistant
//!
//! This crate provides the foundational types used across all other crates:
//! - Collaborator traits for pluggable inference backends (spelling
//!   suggestion, grammar rewrite, summarization, hosted generation)
//! - Correction and summary result types returned to clients
//! - Error types

pub mod correction;
pub mod error;
pub mod suggestion;
pub mod summary;
pub mod traits;

pub use correction::{CorrectionKind, CorrectionRecord, CorrectionReport};
pub use error::{Error, Result};
pub use suggestion::{Generation, GenerationParameters, Suggestion, SuggestionScores};
pub use summary::{SummaryParams, SummaryResult};

pub use traits::{
    NoSuggestions, Paraphrase, RewriteGrammar, SpellSuggest, Summarize, TextGenerator, Translate,
};
