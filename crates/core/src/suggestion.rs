//! Suggestion and generation types produced by the hosted-LLM collaborator
//!
//! Suggestion content is owned by the hosted model; this crate only defines
//! the shape, the sequential id assignment, and the default score back-fill
//! applied when the model omits a `scores` object.

use serde::{Deserialize, Serialize};

/// Per-dimension quality scores attached to a suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionScores {
    pub readability: f64,
    pub grammar: f64,
    pub style: f64,
    pub clarity: f64,
}

impl Default for SuggestionScores {
    fn default() -> Self {
        // Neutral mid-scale scores used when the model omits scoring
        Self {
            readability: 7.5,
            grammar: 7.5,
            style: 7.5,
            clarity: 7.5,
        }
    }
}

/// One improvement suggestion for a span of analyzed text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Sequential id assigned by the consumer, 0-based in model output order
    #[serde(default)]
    pub id: usize,
    pub category: String,
    pub message: String,
    pub severity: String,
    pub original_text: String,
    pub suggested_text: String,
    #[serde(default)]
    pub scores: Option<SuggestionScores>,
}

impl Suggestion {
    /// Assign sequential ids and back-fill default scores where absent
    pub fn normalize(mut suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
        for (idx, suggestion) in suggestions.iter_mut().enumerate() {
            suggestion.id = idx;
            if suggestion.scores.is_none() {
                suggestion.scores = Some(SuggestionScores::default());
            }
        }
        suggestions
    }
}

/// Decoding parameters echoed back with a generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub architecture: String,
    pub temperature: f32,
    pub top_p: f32,
    pub tokens_generated: u64,
}

/// Continuation text produced by the hosted-LLM collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub generated_text: String,
    pub model: String,
    pub parameters: GenerationParameters,
}
