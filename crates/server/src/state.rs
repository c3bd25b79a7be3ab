//! Application state
//!
//! Collaborator handles are acquired once at startup and shared read-only
//! across all requests (load-once, use-many). Requests never mutate shared
//! state, so no locking is needed beyond the config cell.

use std::sync::Arc;

use parking_lot::RwLock;

use scribe_config::Settings;
use scribe_core::{Paraphrase, SpellSuggest, SummaryParams, TextGenerator, Translate};
use scribe_inference::{
    HostedLlmBackend, HostedLlmClientConfig, Seq2SeqClient, Seq2SeqClientConfig,
};
use scribe_text_processing::{
    ChunkedSummarizer, ChunkedSummarizerConfig, CorrectionPipeline, GrammarCorrector,
    SpellCorrector, SymSpellSuggester, SymSpellSuggesterConfig,
};

/// Default path of the word-frequency dictionary for spell correction
const DICTIONARY_PATH: &str = "data/frequency_dictionary_en.txt";

/// The injected collaborator set.
///
/// Production wiring builds these from [`Settings`]; tests substitute
/// deterministic fakes.
pub struct Collaborators {
    pub spell: Arc<dyn SpellSuggest>,
    pub rewriter: Arc<dyn scribe_core::RewriteGrammar>,
    pub summarizer: Arc<dyn scribe_core::Summarize>,
    pub paraphraser: Arc<dyn Paraphrase>,
    pub translator: Arc<dyn Translate>,
    pub generator: Arc<dyn TextGenerator>,
    /// Model name echoed in summarize responses
    pub summarization_model: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Settings>>,
    pub pipeline: Arc<CorrectionPipeline>,
    pub summarizer: Arc<ChunkedSummarizer>,
    pub paraphraser: Arc<dyn Paraphrase>,
    pub translator: Arc<dyn Translate>,
    pub generator: Arc<dyn TextGenerator>,
    pub summarization_model: String,
}

impl AppState {
    /// Build state from settings and an explicit collaborator set
    pub fn with_collaborators(config: Settings, collaborators: Collaborators) -> Self {
        let spell = config
            .correction
            .spell_enabled
            .then(|| SpellCorrector::new(collaborators.spell));
        let grammar = config
            .correction
            .grammar_enabled
            .then(|| GrammarCorrector::new(collaborators.rewriter));

        let summarizer = ChunkedSummarizer::new(
            collaborators.summarizer,
            ChunkedSummarizerConfig {
                chunk_size: config.summarizer.chunk_size,
                params: SummaryParams {
                    max_length: config.summarizer.max_length,
                    min_length: config.summarizer.min_length,
                    ..Default::default()
                },
            },
        );

        Self {
            config: Arc::new(RwLock::new(config)),
            pipeline: Arc::new(CorrectionPipeline::new(spell, grammar)),
            summarizer: Arc::new(summarizer),
            paraphraser: collaborators.paraphraser,
            translator: collaborators.translator,
            generator: collaborators.generator,
            summarization_model: collaborators.summarization_model,
        }
    }

    /// Build state with production collaborators from settings
    pub fn from_settings(config: Settings) -> anyhow::Result<Self> {
        let seq2seq = Arc::new(Seq2SeqClient::new(Seq2SeqClientConfig {
            endpoint: config.inference.seq2seq.endpoint.clone(),
            summarization_model: config.inference.seq2seq.summarization_model.clone(),
            grammar_model: config.inference.seq2seq.grammar_model.clone(),
            paraphrase_model: config.inference.seq2seq.paraphrase_model.clone(),
            translation_model: config.inference.seq2seq.translation_model.clone(),
            timeout: std::time::Duration::from_secs(config.inference.seq2seq.timeout_secs),
            max_retries: config.inference.seq2seq.max_retries,
            initial_backoff: std::time::Duration::from_millis(
                config.inference.seq2seq.initial_backoff_ms,
            ),
        })?);

        let generator = Arc::new(HostedLlmBackend::new(HostedLlmClientConfig {
            endpoint: config.inference.hosted.endpoint.clone(),
            api_key: config.inference.hosted.api_key.clone(),
            model: config.inference.hosted.model.clone(),
            temperature: config.inference.hosted.temperature,
            top_p: config.inference.hosted.top_p,
            max_tokens: config.inference.hosted.max_tokens,
            timeout: std::time::Duration::from_secs(config.inference.hosted.timeout_secs),
            ..Default::default()
        })?);

        let spell = Arc::new(SymSpellSuggester::from_dictionary_file(
            DICTIONARY_PATH,
            SymSpellSuggesterConfig {
                max_edit_distance: config.correction.max_edit_distance,
                ..Default::default()
            },
        ));

        let summarization_model = seq2seq.summarization_model().to_string();

        Ok(Self::with_collaborators(
            config,
            Collaborators {
                spell,
                rewriter: seq2seq.clone(),
                summarizer: seq2seq.clone(),
                paraphraser: seq2seq.clone(),
                translator: seq2seq,
                generator,
                summarization_model,
            },
        ))
    }
}
