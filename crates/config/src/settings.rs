//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference collaborator configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Chunked summarizer configuration
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Correction pipeline configuration
    #[serde(default)]
    pub correction: CorrectionConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether CORS origin checks are enforced
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
    /// Allowed CORS origins; empty means localhost-only default
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
            cors_origins: Vec::new(),
        }
    }
}

/// Inference collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InferenceConfig {
    /// Local seq2seq model server (summarization, grammar, paraphrase,
    /// translation)
    #[serde(default)]
    pub seq2seq: Seq2SeqConfig,

    /// Hosted LLM API (continuation, suggestion analysis)
    #[serde(default)]
    pub hosted: HostedLlmConfig,
}

/// Local seq2seq model server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seq2SeqConfig {
    #[serde(default = "default_seq2seq_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,
    #[serde(default = "default_grammar_model")]
    pub grammar_model: String,
    #[serde(default = "default_paraphrase_model")]
    pub paraphrase_model: String,
    #[serde(default = "default_translation_model")]
    pub translation_model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry)
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
}

fn default_seq2seq_endpoint() -> String {
    "http://127.0.0.1:8090".to_string()
}

fn default_summarization_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_grammar_model() -> String {
    "vennify/t5-base-grammar-correction".to_string()
}

fn default_paraphrase_model() -> String {
    "t5-small".to_string()
}

fn default_translation_model() -> String {
    "Helsinki-NLP/opus-mt-en-hi".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

impl Default for Seq2SeqConfig {
    fn default() -> Self {
        Self {
            endpoint: default_seq2seq_endpoint(),
            summarization_model: default_summarization_model(),
            grammar_model: default_grammar_model(),
            paraphrase_model: default_paraphrase_model(),
            translation_model: default_translation_model(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
        }
    }
}

/// Hosted LLM API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedLlmConfig {
    #[serde(default = "default_hosted_endpoint")]
    pub endpoint: String,
    /// API key; usually supplied via SCRIBE_INFERENCE__HOSTED__API_KEY
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_hosted_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_hosted_endpoint() -> String {
    "https://api.mistral.ai/v1/chat/completions".to_string()
}

fn default_hosted_model() -> String {
    "mistral-large-latest".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.95
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for HostedLlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hosted_endpoint(),
            api_key: String::new(),
            model: default_hosted_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Chunked summarizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Chunk bound in characters. Input is split at fixed offsets
    /// regardless of word boundaries.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_summary_max_length")]
    pub max_length: u32,
    #[serde(default = "default_summary_min_length")]
    pub min_length: u32,
}

fn default_chunk_size() -> usize {
    1024
}

fn default_summary_max_length() -> u32 {
    150
}

fn default_summary_min_length() -> u32 {
    30
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_length: default_summary_max_length(),
            min_length: default_summary_min_length(),
        }
    }
}

/// Correction pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Enable the dictionary-backed spelling stage
    #[serde(default = "default_true")]
    pub spell_enabled: bool,
    /// Enable the model-backed grammar stage
    #[serde(default = "default_true")]
    pub grammar_enabled: bool,
    /// Maximum edit distance for spelling suggestions
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: i64,
}

fn default_true() -> bool {
    true
}

fn default_max_edit_distance() -> i64 {
    2
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            spell_enabled: default_true(),
            grammar_enabled: default_true(),
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings. Strict environments reject a missing hosted API
    /// key; development only warns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summarizer.chunk_size == 0 {
            return Err(ConfigError::Validation(
                "summarizer.chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.summarizer.min_length > self.summarizer.max_length {
            return Err(ConfigError::Validation(format!(
                "summarizer.min_length ({}) exceeds max_length ({})",
                self.summarizer.min_length, self.summarizer.max_length
            )));
        }
        if self.inference.hosted.api_key.is_empty() {
            if self.environment.is_strict() {
                return Err(ConfigError::Validation(
                    "inference.hosted.api_key is required in strict environments".to_string(),
                ));
            }
            tracing::warn!("hosted LLM API key not set; /generate and /analyze_text will fail");
        }
        Ok(())
    }
}

/// Load settings with layered precedence:
/// env vars > config/{env}.yaml > config/default.yaml > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder()
        .add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env)).required(false));
    }

    let settings: Settings = builder
        .add_source(Environment::with_prefix("SCRIBE").separator("__"))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}
