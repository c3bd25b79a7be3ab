//! Configuration for the scribe writing assistant
//!
//! Settings are layered: env vars > `config/{env}.yaml` >
//! `config/default.yaml` > built-in defaults. The environment file is
//! selected by `SCRIBE_ENV`.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    load_settings, CorrectionConfig, HostedLlmConfig, InferenceConfig, RuntimeEnvironment,
    Seq2SeqConfig, ServerConfig, Settings, SummarizerConfig,
};
