//! Client for the local seq2seq model server
//!
//! The model server hosts the locally-loaded sequence-to-sequence models
//! (BART summarization, T5 grammar correction and paraphrase, MarianMT
//! translation) behind a single JSON endpoint:
//!
//! ```text
//! POST {endpoint}/v1/text2text
//! { "model": "...", "inputs": "...", "parameters": { ... } }
//! -> { "generated_text": "..." }
//! ```
//!
//! One request per unit of work; transient failures (network errors, 5xx)
//! are retried here with doubling backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use scribe_core::{Paraphrase, Result, RewriteGrammar, Summarize, SummaryParams, Translate};

use crate::InferenceError;

/// Seq2seq client configuration
#[derive(Debug, Clone)]
pub struct Seq2SeqClientConfig {
    /// Model server base URL
    pub endpoint: String,
    /// Model used for summarization calls
    pub summarization_model: String,
    /// Model used for grammar rewrite calls
    pub grammar_model: String,
    /// Model used for paraphrase calls
    pub paraphrase_model: String,
    /// Model used for translation calls
    pub translation_model: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry)
    pub initial_backoff: Duration,
}

impl Default for Seq2SeqClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8090".to_string(),
            summarization_model: "facebook/bart-large-cnn".to_string(),
            grammar_model: "vennify/t5-base-grammar-correction".to_string(),
            paraphrase_model: "t5-small".to_string(),
            translation_model: "Helsinki-NLP/opus-mt-en-hi".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Text2TextResponse {
    generated_text: String,
}

/// HTTP client for the seq2seq model server
pub struct Seq2SeqClient {
    client: Client,
    config: Seq2SeqClientConfig,
}

impl Seq2SeqClient {
    pub fn new(config: Seq2SeqClientConfig) -> std::result::Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Model name used for summarization, echoed in API responses
    pub fn summarization_model(&self) -> &str {
        &self.config.summarization_model
    }

    /// Run one text2text generation, retrying transient failures
    async fn text2text(
        &self,
        model: &str,
        inputs: &str,
        parameters: serde_json::Value,
    ) -> std::result::Result<String, InferenceError> {
        let url = format!("{}/v1/text2text", self.config.endpoint);
        let body = json!({
            "model": model,
            "inputs": inputs,
            "parameters": parameters,
        });

        let mut backoff = self.config.initial_backoff;
        let mut attempt = 0u32;

        loop {
            let outcome = self.client.post(&url).json(&body).send().await;
            match outcome {
                Ok(response) if response.status().is_success() => {
                    let parsed: Text2TextResponse = response
                        .json()
                        .await
                        .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;
                    return Ok(parsed.generated_text);
                }
                Ok(response) => {
                    let status = response.status();
                    let detail = response.text().await.unwrap_or_default();
                    if status.is_server_error() && attempt < self.config.max_retries {
                        tracing::warn!(
                            %status,
                            attempt,
                            "model server error, retrying"
                        );
                    } else {
                        return Err(InferenceError::Api(format!(
                            "model server returned {}: {}",
                            status, detail
                        )));
                    }
                }
                Err(e) => {
                    if attempt < self.config.max_retries {
                        tracing::warn!(error = %e, attempt, "request failed, retrying");
                    } else {
                        return Err(e.into());
                    }
                }
            }

            attempt += 1;
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }

}

#[async_trait]
impl Paraphrase for Seq2SeqClient {
    async fn paraphrase(&self, text: &str) -> Result<String> {
        let tagged = format!("paraphrase: {}", text);
        let output = self
            .text2text(
                &self.config.paraphrase_model,
                &tagged,
                json!({ "max_length": 512, "num_return_sequences": 1 }),
            )
            .await
            .map_err(scribe_core::Error::from)?;
        Ok(output)
    }
}

#[async_trait]
impl Translate for Seq2SeqClient {
    async fn translate(&self, text: &str) -> Result<String> {
        let output = self
            .text2text(&self.config.translation_model, text, json!({}))
            .await
            .map_err(scribe_core::Error::from)?;
        Ok(output)
    }
}

#[async_trait]
impl RewriteGrammar for Seq2SeqClient {
    async fn rewrite(&self, tagged: &str) -> Result<String> {
        let output = self
            .text2text(&self.config.grammar_model, tagged, json!({}))
            .await
            .map_err(scribe_core::Error::from)?;
        Ok(output)
    }
}

#[async_trait]
impl Summarize for Seq2SeqClient {
    async fn summarize(&self, chunk: &str, params: &SummaryParams) -> Result<String> {
        let output = self
            .text2text(
                &self.config.summarization_model,
                chunk,
                json!({
                    "max_length": params.max_length,
                    "min_length": params.min_length,
                    "do_sample": params.do_sample,
                    "no_repeat_ngram_size": params.no_repeat_ngram_size,
                }),
            )
            .await
            .map_err(scribe_core::Error::from)?;
        Ok(output)
    }
}
