//! Hosted chat-completions backend
//!
//! Implements the [`TextGenerator`] collaborator against a hosted
//! chat-completions API (Mistral-style). Two capabilities:
//! - text continuation for the writing copilot
//! - structured suggestion analysis returning a JSON suggestions array
//!
//! Suggestion content belongs to the model; this client only assigns
//! sequential ids and back-fills default scores via
//! [`Suggestion::normalize`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use scribe_core::{
    Generation, GenerationParameters, Result, Suggestion, TextGenerator,
};

use crate::InferenceError;

const CONTINUATION_PROMPT: &str =
    "You are an AI writing assistant. Do not write anything in bold. Continue this text: ";

const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an advanced text analysis AI.
For the given text, provide improvement suggestions in a JSON object format.
Respond with a JSON object containing a "suggestions" key with an array of:
- category: Analysis category (Readability/Grammar/Style/Clarity)
- message: Detailed improvement suggestion
- severity: Issue severity (low/medium/high)
- original_text: Exact problematic text snippet
- suggested_text: Improved version of the text
- scores: Detailed scoring dictionary with readability, grammar, style and clarity numbers"#;

/// Hosted LLM client configuration
#[derive(Debug, Clone)]
pub struct HostedLlmClientConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,
    /// Bearer token
    pub api_key: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Human-readable architecture label echoed in generation responses
    pub architecture: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for HostedLlmClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.mistral.ai/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "mistral-large-latest".to_string(),
            architecture: "Mixture of Experts".to_string(),
            temperature: 0.7,
            top_p: 0.95,
            max_tokens: 500,
            timeout: Duration::from_secs(60),
        }
    }
}

impl HostedLlmClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    completion_tokens: u64,
}

/// Hosted chat-completions backend
pub struct HostedLlmBackend {
    client: Client,
    config: HostedLlmClientConfig,
}

impl HostedLlmBackend {
    pub fn new(config: HostedLlmClientConfig) -> std::result::Result<Self, InferenceError> {
        if config.api_key.is_empty() {
            tracing::warn!("hosted LLM API key is empty; requests will be rejected upstream");
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn chat(
        &self,
        messages: serde_json::Value,
        response_format: Option<serde_json::Value>,
    ) -> std::result::Result<ChatResponse, InferenceError> {
        let mut body = json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
            "max_tokens": self.config.max_tokens,
            "stream": false,
        });
        if let Some(format) = response_format {
            body["response_format"] = format;
        }

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api(format!(
                "hosted LLM returned {}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;
        if parsed.choices.is_empty() {
            return Err(InferenceError::InvalidResponse(
                "response contained no choices".to_string(),
            ));
        }
        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerator for HostedLlmBackend {
    async fn generate(&self, prompt: &str) -> Result<Generation> {
        let messages = json!([{
            "role": "user",
            "content": format!("{}{}", CONTINUATION_PROMPT, prompt),
        }]);

        let response = self.chat(messages, None).await.map_err(scribe_core::Error::from)?;
        let tokens_generated = response
            .usage
            .as_ref()
            .map(|u| u.completion_tokens)
            .unwrap_or(0);
        let generated_text = response.choices.into_iter().next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(Generation {
            generated_text,
            model: self.config.model.clone(),
            parameters: GenerationParameters {
                architecture: self.config.architecture.clone(),
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                tokens_generated,
            },
        })
    }

    async fn analyze(&self, text: &str) -> Result<Vec<Suggestion>> {
        let messages = json!([
            { "role": "system", "content": ANALYSIS_SYSTEM_PROMPT },
            {
                "role": "user",
                "content": format!("Analyze this text and provide detailed suggestions: {}", text),
            },
        ]);

        let response = self
            .chat(messages, Some(json!({ "type": "json_object" })))
            .await
            .map_err(scribe_core::Error::from)?;
        let content = response.choices.into_iter().next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        // A transport failure is an error, but a model that returned
        // unparseable or misshapen JSON yields an empty suggestion list:
        // the caller still gets a response.
        let suggestions = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(value) => match value.get("suggestions") {
                Some(array) => {
                    serde_json::from_value::<Vec<Suggestion>>(array.clone()).unwrap_or_else(|e| {
                        tracing::warn!(error = %e, "suggestions array did not deserialize");
                        Vec::new()
                    })
                }
                None => {
                    tracing::warn!("analysis response missing 'suggestions' key");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "analysis response was not valid JSON");
                Vec::new()
            }
        };

        Ok(Suggestion::normalize(suggestions))
    }
}
