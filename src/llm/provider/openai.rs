// src/llm/provider/openai.rs
// OpenAI-compatible chat completions provider

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::{ChatMessage, LlmProvider, ProviderMetadata, ProviderResponse, Sampling};
use crate::config::CONFIG;
use crate::llm::error::LlmError;

pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Build the provider from the environment. The API key is read here
    /// and nowhere else; it never enters the config struct or the logs.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY must be set"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(CONFIG.openai_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: CONFIG.openai_base_url.clone(),
            api_key,
            model: CONFIG.model.clone(),
        })
    }

    /// Explicit construction, used by tests to point at arbitrary endpoints.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        system: String,
        sampling: Sampling,
    ) -> Result<ProviderResponse, LlmError> {
        let start = Instant::now();

        let mut api_messages = vec![json!({
            "role": "system",
            "content": system
        })];

        for msg in messages {
            api_messages.push(json!({
                "role": msg.role,
                "content": msg.content
            }));
        }

        let body = json!({
            "model": self.model,
            "messages": api_messages,
            "temperature": sampling.temperature,
            "max_tokens": sampling.max_tokens,
        });

        debug!(
            "chat completion request: model={} temperature={}",
            self.model, sampling.temperature
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let raw = response.json::<Value>().await?;
        let latency_ms = start.elapsed().as_millis() as i64;

        // Extract content (OpenAI format); an empty string counts as missing
        let content = match raw["choices"][0]["message"]["content"].as_str() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => return Err(LlmError::MissingContent),
        };

        let usage = &raw["usage"];
        let metadata = ProviderMetadata {
            input_tokens: usage["prompt_tokens"].as_i64(),
            output_tokens: usage["completion_tokens"].as_i64(),
            latency_ms,
            finish_reason: raw["choices"][0]["finish_reason"]
                .as_str()
                .map(|s| s.to_string()),
        };

        if let (Some(input), Some(output)) = (metadata.input_tokens, metadata.output_tokens) {
            debug!("completion usage: {} prompt + {} completion tokens", input, output);
        }

        Ok(ProviderResponse { content, metadata })
    }
}
