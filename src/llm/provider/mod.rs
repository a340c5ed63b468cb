// src/llm/provider/mod.rs
// Chat-completion provider trait and shared message types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::llm::error::LlmError;

pub mod openai;

/// Message format for all providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Per-call sampling controls. Each pipeline stage fixes its own values.
#[derive(Debug, Clone, Copy)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Unified response from any provider
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub content: String,
    pub metadata: ProviderMetadata,
}

/// Metadata returned by the provider, for logging only
#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub input_tokens: Option<i64>,
    pub output_tokens: Option<i64>,
    pub latency_ms: i64,
    pub finish_reason: Option<String>,
}

/// Chat-completion capability. The triage pipeline composes one remote
/// implementation with a deterministic local substitute; recovery lives in
/// the callers, not here.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// One system-framed, single-turn chat completion.
    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        system: String,
        sampling: Sampling,
    ) -> Result<ProviderResponse, LlmError>;
}
