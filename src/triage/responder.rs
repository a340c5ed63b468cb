// src/triage/responder.rs

//! Remote-first reply drafting. The prompt carries the original email plus
//! its analysis; failures drop to the priority/sentiment template.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm::{ChatMessage, LlmProvider, Sampling};

use super::fallback::heuristic_response;
use super::types::EmailAnalysis;
use super::TriageError;

const SYSTEM_PROMPT: &str =
    "You are a professional customer service representative. Generate helpful, professional email responses.";

// Warmer sampling than the analyzer: drafts should read like prose.
const SAMPLING: Sampling = Sampling {
    temperature: 0.7,
    max_tokens: 400,
};

pub struct ResponseGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Draft a reply for an analyzed email. Never fails: any remote error
    /// is logged and the deterministic template substitutes.
    pub async fn generate(&self, subject: &str, body: &str, analysis: &EmailAnalysis) -> String {
        match self.generate_remote(subject, body, analysis).await {
            Ok(draft) => draft,
            Err(e) => {
                warn!("response drafting fell back to template: {}", e);
                heuristic_response(analysis)
            }
        }
    }

    async fn generate_remote(
        &self,
        subject: &str,
        body: &str,
        analysis: &EmailAnalysis,
    ) -> Result<String, TriageError> {
        let prompt = build_response_prompt(subject, body, analysis);

        let response = self
            .provider
            .chat(
                vec![ChatMessage::user(prompt)],
                SYSTEM_PROMPT.to_string(),
                SAMPLING,
            )
            .await?;

        debug!(
            "draft completion from {} in {}ms",
            self.provider.name(),
            response.metadata.latency_ms
        );

        Ok(response.content.trim().to_string())
    }
}

fn build_response_prompt(subject: &str, body: &str, analysis: &EmailAnalysis) -> String {
    format!(
        r#"Generate a professional, friendly email response based on this email and its analysis:

Original Email Subject: {subject}
Original Email Body: {body}

Analysis:
- Sentiment: {sentiment}
- Priority: {priority}
- Summary: {summary}
- Keywords: {keywords}

Generate a professional response that:
1. Acknowledges the sender appropriately
2. Addresses their concern/request directly
3. Provides a clear next step or timeline
4. Maintains a helpful, professional tone
5. Is appropriate for the priority level (urgent = immediate action, high = within 24 hours, medium = within 2-3 days)

Keep the response concise but complete."#,
        sentiment = analysis.sentiment.as_str(),
        priority = analysis.priority.as_str(),
        summary = analysis.summary,
        keywords = analysis.keywords.join(", "),
    )
}
