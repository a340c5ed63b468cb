// src/triage/analyzer.rs

//! Remote-first email analysis. Builds a strict-JSON instruction for the
//! completion endpoint and parses the reply into `EmailAnalysis`; any
//! failure along the way drops to the keyword heuristic.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::llm::{ChatMessage, LlmProvider, Sampling};

use super::fallback::heuristic_analysis;
use super::types::EmailAnalysis;
use super::TriageError;

const SYSTEM_PROMPT: &str =
    "You are an expert email analyst. Always respond with valid JSON only, no additional text.";

// Low temperature: classification should be as repeatable as the model allows.
const SAMPLING: Sampling = Sampling {
    temperature: 0.3,
    max_tokens: 500,
};

pub struct EmailAnalyzer {
    provider: Arc<dyn LlmProvider>,
}

impl EmailAnalyzer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Analyze an email. Never fails: any remote error is logged and the
    /// deterministic heuristic substitutes.
    pub async fn analyze(&self, subject: &str, body: &str) -> EmailAnalysis {
        match self.analyze_remote(subject, body).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("email analysis fell back to heuristics: {}", e);
                heuristic_analysis(subject, body)
            }
        }
    }

    async fn analyze_remote(
        &self,
        subject: &str,
        body: &str,
    ) -> Result<EmailAnalysis, TriageError> {
        let prompt = build_analysis_prompt(subject, body);

        let response = self
            .provider
            .chat(
                vec![ChatMessage::user(prompt)],
                SYSTEM_PROMPT.to_string(),
                SAMPLING,
            )
            .await?;

        debug!(
            "analysis completion from {} in {}ms",
            self.provider.name(),
            response.metadata.latency_ms
        );

        let analysis: EmailAnalysis = serde_json::from_str(response.content.trim())?;
        Ok(analysis)
    }
}

fn build_analysis_prompt(subject: &str, body: &str) -> String {
    format!(
        r#"Analyze this email and return a JSON object with the following structure:
{{
  "sentiment": "positive/negative/neutral",
  "priority": "urgent/high/medium/low",
  "summary": "brief summary of the email",
  "keywords": ["array", "of", "key", "topics"]
}}

Email Subject: {subject}
Email Body: {body}

Please analyze the sentiment, determine priority level (urgent for system issues, high for support requests, medium for inquiries, low for feedback), provide a brief summary, and extract 3-5 key topics/keywords."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_email_text() {
        let prompt = build_analysis_prompt("Invoice overdue", "Please settle invoice #42.");
        assert!(prompt.contains("Email Subject: Invoice overdue"));
        assert!(prompt.contains("Email Body: Please settle invoice #42."));
    }

    #[test]
    fn test_prompt_carries_priority_guidance() {
        let prompt = build_analysis_prompt("s", "b");
        assert!(prompt.contains("urgent for system issues"));
        assert!(prompt.contains("high for support requests"));
        assert!(prompt.contains("3-5 key topics/keywords"));
    }
}
