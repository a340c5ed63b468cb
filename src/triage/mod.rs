// src/triage/mod.rs

//! The email triage pipeline: an analyzer that classifies an email's
//! sentiment, priority, and topics, and a responder that drafts a reply.
//! Both are remote-first with deterministic local fallbacks, so neither
//! ever returns an error to its caller.

use thiserror::Error;

pub mod analyzer;
pub mod fallback;
pub mod responder;
pub mod types;

pub use analyzer::EmailAnalyzer;
pub use responder::ResponseGenerator;
pub use types::{EmailAnalysis, Priority, Sentiment};

use crate::llm::LlmError;

/// Why a remote triage call was abandoned in favor of the fallback.
/// Logged and recovered inside the pipeline; never surfaced to callers.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Analyzer only: the completion content did not parse into the
    /// analysis schema.
    #[error("completion content is not a valid analysis: {0}")]
    Schema(#[from] serde_json::Error),
}
