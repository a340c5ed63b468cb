// src/llm/error.rs

use thiserror::Error;

/// Why a completion call produced no usable content. Every variant is
/// recovered the same way upstream: the caller substitutes its local
/// fallback.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The request never reached the endpoint (DNS, connect, timeout).
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body lacks the expected message content path.
    #[error("no message content in completion response")]
    MissingContent,
}
