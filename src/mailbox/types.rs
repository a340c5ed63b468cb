// src/mailbox/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::triage::EmailAnalysis;

/// One email record. Created at ingestion (fixture or import) and immutable
/// afterwards, except for the two fields the pipeline writes in place.
/// Serialized camelCase to match the dashboard's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    pub subject: String,
    pub sender: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,

    /// Written by the analyzer; each re-run overwrites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<EmailAnalysis>,

    /// Written by the responder; only meaningful once `analysis` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_response: Option<String>,

    /// Set by upstream ingestion, read-only from the pipeline's side.
    #[serde(default)]
    pub is_triaged: bool,
}
