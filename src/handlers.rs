// src/handlers.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::mailbox::{Email, MailboxStats};
use crate::state::AppState;
use crate::triage::EmailAnalysis;

#[derive(Deserialize)]
pub struct ListQuery {
    pub triaged: Option<bool>,
}

/// Import payload: everything except the id, which the server assigns.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEmail {
    pub subject: String,
    pub sender: String,
    pub body: String,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_triaged: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReply {
    pub draft_response: String,
}

pub async fn list_emails(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Json<Vec<Email>> {
    Json(state.mailbox.list(params.triaged.unwrap_or(false)).await)
}

pub async fn get_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Email>> {
    state
        .mailbox
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no email with id {id}")))
}

pub async fn import_email(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ImportEmail>,
) -> ApiResult<(StatusCode, Json<Email>)> {
    if payload.subject.trim().is_empty() && payload.body.trim().is_empty() {
        return Err(ApiError::bad_request("subject or body must be non-empty"));
    }

    let email = Email {
        id: Uuid::new_v4().to_string(),
        subject: payload.subject,
        sender: payload.sender,
        body: payload.body,
        timestamp: payload.timestamp.unwrap_or_else(Utc::now),
        analysis: None,
        draft_response: None,
        is_triaged: payload.is_triaged,
    };

    info!("imported email {} from {}", email.id, email.sender);
    state.mailbox.insert(email.clone()).await;

    Ok((StatusCode::CREATED, Json(email)))
}

/// Run the analyzer and store its result on the record. The pipeline never
/// fails, so the only error here is an unknown id.
pub async fn analyze_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<EmailAnalysis>> {
    let email = state
        .mailbox
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("no email with id {id}")))?;

    let analysis = state.analyzer.analyze(&email.subject, &email.body).await;
    state.mailbox.record_analysis(&id, analysis.clone()).await?;

    info!(
        "analyzed email {}: sentiment={} priority={}",
        id,
        analysis.sentiment.as_str(),
        analysis.priority.as_str()
    );

    Ok(Json(analysis))
}

/// Draft a reply for an analyzed email. Answers 409 until an analysis
/// exists.
pub async fn draft_response(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DraftReply>> {
    let email = state
        .mailbox
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("no email with id {id}")))?;

    let analysis = email
        .analysis
        .ok_or_else(|| ApiError::conflict(format!("email {id} has no analysis yet")))?;

    let draft = state
        .responder
        .generate(&email.subject, &email.body, &analysis)
        .await;
    state.mailbox.record_draft(&id, draft.clone()).await?;

    info!("drafted response for email {}", id);

    Ok(Json(DraftReply {
        draft_response: draft,
    }))
}

pub async fn inbox_stats(State(state): State<Arc<AppState>>) -> Json<MailboxStats> {
    Json(state.mailbox.stats().await)
}
