// src/mailbox/store.rs

use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::triage::{EmailAnalysis, Priority};

use super::ordering::{sort_for_inbox, triage_only};
use super::types::Email;

/// Collection-level failures. Pipeline failures never appear here: the
/// analyzer and responder always produce a value.
#[derive(Debug, Error, PartialEq)]
pub enum MailboxError {
    #[error("no email with id {0}")]
    NotFound(String),

    /// A draft was recorded for an email that has never been analyzed.
    #[error("email {0} has no analysis yet")]
    NotAnalyzed(String),
}

/// Counts for the dashboard header tiles.
#[derive(Debug, Clone, Serialize)]
pub struct MailboxStats {
    pub total: usize,
    pub urgent: usize,
    pub analyzed: usize,
    pub triaged: usize,
}

/// The in-memory email collection - the only shared mutable state in the
/// service.
pub struct Mailbox {
    emails: RwLock<Vec<Email>>,
}

impl Mailbox {
    pub fn new(seed: Vec<Email>) -> Self {
        Self {
            emails: RwLock::new(seed),
        }
    }

    /// All emails in inbox order; `triaged` restricts to the triage queue.
    pub async fn list(&self, triaged: bool) -> Vec<Email> {
        let emails = self.emails.read().await;
        let mut out = if triaged {
            triage_only(emails.clone())
        } else {
            emails.clone()
        };
        sort_for_inbox(&mut out);
        out
    }

    pub async fn get(&self, id: &str) -> Option<Email> {
        self.emails.read().await.iter().find(|e| e.id == id).cloned()
    }

    pub async fn insert(&self, email: Email) {
        self.emails.write().await.push(email);
    }

    /// Overwrite the analysis on an existing record.
    pub async fn record_analysis(
        &self,
        id: &str,
        analysis: EmailAnalysis,
    ) -> Result<(), MailboxError> {
        let mut emails = self.emails.write().await;
        let email = emails
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| MailboxError::NotFound(id.to_string()))?;
        email.analysis = Some(analysis);
        Ok(())
    }

    /// Overwrite the draft on an analyzed record. A draft without a prior
    /// analysis is rejected.
    pub async fn record_draft(&self, id: &str, draft: String) -> Result<(), MailboxError> {
        let mut emails = self.emails.write().await;
        let email = emails
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| MailboxError::NotFound(id.to_string()))?;
        if email.analysis.is_none() {
            return Err(MailboxError::NotAnalyzed(id.to_string()));
        }
        email.draft_response = Some(draft);
        Ok(())
    }

    pub async fn stats(&self) -> MailboxStats {
        let emails = self.emails.read().await;
        MailboxStats {
            total: emails.len(),
            urgent: emails
                .iter()
                .filter(|e| {
                    e.analysis
                        .as_ref()
                        .is_some_and(|a| a.priority == Priority::Urgent)
                })
                .count(),
            analyzed: emails.iter().filter(|e| e.analysis.is_some()).count(),
            triaged: emails.iter().filter(|e| e.is_triaged).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::Sentiment;
    use chrono::Utc;

    fn bare_email(id: &str) -> Email {
        Email {
            id: id.to_string(),
            subject: "subject".to_string(),
            sender: "sender@example.com".to_string(),
            body: "body".to_string(),
            timestamp: Utc::now(),
            analysis: None,
            draft_response: None,
            is_triaged: false,
        }
    }

    fn some_analysis() -> EmailAnalysis {
        EmailAnalysis {
            sentiment: Sentiment::Neutral,
            priority: Priority::Medium,
            summary: "summary".to_string(),
            keywords: vec!["email".to_string()],
        }
    }

    #[tokio::test]
    async fn test_draft_rejected_without_analysis() {
        let mailbox = Mailbox::new(vec![bare_email("1")]);

        let result = mailbox.record_draft("1", "Dear Customer".to_string()).await;
        assert_eq!(result, Err(MailboxError::NotAnalyzed("1".to_string())));
        assert!(mailbox.get("1").await.unwrap().draft_response.is_none());
    }

    #[tokio::test]
    async fn test_draft_recorded_after_analysis() {
        let mailbox = Mailbox::new(vec![bare_email("1")]);

        mailbox.record_analysis("1", some_analysis()).await.unwrap();
        mailbox
            .record_draft("1", "Dear Customer".to_string())
            .await
            .unwrap();

        let email = mailbox.get("1").await.unwrap();
        assert_eq!(email.draft_response.as_deref(), Some("Dear Customer"));
    }

    #[tokio::test]
    async fn test_reanalysis_overwrites() {
        let mailbox = Mailbox::new(vec![bare_email("1")]);

        mailbox.record_analysis("1", some_analysis()).await.unwrap();
        let mut second = some_analysis();
        second.priority = Priority::Urgent;
        mailbox.record_analysis("1", second).await.unwrap();

        let email = mailbox.get("1").await.unwrap();
        assert_eq!(email.analysis.unwrap().priority, Priority::Urgent);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let mailbox = Mailbox::new(vec![]);

        assert!(mailbox.get("missing").await.is_none());
        assert_eq!(
            mailbox.record_analysis("missing", some_analysis()).await,
            Err(MailboxError::NotFound("missing".to_string()))
        );
    }
}
