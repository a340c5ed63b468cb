// src/state.rs

use std::sync::Arc;

use crate::llm::LlmProvider;
use crate::mailbox::{fixtures, Mailbox};
use crate::triage::{EmailAnalyzer, ResponseGenerator};

/// Shared service state: the mailbox plus the two pipeline components.
#[derive(Clone)]
pub struct AppState {
    pub mailbox: Arc<Mailbox>,
    pub analyzer: Arc<EmailAnalyzer>,
    pub responder: Arc<ResponseGenerator>,
}

/// Assemble the state over a provider; the mailbox starts from the demo
/// fixtures.
pub fn create_app_state(provider: Arc<dyn LlmProvider>) -> AppState {
    AppState {
        mailbox: Arc::new(Mailbox::new(fixtures::seed_emails())),
        analyzer: Arc::new(EmailAnalyzer::new(provider.clone())),
        responder: Arc::new(ResponseGenerator::new(provider)),
    }
}
