//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use helpdesk_chat::SupportOrchestrator;
use helpdesk_core::config::HelpdeskConfig;
use helpdesk_core::corpus::FaqCorpus;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. Session
/// state lives inside the orchestrator's store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<HelpdeskConfig>,
    /// Support pipeline and session store.
    pub orchestrator: Arc<SupportOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over the given corpus.
    pub fn new(config: HelpdeskConfig, corpus: FaqCorpus) -> Self {
        let orchestrator = SupportOrchestrator::new(corpus, config.chat.clone());
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            start_time: Instant::now(),
        }
    }
}
