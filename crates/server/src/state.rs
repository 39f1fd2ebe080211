use docsum_common::AppConfig;
use docsum_llm::CompletionClient;
use std::sync::Arc;

use crate::session::SessionStore;
use crate::workflow::GenerationWorkflow;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Per-session results
    pub sessions: Arc<SessionStore>,

    /// Generation pipeline
    pub workflow: GenerationWorkflow,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, client: Arc<dyn CompletionClient>) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let workflow = GenerationWorkflow::new(client, sessions.clone());

        Self {
            config,
            sessions,
            workflow,
        }
    }
}
