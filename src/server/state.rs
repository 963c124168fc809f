use std::sync::Arc;

use crate::agent::AgentRegistry;
use crate::config::ChatConfig;
use crate::orchestrator::Orchestrator;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub config: Arc<ChatConfig>,
}

impl AppState {
    pub fn new(registry: Arc<AgentRegistry>, config: Arc<ChatConfig>) -> Self {
        Self {
            orchestrator: Orchestrator::new(registry),
            config,
        }
    }
}
