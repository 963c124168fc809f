use serde::{Deserialize, Serialize};

use crate::agent::AgentRegistry;

/// Public description of one listable agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Response for `GET /api/agents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsResponse {
    pub agents: Vec<AgentInfo>,
}

impl AgentsResponse {
    /// List every registered agent except aliases, in selector order.
    pub fn from_registry(registry: &AgentRegistry) -> Self {
        let agents = registry
            .all()
            .into_iter()
            .map(|(kind, agent)| AgentInfo {
                id: kind.as_str().to_string(),
                name: agent.name().to_string(),
                description: agent.description().to_string(),
                icon: agent.icon().to_string(),
            })
            .collect();
        Self { agents }
    }
}

/// Response for `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub agents_loaded: bool,
    pub agent_count: usize,
}

impl HealthResponse {
    pub fn from_registry(registry: &AgentRegistry) -> Self {
        let agent_count = registry.count();
        Self {
            status: "healthy".to_string(),
            agents_loaded: agent_count > 0,
            agent_count,
        }
    }
}
