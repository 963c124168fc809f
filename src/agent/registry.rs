use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::{Agent, AgentKind, CodeAgent, DefaultAgent, ExplainAgent, Pacing, SearchAgent};

/// Owns the live agent instances, keyed by selector.
///
/// Populated once at startup and cleared at shutdown; requests only read it.
pub struct AgentRegistry {
    agents: RwLock<BTreeMap<AgentKind, Arc<dyn Agent>>>,
    pacing: Pacing,
}

impl AgentRegistry {
    /// Create an empty registry. Call [`initialize`](Self::initialize) before serving.
    pub fn new() -> Self {
        Self::with_pacing(Pacing::default())
    }

    /// Create an empty registry whose built-in agents will use `pacing`.
    pub fn with_pacing(pacing: Pacing) -> Self {
        Self {
            agents: RwLock::new(BTreeMap::new()),
            pacing,
        }
    }

    /// Construct one agent per selector key, replacing anything registered before.
    pub fn initialize(&self) {
        let default: Arc<dyn Agent> = Arc::new(DefaultAgent::new(self.pacing));

        let mut agents = BTreeMap::new();
        for kind in AgentKind::ALL {
            let agent: Arc<dyn Agent> = match kind {
                AgentKind::Default => Arc::clone(&default),
                AgentKind::Code => Arc::new(CodeAgent::new(self.pacing)),
                AgentKind::Search => Arc::new(SearchAgent::new(self.pacing)),
                AgentKind::Explain => Arc::new(ExplainAgent::new(self.pacing)),
                // Aliases share their target's instance.
                AgentKind::Help => Arc::clone(&default),
            };
            agents.insert(kind, agent);
        }

        *self.write() = agents;
        tracing::info!(count = AgentKind::ALL.len(), "Initialized agent registry");
    }

    /// Register `agent` under `kind`, replacing any existing instance.
    ///
    /// Registering the target of an alias does not move the alias; call this
    /// for both keys to keep them sharing an instance.
    pub fn register(&self, kind: AgentKind, agent: Arc<dyn Agent>) {
        if self.write().insert(kind, agent).is_some() {
            tracing::debug!(agent = %kind, "Replaced registered agent");
        }
    }

    /// Look up the agent for a selector key.
    ///
    /// Unknown keys are an expected client input, so absence is `None`
    /// rather than an error.
    pub fn resolve(&self, key: &str) -> Option<Arc<dyn Agent>> {
        let kind = key.parse::<AgentKind>().ok()?;
        self.get(kind)
    }

    /// Look up the agent for an already parsed selector.
    pub fn get(&self, kind: AgentKind) -> Option<Arc<dyn Agent>> {
        self.read().get(&kind).cloned()
    }

    /// All listable agents in selector order, aliases excluded.
    pub fn all(&self) -> Vec<(AgentKind, Arc<dyn Agent>)> {
        self.read()
            .iter()
            .filter(|(kind, _)| !kind.is_alias())
            .map(|(kind, agent)| (*kind, Arc::clone(agent)))
            .collect()
    }

    /// Number of registered selector keys, aliases included.
    pub fn count(&self) -> usize {
        self.read().len()
    }

    pub fn is_loaded(&self) -> bool {
        self.count() > 0
    }

    /// Release every agent instance.
    pub fn teardown(&self) {
        let released = {
            let mut agents = self.write();
            let released = agents.len();
            agents.clear();
            released
        };
        tracing::info!(released, "Tore down agent registry");
    }

    // Writers never panic mid-update; poisoning is ignored.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<AgentKind, Arc<dyn Agent>>> {
        self.agents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<AgentKind, Arc<dyn Agent>>> {
        self.agents.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
