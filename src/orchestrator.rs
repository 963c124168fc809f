//! Stream orchestration
//!
//! Turns a [`ChatRequest`] into the ordered [`StreamEvent`] sequence of one
//! response:
//!
//! - unknown selector: a single `error` (`UNKNOWN_AGENT`);
//! - otherwise `agent-resolved`, one `token` per fragment, then either `done`
//!   or a single `error` (`STREAM_ERROR`) if the agent fails.
//!
//! The output is pull-based. Nothing is requested from the agent until the
//! consumer polls for the next event, and dropping the stream drops the
//! agent's stream with it.

use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

use crate::agent::{AgentKind, AgentRegistry, ConversationTurn, TokenStream};
use crate::event::{ErrorCode, StreamEvent};

/// Request body for a streamed chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    /// Raw selector key. Validated by the orchestrator, not the extractor.
    #[serde(default = "default_agent")]
    pub agent: String,
}

fn default_agent() -> String {
    AgentKind::Default.as_str().to_string()
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
            agent: agent.into(),
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

pub type EventStream = Pin<Box<dyn Stream<Item = StreamEvent> + Send>>;

/// Drives agents and frames their output as stream events.
#[derive(Clone)]
pub struct Orchestrator {
    registry: Arc<AgentRegistry>,
}

impl Orchestrator {
    pub fn new(registry: Arc<AgentRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<AgentRegistry> {
        &self.registry
    }

    /// Start the event stream for `request`. The clock for `done` starts now.
    pub fn stream(&self, request: ChatRequest) -> EventStream {
        let run = Run {
            registry: Arc::clone(&self.registry),
            request_id: Uuid::new_v4(),
            started: Instant::now(),
        };

        futures::stream::unfold(
            (run, State::Resolving(request)),
            |(run, state)| async move {
                let (event, next) = run.advance(state).await?;
                Some((event, (run, next)))
            },
        )
        .boxed()
    }
}

enum State {
    Resolving(ChatRequest),
    Streaming {
        agent: String,
        tokens: TokenStream,
        emitted: usize,
    },
    Finished,
}

struct Run {
    registry: Arc<AgentRegistry>,
    request_id: Uuid,
    started: Instant,
}

impl Run {
    /// Produce the next event and the state that follows it, or `None` once
    /// a terminal event has been emitted.
    async fn advance(&self, state: State) -> Option<(StreamEvent, State)> {
        match state {
            State::Resolving(request) => Some(self.resolve(request)),
            State::Streaming {
                agent,
                mut tokens,
                emitted,
            } => Some(match tokens.next().await {
                Some(Ok(token)) => (
                    StreamEvent::token(token),
                    State::Streaming {
                        agent,
                        tokens,
                        emitted: emitted + 1,
                    },
                ),
                Some(Err(e)) => {
                    tracing::warn!(
                        request_id = %self.request_id,
                        agent = %agent,
                        emitted,
                        "Agent failed mid-stream: {e}"
                    );
                    (
                        StreamEvent::error(ErrorCode::StreamError, e.to_string()),
                        State::Finished,
                    )
                }
                None => {
                    let processing_time_ms =
                        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
                    tracing::info!(
                        request_id = %self.request_id,
                        agent = %agent,
                        tokens = emitted,
                        processing_time_ms,
                        "Chat stream complete"
                    );
                    (StreamEvent::Done { processing_time_ms }, State::Finished)
                }
            }),
            State::Finished => None,
        }
    }

    fn resolve(&self, request: ChatRequest) -> (StreamEvent, State) {
        let Some(agent) = self.registry.resolve(&request.agent) else {
            tracing::warn!(
                request_id = %self.request_id,
                agent = %request.agent,
                "Unknown agent requested"
            );
            let message = format!("Unknown agent: {}", request.agent);
            return (
                StreamEvent::error(ErrorCode::UnknownAgent, message),
                State::Finished,
            );
        };

        tracing::debug!(
            request_id = %self.request_id,
            agent = %request.agent,
            history = request.history.len(),
            "Resolved agent"
        );

        let tokens = agent.stream_response(&request.message, &request.history);
        let event = StreamEvent::AgentResolved {
            agent: request.agent.clone(),
            name: agent.name().to_string(),
            description: agent.description().to_string(),
        };

        (
            event,
            State::Streaming {
                agent: request.agent,
                tokens,
                emitted: 0,
            },
        )
    }
}
