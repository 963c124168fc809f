use std::io::Write;
use std::sync::Arc;

use futures::StreamExt;

use crate::agent::{parse_input, AgentRegistry};
use crate::error::{ChatError, Result};
use crate::event::{ErrorCode, StreamEvent};
use crate::orchestrator::{ChatRequest, Orchestrator};

/// Build the request for `message`. Without an explicit selector, a leading
/// slash command picks the agent and is stripped from the message.
pub fn route(message: &str, agent: Option<&str>) -> ChatRequest {
    match agent {
        Some(agent) => ChatRequest::new(message, agent),
        None => {
            let (kind, message) = parse_input(message);
            ChatRequest::new(message, kind.as_str())
        }
    }
}

/// Execute the `ask` command: stream one reply to stdout.
///
/// With `raw`, the SSE frames are printed exactly as the server would send them.
pub async fn execute(
    registry: Arc<AgentRegistry>,
    message: &str,
    agent: Option<&str>,
    raw: bool,
) -> Result<()> {
    let request = route(message, agent);
    let agent = request.agent.clone();
    tracing::debug!(agent = %agent, "Routing ask request");

    let orchestrator = Orchestrator::new(registry);
    let mut events = orchestrator.stream(request);
    let mut stdout = std::io::stdout();

    while let Some(event) = events.next().await {
        if raw {
            stdout.write_all(event.encode().as_bytes())?;
            stdout.flush()?;
            continue;
        }

        match event {
            StreamEvent::AgentResolved { name, .. } => {
                writeln!(stdout, "[{name}]")?;
            }
            StreamEvent::Token { token } => {
                stdout.write_all(token.as_bytes())?;
                stdout.flush()?;
            }
            StreamEvent::Done { processing_time_ms } => {
                writeln!(stdout, "\n\n({processing_time_ms} ms)")?;
            }
            StreamEvent::Error {
                code: ErrorCode::UnknownAgent,
                ..
            } => {
                return Err(ChatError::AgentNotFound(agent));
            }
            StreamEvent::Error { message, .. } => {
                writeln!(stdout)?;
                return Err(ChatError::Server(format!("Agent stream failed: {message}")));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Pacing;

    fn registry() -> Arc<AgentRegistry> {
        let registry = AgentRegistry::with_pacing(Pacing::Instant);
        registry.initialize();
        Arc::new(registry)
    }

    #[test]
    fn test_route_slash_command() {
        let request = route("/code sort a list", None);
        assert_eq!(request.agent, "code");
        assert_eq!(request.message, "sort a list");

        let request = route("/unknown test", None);
        assert_eq!(request.agent, "default");
        assert_eq!(request.message, "/unknown test");
    }

    #[test]
    fn test_route_explicit_agent_keeps_message() {
        let request = route("/code sort a list", Some("search"));
        assert_eq!(request.agent, "search");
        assert_eq!(request.message, "/code sort a list");
    }

    #[tokio::test]
    async fn test_execute_unknown_agent() {
        let result = execute(registry(), "hi", Some("nope"), true).await;
        assert!(matches!(result, Err(ChatError::AgentNotFound(agent)) if agent == "nope"));
    }

    #[tokio::test]
    async fn test_execute_routes_slash_command() {
        assert!(execute(registry(), "/search rust", None, true).await.is_ok());
    }
}
