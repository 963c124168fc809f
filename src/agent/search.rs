use std::time::Duration;

use super::{paced, word_steps, Agent, AgentDescriptor, ConversationTurn, Pacing, TokenStream};

const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "Search",
    description: "Web search and information lookup",
    icon: "search",
};

const WORD_DELAY: Duration = Duration::from_millis(20);

/// Lookup responder. Placeholder results until a search backend is wired in.
#[derive(Debug, Default)]
pub struct SearchAgent {
    pacing: Pacing,
}

impl SearchAgent {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    pub fn reply(message: &str) -> String {
        let mut response = format!("[Search Agent] Searching for: \"{message}\"\n\n");
        response.push_str("Here are the top results:\n\n");
        response.push_str("1. **Result One** - A relevant finding about your query\n");
        response.push_str("2. **Result Two** - Additional information discovered\n");
        response.push_str("3. **Result Three** - More context and details\n\n");
        response.push_str(
            "This is a placeholder. In production, I would search the web and return real results.",
        );
        response
    }
}

impl Agent for SearchAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &DESCRIPTOR
    }

    fn stream_response(&self, message: &str, _history: &[ConversationTurn]) -> TokenStream {
        paced(word_steps(&Self::reply(message)), self.pacing, WORD_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    #[tokio::test]
    async fn test_stream_matches_reply() {
        let agent = SearchAgent::new(Pacing::Instant);
        let text: String = agent
            .stream_response("rust sse", &[])
            .try_collect::<Vec<_>>()
            .await
            .unwrap()
            .concat();
        assert_eq!(text, SearchAgent::reply("rust sse"));
        assert!(text.starts_with("[Search Agent] Searching for: \"rust sse\""));
    }
}
