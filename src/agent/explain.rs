use std::time::Duration;

use super::{paced, word_steps, Agent, AgentDescriptor, ConversationTurn, Pacing, TokenStream};

const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "Explain",
    description: "Explain concepts in detail",
    icon: "book",
};

const WORD_DELAY: Duration = Duration::from_millis(25);

/// Explanatory responder producing a structured overview.
#[derive(Debug, Default)]
pub struct ExplainAgent {
    pacing: Pacing,
}

impl ExplainAgent {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    pub fn reply(message: &str) -> String {
        let mut response = format!("[Explain Agent] Let me explain: \"{message}\"\n\n");
        response.push_str("## Overview\n\n");
        response.push_str("This is an important topic that deserves a thorough explanation. ");
        response.push_str("Let me break it down for you:\n\n");
        response.push_str("### Key Points\n\n");
        response.push_str("1. **First concept** - The foundational idea\n");
        response.push_str("2. **Second concept** - Building on the first\n");
        response.push_str("3. **Third concept** - Advanced understanding\n\n");
        response.push_str("### Summary\n\n");
        response.push_str(
            "This is a placeholder explanation. \
             In production, I would provide a comprehensive breakdown of your topic.",
        );
        response
    }
}

impl Agent for ExplainAgent {
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
    async fn test_each_call_is_independent() {
        let agent = ExplainAgent::new(Pacing::Instant);
        let mut a = agent.stream_response("ownership", &[]);
        let b: Vec<String> = agent.stream_response("lifetimes", &[]).try_collect().await.unwrap();

        assert_eq!(b.concat(), ExplainAgent::reply("lifetimes"));
        let first = a.try_next().await.unwrap();
        assert_eq!(first.as_deref(), Some("[Explain"));
    }
}
