use std::time::Duration;

use super::{char_steps, paced, Agent, AgentDescriptor, ConversationTurn, Pacing, TokenStream};

const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "Code",
    description: "Code assistance and generation",
    icon: "code",
};

const CHAR_DELAY: Duration = Duration::from_millis(10);

/// Code-focused responder. Streams character by character so code blocks
/// render progressively.
#[derive(Debug, Default)]
pub struct CodeAgent {
    pacing: Pacing,
}

impl CodeAgent {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    pub fn reply(message: &str) -> String {
        let mut response = format!("[Code Agent] Analyzing your request: \"{message}\"\n\n");
        response.push_str("Here's a code example:\n\n");
        response.push_str("```python\n");
        response.push_str("def hello_world():\n");
        response.push_str("    print('Hello, World!')\n");
        response.push_str("```\n\n");
        response.push_str(
            "This is a placeholder response. \
             In production, I would generate actual code based on your request.",
        );
        response
    }
}

impl Agent for CodeAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &DESCRIPTOR
    }

    fn stream_response(&self, message: &str, _history: &[ConversationTurn]) -> TokenStream {
        paced(char_steps(&Self::reply(message)), self.pacing, CHAR_DELAY)
    }
}
