use std::time::Duration;

use super::{paced, word_steps, Agent, AgentDescriptor, ConversationTurn, Pacing, TokenStream};

const DESCRIPTOR: AgentDescriptor = AgentDescriptor {
    name: "Default",
    description: "General chat assistant",
    icon: "chat",
};

const WORD_DELAY: Duration = Duration::from_millis(30);

/// General-purpose responder for everyday questions.
///
/// Also answers the `help` selector.
#[derive(Debug, Default)]
pub struct DefaultAgent {
    pacing: Pacing,
}

impl DefaultAgent {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    /// The full reply for `message`, before it is split into fragments.
    pub fn reply(message: &str) -> String {
        format!(
            "I received your message: \"{message}\". \
             I'm the default assistant, ready to help with general questions. \
             Try using /code for programming help, /search for lookups, \
             or /explain for detailed explanations."
        )
    }
}

impl Agent for DefaultAgent {
    fn descriptor(&self) -> &AgentDescriptor {
        &DESCRIPTOR
    }

    fn stream_response(&self, message: &str, _history: &[ConversationTurn]) -> TokenStream {
        paced(word_steps(&Self::reply(message)), self.pacing, WORD_DELAY)
    }
}
