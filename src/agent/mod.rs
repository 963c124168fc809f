//! Agent abstraction
//!
//! An agent turns a user message (plus read-only conversation history) into a
//! lazy stream of text fragments. The orchestrator only ever sees
//! `Arc<dyn Agent>`; which variant answers is decided by the registry.

pub mod code;
pub mod default;
pub mod explain;
pub mod registry;
pub mod search;

use std::fmt;
use std::pin::Pin;
use std::str::FromStr;
use std::time::Duration;

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::error::AgentError;

pub use code::CodeAgent;
pub use default::DefaultAgent;
pub use explain::ExplainAgent;
pub use registry::AgentRegistry;
pub use search::SearchAgent;

/// A lazily produced sequence of response fragments.
///
/// An `Err` item ends the sequence abnormally; nothing is polled after it.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, AgentError>> + Send>>;

/// Selector keys understood by the registry (closed set, case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgentKind {
    Default,
    Code,
    Search,
    Explain,
    Help,
}

impl AgentKind {
    /// Every selector key, in listing order.
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Default,
        AgentKind::Code,
        AgentKind::Search,
        AgentKind::Explain,
        AgentKind::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Default => "default",
            AgentKind::Code => "code",
            AgentKind::Search => "search",
            AgentKind::Explain => "explain",
            AgentKind::Help => "help",
        }
    }

    /// The selector this key is an alias of, if any.
    ///
    /// Aliases share the target's instance and are hidden from listings.
    pub fn alias_of(&self) -> Option<AgentKind> {
        match self {
            AgentKind::Help => Some(AgentKind::Default),
            _ => None,
        }
    }

    pub fn is_alias(&self) -> bool {
        self.alias_of().is_some()
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Static identity of an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// How fast placeholder agents emit their fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Sleep the agent's own per-fragment delay, imitating model latency.
    #[default]
    Natural,
    /// Emit fragments back to back.
    Instant,
}

impl Pacing {
    fn delay(&self, natural: Duration) -> Option<Duration> {
        match self {
            Pacing::Natural => Some(natural),
            Pacing::Instant => None,
        }
    }
}

/// Trait for response generators that can be selected by a chat request.
pub trait Agent: Send + Sync {
    /// Display name, description and icon.
    fn descriptor(&self) -> &AgentDescriptor;

    /// Start a fresh response for `message`.
    ///
    /// The returned stream must not share mutable state with other calls;
    /// fragments are computed as the caller polls for them.
    fn stream_response(&self, message: &str, history: &[ConversationTurn]) -> TokenStream;

    fn name(&self) -> &str {
        self.descriptor().name
    }

    fn description(&self) -> &str {
        self.descriptor().description
    }

    fn icon(&self) -> &str {
        self.descriptor().icon
    }
}

/// Resolve a leading slash command in chat input.
///
/// `/code sort a list` selects `code` with the message `sort a list`, and a
/// bare `/code` selects it with an empty message. Plain text and anything that
/// is not a known command (including `/default`) go to `default` unchanged.
pub fn parse_input(input: &str) -> (AgentKind, String) {
    let unrouted = || (AgentKind::Default, input.to_string());

    let Some(rest) = input.strip_prefix('/') else {
        return unrouted();
    };
    let (command, message) = match rest.split_once(' ') {
        Some((command, message)) => (command, message.trim()),
        None => (rest, ""),
    };

    match command.parse::<AgentKind>() {
        Ok(AgentKind::Default) | Err(_) => unrouted(),
        Ok(kind) => (kind, message.to_string()),
    }
}

/// Fragments emitted back to back, after a single pacing delay.
pub(crate) type Step = Vec<String>;

/// Split `text` into one step per word (words split on a single space).
///
/// Every step after the first opens with a `" "` fragment, so the separator
/// goes out together with the word that follows it.
pub(crate) fn word_steps(text: &str) -> Vec<Step> {
    text.split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                vec![word.to_string()]
            } else {
                vec![" ".to_string(), word.to_string()]
            }
        })
        .collect()
}

/// Split `text` into one single-fragment step per character.
pub(crate) fn char_steps(text: &str) -> Vec<Step> {
    text.chars().map(|c| vec![c.to_string()]).collect()
}

/// Turn precomputed steps into a paced `TokenStream`.
///
/// The delay is awaited once before every step but the first, and only while
/// the consumer is polling.
pub(crate) fn paced(steps: Vec<Step>, pacing: Pacing, natural: Duration) -> TokenStream {
    let delay = pacing.delay(natural);
    futures::stream::iter(steps.into_iter().enumerate())
        .then(move |(i, step)| async move {
            if i > 0 {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
            }
            futures::stream::iter(step.into_iter().map(Ok::<_, AgentError>))
        })
        .flatten()
        .boxed()
}
