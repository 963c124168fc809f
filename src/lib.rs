//! # a3s-chat
//!
//! Slash-command agent routing with Server-Sent Events streaming.
//!
//! ## Overview
//!
//! A chat request names an agent by selector key (`default`, `code`,
//! `search`, `explain`, or the `help` alias). The [`Orchestrator`] resolves
//! the key through the [`AgentRegistry`], pulls fragments from the agent one
//! at a time, and emits them as [`StreamEvent`]s:
//!
//! ```text
//! agent-resolved → token* → done
//!                         ↘ error (STREAM_ERROR)
//! error (UNKNOWN_AGENT)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use a3s_chat::{AgentRegistry, ChatRequest, Orchestrator, Pacing};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let registry = Arc::new(AgentRegistry::with_pacing(Pacing::Instant));
//! registry.initialize();
//!
//! let orchestrator = Orchestrator::new(registry);
//! let mut events = orchestrator.stream(ChatRequest::new("hi", "default"));
//! while let Some(event) = events.next().await {
//!     print!("{}", event.encode());
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Agent** trait: identity plus a lazy fragment stream per call
//! - **AgentRegistry**: selector key → shared agent instance
//! - **Orchestrator**: the per-request event state machine
//! - **StreamEvent**: typed events and their SSE framing
//! - **server** / **api**: axum routes for `/api/chat`, `/api/agents`, `/api/health`

pub mod agent;
pub mod api;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod event;
pub mod orchestrator;
pub mod server;

// Re-export core types
pub use agent::{
    parse_input, Agent, AgentDescriptor, AgentKind, AgentRegistry, CodeAgent, ConversationTurn,
    DefaultAgent, ExplainAgent, Pacing, Role, SearchAgent, TokenStream,
};
pub use config::ChatConfig;
pub use error::{AgentError, ChatError, Result};
pub use event::{ErrorCode, StreamEvent};
pub use orchestrator::{ChatRequest, EventStream, Orchestrator};
