//! Stream events and their SSE wire encoding
//!
//! Every chat response is a sequence of [`StreamEvent`]s. Each event is
//! framed on its own as
//!
//! ```text
//! event: <kind>
//! data: <compact json>
//!
//! ```
//!
//! with no buffering across events, so a frame can be flushed the moment it
//! is produced.

use serde::{Deserialize, Serialize};

/// Stable error codes carried by `error` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request named a selector that is not registered.
    UnknownAgent,
    /// The resolved agent failed while producing a fragment.
    StreamError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnknownAgent => "UNKNOWN_AGENT",
            ErrorCode::StreamError => "STREAM_ERROR",
        }
    }
}

/// One event of a chat response stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum StreamEvent {
    /// The selector resolved; sent before any content.
    AgentResolved {
        agent: String,
        name: String,
        description: String,
    },
    /// One fragment of the response, verbatim.
    Token { token: String },
    /// Terminal failure.
    Error { message: String, code: ErrorCode },
    /// Terminal success.
    Done { processing_time_ms: u64 },
}

impl StreamEvent {
    pub fn token(token: impl Into<String>) -> Self {
        StreamEvent::Token {
            token: token.into(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        StreamEvent::Error {
            message: message.into(),
            code,
        }
    }

    /// The SSE event name.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamEvent::AgentResolved { .. } => "agent-resolved",
            StreamEvent::Token { .. } => "token",
            StreamEvent::Error { .. } => "error",
            StreamEvent::Done { .. } => "done",
        }
    }

    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Error { .. } | StreamEvent::Done { .. })
    }

    /// The payload object as compact JSON.
    pub fn data(&self) -> String {
        let value = match self {
            StreamEvent::AgentResolved {
                agent,
                name,
                description,
            } => serde_json::json!({
                "agent": agent,
                "name": name,
                "description": description,
            }),
            StreamEvent::Token { token } => serde_json::json!({ "token": token }),
            StreamEvent::Error { message, code } => serde_json::json!({
                "message": message,
                "code": code.as_str(),
            }),
            StreamEvent::Done { processing_time_ms } => {
                serde_json::json!({ "processing_time_ms": processing_time_ms })
            }
        };
        value.to_string()
    }

    /// Encode as a complete SSE frame, terminated by a blank line.
    pub fn encode(&self) -> String {
        format!("event: {}\ndata: {}\n\n", self.kind(), self.data())
    }

    /// Build the equivalent axum SSE event.
    pub fn to_sse(&self) -> axum::response::sse::Event {
        axum::response::sse::Event::default()
            .event(self.kind())
            .data(self.data())
    }

    /// Parse one frame produced by [`encode`](Self::encode).
    pub fn decode(frame: &str) -> Option<Self> {
        let mut kind = None;
        let mut data = None;
        for line in frame.lines() {
            if let Some(rest) = line.strip_prefix("event: ") {
                kind = Some(rest.trim());
            } else if let Some(rest) = line.strip_prefix("data: ") {
                data = Some(rest);
            }
        }
        let kind = kind?;
        let data: serde_json::Value = serde_json::from_str(data?).ok()?;
        let tagged = serde_json::json!({ "event": kind, "data": data });
        serde_json::from_value(tagged).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_token_frame() {
        let frame = StreamEvent::token("Hello").encode();
        assert_eq!(frame, "event: token\ndata: {\"token\":\"Hello\"}\n\n");
    }

    #[test]
    fn test_encode_agent_resolved_frame() {
        let event = StreamEvent::AgentResolved {
            agent: "default".to_string(),
            name: "Default".to_string(),
            description: "General chat assistant".to_string(),
        };
        let frame = event.encode();
        assert!(frame.starts_with("event: agent-resolved\ndata: {"));
        assert!(frame.ends_with("}\n\n"));

        let data: serde_json::Value =
            serde_json::from_str(frame.lines().nth(1).unwrap().strip_prefix("data: ").unwrap())
                .unwrap();
        assert_eq!(data["agent"], "default");
        assert_eq!(data["name"], "Default");
        assert_eq!(data["description"], "General chat assistant");
    }

    #[test]
    fn test_encode_error_codes() {
        let frame = StreamEvent::error(ErrorCode::UnknownAgent, "Unknown agent: x").encode();
        assert!(frame.starts_with("event: error\n"));
        assert!(frame.contains("\"code\":\"UNKNOWN_AGENT\""));
        assert!(frame.contains("\"message\":\"Unknown agent: x\""));

        let frame = StreamEvent::error(ErrorCode::StreamError, "boom").encode();
        assert!(frame.contains("\"code\":\"STREAM_ERROR\""));
    }

    #[test]
    fn test_encode_done_frame() {
        let frame = StreamEvent::Done {
            processing_time_ms: 42,
        }
        .encode();
        assert_eq!(frame, "event: done\ndata: {\"processing_time_ms\":42}\n\n");
    }

    #[test]
    fn test_newlines_stay_inside_one_data_line() {
        let frame = StreamEvent::token("line one\nline two").encode();
        assert_eq!(frame.matches('\n').count(), 3);
        assert!(frame.contains(r#"{"token":"line one\nline two"}"#));
    }

    #[test]
    fn test_error_code_serde_matches_as_str() {
        for code in [ErrorCode::UnknownAgent, ErrorCode::StreamError] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_decode_frame() {
        let event = StreamEvent::error(ErrorCode::StreamError, "agent failed");
        assert_eq!(StreamEvent::decode(&event.encode()), Some(event));
        assert_eq!(StreamEvent::decode("event: token\n\n"), None);
        assert_eq!(StreamEvent::decode("event: bogus\ndata: {}\n\n"), None);
    }

    #[test]
    fn test_terminal_kinds() {
        assert!(!StreamEvent::token("x").is_terminal());
        assert!(StreamEvent::Done {
            processing_time_ms: 0
        }
        .is_terminal());
        assert!(StreamEvent::error(ErrorCode::UnknownAgent, "").is_terminal());
    }
}
