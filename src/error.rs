#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Unknown agent: {0}")]
    AgentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;

/// Failure raised by an agent while producing a fragment.
///
/// The `Display` text is what clients see in the `STREAM_ERROR` event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("{0}")]
    Generation(String),

    #[error("Backend unavailable: {0}")]
    Backend(String),
}
