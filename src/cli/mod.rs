pub mod agents;
pub mod ask;
pub mod serve;

use clap::{Parser, Subcommand};

/// A3S Chat - Slash-command agent routing with SSE streaming
#[derive(Debug, Parser)]
#[command(name = "a3s-chat", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List available agents
    Agents,

    /// Send one message to an agent and print the streamed reply
    Ask {
        /// Message to send; a leading `/code`, `/search`, `/explain` or `/help`
        /// picks the agent when `--agent` is not given
        message: String,

        /// Agent selector (default, code, search, explain, help)
        #[arg(long, short)]
        agent: Option<String>,

        /// Print raw SSE frames instead of the reply text
        #[arg(long)]
        raw: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_defaults() {
        let cli = Cli::try_parse_from(["a3s-chat", "ask", "hello"]).unwrap();
        match cli.command {
            Commands::Ask {
                message,
                agent,
                raw,
            } => {
                assert_eq!(message, "hello");
                assert_eq!(agent, None);
                assert!(!raw);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_ask_explicit_agent() {
        let cli = Cli::try_parse_from(["a3s-chat", "ask", "/code x", "-a", "search"]).unwrap();
        match cli.command {
            Commands::Ask { message, agent, .. } => {
                assert_eq!(message, "/code x");
                assert_eq!(agent.as_deref(), Some("search"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["a3s-chat", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
