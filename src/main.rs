use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_chat::agent::AgentRegistry;
use a3s_chat::cli::{Cli, Commands};
use a3s_chat::config::ChatConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ChatConfig::load()?;

    match cli.command {
        Commands::Serve { host, port } => {
            a3s_chat::cli::serve::execute(config, host, port).await?;
        }
        Commands::Agents => {
            let registry = AgentRegistry::with_pacing(config.pacing());
            registry.initialize();
            a3s_chat::cli::agents::execute(&registry);
            registry.teardown();
        }
        Commands::Ask {
            message,
            agent,
            raw,
        } => {
            let registry = Arc::new(AgentRegistry::with_pacing(config.pacing()));
            registry.initialize();
            let result = a3s_chat::cli::ask::execute(
                Arc::clone(&registry),
                &message,
                agent.as_deref(),
                raw,
            )
            .await;
            registry.teardown();
            result?;
        }
    }

    Ok(())
}
