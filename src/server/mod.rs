pub mod router;
pub mod state;

use std::sync::Arc;

use crate::agent::AgentRegistry;
use crate::config::ChatConfig;
use crate::error::{ChatError, Result};

/// Start the HTTP server with the given configuration.
///
/// The agent registry is initialized before the listener binds and torn
/// down after the server has drained on Ctrl+C.
pub async fn start(config: ChatConfig) -> Result<()> {
    let registry = Arc::new(AgentRegistry::with_pacing(config.pacing()));
    registry.initialize();

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(Arc::clone(&registry), Arc::new(config));
    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ChatError::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await
        .map_err(|e| ChatError::Server(format!("Server error: {e}")));

    tracing::info!("Shutting down...");
    registry.teardown();

    served
}
