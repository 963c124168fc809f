pub mod agents;
pub mod chat;
pub mod health;
pub mod sse;
pub mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::server::state::AppState;

/// Build the `/api` routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::handler))
        .route("/agents", get(agents::handler))
        .route("/health", get(health::handler))
}
