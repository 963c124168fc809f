use axum::extract::State;
use axum::Json;

use super::types::AgentsResponse;
use crate::server::state::AppState;

/// GET /api/agents - List available agents.
pub async fn handler(State(state): State<AppState>) -> Json<AgentsResponse> {
    Json(AgentsResponse::from_registry(state.orchestrator.registry()))
}
