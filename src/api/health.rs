use axum::extract::State;
use axum::Json;

use super::types::HealthResponse;
use crate::server::state::AppState;

/// GET /api/health - Liveness and registry status.
pub async fn handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_registry(state.orchestrator.registry()))
}
