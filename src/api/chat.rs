use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::sse::sse_response;
use crate::orchestrator::ChatRequest;
use crate::server::state::AppState;

/// POST /api/chat - Stream a response from the selected agent as SSE.
///
/// Always answers 200 once the body parses; an unknown agent is reported
/// inside the stream.
pub async fn handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    tracing::debug!(agent = %request.agent, "Chat request received");
    let events = state.orchestrator.stream(request);
    sse_response(events, state.config.keep_alive())
}
