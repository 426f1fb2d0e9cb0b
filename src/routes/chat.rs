use axum::{extract::State, Json};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    handlers,
    models::chat::{ChatRequest, ChatResponse, HealthResponse},
    AppState,
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant text, backend JSON, or a marker-prefixed status string", body = ChatResponse)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!("Incoming chat message ({} chars)", payload.message.len());

    // Failures are absorbed into the reply; /chat always answers 200.
    let reply = match handlers::chat::handle_chat(&state, &payload.message).await {
        Ok(value) => value,
        Err(err) => {
            warn!("Returning error reply: {err}");
            Value::String(err.to_string())
        }
    };

    Json(ChatResponse { reply })
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Relay status and the configured backend URL", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Warehouse chat relay is running".to_string(),
        backend_url: state.cfg.backend_base_url.to_string(),
    })
}
