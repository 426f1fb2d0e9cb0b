use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Incoming chat payload. The message is forwarded to the model as-is;
/// empty strings and arbitrary length are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

/// Outgoing chat payload. `reply` is polymorphic: assistant text, the
/// backend's raw JSON body, or a marker-prefixed status string. Callers
/// must treat it as untyped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    #[schema(value_type = Object)]
    pub reply: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub backend_url: String,
}
