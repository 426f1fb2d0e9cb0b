use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse Chat Relay",
        version = "0.1.0",
        description = "Chat → LLM → warehouse relay. Forwards a message to the model with the warehouse tool catalog and executes at most one proposed CRUD call."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local dev")
    ),
    tags(
        (name = "chat", description = "Chat relay endpoint"),
        (name = "health", description = "Health check")
    ),
    // Handlers (paths)
    paths(
        crate::routes::chat::chat,
        crate::routes::chat::health_check,
    ),
    // Schemas used in requests/responses
    components(
        schemas(
            crate::models::chat::ChatRequest,
            crate::models::chat::ChatResponse,
            crate::models::chat::HealthResponse
        )
    )
)]
pub struct ApiDoc;
