mod apidoc;
mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod tools;
mod utils;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use config::Config;
use models::llm::ToolDescriptor;
use services::llm::LlmClient;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Read-only per-process state, established once at startup.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub http: reqwest::Client,
    /// None when no provider credential is configured; /chat then answers
    /// with a configuration-error reply instead of dispatching.
    pub llm: Option<LlmClient>,
    pub tools: Arc<Vec<ToolDescriptor>>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env().expect("Failed to load configuration");
    let http = reqwest::Client::new();
    // Compute before moving state anywhere
    let addr = format!("{}:{}", cfg.app_host, cfg.app_port);

    let llm = match &cfg.openai_api_key {
        Some(key) => Some(LlmClient::new(
            key.clone(),
            &cfg.openai_base_url,
            cfg.openai_model.clone(),
            http.clone(),
        )),
        None => {
            tracing::warn!(
                "OPENAI_API_KEY is not set; /chat will answer with a configuration error"
            );
            None
        }
    };

    let tools = Arc::new(tools::catalog());

    let state = AppState {
        cfg,
        http,
        llm,
        tools,
    };

    // Frontend origins only; methods and headers are mirrored because
    // credentials are allowed.
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(routes::chat::health_check))
        .route("/chat", post(routes::chat::chat))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", apidoc::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Warehouse chat relay listening on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}
