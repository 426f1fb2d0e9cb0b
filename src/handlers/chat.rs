use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use crate::{
    models::llm::CompletionOutcome,
    services::warehouse,
    AppState,
};

/// Per-request failure classes. Each renders as the exact reply string the
/// frontend shows; none of them escapes as a non-200 HTTP status.
#[derive(Debug, Error)]
pub enum ChatHandleError {
    #[error("⚠️ Error: OpenAI API key not configured. Please set OPENAI_API_KEY in your .env file.")]
    NotConfigured,
    #[error("⚠️ Error processing request: {0}")]
    Provider(String),
    #[error("⚠ Error: {0}")]
    Backend(String),
}

/// Run one message through the relay pipeline: completion call, then at
/// most one warehouse call if the model proposed a function.
pub async fn handle_chat(state: &AppState, message: &str) -> Result<Value, ChatHandleError> {
    let llm = state.llm.as_ref().ok_or(ChatHandleError::NotConfigured)?;

    let outcome = llm
        .complete(message, &state.tools)
        .await
        .map_err(ChatHandleError::Provider)?;

    match outcome {
        CompletionOutcome::Text(content) => Ok(Value::String(content)),
        CompletionOutcome::ToolCall { name, arguments } => {
            info!("Model requested function '{name}'");
            let args: Map<String, Value> = serde_json::from_str(&arguments)
                .map_err(|e| ChatHandleError::Provider(format!("invalid tool arguments: {e}")))?;

            warehouse::dispatch(&state.http, &state.cfg, &name, args)
                .await
                .map_err(ChatHandleError::Backend)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, services::llm::LlmClient, tools};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;
    use url::Url;

    /// State wired so that both the provider and the backend resolve to the
    /// same mock server, under different paths.
    fn state_for(server: &MockServer) -> AppState {
        let http = reqwest::Client::new();
        let cfg = Config {
            app_host: "127.0.0.1".to_string(),
            app_port: 0,
            backend_base_url: Url::parse(&server.url("/warehouse/data")).unwrap(),
            openai_api_key: Some("test-key".to_string()),
            openai_base_url: Url::parse(&server.base_url()).unwrap(),
            openai_model: "gpt-4o-mini".to_string(),
        };
        let llm = Some(LlmClient::new(
            "test-key",
            &cfg.openai_base_url,
            cfg.openai_model.clone(),
            http.clone(),
        ));
        AppState {
            cfg,
            http,
            llm,
            tools: Arc::new(tools::catalog()),
        }
    }

    fn mock_completion(server: &MockServer, message: serde_json::Value) -> httpmock::Mock<'_> {
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({"choices": [{"message": message}]}));
        })
    }

    #[tokio::test]
    async fn text_answer_is_returned_verbatim() {
        let server = MockServer::start();
        mock_completion(&server, json!({"content": "You have 3 products."}));

        let reply = handle_chat(&state_for(&server), "how many products?")
            .await
            .unwrap();

        assert_eq!(reply, Value::String("You have 3 products.".to_string()));
    }

    #[tokio::test]
    async fn tool_call_is_dispatched_and_backend_body_becomes_the_reply() {
        let server = MockServer::start();
        mock_completion(
            &server,
            json!({
                "content": null,
                "tool_calls": [{"id": "call_1", "type": "function",
                    "function": {"name": "get_all_products", "arguments": "{}"}}]
            }),
        );
        let backend = server.mock(|when, then| {
            when.method(GET).path("/warehouse/data");
            then.status(200).json_body(json!([{"product_id": 1}]));
        });

        let reply = handle_chat(&state_for(&server), "list everything")
            .await
            .unwrap();

        backend.assert();
        assert_eq!(reply, json!([{"product_id": 1}]));
    }

    #[tokio::test]
    async fn unconfigured_provider_short_circuits_with_no_calls() {
        let server = MockServer::start();
        let any = server.mock(|_when, then| {
            then.status(200);
        });

        let mut state = state_for(&server);
        state.llm = None;

        let err = handle_chat(&state, "hello").await.unwrap_err();

        assert!(matches!(err, ChatHandleError::NotConfigured));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
        any.assert_hits(0);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_the_processing_error_reply() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(503);
        });

        let err = handle_chat(&state_for(&server), "hello").await.unwrap_err();

        let reply = err.to_string();
        assert!(reply.starts_with("⚠️ Error processing request:"), "got: {reply}");
    }

    #[tokio::test]
    async fn malformed_tool_arguments_map_to_the_processing_error_reply() {
        let server = MockServer::start();
        mock_completion(
            &server,
            json!({
                "content": null,
                "tool_calls": [{"id": "call_1", "type": "function",
                    "function": {"name": "add_product", "arguments": "{not json"}}]
            }),
        );

        let err = handle_chat(&state_for(&server), "add bolts").await.unwrap_err();

        assert!(matches!(err, ChatHandleError::Provider(_)));
        assert!(err.to_string().contains("invalid tool arguments"));
    }

    #[tokio::test]
    async fn unknown_function_is_a_successful_reply() {
        let server = MockServer::start();
        mock_completion(
            &server,
            json!({
                "content": null,
                "tool_calls": [{"id": "call_1", "type": "function",
                    "function": {"name": "restock_everything", "arguments": "{}"}}]
            }),
        );

        let reply = handle_chat(&state_for(&server), "restock").await.unwrap();

        assert_eq!(reply, Value::String("Unknown function".to_string()));
    }
}
