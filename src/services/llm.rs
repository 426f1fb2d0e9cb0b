use tracing::debug;
use url::Url;

use crate::models::llm::{
    ChatMessage, CompletionOutcome, CompletionRequest, CompletionResponse, ToolDescriptor,
};

/// Handle to an OpenAI-compatible chat completions endpoint. Built once at
/// startup (only when a credential is configured) and shared read-only
/// across requests.
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &Url,
        model: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// Send a single-turn conversation plus the full tool catalog and
    /// resolve the provider's answer. If the model proposes several
    /// function calls, only the first is used; the rest are discarded.
    pub async fn complete(
        &self,
        message: &str,
        tools: &[ToolDescriptor],
    ) -> Result<CompletionOutcome, String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(message)],
            tools,
        };

        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request error: {e}"))?;
        if !res.status().is_success() {
            return Err(format!("provider status {}", res.status()));
        }
        let completion: CompletionResponse = res
            .json()
            .await
            .map_err(|e| format!("json error: {e}"))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| "provider returned no choices".to_string())?;

        if let Some(calls) = choice.message.tool_calls {
            if calls.len() > 1 {
                debug!("Discarding {} extra tool call(s)", calls.len() - 1);
            }
            if let Some(first) = calls.into_iter().next() {
                return Ok(CompletionOutcome::ToolCall {
                    name: first.function.name,
                    arguments: first.function.arguments,
                });
            }
        }

        Ok(CompletionOutcome::Text(
            choice.message.content.unwrap_or_default(),
        ))
    }
}
