//! Wire types for the OpenAI-compatible chat completions endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool descriptor in OpenAI function-calling format.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDescriptor,
}

/// Function metadata within a tool descriptor. `parameters` is a JSON
/// Schema object describing the argument shape.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub tools: &'a [ToolDescriptor],
}

/// A single message in the (single-turn) conversation sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user",
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument object, exactly as the provider returns it.
    pub arguments: String,
}

/// What a completion call resolved to: plain assistant text, or the first
/// function the model asked us to invoke.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    Text(String),
    ToolCall { name: String, arguments: String },
}
