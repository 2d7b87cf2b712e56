//! Wire-level MCP payload types
//!
//! Serde representations of the request parameters and result envelopes this
//! server exchanges: tool and prompt listings, invocation results, and the
//! `initialize` handshake.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single content block. Only text content appears in this server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ContentBlock>,
}

impl CallToolResult {
    /// Result with a single text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: ContentBlock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPromptResult {
    pub description: String,
    pub messages: Vec<PromptMessage>,
}

impl GetPromptResult {
    /// Result with a single user message, the shape every prompt here returns.
    pub fn user(description: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            messages: vec![PromptMessage {
                role: Role::User,
                content: ContentBlock::text(text),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Serialize)]
pub struct ListToolsResult {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prompt {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Serialize)]
pub struct ListPromptsResult {
    pub prompts: Vec<Prompt>,
}

/// Shared parameter shape of `tools/call` and `prompts/get`.
#[derive(Debug, Deserialize)]
pub struct InvokeParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct Implementation {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityFlags {
    pub list_changed: bool,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: CapabilityFlags,
    pub prompts: CapabilityFlags,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: &'static str,
    pub capabilities: ServerCapabilities,
    pub server_info: Implementation,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn content_block_serializes_with_type_tag() {
        let rendered = serde_json::to_value(ContentBlock::text("hi")).expect("serialization");
        assert_eq!(rendered, json!({ "type": "text", "text": "hi" }));
    }

    #[test]
    fn prompt_result_serializes_lowercase_role() {
        let result = GetPromptResult::user("desc", "body");
        let rendered = serde_json::to_value(result).expect("serialization");
        assert_eq!(rendered["messages"][0]["role"], "user");
        assert_eq!(rendered["messages"][0]["content"]["type"], "text");
    }

    #[test]
    fn invoke_params_tolerate_missing_arguments() {
        let params: InvokeParams =
            serde_json::from_value(json!({ "name": "echo" })).expect("deserialization");
        assert_eq!(params.name, "echo");
        assert!(params.arguments.is_none());
    }
}
