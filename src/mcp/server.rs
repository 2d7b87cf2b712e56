//! The central Model Context Protocol engine
//!
//! Provides the primary MCP JSON-RPC decoding, method execution routing,
//! capabilities negotiation (`initialize`), and registry-backed dispatch of
//! `tools/call` and `prompts/get`.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::mcp::protocol::{
    CapabilityFlags, Implementation, InitializeResult, InvokeParams, ListPromptsResult,
    ListToolsResult, Prompt, ServerCapabilities, Tool,
};
use crate::mcp::rpc::{app_error_to_json_rpc, is_json_rpc_error, json_rpc_error, json_rpc_result};
use crate::registry::{HandlerFn, HandlerKind, HandlerRegistry};
use crate::AppState;

pub const SUPPORTED_PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    jsonrpc: String,
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

pub async fn handle_json_rpc_value(state: &AppState, payload: Value) -> Option<Value> {
    if !payload.is_object() {
        return Some(json_rpc_error(None, -32600, "Invalid Request"));
    }

    let request_id = payload.get("id").cloned();
    if payload.get("result").is_some() || payload.get("error").is_some() {
        return Some(json_rpc_error(request_id, -32600, "Invalid Request"));
    }

    let envelope: RpcEnvelope = match serde_json::from_value(payload) {
        Ok(envelope) => envelope,
        Err(_) => return Some(json_rpc_error(request_id, -32600, "Invalid Request")),
    };

    if envelope.jsonrpc != "2.0" {
        return Some(json_rpc_error(envelope.id, -32600, "Invalid Request"));
    }

    match envelope.id {
        Some(id) => {
            if envelope.method.trim().is_empty() {
                return Some(json_rpc_error(Some(id), -32600, "Invalid Request"));
            }

            Some(handle_json_rpc_request(state, Some(id), envelope.method, envelope.params).await)
        }
        None => {
            if envelope.method.trim().is_empty() {
                return None;
            }

            let _ =
                handle_json_rpc_request(state, None, envelope.method, envelope.params).await;
            None
        }
    }
}

pub async fn handle_json_rpc_request(
    state: &AppState,
    id: Option<Value>,
    method: String,
    params: Option<Value>,
) -> Value {
    let response = match method.as_str() {
        "initialize" => {
            if let Err(err) = negotiate_protocol_version(params.as_ref()) {
                app_error_to_json_rpc(id, err)
            } else {
                let initialize_result = InitializeResult {
                    protocol_version: SUPPORTED_PROTOCOL_VERSION,
                    capabilities: ServerCapabilities {
                        tools: CapabilityFlags {
                            list_changed: false,
                        },
                        prompts: CapabilityFlags {
                            list_changed: false,
                        },
                    },
                    server_info: Implementation {
                        name: env!("CARGO_PKG_NAME"),
                        version: env!("CARGO_PKG_VERSION"),
                    },
                };

                json_rpc_result(
                    id,
                    serde_json::to_value(initialize_result)
                        .expect("initialize result serialization"),
                )
            }
        }
        "ping" => json_rpc_result(id, json!({})),
        "tools/list" => json_rpc_result(
            id,
            serde_json::to_value(ListToolsResult {
                tools: build_tools_list(&state.registry),
            })
            .expect("tools list result serialization"),
        ),
        "tools/call" => handle_invoke(state, id, params, HandlerKind::Tool),
        "prompts/list" => json_rpc_result(
            id,
            serde_json::to_value(ListPromptsResult {
                prompts: build_prompts_list(&state.registry),
            })
            .expect("prompts list result serialization"),
        ),
        "prompts/get" => handle_invoke(state, id, params, HandlerKind::Prompt),
        _ => json_rpc_error(id, -32601, "Method not found"),
    };

    info!(
        method = %method,
        outcome = if is_json_rpc_error(&response) { "failure" } else { "success" },
        "mcp action audited"
    );

    response
}

pub fn build_tools_list(registry: &HandlerRegistry) -> Vec<Tool> {
    registry
        .of_kind(HandlerKind::Tool)
        .map(|descriptor| Tool {
            name: descriptor.name,
            description: descriptor.description,
            input_schema: descriptor.input_schema.to_json_schema(),
        })
        .collect()
}

pub fn build_prompts_list(registry: &HandlerRegistry) -> Vec<Prompt> {
    registry
        .of_kind(HandlerKind::Prompt)
        .map(|descriptor| Prompt {
            name: descriptor.name,
            description: descriptor.description,
            arguments: descriptor.input_schema.prompt_arguments(),
        })
        .collect()
}

/// Shared `tools/call` / `prompts/get` path: decode params, look up the
/// handler, validate arguments against its declared schema, then invoke.
fn handle_invoke(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
    kind: HandlerKind,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let invoke: InvokeParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };
    let arguments = invoke.arguments.unwrap_or_else(Map::new);

    let descriptor = match state.registry.lookup(kind, &invoke.name) {
        Ok(descriptor) => descriptor,
        Err(err) => return app_error_to_json_rpc(id, err),
    };

    if let Err(err) = descriptor.input_schema.validate(&arguments) {
        return app_error_to_json_rpc(id, err);
    }

    let invoked = match descriptor.handler {
        HandlerFn::Tool(handler) => {
            handler(&arguments).and_then(|result| {
                serde_json::to_value(result)
                    .map_err(|err| AppError::handler_execution(err.to_string()))
            })
        }
        HandlerFn::Prompt(handler) => {
            handler(&arguments).and_then(|result| {
                serde_json::to_value(result)
                    .map_err(|err| AppError::handler_execution(err.to_string()))
            })
        }
    };

    match invoked {
        Ok(result) => json_rpc_result(id, result),
        Err(err) => app_error_to_json_rpc(id, err),
    }
}

pub fn negotiate_protocol_version(params: Option<&Value>) -> Result<(), AppError> {
    let offered_version = params
        .and_then(Value::as_object)
        .and_then(|object| object.get("protocolVersion"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|version| !version.is_empty())
        .ok_or_else(|| AppError::invalid_arguments(vec!["protocolVersion".to_string()]))?;

    if offered_version != SUPPORTED_PROTOCOL_VERSION {
        return Err(AppError::invalid_arguments(vec![
            "protocolVersion".to_string(),
        ]));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{negotiate_protocol_version, SUPPORTED_PROTOCOL_VERSION};

    #[test]
    fn negotiate_protocol_version_accepts_supported_version() {
        let params = json!({
            "protocolVersion": SUPPORTED_PROTOCOL_VERSION
        });

        negotiate_protocol_version(Some(&params)).expect("supported version");
    }

    #[test]
    fn negotiate_protocol_version_rejects_unsupported_version() {
        let params = json!({
            "protocolVersion": "2099-01-01"
        });

        let error =
            negotiate_protocol_version(Some(&params)).expect_err("unsupported version must fail");
        assert!(error.to_string().contains("protocolVersion"));
    }

    #[test]
    fn negotiate_protocol_version_requires_params() {
        let error = negotiate_protocol_version(None).expect_err("missing params must fail");
        assert!(error.to_string().contains("protocolVersion"));
    }
}
