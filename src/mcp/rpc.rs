//! JSON-RPC protocol representations and formatting utilities
//!
//! Provides standardized mapping of internal AppErrors to valid JSON-RPC payloads.

use serde_json::{json, Value};
use tracing::error;

use crate::errors::AppError;

pub fn is_json_rpc_error(value: &Value) -> bool {
    value.get("error").is_some()
}

pub fn app_error_to_json_rpc(id: Option<Value>, err: AppError) -> Value {
    match err {
        AppError::InvalidArguments { ref fields } => json_rpc_error_with_data(
            id,
            -32602,
            "Invalid params",
            Some(json!({
                "code": "invalid_arguments",
                "message": err.to_string(),
                "details": {
                    "fields": fields,
                },
            })),
        ),
        AppError::UnknownHandler { kind, ref name } => json_rpc_error_with_data(
            id,
            -32601,
            "Method not found",
            Some(json!({
                "code": format!("{kind}_not_found"),
                "message": format!("unknown {kind} name"),
                "details": {
                    "name": name,
                },
            })),
        ),
        AppError::HandlerExecution { ref message } => {
            error!(error = %message, "handler execution failed");
            json_rpc_error(id, -32603, "Internal error")
        }
    }
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    json_rpc_error_with_data(id, code, message, None)
}

pub fn json_rpc_error_with_data(
    id: Option<Value>,
    code: i32,
    message: &str,
    data: Option<Value>,
) -> Value {
    let mut error = json!({
        "code": code,
        "message": message,
    });
    if let Some(data) = data {
        error["data"] = data;
    }

    json!({
        "jsonrpc": "2.0",
        "id": normalize_request_id(id.as_ref()),
        "error": error,
    })
}

pub fn json_rpc_result(id: Option<Value>, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": normalize_request_id(id.as_ref()),
        "result": result,
    })
}

/// JSON-RPC ids must be strings or integers; anything else is replaced by
/// null in the response.
pub fn normalize_request_id(id: Option<&Value>) -> Value {
    match id {
        Some(Value::String(value)) => Value::String(value.clone()),
        Some(Value::Number(value)) if value.is_i64() => Value::Number(value.clone()),
        _ => Value::Null,
    }
}
