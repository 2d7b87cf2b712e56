//! Axum HTTP handlers for the web server
//!
//! Provides the primary Model Context Protocol endpoint, and general metadata endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::mcp::rpc::json_rpc_error;
use crate::mcp::server::handle_json_rpc_value;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub mcp_endpoint: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn discovery() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        mcp_endpoint: "/mcp",
    })
}

pub async fn mcp_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return json_response(json_rpc_error(None, -32700, "Parse error")),
    };

    match payload {
        Value::Array(batch) => {
            if batch.is_empty() {
                return json_response(Value::Array(vec![json_rpc_error(
                    None,
                    -32600,
                    "Invalid Request",
                )]));
            }

            let mut responses = Vec::with_capacity(batch.len());
            for item in batch {
                if let Some(response) = handle_json_rpc_value(&state, item).await {
                    responses.push(response);
                }
            }

            // Notification-only batches produce no response body.
            if responses.is_empty() {
                StatusCode::NO_CONTENT.into_response()
            } else {
                json_response(Value::Array(responses))
            }
        }
        single => match handle_json_rpc_value(&state, single).await {
            Some(response) => json_response(response),
            None => StatusCode::NO_CONTENT.into_response(),
        },
    }
}

fn json_response(payload: Value) -> Response {
    (StatusCode::OK, Json(payload)).into_response()
}
