use thiserror::Error;

use crate::registry::HandlerKind;

/// Registration-time failures. These indicate a programming defect and abort
/// process startup instead of being reported to clients.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate handler name: {name}")]
    DuplicateName { name: &'static str },
    #[error("handler {handler} marks undeclared field {field} as required")]
    UndeclaredRequiredField {
        handler: &'static str,
        field: &'static str,
    },
}

/// Per-request failures. All of these are caught at the dispatcher boundary
/// and converted into JSON-RPC error envelopes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid arguments: {}", fields.join(", "))]
    InvalidArguments { fields: Vec<String> },
    #[error("unknown {kind}: {name}")]
    UnknownHandler { kind: HandlerKind, name: String },
    #[error("handler execution failed: {message}")]
    HandlerExecution { message: String },
}

impl AppError {
    pub fn invalid_arguments(fields: Vec<String>) -> Self {
        Self::InvalidArguments { fields }
    }

    pub fn unknown_handler(kind: HandlerKind, name: impl Into<String>) -> Self {
        Self::UnknownHandler {
            kind,
            name: name.into(),
        }
    }

    pub fn handler_execution(message: impl Into<String>) -> Self {
        Self::HandlerExecution {
            message: message.into(),
        }
    }
}
