//! The `echo` tool

use serde_json::{Map, Value};

use crate::domain::args::required_str;
use crate::errors::AppError;
use crate::mcp::protocol::CallToolResult;
use crate::registry::{ArgumentSpec, HandlerDescriptor, HandlerFn, InputSchema};

pub fn descriptor() -> HandlerDescriptor {
    HandlerDescriptor {
        name: "echo",
        description: "Echoes the input message",
        input_schema: InputSchema::new(
            vec![("message", ArgumentSpec::string(""))],
            &["message"],
        ),
        handler: HandlerFn::Tool(echo),
    }
}

fn echo(args: &Map<String, Value>) -> Result<CallToolResult, AppError> {
    Ok(CallToolResult::text(required_str(args, "message")?))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mcp::protocol::ContentBlock;

    #[test]
    fn echo_returns_message_verbatim() {
        for message in ["hi", "", "multi\nline", "ünïcödé ✓"] {
            let args = json!({ "message": message })
                .as_object()
                .expect("object")
                .clone();

            let result = echo(&args).expect("echo succeeds");
            assert_eq!(result.content, vec![ContentBlock::text(message)]);
        }
    }
}
