//! Argument extraction helpers for handler bodies
//!
//! Handlers run only after schema validation, so a missing required value
//! here is a dispatcher defect and surfaces as a handler execution error
//! rather than a panic.

use serde_json::{Map, Value};

use crate::errors::AppError;

pub fn required_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str, AppError> {
    args.get(name).and_then(Value::as_str).ok_or_else(|| {
        AppError::handler_execution(format!("validated argument {name} is missing"))
    })
}

pub fn optional_str<'a>(args: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

pub fn optional_str_list<'a>(args: &'a Map<String, Value>, name: &str) -> Option<Vec<&'a str>> {
    args.get(name)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
}
