//! Handler registry and argument schemas
//!
//! Holds the name → handler mapping built once at startup, together with the
//! shallow input schemas the dispatcher validates arguments against before
//! any handler runs.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::errors::{AppError, RegistryError};
use crate::mcp::protocol::{CallToolResult, GetPromptResult, PromptArgument};

/// Schema node for a single declared argument. The schemas in this server are
/// shallow: one level of named properties, no nested composition.
#[derive(Debug, Clone, Copy)]
pub enum ArgumentSpec {
    String { description: &'static str },
    Enum {
        values: &'static [&'static str],
        description: &'static str,
    },
    StringArray { description: &'static str },
}

impl ArgumentSpec {
    pub fn string(description: &'static str) -> Self {
        Self::String { description }
    }

    pub fn string_enum(values: &'static [&'static str], description: &'static str) -> Self {
        Self::Enum {
            values,
            description,
        }
    }

    pub fn string_array(description: &'static str) -> Self {
        Self::StringArray { description }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String { .. } => value.is_string(),
            Self::Enum { values, .. } => value
                .as_str()
                .is_some_and(|candidate| values.contains(&candidate)),
            Self::StringArray { .. } => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    fn description(&self) -> &'static str {
        match *self {
            Self::String { description }
            | Self::Enum { description, .. }
            | Self::StringArray { description } => description,
        }
    }

    fn to_json_schema(self) -> Value {
        let mut schema = match self {
            Self::String { .. } => json!({ "type": "string" }),
            Self::Enum { values, .. } => json!({ "type": "string", "enum": values }),
            Self::StringArray { .. } => {
                json!({ "type": "array", "items": { "type": "string" } })
            }
        };

        if !self.description().is_empty() {
            schema["description"] = Value::String(self.description().to_string());
        }

        schema
    }
}

/// Declared argument object shape: ordered named properties plus the subset
/// of names a caller must supply.
#[derive(Debug, Clone)]
pub struct InputSchema {
    properties: Vec<(&'static str, ArgumentSpec)>,
    required: &'static [&'static str],
}

impl InputSchema {
    pub fn new(
        properties: Vec<(&'static str, ArgumentSpec)>,
        required: &'static [&'static str],
    ) -> Self {
        Self {
            properties,
            required,
        }
    }

    /// Checks the supplied argument object against the declared shape.
    /// Returns every offending field name: missing required fields first,
    /// then fields whose value does not structurally match. Undeclared extra
    /// fields are ignored.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<(), AppError> {
        let mut offending = Vec::new();

        for &name in self.required {
            if !args.contains_key(name) {
                offending.push(name.to_string());
            }
        }

        for (name, spec) in &self.properties {
            if let Some(value) = args.get(*name) {
                if !spec.matches(value) {
                    offending.push((*name).to_string());
                }
            }
        }

        if offending.is_empty() {
            Ok(())
        } else {
            Err(AppError::invalid_arguments(offending))
        }
    }

    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for (name, spec) in &self.properties {
            properties.insert((*name).to_string(), spec.to_json_schema());
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required,
        })
    }

    /// Flattens the schema into the argument list shape used by `prompts/list`.
    pub fn prompt_arguments(&self) -> Vec<PromptArgument> {
        self.properties
            .iter()
            .map(|&(name, spec)| PromptArgument {
                name,
                description: spec.description(),
                required: self.required.contains(&name),
            })
            .collect()
    }

    fn undeclared_required_field(&self) -> Option<&'static str> {
        self.required
            .iter()
            .find(|&&name| !self.properties.iter().any(|(declared, _)| *declared == name))
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Tool,
    Prompt,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool => f.write_str("tool"),
            Self::Prompt => f.write_str("prompt"),
        }
    }
}

/// Tagged handler function. Handlers are pure, synchronous text generators;
/// dispatch picks the variant matching the requested protocol method.
#[derive(Debug, Clone, Copy)]
pub enum HandlerFn {
    Tool(fn(&Map<String, Value>) -> Result<CallToolResult, AppError>),
    Prompt(fn(&Map<String, Value>) -> Result<GetPromptResult, AppError>),
}

#[derive(Debug)]
pub struct HandlerDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
    pub handler: HandlerFn,
}

impl HandlerDescriptor {
    pub fn kind(&self) -> HandlerKind {
        match self.handler {
            HandlerFn::Tool(_) => HandlerKind::Tool,
            HandlerFn::Prompt(_) => HandlerKind::Prompt,
        }
    }
}

/// Name → handler mapping. Built once at startup, read-only afterwards, so
/// concurrent lookups need no locking. Registration order is preserved and
/// drives the order of `tools/list` and `prompts/list`.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<HandlerDescriptor>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: HandlerDescriptor) -> Result<(), RegistryError> {
        if self.handlers.iter().any(|existing| existing.name == descriptor.name) {
            return Err(RegistryError::DuplicateName {
                name: descriptor.name,
            });
        }

        if let Some(field) = descriptor.input_schema.undeclared_required_field() {
            return Err(RegistryError::UndeclaredRequiredField {
                handler: descriptor.name,
                field,
            });
        }

        self.handlers.push(descriptor);
        Ok(())
    }

    /// Finds the handler registered under `name` for the given kind. A name
    /// registered under the other kind is reported as unknown, matching what
    /// a caller of `tools/call` or `prompts/get` observes.
    pub fn lookup(&self, kind: HandlerKind, name: &str) -> Result<&HandlerDescriptor, AppError> {
        self.handlers
            .iter()
            .find(|descriptor| descriptor.name == name && descriptor.kind() == kind)
            .ok_or_else(|| AppError::unknown_handler(kind, name))
    }

    pub fn of_kind(&self, kind: HandlerKind) -> impl Iterator<Item = &HandlerDescriptor> {
        self.handlers
            .iter()
            .filter(move |descriptor| descriptor.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    fn noop_tool(_args: &Map<String, Value>) -> Result<CallToolResult, AppError> {
        Ok(CallToolResult::text("ok"))
    }

    fn descriptor(name: &'static str) -> HandlerDescriptor {
        HandlerDescriptor {
            name,
            description: "test tool",
            input_schema: InputSchema::new(
                vec![("message", ArgumentSpec::string(""))],
                &["message"],
            ),
            handler: HandlerFn::Tool(noop_tool),
        }
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().expect("argument object").clone()
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = HandlerRegistry::new();
        registry.register(descriptor("echo")).expect("first registration");

        let error = registry
            .register(descriptor("echo"))
            .expect_err("duplicate must fail");
        assert!(matches!(
            error,
            RegistryError::DuplicateName { name: "echo" }
        ));
    }

    #[test]
    fn undeclared_required_field_is_rejected() {
        let mut registry = HandlerRegistry::new();
        let bad = HandlerDescriptor {
            name: "broken",
            description: "required field is not declared",
            input_schema: InputSchema::new(vec![], &["message"]),
            handler: HandlerFn::Tool(noop_tool),
        };

        let error = registry.register(bad).expect_err("registration must fail");
        assert!(matches!(
            error,
            RegistryError::UndeclaredRequiredField {
                handler: "broken",
                field: "message"
            }
        ));
    }

    #[test]
    fn lookup_unknown_name_fails_with_unknown_handler() {
        let registry = HandlerRegistry::new();

        let error = registry
            .lookup(HandlerKind::Tool, "missing")
            .expect_err("lookup must fail");
        assert!(matches!(
            error,
            AppError::UnknownHandler {
                kind: HandlerKind::Tool,
                ..
            }
        ));
    }

    #[test]
    fn lookup_is_idempotent() {
        let mut registry = HandlerRegistry::new();
        registry.register(descriptor("echo")).expect("registration");

        let first = registry
            .lookup(HandlerKind::Tool, "echo")
            .expect("first lookup");
        let second = registry
            .lookup(HandlerKind::Tool, "echo")
            .expect("second lookup");

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name, "echo");
    }

    #[test]
    fn lookup_with_mismatched_kind_fails() {
        let mut registry = HandlerRegistry::new();
        registry.register(descriptor("echo")).expect("registration");

        let error = registry
            .lookup(HandlerKind::Prompt, "echo")
            .expect_err("kind mismatch must fail");
        assert!(matches!(
            error,
            AppError::UnknownHandler {
                kind: HandlerKind::Prompt,
                ..
            }
        ));
    }

    #[test]
    fn validate_names_missing_required_fields() {
        let schema = InputSchema::new(
            vec![
                ("theme", ArgumentSpec::string("")),
                ("chaos_level", ArgumentSpec::string_enum(&["mild"], "")),
            ],
            &["theme", "chaos_level"],
        );

        let error = schema
            .validate(&args(json!({ "theme": "cats" })))
            .expect_err("missing field must fail");
        let AppError::InvalidArguments { fields } = error else {
            panic!("expected invalid arguments");
        };
        assert_eq!(fields, vec!["chaos_level".to_string()]);
    }

    #[test]
    fn validate_rejects_value_outside_enum() {
        let schema = InputSchema::new(
            vec![("chaos_level", ArgumentSpec::string_enum(&["mild", "extreme"], ""))],
            &["chaos_level"],
        );

        assert!(schema
            .validate(&args(json!({ "chaos_level": "mild" })))
            .is_ok());

        let error = schema
            .validate(&args(json!({ "chaos_level": "catastrophic" })))
            .expect_err("enum violation must fail");
        let AppError::InvalidArguments { fields } = error else {
            panic!("expected invalid arguments");
        };
        assert_eq!(fields, vec!["chaos_level".to_string()]);
    }

    #[test]
    fn validate_rejects_non_string_values() {
        let schema = InputSchema::new(
            vec![("message", ArgumentSpec::string(""))],
            &["message"],
        );

        let error = schema
            .validate(&args(json!({ "message": 42 })))
            .expect_err("non-string must fail");
        assert!(error.to_string().contains("message"));
    }

    #[test]
    fn validate_rejects_array_with_non_string_items() {
        let schema = InputSchema::new(
            vec![("forbidden_elements", ArgumentSpec::string_array(""))],
            &[],
        );

        assert!(schema
            .validate(&args(json!({ "forbidden_elements": ["marquee", "blink"] })))
            .is_ok());
        assert!(schema
            .validate(&args(json!({ "forbidden_elements": ["marquee", 3] })))
            .is_err());
    }

    #[test]
    fn validate_ignores_undeclared_fields() {
        let schema = InputSchema::new(
            vec![("message", ArgumentSpec::string(""))],
            &["message"],
        );

        assert!(schema
            .validate(&args(json!({ "message": "hi", "extra": 1 })))
            .is_ok());
    }

    #[test]
    fn json_schema_declares_property_types_and_required() {
        let schema = InputSchema::new(
            vec![
                ("layout_style", ArgumentSpec::string("Base layout approach")),
                (
                    "reality_distortion",
                    ArgumentSpec::string_enum(&["slight-bend"], ""),
                ),
                ("forbidden_elements", ArgumentSpec::string_array("")),
            ],
            &["layout_style", "reality_distortion"],
        );

        let rendered = schema.to_json_schema();
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["properties"]["layout_style"]["type"], "string");
        assert_eq!(
            rendered["properties"]["layout_style"]["description"],
            "Base layout approach"
        );
        assert_eq!(
            rendered["properties"]["reality_distortion"]["enum"],
            json!(["slight-bend"])
        );
        assert_eq!(
            rendered["properties"]["forbidden_elements"]["items"]["type"],
            "string"
        );
        assert_eq!(
            rendered["required"],
            json!(["layout_style", "reality_distortion"])
        );
    }

    #[test]
    fn prompt_arguments_carry_required_flags_in_declaration_order() {
        let schema = InputSchema::new(
            vec![
                ("theme", ArgumentSpec::string("Base theme or topic")),
                ("target_audience", ArgumentSpec::string("Who is this for?")),
            ],
            &["theme"],
        );

        let arguments = schema.prompt_arguments();
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0].name, "theme");
        assert!(arguments[0].required);
        assert_eq!(arguments[1].name, "target_audience");
        assert!(!arguments[1].required);
    }
}
