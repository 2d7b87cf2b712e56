//! Handlers exposed via Model Context Protocol
//!
//! Declares the `echo` tool and the app-builder prompt generators, and
//! assembles them into the handler registry built once at startup.

pub mod args;
pub mod echo;
pub mod prompts;

use crate::errors::RegistryError;
use crate::registry::HandlerRegistry;

pub fn build_registry() -> Result<HandlerRegistry, RegistryError> {
    let mut registry = HandlerRegistry::new();
    registry.register(echo::descriptor())?;
    for descriptor in prompts::descriptors() {
        registry.register(descriptor)?;
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::build_registry;
    use crate::registry::HandlerKind;

    #[test]
    fn registry_builds_with_all_handlers() {
        let registry = build_registry().expect("registry should build");

        assert_eq!(registry.of_kind(HandlerKind::Tool).count(), 1);
        assert_eq!(registry.of_kind(HandlerKind::Prompt).count(), 5);
    }

    #[test]
    fn registered_names_are_resolvable() {
        let registry = build_registry().expect("registry should build");

        registry
            .lookup(HandlerKind::Tool, "echo")
            .expect("echo tool");
        for name in [
            "insane-website-concept",
            "chaotic-ui-component",
            "absurd-layout-generator",
            "ridiculous-content-strategy",
            "nonsensical-features",
        ] {
            registry.lookup(HandlerKind::Prompt, name).expect(name);
        }
    }
}
