//! Per-language symbol rules
//!
//! Decides whether a symbol reported by the language backend can be
//! referenced from another repository, and which package it belongs to.
//!
//! | Language | Not referenceable when |
//! |----------|------------------------|
//! | `go` | vendored, unexported name, or unexported receiver |
//! | `python` | name starts with `_` (dunder names excepted) |
//! | `typescript`, `javascript` | no `package` object |
//! | `java` | `modifiers` contains `private` |
//!
//! Every other language is treated as referenceable.

use serde_json::{Map, Value};
use xdeps_domain::ports::providers::SymbolSemantics;
use xdeps_domain::value_objects::{PackageDescriptor, SymbolDescriptor};

/// Built-in language rules
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageSemantics;

impl LanguageSemantics {
    /// Create the rule set
    pub fn new() -> Self {
        Self
    }
}

fn is_go_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn go_referenceable(symbol: &SymbolDescriptor) -> bool {
    if symbol.flag("vendor") {
        return false;
    }
    if !symbol.str_field("name").is_some_and(is_go_exported) {
        return false;
    }
    // Methods: `recv` is the receiver type name, possibly a pointer.
    match symbol.str_field("recv").map(|r| r.trim_start_matches('*')) {
        Some(recv) if !recv.is_empty() => is_go_exported(recv),
        _ => true,
    }
}

fn python_referenceable(symbol: &SymbolDescriptor) -> bool {
    match symbol.str_field("name") {
        Some(name) if name.starts_with("__") && name.ends_with("__") && name.len() > 4 => true,
        Some(name) => !name.starts_with('_'),
        None => true,
    }
}

fn package_object(symbol: &SymbolDescriptor) -> Option<&Map<String, Value>> {
    symbol.get("package").and_then(Value::as_object)
}

fn java_referenceable(symbol: &SymbolDescriptor) -> bool {
    let private = match symbol.get("modifiers") {
        Some(Value::Array(modifiers)) => modifiers.iter().any(|m| m.as_str() == Some("private")),
        Some(Value::String(modifiers)) => modifiers.split_whitespace().any(|m| m == "private"),
        _ => false,
    };
    !private
}

impl SymbolSemantics for LanguageSemantics {
    fn is_referenceable(&self, language: &str, symbol: &SymbolDescriptor) -> bool {
        match language {
            "go" => go_referenceable(symbol),
            "python" => python_referenceable(symbol),
            "typescript" | "javascript" => package_object(symbol).is_some(),
            "java" => java_referenceable(symbol),
            _ => true,
        }
    }

    fn package_descriptor(
        &self,
        symbol: &SymbolDescriptor,
        language: &str,
    ) -> Option<PackageDescriptor> {
        match language {
            "go" => {
                let package = symbol.str_field("package").filter(|p| !p.is_empty())?;
                let mut descriptor = Map::new();
                descriptor.insert("package".to_string(), Value::String(package.to_string()));
                Some(PackageDescriptor(descriptor))
            }
            _ => package_object(symbol)
                .filter(|p| !p.is_empty())
                .cloned()
                .map(PackageDescriptor),
        }
    }
}
