//! Tests for the built-in language rules

use serde_json::{Value, json};
use xdeps_domain::{PackageDescriptor, SymbolDescriptor};
use xdeps_providers::SymbolSemantics;
use xdeps_providers::language::LanguageSemantics;

fn symbol(value: Value) -> SymbolDescriptor {
    match value {
        Value::Object(map) => SymbolDescriptor(map),
        other => panic!("expected object, got {other}"),
    }
}

fn referenceable(language: &str, value: Value) -> bool {
    LanguageSemantics::new().is_referenceable(language, &symbol(value))
}

#[test]
fn test_go_exported_symbols() {
    assert!(referenceable("go", json!({"name": "NewRouter", "package": "github.com/gorilla/mux"})));
    assert!(!referenceable("go", json!({"name": "x", "package": "github.com/gorilla/mux"})));
    assert!(!referenceable("go", json!({"name": "", "package": "p"})));
}

#[test]
fn test_go_vendor_and_receivers() {
    assert!(!referenceable("go", json!({"name": "Do", "vendor": true})));
    assert!(!referenceable("go", json!({"name": "ServeHTTP", "recv": "*router"})));
    assert!(referenceable("go", json!({"name": "ServeHTTP", "recv": "*Router"})));
    assert!(referenceable("go", json!({"name": "Walk", "recv": ""})));
}

#[test]
fn test_python_private_names() {
    assert!(referenceable("python", json!({"name": "load"})));
    assert!(referenceable("python", json!({"name": "__init__"})));
    assert!(!referenceable("python", json!({"name": "_helper"})));
    assert!(!referenceable("python", json!({"name": "__mangled"})));
}

#[test]
fn test_typescript_requires_package() {
    assert!(referenceable("typescript", json!({"name": "map", "package": {"name": "lodash"}})));
    assert!(!referenceable("typescript", json!({"name": "local"})));
    assert!(!referenceable("javascript", json!({"name": "x", "package": "lodash"})));
}

#[test]
fn test_java_private_modifier() {
    assert!(!referenceable("java", json!({"name": "secret", "modifiers": ["private", "static"]})));
    assert!(referenceable("java", json!({"name": "open", "modifiers": ["public"]})));
    assert!(referenceable("java", json!({"name": "open"})));
}

#[test]
fn test_unknown_language_is_referenceable() {
    assert!(referenceable("rust", json!({"name": "_anything"})));
}

#[test]
fn test_go_package_descriptor() {
    let descriptor = LanguageSemantics::new().package_descriptor(
        &symbol(json!({"name": "NewRouter", "package": "github.com/gorilla/mux", "kind": "func"})),
        "go",
    );

    let expected = match json!({"package": "github.com/gorilla/mux"}) {
        Value::Object(map) => PackageDescriptor(map),
        _ => unreachable!(),
    };
    assert_eq!(descriptor, Some(expected));
}

#[test]
fn test_package_object_descriptor() {
    let semantics = LanguageSemantics::new();
    let descriptor = semantics
        .package_descriptor(
            &symbol(json!({"name": "map", "package": {"name": "lodash", "version": "4.17.21"}})),
            "typescript",
        )
        .expect("descriptor");

    assert_eq!(descriptor.0["name"], "lodash");
    assert_eq!(descriptor.0["version"], "4.17.21");
    assert!(semantics
        .package_descriptor(&symbol(json!({"name": "x"})), "python")
        .is_none());
    assert!(semantics
        .package_descriptor(&symbol(json!({"name": "X"})), "go")
        .is_none());
}
