//! Symbol value objects

use crate::value_objects::RepositoryId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Zero-based position inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-based)
    pub line: u32,
    /// Character offset (0-based)
    pub character: u32,
}

impl Position {
    /// Create a position
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open range inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

/// Document location
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Document URI as reported by the language backend
    pub uri: String,
    /// Range of the symbol
    pub range: Range,
}

/// Opaque, language-specific description of a symbol
///
/// Produced by the language backend; typical keys are `name`, `package`,
/// `recv` (Go receivers) or `containerName`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolDescriptor(pub Map<String, Value>);

impl SymbolDescriptor {
    /// String-valued field
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean-valued field, `false` when absent
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Raw field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for SymbolDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for SymbolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// Result of cross-repository definition resolution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymbolLocation {
    /// Symbol metadata
    pub symbol: SymbolDescriptor,
    /// Where the symbol is defined
    pub location: Location,
}

/// Opaque package identity used as the reverse-index lookup key
///
/// For Go this is `{"package": "<import path>"}`; for npm-style ecosystems it
/// is typically `{"name": ..., "version": ...}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageDescriptor(pub Map<String, Value>);

impl PackageDescriptor {
    /// True when every key/value of this descriptor is present in `data`
    ///
    /// Nested objects are compared the same way, recursively; every other
    /// value must match exactly. An empty descriptor matches nothing.
    pub fn is_contained_in(&self, data: &Map<String, Value>) -> bool {
        !self.0.is_empty() && object_contains(data, &self.0)
    }
}

fn object_contains(haystack: &Map<String, Value>, needle: &Map<String, Value>) -> bool {
    needle.iter().all(|(key, expected)| match (haystack.get(key), expected) {
        (Some(Value::Object(actual)), Value::Object(wanted)) => object_contains(actual, wanted),
        (Some(actual), wanted) => actual == wanted,
        (None, _) => false,
    })
}

impl From<Map<String, Value>> for PackageDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A dependency-references request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPosition {
    /// Language mode, e.g. `go`
    pub language: String,
    /// Repository containing the occurrence
    pub repository_id: RepositoryId,
    /// Commit the file is read at
    pub commit_id: String,
    /// File path relative to the repository root
    pub file: String,
    /// Line (0-based)
    pub line: u32,
    /// Character (0-based)
    pub character: u32,
    /// Maximum number of references; 0 applies the index cap
    #[serde(default)]
    pub limit: usize,
}

impl SymbolPosition {
    /// Position of the occurrence inside its document
    pub fn position(&self) -> Position {
        Position::new(self.line, self.character)
    }
}
