//! Reverse-dependency value objects

use crate::value_objects::{PackageDescriptor, RepositoryId, SymbolLocation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One reverse-dependency edge: `repo_id` depends on the package in `dep_data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DependencyReference {
    /// Dependent repository
    pub repo_id: RepositoryId,
    /// Identity of the package depended upon
    pub dep_data: Map<String, Value>,
    /// Free-form metadata (declared name, version constraint, ...)
    #[serde(default)]
    pub hints: Map<String, Value>,
}

/// A dependency declared by a workspace, as reported by the language backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceDependency {
    /// Identity of the package depended upon
    pub attributes: Map<String, Value>,
    /// Free-form metadata
    #[serde(default)]
    pub hints: Map<String, Value>,
}

impl WorkspaceDependency {
    /// Edge from `repo_id` to this dependency
    pub fn into_reference(self, repo_id: RepositoryId) -> DependencyReference {
        DependencyReference {
            repo_id,
            dep_data: self.attributes,
            hints: self.hints,
        }
    }
}

/// A package a workspace provides, as reported by the language backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackageInformation {
    /// Package identity
    pub package: PackageDescriptor,
    /// Packages this package depends on
    #[serde(default)]
    pub dependencies: Vec<WorkspaceDependency>,
}

/// Combined response of a dependency-references query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyReferences {
    /// Reverse-dependency edges, in index order
    pub references: Vec<DependencyReference>,
    /// Resolved definition the references were looked up for
    pub location: SymbolLocation,
}

impl DependencyReferences {
    /// Result for a symbol that cannot be referenced from other repositories
    pub fn unreferenceable(location: SymbolLocation) -> Self {
        Self {
            references: Vec::new(),
            location,
        }
    }
}
