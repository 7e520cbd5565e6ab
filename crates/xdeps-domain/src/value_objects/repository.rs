//! Repository value objects
//!
//! A [`RepositoryRef`] is the plain record owned by the repository-metadata
//! collaborator. An [`AuthorizedRepository`] is the same record after it has
//! passed the access gate; it has no public constructor other than the gate
//! calls below, and it is the only input from which a [`WorkspaceRoot`] or a
//! [`DocumentUri`] can be built. Code that talks to the language backend
//! therefore cannot skip authorization.

use crate::constants::VCS_SCHEME;
use crate::error::{Error, Result};
use crate::ports::providers::RepositoryAccessProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque repository identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RepositoryId(pub i32);

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RepositoryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Repository record as returned by the repository-metadata collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    /// Repository identifier
    pub id: RepositoryId,
    /// Human-readable location, e.g. `github.com/gorilla/mux`
    pub uri: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
}

impl RepositoryRef {
    /// Create a public repository record
    pub fn new(id: impl Into<RepositoryId>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            private: false,
        }
    }

    /// Mark the repository as private
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}

/// A repository the caller has been authorized to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedRepository {
    repo: RepositoryRef,
}

impl AuthorizedRepository {
    /// Authorize a repository by id
    pub async fn authorize(access: &dyn RepositoryAccessProvider, id: RepositoryId) -> Result<Self> {
        let repo = access.authorize(id).await?;
        if repo.id != id {
            return Err(Error::internal(format!(
                "access provider returned repository {} for requested id {}",
                repo.id, id
            )));
        }
        Ok(Self { repo })
    }

    /// Authorize a repository by URI
    pub async fn authorize_uri(access: &dyn RepositoryAccessProvider, uri: &str) -> Result<Self> {
        let repo = access.get_by_uri(uri).await?;
        if repo.uri != uri {
            return Err(Error::internal(format!(
                "access provider returned repository {} for requested URI {}",
                repo.uri, uri
            )));
        }
        Ok(Self { repo })
    }

    /// Repository id
    pub fn id(&self) -> RepositoryId {
        self.repo.id
    }

    /// Repository URI
    pub fn uri(&self) -> &str {
        &self.repo.uri
    }

    /// Whether the repository is private
    pub fn is_private(&self) -> bool {
        self.repo.private
    }

    /// Underlying record
    pub fn record(&self) -> &RepositoryRef {
        &self.repo
    }

    /// Workspace root for a commit of this repository
    pub fn root(&self, commit_id: &str) -> WorkspaceRoot {
        WorkspaceRoot(format!("{}://{}?{}", VCS_SCHEME, self.repo.uri, commit_id))
    }
}

/// `git://<repo-uri>?<commit>` workspace identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkspaceRoot(String);

impl WorkspaceRoot {
    /// Document identifier for a file inside this workspace
    pub fn document(&self, file: &str) -> DocumentUri {
        DocumentUri(format!("{}#{}", self.0, file))
    }

    /// Root as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<root>#<file>` document identifier sent to the language backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentUri(String);

impl DocumentUri {
    /// Document identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Workspace root part of the identifier
    pub fn root(&self) -> &str {
        self.0.split_once('#').map_or(self.0.as_str(), |(root, _)| root)
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
