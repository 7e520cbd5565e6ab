//! In-memory repository store
//!
//! Repository records, access decisions and language inventories declared
//! up front (typically from configuration). Permissions are not computed
//! here; each entry simply states whether the caller may read it.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use xdeps_domain::error::{AccessDenial, Error, Result};
use xdeps_domain::ports::providers::{InventoryProvider, RepositoryAccessProvider};
use xdeps_domain::value_objects::{Inventory, RepositoryId, RepositoryRef};

fn default_authorized() -> bool {
    true
}

/// One declared repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Repository identifier
    pub id: RepositoryId,
    /// Repository URI, e.g. `github.com/gorilla/mux`
    pub uri: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// Whether the caller may read it
    #[serde(default = "default_authorized")]
    pub authorized: bool,
    /// Languages present in the repository
    #[serde(default)]
    pub languages: Vec<String>,
}

impl RepositoryEntry {
    /// Readable public repository with the given languages
    pub fn new<I, S>(id: i32, uri: impl Into<String>, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: RepositoryId(id),
            uri: uri.into(),
            private: false,
            authorized: true,
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark as private
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Mark as unreadable for the caller
    pub fn forbidden(mut self) -> Self {
        self.authorized = false;
        self
    }

    fn record(&self) -> RepositoryRef {
        RepositoryRef::new(self.id, self.uri.clone()).with_private(self.private)
    }
}

/// Repository store backed by concurrent maps
#[derive(Debug, Default)]
pub struct InMemoryRepositoryStore {
    by_id: DashMap<RepositoryId, RepositoryEntry>,
    ids_by_uri: DashMap<String, RepositoryId>,
}

impl InMemoryRepositoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `entries`
    pub fn with_entries(entries: impl IntoIterator<Item = RepositoryEntry>) -> Self {
        let store = Self::new();
        for entry in entries {
            store.insert(entry);
        }
        store
    }

    /// Add or replace a repository
    pub fn insert(&self, entry: RepositoryEntry) {
        if let Some(previous) = self.by_id.get(&entry.id) {
            self.ids_by_uri.remove(&previous.uri);
        }
        self.ids_by_uri.insert(entry.uri.clone(), entry.id);
        self.by_id.insert(entry.id, entry);
    }

    /// Number of repositories
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn check(&self, id: RepositoryId, requested: &str) -> Result<RepositoryRef> {
        let entry = self
            .by_id
            .get(&id)
            .ok_or_else(|| Error::unauthorized(requested, AccessDenial::NotFound))?;
        if !entry.authorized {
            return Err(Error::unauthorized(requested, AccessDenial::Forbidden));
        }
        Ok(entry.record())
    }
}

#[async_trait]
impl RepositoryAccessProvider for InMemoryRepositoryStore {
    async fn authorize(&self, id: RepositoryId) -> Result<RepositoryRef> {
        self.check(id, &id.to_string())
    }

    async fn get_by_uri(&self, uri: &str) -> Result<RepositoryRef> {
        let id = self
            .ids_by_uri
            .get(uri)
            .map(|id| *id)
            .ok_or_else(|| Error::unauthorized(uri, AccessDenial::NotFound))?;
        self.check(id, uri)
    }
}

#[async_trait]
impl InventoryProvider for InMemoryRepositoryStore {
    async fn get_inventory(&self, repo: &RepositoryRef, _commit_id: &str) -> Result<Inventory> {
        let entry = self
            .by_id
            .get(&repo.id)
            .ok_or_else(|| Error::not_found(format!("inventory for repository {}", repo.uri)))?;
        Ok(Inventory::from_languages(entry.languages.iter().cloned()))
    }
}
