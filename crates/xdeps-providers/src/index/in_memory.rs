//! In-memory reverse-dependency index
//!
//! Holds, per repository, the packages it provides and the dependency edges
//! it declares, as reported by the language backend at the last refreshed
//! commit. Reverse lookups scan the edges of every other repository.
//!
//! Refreshes of one repository are serialized through a per-repository
//! async mutex. The new state is built completely before it replaces the
//! old one, so a refresh that fails or is dropped midway leaves the
//! previous state visible.
//!
//! When opened with a snapshot path the whole index is written to that JSON
//! file before a refreshed state becomes visible; a failed write leaves both
//! the file and the in-memory state as they were.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use xdeps_domain::constants::MAX_REVERSE_DEPENDENCIES;
use xdeps_domain::error::{Error, Result};
use xdeps_domain::ports::providers::{DependencyCrawler, DependencyIndexProvider, InventoryProvider};
use xdeps_domain::value_objects::{
    AuthorizedRepository, DependencyReference, PackageDescriptor, RepositoryId,
};

use crate::constants::INDEX_DEFAULT_LANGUAGES;

/// A package provided by a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidedPackage {
    /// Language mode
    pub language: String,
    /// Package identity
    pub package: PackageDescriptor,
}

/// A dependency edge declared by a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedEdge {
    /// Language mode
    pub language: String,
    /// The edge; `reference.repo_id` is the declaring repository
    pub reference: DependencyReference,
}

/// Index state of one repository at one commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// Repository identifier
    pub repo_id: RepositoryId,
    /// Repository URI
    pub uri: String,
    /// Whether the repository is private
    pub private: bool,
    /// Commit the state was crawled at
    pub commit_id: String,
    /// Packages the repository provides
    pub provides: Vec<ProvidedPackage>,
    /// Dependency edges, in crawl order
    pub depends_on: Vec<IndexedEdge>,
}

impl RepositorySnapshot {
    fn provides_target_of(&self, edge: &IndexedEdge) -> bool {
        self.provides.iter().any(|p| {
            p.language == edge.language && p.package.is_contained_in(&edge.reference.dep_data)
        })
    }
}

/// In-memory reverse-dependency index
pub struct InMemoryDependencyIndex {
    crawler: Arc<dyn DependencyCrawler>,
    languages: BTreeSet<String>,
    repos: DashMap<RepositoryId, Arc<RepositorySnapshot>>,
    ids_by_uri: DashMap<String, RepositoryId>,
    refresh_locks: DashMap<RepositoryId, Arc<Mutex<()>>>,
    snapshot_path: Option<PathBuf>,
    persist_lock: Mutex<()>,
}

impl InMemoryDependencyIndex {
    /// Create an empty index crawling through `crawler`
    pub fn new(crawler: Arc<dyn DependencyCrawler>) -> Self {
        Self {
            crawler,
            languages: INDEX_DEFAULT_LANGUAGES
                .iter()
                .map(|l| (*l).to_string())
                .collect(),
            repos: DashMap::new(),
            ids_by_uri: DashMap::new(),
            refresh_locks: DashMap::new(),
            snapshot_path: None,
            persist_lock: Mutex::new(()),
        }
    }

    /// Open an index persisted at `path`, starting empty if the file is absent
    pub async fn open(path: impl Into<PathBuf>, crawler: Arc<dyn DependencyCrawler>) -> Result<Self> {
        let path = path.into();
        let mut index = Self::new(crawler);

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshots: Vec<RepositorySnapshot> =
                    serde_json::from_slice(&bytes).map_err(|e| {
                        Error::infrastructure_with_source(
                            format!("Invalid index snapshot {}", path.display()),
                            e,
                        )
                    })?;
                info!(path = %path.display(), repositories = snapshots.len(), "index snapshot loaded");
                for snapshot in snapshots {
                    index.insert_snapshot(snapshot);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no index snapshot yet");
            }
            Err(e) => return Err(e.into()),
        }

        index.snapshot_path = Some(path);
        Ok(index)
    }

    /// Restrict crawling to the given languages
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages
            .into_iter()
            .map(|l| l.into().to_lowercase())
            .collect();
        self
    }

    /// Languages crawled on refresh
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    /// Replace the state of one repository directly
    pub fn insert_snapshot(&self, snapshot: RepositorySnapshot) {
        let id = snapshot.repo_id;
        let uri = snapshot.uri.clone();
        if let Some(previous) = self.repos.insert(id, Arc::new(snapshot)) {
            if previous.uri != uri {
                self.ids_by_uri.remove(&previous.uri);
            }
        }
        self.ids_by_uri.insert(uri, id);
    }

    /// Current state of one repository
    pub fn snapshot(&self, repo_id: RepositoryId) -> Option<RepositorySnapshot> {
        self.repos.get(&repo_id).map(|s| s.as_ref().clone())
    }

    /// Number of indexed repositories
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Whether nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// All snapshots ordered by repository id
    fn ordered(&self) -> Vec<Arc<RepositorySnapshot>> {
        let mut snapshots: Vec<_> = self.repos.iter().map(|e| Arc::clone(e.value())).collect();
        snapshots.sort_by_key(|s| s.repo_id);
        snapshots
    }

    /// Edges of other repositories onto packages provided by `target`
    fn dependents_of(
        &self,
        target: &RepositorySnapshot,
        exclude_private: bool,
    ) -> Vec<DependencyReference> {
        self.ordered()
            .iter()
            .filter(|s| s.repo_id != target.repo_id)
            .filter(|s| !(exclude_private && s.private))
            .flat_map(|s| s.depends_on.iter())
            .filter(|edge| target.provides_target_of(edge))
            .map(|edge| edge.reference.clone())
            .collect()
    }

    async fn crawl(
        &self,
        repo: &AuthorizedRepository,
        commit_id: &str,
        inventory: &dyn InventoryProvider,
    ) -> Result<RepositorySnapshot> {
        let inventory = inventory.get_inventory(repo.record(), commit_id).await?;
        let root = repo.root(commit_id);

        let mut provides: Vec<ProvidedPackage> = Vec::new();
        let mut depends_on: Vec<IndexedEdge> = Vec::new();
        let mut seen = BTreeSet::new();

        for language in inventory.language_names() {
            if !self.languages.contains(language) || !seen.insert(language) {
                debug!(repo = repo.uri(), language, "language not indexed");
                continue;
            }

            let packages = self.crawler.workspace_packages(language, &root).await?;
            let mut declared = Vec::new();
            for info in packages {
                let package = ProvidedPackage {
                    language: language.to_string(),
                    package: info.package,
                };
                if !provides.contains(&package) {
                    provides.push(package);
                }
                declared.extend(info.dependencies);
            }

            // Workspace-level dependencies first, then those declared per package
            let mut dependencies = self.crawler.workspace_dependencies(language, &root).await?;
            dependencies.extend(declared);
            for dependency in dependencies {
                let edge = IndexedEdge {
                    language: language.to_string(),
                    reference: dependency.into_reference(repo.id()),
                };
                if !depends_on.contains(&edge) {
                    depends_on.push(edge);
                }
            }
        }

        Ok(RepositorySnapshot {
            repo_id: repo.id(),
            uri: repo.uri().to_string(),
            private: repo.is_private(),
            commit_id: commit_id.to_string(),
            provides,
            depends_on,
        })
    }

    /// Write the index, with `snapshot` in place of its repository's
    /// current state, to `path`
    async fn write_with(&self, path: &Path, snapshot: &RepositorySnapshot) -> Result<()> {
        let mut snapshots: Vec<RepositorySnapshot> = self
            .ordered()
            .iter()
            .filter(|s| s.repo_id != snapshot.repo_id)
            .map(|s| s.as_ref().clone())
            .collect();
        snapshots.push(snapshot.clone());
        snapshots.sort_by_key(|s| s.repo_id);
        let json = serde_json::to_vec_pretty(&snapshots)?;

        let tmp = path.with_extension("json.tmp");
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    /// Make `snapshot` visible, writing the snapshot file first when one is
    /// configured. Nothing changes in memory unless the write succeeds.
    async fn commit(&self, snapshot: RepositorySnapshot) -> Result<()> {
        let Some(path) = &self.snapshot_path else {
            self.insert_snapshot(snapshot);
            return Ok(());
        };
        let _guard = self.persist_lock.lock().await;
        self.write_with(path, &snapshot).await?;
        self.insert_snapshot(snapshot);
        Ok(())
    }
}

#[async_trait]
impl DependencyIndexProvider for InMemoryDependencyIndex {
    async fn reverse_dependencies_by_repo(
        &self,
        repo_id: RepositoryId,
        exclude_private: bool,
    ) -> Result<Vec<DependencyReference>> {
        let Some(target) = self.repos.get(&repo_id).map(|s| Arc::clone(s.value())) else {
            return Ok(Vec::new());
        };
        Ok(self.dependents_of(&target, exclude_private))
    }

    async fn reverse_dependencies_by_package(
        &self,
        language: &str,
        descriptor: &PackageDescriptor,
        limit: usize,
    ) -> Result<Vec<DependencyReference>> {
        let cap = if limit == 0 {
            MAX_REVERSE_DEPENDENCIES
        } else {
            limit.min(MAX_REVERSE_DEPENDENCIES)
        };

        Ok(self
            .ordered()
            .iter()
            .filter(|s| !s.private)
            .flat_map(|s| s.depends_on.iter())
            .filter(|edge| {
                edge.language == language && descriptor.is_contained_in(&edge.reference.dep_data)
            })
            .take(cap)
            .map(|edge| edge.reference.clone())
            .collect())
    }

    async fn refresh_index(
        &self,
        repo: &AuthorizedRepository,
        commit_id: &str,
        inventory: &dyn InventoryProvider,
    ) -> Result<()> {
        let lock = Arc::clone(self.refresh_locks.entry(repo.id()).or_default().value());
        let _guard = lock.lock().await;

        let snapshot = self.crawl(repo, commit_id, inventory).await?;
        let (packages, dependencies) = (snapshot.provides.len(), snapshot.depends_on.len());
        self.commit(snapshot).await?;
        info!(
            repo = repo.uri(),
            commit = commit_id,
            packages,
            dependencies,
            "repository indexed"
        );
        Ok(())
    }

    async fn total_refs(&self, source: &str) -> Result<u64> {
        let Some(id) = self.ids_by_uri.get(source).map(|id| *id) else {
            return Ok(0);
        };
        let Some(target) = self.repos.get(&id).map(|s| Arc::clone(s.value())) else {
            return Ok(0);
        };
        let count = self.dependents_of(&target, true).len();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
