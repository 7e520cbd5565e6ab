//! Command line interface
//!
//! Every subcommand maps onto one defs service operation and prints its
//! result as pretty JSON on stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;
use xdeps_application::RequestContext;
use xdeps_application::ports::DefsServiceInterface;
use xdeps_domain::error::Result;
use xdeps_domain::value_objects::{RepositoryId, SymbolPosition};
use xdeps_infrastructure::config::{AppConfig, ConfigLoader};

/// Command line interface for xdeps
#[derive(Parser, Debug)]
#[command(name = "xdeps")]
#[command(about = "Cross-repository dependency references")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Deadline of the request in seconds; 0 disables it
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per operation
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Total reference count for a source, cached for an hour
    TotalRefs {
        /// Repository URI the count is computed for
        source: String,
    },

    /// Repositories depending on a repository
    Dependencies {
        /// Repository id
        repo_id: i32,

        /// Drop dependents that are private repositories
        #[arg(long)]
        exclude_private: bool,
    },

    /// Repositories depending on the symbol at a position
    DependencyReferences {
        /// Language mode, e.g. go
        #[arg(long)]
        language: String,

        /// Repository containing the occurrence
        #[arg(long)]
        repo_id: i32,

        /// Commit the file is read at
        #[arg(long)]
        commit: String,

        /// File path relative to the repository root
        #[arg(long)]
        file: String,

        /// Line (0-based)
        #[arg(long)]
        line: u32,

        /// Character (0-based)
        #[arg(long)]
        character: u32,

        /// Maximum number of references; 0 applies the index cap
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },

    /// Recompute the index entries of one repository
    RefreshIndex {
        /// Repository URI
        repo_uri: String,

        /// Commit to crawl
        commit: String,
    },
}

impl Cli {
    /// Loader reading `--config`, or the default locations without it
    pub fn config_loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }

    /// Load configuration and apply command line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = self.config_loader().load()?;
        if let Some(timeout) = self.timeout_secs {
            config.request.timeout_secs = timeout;
        }
        Ok(config)
    }
}

/// Run one command against the service and render its result
pub async fn execute(
    command: &Command,
    defs: &dyn DefsServiceInterface,
    ctx: &RequestContext,
) -> Result<Value> {
    match command {
        Command::TotalRefs { source } => {
            let count = defs.total_refs(ctx, source).await?;
            Ok(json!({ "source": source, "total_refs": count }))
        }
        Command::Dependencies {
            repo_id,
            exclude_private,
        } => {
            let references = defs
                .dependencies(ctx, RepositoryId(*repo_id), *exclude_private)
                .await?;
            Ok(serde_json::to_value(references)?)
        }
        Command::DependencyReferences {
            language,
            repo_id,
            commit,
            file,
            line,
            character,
            limit,
        } => {
            let op = SymbolPosition {
                language: language.clone(),
                repository_id: RepositoryId(*repo_id),
                commit_id: commit.clone(),
                file: file.clone(),
                line: *line,
                character: *character,
                limit: *limit,
            };
            let result = defs.dependency_references(ctx, &op).await?;
            Ok(serde_json::to_value(result)?)
        }
        Command::RefreshIndex { repo_uri, commit } => {
            defs.refresh_index(ctx, repo_uri, commit).await?;
            Ok(json!({ "repository": repo_uri, "commit": commit, "refreshed": true }))
        }
    }
}
