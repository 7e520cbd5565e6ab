//! Domain constants
//!
//! Values that are part of the behavior of the resolution pipeline itself.
//! Deployment tunables live in `xdeps_infrastructure::constants`.

/// Version-control scheme used to build workspace roots
pub const VCS_SCHEME: &str = "git";

/// Cache namespace for total reference counts
pub const TOTAL_REFS_CACHE_NAMESPACE: &str = "totalrefs";

/// TTL of a cached total reference count in seconds (1 hour)
pub const TOTAL_REFS_CACHE_TTL_SECS: u64 = 3600;

/// Cap applied to reverse lookups when the caller passes a zero limit
pub const MAX_REVERSE_DEPENDENCIES: usize = 1000;

/// LSP extension method resolving a definition across repositories
pub const METHOD_XDEFINITION: &str = "textDocument/xdefinition";

/// LSP extension method listing a workspace's external dependencies
pub const METHOD_XDEPENDENCIES: &str = "workspace/xdependencies";

/// LSP extension method listing the packages a workspace provides
pub const METHOD_XPACKAGES: &str = "workspace/xpackages";
