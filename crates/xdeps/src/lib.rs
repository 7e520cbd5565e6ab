//! # xdeps
//!
//! Cross-repository dependency-reference resolution and caching.
//!
//! Given a symbol occurrence in a repository, xdeps resolves its canonical
//! definition through a language-analysis gateway, derives the package the
//! symbol belongs to, and lists the repositories depending on that package.
//! It also serves reverse dependencies of whole repositories, keeps the
//! reverse-dependency index up to date, and caches total reference counts.
//!
//! ## Example
//!
//! ```ignore
//! use xdeps::infrastructure::{ConfigLoader, init_app};
//!
//! let app = init_app(ConfigLoader::new().load()?).await?;
//! let deps = app
//!     .defs_service()
//!     .dependencies(&app.request_context(), 7.into(), true)
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, errors and collaborator ports
//! - `application` - the access gate, resolution pipeline and use cases
//! - `providers` - cache, index, language gateway and repository adapters
//! - `infrastructure` - configuration, logging, wiring, instrumentation

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use xdeps_domain::*;
}

/// Application layer - use cases and the service interface
pub mod application {
    pub use xdeps_application::*;
}

/// Provider implementations
pub mod providers {
    pub use xdeps_providers::*;
}

/// Infrastructure layer - config, logging and wiring
pub mod infrastructure {
    pub use xdeps_infrastructure::*;
}

/// Command line interface
pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::ports::DefsServiceInterface;
pub use application::RequestContext;
pub use infrastructure::{AppContext, init_app};
