//! Application Layer - xdeps
//!
//! Orchestrates the dependency-reference pipeline on top of the domain
//! ports:
//!
//! ```text
//! request ─▶ AccessGate ─▶ DefinitionLocator ─▶ SymbolClassifier ─▶ DependencyIndex
//!                                                     │
//!                                                     └─▶ non-referenceable: empty result
//! ```
//!
//! ## Use Cases
//!
//! - `TotalRefs`: cached total reference count per source
//! - `Dependencies`: reverse dependencies of a repository
//! - `DependencyReferences`: reverse dependencies of the symbol at a position
//! - `RefreshIndex`: recompute one repository's index entries
//!
//! ## Dependencies
//!
//! This crate depends only on `xdeps-domain` plus async/serialization
//! libraries. Concrete providers are wired in `xdeps-infrastructure`.

pub mod context;
pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use context::RequestContext;
pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
