//! Domain services
//!
//! Single-responsibility steps of the resolution pipeline. Each wraps one
//! collaborator port and runs it under the caller's [`crate::RequestContext`].

/// Authorization gate
pub mod access_gate;
/// Cross-repository definition lookup
pub mod definition;
/// Cached total reference counts
pub mod reference_count;
/// Referenceability and package identity
pub mod symbols;

pub use access_gate::AccessGate;
pub use definition::DefinitionLocator;
pub use reference_count::ReferenceCountCache;
pub use symbols::{SymbolClass, SymbolClassifier};
