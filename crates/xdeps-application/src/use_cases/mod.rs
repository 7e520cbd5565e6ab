//! Use Cases - Application Service Implementations

/// Dependency-reference orchestrators
pub mod defs_service;

pub use defs_service::DefsServiceImpl;
